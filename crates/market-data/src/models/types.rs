/// Query parameters of a single request, in the order they are sent.
pub type QueryParams = [(&'static str, String)];
