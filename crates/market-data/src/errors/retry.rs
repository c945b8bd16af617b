/// Classification for retry policy.
///
/// Nothing in this workspace retries on its own. The class is a hint for
/// callers that wrap a [`Transport`](crate::transport::Transport) with their
/// own policy.
///
/// | Class | Worth retrying? |
/// |-------|-----------------|
/// | `Never` | No, the request itself is wrong or the key is rejected |
/// | `WithBackoff` | Yes, after waiting |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// Never retry - bad parameters, missing record, rejected key or a
    /// payload that does not decode. Retrying won't help.
    Never,

    /// Transient failure such as rate limiting (429), a timeout, a dropped
    /// connection or a 5xx from the provider.
    WithBackoff,
}
