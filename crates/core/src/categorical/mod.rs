//! Semi-open sets of provider strings.
//!
//! The provider adds commodities, countries and indicator types without
//! notice. Each set here is an enum of the values known at build time plus an
//! `Unknown` fallback that keeps the raw string, so decoding never fails.
//!
//! Aliases (two spellings of one member) are resolved when a value is built,
//! so the derived `Eq`/`Hash` already treat them as the same member.

mod commodity;
mod inflation;

pub use commodity::CommodityType;
pub use inflation::{InflationCountry, InflationIndicatorType};

use std::fmt;

/// Raw provider value that matched no known member.
///
/// Only the owning set can build one, so an unknown value never shadows a
/// known member.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnknownValue(String);

impl UnknownValue {
    pub(crate) fn new(raw: &str) -> Self {
        Self(raw.to_string())
    }

    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnknownValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Prefix of the identifier synthesized for unknown values.
pub const UNKNOWN_PREFIX: &str = "unknown_";

/// Declares a categorical set.
///
/// Each member lists its identifier and the raw string the provider uses.
/// Aliases name an associated constant, the alias identifier, the alias raw
/// spelling and the member they resolve to.
macro_rules! categorical {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $variant:ident => ($ident:literal, $raw:literal), )+
        }
        aliases {
            $( $alias:ident => $target:ident ($alias_ident:literal, $alias_raw:literal), )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant, )+
            /// A value the provider sent that this build does not know.
            Unknown($crate::categorical::UnknownValue),
        }

        impl $name {
            $( pub const $alias: Self = Self::$target; )*

            /// Raw spellings of every known member, in declaration order.
            pub const KNOWN_RAW: &'static [&'static str] = &[$( $raw, )+];

            /// Builds a value from a provider string. Never fails.
            pub fn decode(raw: &str) -> Self {
                match raw {
                    $( $raw => Self::$variant, )+
                    $( $alias_raw => Self::$target, )*
                    other => Self::Unknown($crate::categorical::UnknownValue::new(other)),
                }
            }

            /// Looks a known member up by identifier, aliases included.
            pub fn from_identifier(identifier: &str) -> Option<Self> {
                match identifier {
                    $( $ident => Some(Self::$variant), )+
                    $( $alias_ident => Some(Self::$target), )*
                    _ => None,
                }
            }

            /// Every known member, in declaration order.
            pub fn known() -> Vec<Self> {
                vec![$( Self::$variant, )+]
            }

            /// Canonical identifier, `unknown_<raw>` for unknown values.
            pub fn identifier(&self) -> std::borrow::Cow<'static, str> {
                match self {
                    $( Self::$variant => std::borrow::Cow::Borrowed($ident), )+
                    Self::Unknown(value) => std::borrow::Cow::Owned(format!(
                        "{}{}",
                        $crate::categorical::UNKNOWN_PREFIX,
                        value.raw()
                    )),
                }
            }

            /// The string the provider uses for this value.
            pub fn raw(&self) -> &str {
                match self {
                    $( Self::$variant => $raw, )+
                    Self::Unknown(value) => value.raw(),
                }
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Unknown(_))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.raw())
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                Ok(Self::decode(s))
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.raw())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
                Ok(Self::decode(&raw))
            }
        }
    };
}

pub(crate) use categorical;
