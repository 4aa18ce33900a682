//! Opaque identifiers for gauges and factories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::IdentifierError;

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Create an identifier, trimming whitespace and lowercasing.
            pub fn new(raw: impl AsRef<str>) -> Result<Self, IdentifierError> {
                let normalized = raw.as_ref().trim().to_ascii_lowercase();
                if normalized.is_empty() {
                    return Err(IdentifierError::Empty($kind));
                }
                Ok(Self(normalized))
            }

            /// Generate a fresh random identifier.
            pub fn random() -> Self {
                Self(format!("0x{}", Uuid::new_v4().simple()))
            }

            /// Borrow the normalized identifier.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdentifierError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdentifierError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

opaque_id!(
    /// Address of a gauge instance.
    ///
    /// Liveness is never stored alongside it; ask the instance.
    GaugeAddress,
    "gauge address"
);

opaque_id!(
    /// Address of a gauge factory.
    FactoryId,
    "factory id"
);
