//! Validated name newtypes for registry entities
//!
//! Names are the lookup keys of the registry, so they are valid by construction:
//! - Non-empty
//! - Within length limits
//! - Trimmed of leading/trailing whitespace
//!
//! Comparison stays exact and case-sensitive; no case folding happens here.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for name fields (ResidentName, TownName, NationName)
const MAX_NAME_LENGTH: usize = 200;

macro_rules! define_name {
    ($name:ident, $label:literal) => {
        #[doc = concat!("A validated ", $label, " name (non-empty, <=200 chars, trimmed)")]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            #[doc = concat!("Create a new validated ", $label, " name.")]
            ///
            /// # Errors
            ///
            /// Returns `DomainError::Validation` if the name is empty after
            /// trimming or exceeds 200 characters.
            pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
                let name = name.into();
                let trimmed = name.trim();
                if trimmed.is_empty() {
                    return Err(DomainError::validation(concat!(
                        $label,
                        " name cannot be empty"
                    )));
                }
                if trimmed.len() > MAX_NAME_LENGTH {
                    return Err(DomainError::validation(format!(
                        concat!($label, " name cannot exceed {} characters"),
                        MAX_NAME_LENGTH
                    )));
                }
                Ok(Self(trimmed.to_string()))
            }

            /// Returns the name as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                Self::new(s)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = DomainError;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                Self::new(s)
            }
        }

        impl From<$name> for String {
            fn from(name: $name) -> String {
                name.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_name!(ResidentName, "Resident");
define_name!(TownName, "Town");
define_name!(NationName, "Nation");
