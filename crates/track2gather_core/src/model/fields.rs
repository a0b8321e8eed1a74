//! Value types carried by a [`Person`](super::person::Person) record.
//!
//! # Responsibility
//! - Give every contact/case attribute its own type so fields cannot be
//!   swapped at call sites.
//! - Reject blank input at construction and deserialization time.
//!
//! # Invariants
//! - Stored values are trimmed and never empty.
//! - Format rules (phone digits, email shape) belong to input parsing and are
//!   not checked here.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation error for a single value type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Input was empty or whitespace only.
    Blank { field: &'static str },
}

impl Display for FieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank { field } => write!(f, "{field} cannot be blank"),
        }
    }
}

impl Error for FieldError {}

macro_rules! text_field {
    ($(#[$meta:meta])* $ty:ident, $field:literal, $display:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $ty(String);

        impl $ty {
            /// Field name reported in validation errors.
            pub const FIELD: &'static str = $field;

            /// Wraps a trimmed, non-blank value.
            pub fn new(value: impl Into<String>) -> Result<Self, FieldError> {
                normalize_text(value.into(), Self::FIELD).map(Self)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $ty {
            type Error = FieldError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.0
            }
        }

        impl Display for $ty {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, $display, self.0)
            }
        }
    };
}

text_field!(
    /// Person name. Sole key for weak (same-person) matching.
    Name,
    "name",
    "{}"
);
text_field!(
    /// Contact phone number.
    Phone,
    "phone",
    "{}"
);
text_field!(
    /// Contact email address.
    Email,
    "email",
    "{}"
);
text_field!(
    /// Postal address. Used for home, work, quarantine and next-of-kin slots.
    Address,
    "address",
    "{}"
);
text_field!(
    /// Stay-home-notice (isolation) period as entered by the operator.
    ShnPeriod,
    "shn_period",
    "{}"
);
text_field!(
    /// Case identifier issued by the tracing authority.
    CaseNumber,
    "case_number",
    "{}"
);
text_field!(
    /// Free-form label attached to a record. Renders as `[label]`.
    Tag,
    "tag",
    "[{}]"
);

fn normalize_text(value: String, field: &'static str) -> Result<String, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Blank { field });
    }
    if trimmed.len() == value.len() {
        return Ok(value);
    }
    Ok(trimmed.to_string())
}
