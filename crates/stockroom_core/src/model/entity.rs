//! Entity identity contract.
//!
//! # Invariants
//! - `key()` returns the same value for the whole lifetime of an entity.
//! - Two entities with the same key are the same entity as far as a
//!   repository is concerned, regardless of their other fields.

use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::hash::Hash;

/// Integer identifier used by every record type in this crate.
pub type EntityId = i32;

/// A record that can be stored in a `KeyedRepository`.
pub trait Keyed {
    /// Key type; must be cheap to copy and printable for error messages.
    type Key: Copy + Eq + Hash + Debug + Display;

    /// Returns the immutable identity of this entity.
    fn key(&self) -> Self::Key;
}

/// A field value rejected by a domain constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidValue {
    /// Name of the constrained field, e.g. `quantity`.
    pub field: &'static str,
    /// Rejected value rendered as text.
    pub value: String,
    /// Constraint that was violated.
    pub reason: &'static str,
}

impl InvalidValue {
    pub fn new(field: &'static str, value: impl Display, reason: &'static str) -> Self {
        Self {
            field,
            value: value.to_string(),
            reason,
        }
    }
}

impl Display for InvalidValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid value for {}: `{}` ({})",
            self.field, self.value, self.reason
        )
    }
}

impl Error for InvalidValue {}

#[cfg(test)]
mod tests {
    use super::InvalidValue;

    #[test]
    fn invalid_value_message_names_field_and_value() {
        let err = InvalidValue::new("quantity", -1, "must not be negative");
        assert_eq!(
            err.to_string(),
            "invalid value for quantity: `-1` (must not be negative)"
        );
    }
}
