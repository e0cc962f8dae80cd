//! Field Constraint Descriptors
//!
//! Declarative per-field metadata: a title, a human-readable description, the
//! field's declared default, and optional length bounds. Descriptors are
//! `const` values declared next to the node types that use them; the checking
//! logic lives in [`crate::models::validate`].
//!
//! ```rust
//! use blockkit_core::models::field::{describe, FieldDefault};
//!
//! const ALT_TEXT: blockkit_core::models::FieldSpec = describe(
//!     "alt_text",
//!     "A plain-text summary of the image.",
//!     FieldDefault::Required,
//!     None,
//!     Some(2000),
//! );
//! assert_eq!(ALT_TEXT.max_length, Some(2000));
//! ```

use serde::Serialize;

/// Declared default of a field
///
/// Values equal to the declared default are exempt from length checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    /// No default, the caller must supply a value
    Required,
    /// Defaults to null/unset
    Null,
    Bool(bool),
    Int(i64),
    Str(&'static str),
}

impl Serialize for FieldDefault {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Required => serializer.serialize_str("required"),
            Self::Null => serializer.serialize_none(),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Int(value) => serializer.serialize_i64(*value),
            Self::Str(value) => serializer.serialize_str(value),
        }
    }
}

/// Metadata for one constrained field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    /// Field name as it appears on the wire and in errors
    pub title: &'static str,

    pub description: &'static str,

    pub default: FieldDefault,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

/// Declare a field descriptor
pub const fn describe(
    title: &'static str,
    description: &'static str,
    default: FieldDefault,
    min_length: Option<usize>,
    max_length: Option<usize>,
) -> FieldSpec {
    FieldSpec {
        title,
        description,
        default,
        min_length,
        max_length,
    }
}

impl FieldSpec {
    /// Whether any length bound is declared
    pub const fn is_constrained(&self) -> bool {
        self.min_length.is_some() || self.max_length.is_some()
    }
}

/// Constraints shared by every layout block
pub const BLOCK_ID: FieldSpec = describe(
    "block_id",
    "A string acting as a unique identifier for a block.",
    FieldDefault::Null,
    None,
    Some(255),
);
