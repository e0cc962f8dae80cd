//! Node Base Types
//!
//! This module defines what every member of a Block Kit tree has in common:
//! a serde representation, a fixed wire discriminant, and the error type
//! raised when construction-time validation fails.
//!
//! # Architecture
//!
//! - **Fixed discriminant**: every typed node carries a zero-sized marker field
//!   generated by [`node_type!`]. The marker serializes to the wire `type` tag and
//!   has exactly one value, so the tag cannot be overridden per instance.
//! - **Field order**: the marker is always the first field, so `type` is the
//!   first key of every typed node's mapping.
//! - **Untyped objects**: composition objects such as options and confirmation
//!   dialogs have no `type` key on the wire. They implement [`Node`] with
//!   `TYPE = None` through [`untyped_node!`].
//!
//! # Examples
//!
//! ```rust
//! use blockkit_core::models::{Node, PlainText};
//!
//! let text = PlainText::new("Hello").unwrap();
//! assert_eq!(PlainText::TYPE, Some("plain_text"));
//!
//! let mapping = text.to_mapping().unwrap();
//! assert_eq!(mapping.keys().next().map(String::as_str), Some("type"));
//! ```

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::utils::serialize::{
    preview_url, strip_nulls, to_json_string, wire_payload, PREVIEW_BASE_URL,
};

/// A field length outside its declared bounds
///
/// Lengths are measured in characters for strings and text objects and in
/// items for lists.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {}", length_cause(.actual, .min, .max))]
pub struct LengthValidationError {
    pub field: String,
    pub actual: usize,
    pub min: Option<usize>,
    pub max: Option<usize>,
}

fn length_cause(actual: &usize, min: &Option<usize>, max: &Option<usize>) -> String {
    match (min, max) {
        (Some(min), _) if actual < min => {
            format!("Length {} is less than minimum {}", actual, min)
        }
        (_, Some(max)) if actual > max => format!("Length {} exceeds maximum {}", actual, max),
        _ => format!("Invalid length {}", actual),
    }
}

/// Validation errors raised while constructing nodes
///
/// A node that fails validation is never returned to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(transparent)]
    Length(#[from] LengthValidationError),

    #[error("{field} must be an instance of {}", .expected.join(" or "))]
    UnexpectedType {
        field: String,
        expected: &'static [&'static str],
        found: String,
    },

    #[error("Only one of {first} or {second} can be provided.")]
    MutuallyExclusive {
        first: &'static str,
        second: &'static str,
    },

    #[error("{first} or {second} is required.")]
    MissingOneOf {
        first: &'static str,
        second: &'static str,
    },

    #[error("{field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ValidationError {
    /// Create a length error
    pub fn length(
        field: impl Into<String>,
        actual: usize,
        min: Option<usize>,
        max: Option<usize>,
    ) -> Self {
        Self::Length(LengthValidationError {
            field: field.into(),
            actual,
            min,
            max,
        })
    }

    /// Create a closed-set membership error
    pub fn unexpected_type(
        field: impl Into<String>,
        expected: &'static [&'static str],
        found: impl Into<String>,
    ) -> Self {
        Self::UnexpectedType {
            field: field.into(),
            expected,
            found: found.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Whether this is a length violation
    pub fn is_length(&self) -> bool {
        matches!(self, Self::Length(_))
    }

    /// Name of the field the error refers to
    pub fn field(&self) -> &str {
        match self {
            Self::Length(err) => &err.field,
            Self::UnexpectedType { field, .. } | Self::InvalidValue { field, .. } => field,
            Self::MutuallyExclusive { first, .. } | Self::MissingOneOf { first, .. } => first,
        }
    }
}

/// Any serializable member of a Block Kit tree
///
/// `to_mapping` mirrors every declared field in declaration order, nulls
/// included. The other renderings strip nulls first.
pub trait Node: Serialize {
    /// Wire discriminant, `None` for untyped composition objects
    const TYPE: Option<&'static str>;

    /// Field-ordered mapping of this node and all descendants
    fn to_mapping(&self) -> Result<Map<String, Value>, serde_json::Error> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(<serde_json::Error as serde::ser::Error>::custom(format!(
                "expected a JSON object, got {}",
                other
            ))),
        }
    }

    /// Null-stripped JSON, compact unless `indent` is given
    fn to_json(&self, indent: Option<usize>) -> Result<String, serde_json::Error> {
        let stripped = strip_nulls(Value::Object(self.to_mapping()?));
        to_json_string(&stripped, indent)
    }

    /// Null-stripped API payload: the `blocks` entry when present, otherwise
    /// the whole mapping
    fn to_wire(&self) -> Result<Value, serde_json::Error> {
        Ok(wire_payload(strip_nulls(Value::Object(self.to_mapping()?))))
    }

    /// Block Kit Builder link that renders this node
    fn to_preview_url(&self) -> Result<String, serde_json::Error> {
        preview_url(Value::Object(self.to_mapping()?), PREVIEW_BASE_URL, None)
    }
}

/// Declare a discriminant marker and bind it to a node type
///
/// ```ignore
/// node_type!(HeaderTag => "header" for HeaderBlock);
/// ```
macro_rules! node_type {
    ($marker:ident => $tag:literal for $node:ty) => {
        #[doc = concat!("Wire discriminant `", $tag, "`")]
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $marker;

        impl $marker {
            pub const TAG: &'static str = $tag;
        }

        impl ::serde::Serialize for $marker {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str($tag)
            }
        }

        impl $crate::models::Node for $node {
            const TYPE: Option<&'static str> = Some($tag);
        }
    };
}

/// Implement [`Node`] for composition objects without a `type` key
macro_rules! untyped_node {
    ($($node:ty),+ $(,)?) => {
        $(
            impl $crate::models::Node for $node {
                const TYPE: Option<&'static str> = None;
            }
        )+
    };
}

/// Generate `From<Variant>` conversions into a family or closed-set enum
macro_rules! enum_from {
    ($target:ident { $($variant:ident($inner:ty)),+ $(,)? }) => {
        $(
            impl From<$inner> for $target {
                fn from(value: $inner) -> Self {
                    $target::$variant(value)
                }
            }
        )+
    };
}

/// Declare an untagged sum type over node types
///
/// Generates the enum, `From` conversions for every variant, `kind()` and
/// [`Validate`](crate::models::validate::Validate) dispatch. `KINDS` lists the
/// wire tags of all variants in declaration order.
macro_rules! node_family {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident { $($variant:ident($inner:ty)),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize)]
        #[serde(untagged)]
        $vis enum $name {
            $($variant($inner)),+
        }

        $crate::models::node::enum_from!($name { $($variant($inner)),+ });

        impl $name {
            /// Wire tags of every member
            pub const KINDS: &'static [&'static str] = &[
                $($crate::models::node::tag_of(
                    <$inner as $crate::models::Node>::TYPE,
                    stringify!($variant),
                )),+
            ];

            /// Wire discriminant of the wrapped node
            pub fn kind(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => $crate::models::node::tag_of(
                        <$inner as $crate::models::Node>::TYPE,
                        stringify!($variant),
                    )),+
                }
            }
        }

        impl $crate::models::validate::Validate for $name {
            fn validate(&self) -> Result<(), $crate::models::ValidationError> {
                match self {
                    $(Self::$variant(node) => $crate::models::validate::Validate::validate(node)),+
                }
            }
        }
    };
}

/// Admit members of a family into a closed set through `TryFrom`
///
/// Every listed variant must exist with the same name and payload in both
/// enums. Anything else is rejected with an error naming the allowed set.
macro_rules! closed_set {
    ($set:ident from $family:ident as $field:literal { $($variant:ident),+ $(,)? }) => {
        impl TryFrom<$family> for $set {
            type Error = $crate::models::ValidationError;

            fn try_from(value: $family) -> Result<Self, Self::Error> {
                match value {
                    $($family::$variant(node) => Ok(Self::$variant(node)),)+
                    #[allow(unreachable_patterns)]
                    other => Err($crate::models::ValidationError::unexpected_type(
                        $field,
                        Self::KINDS,
                        other.kind(),
                    )),
                }
            }
        }
    };
}

/// Read-only accessors for node fields
///
/// Node fields are crate-private so a node can only change through its
/// validating `with_*` setters. Each entry names the field and how it is
/// lent out:
///
/// - `str` / `opt_str`: `&str` / `Option<&str>`
/// - `opt(T)`: `Option<&T>`
/// - `list(T)` / `opt_list(T)`: `&[T]` / `Option<&[T]>`
/// - `copy(T)`: `T`
/// - `by_ref(T)`: `&T`
macro_rules! accessors {
    (@get $field:ident str) => {
        pub fn $field(&self) -> &str {
            &self.$field
        }
    };
    (@get $field:ident opt_str) => {
        pub fn $field(&self) -> Option<&str> {
            self.$field.as_deref()
        }
    };
    (@get $field:ident opt($ty:ty)) => {
        pub fn $field(&self) -> Option<&$ty> {
            self.$field.as_ref()
        }
    };
    (@get $field:ident list($ty:ty)) => {
        pub fn $field(&self) -> &[$ty] {
            &self.$field
        }
    };
    (@get $field:ident opt_list($ty:ty)) => {
        pub fn $field(&self) -> Option<&[$ty]> {
            self.$field.as_deref()
        }
    };
    (@get $field:ident copy($ty:ty)) => {
        pub fn $field(&self) -> $ty {
            self.$field
        }
    };
    (@get $field:ident by_ref($ty:ty)) => {
        pub fn $field(&self) -> &$ty {
            &self.$field
        }
    };
    ($node:ty { $($field:ident: $kind:ident $(($ty:ty))?),+ $(,)? }) => {
        impl $node {
            $($crate::models::node::accessors!(@get $field $kind $(($ty))?);)+
        }
    };
}

/// Wire tag of a node type, or a fallback name for untyped objects
pub const fn tag_of(tag: Option<&'static str>, fallback: &'static str) -> &'static str {
    match tag {
        Some(tag) => tag,
        None => fallback,
    }
}

pub(crate) use accessors;
pub(crate) use closed_set;
pub(crate) use enum_from;
pub(crate) use node_family;
pub(crate) use node_type;
pub(crate) use untyped_node;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_error_exceeds_message() {
        let err = ValidationError::length("text", 3001, Some(1), Some(3000));
        assert_eq!(err.to_string(), "text: Length 3001 exceeds maximum 3000");
        assert!(err.is_length());
        assert_eq!(err.field(), "text");
    }

    #[test]
    fn test_length_error_below_minimum_message() {
        let err = ValidationError::length("text", 0, Some(1), Some(3000));
        assert_eq!(err.to_string(), "text: Length 0 is less than minimum 1");
    }

    #[test]
    fn test_unexpected_type_names_allowed_set() {
        let err = ValidationError::unexpected_type("accessory", &["button", "image"], "datepicker");
        assert_eq!(err.to_string(), "accessory must be an instance of button or image");
        assert!(!err.is_length());
    }

    #[test]
    fn test_exclusivity_messages() {
        let both = ValidationError::MutuallyExclusive {
            first: "text",
            second: "fields",
        };
        assert_eq!(both.to_string(), "Only one of text or fields can be provided.");

        let neither = ValidationError::MissingOneOf {
            first: "text",
            second: "fields",
        };
        assert_eq!(neither.to_string(), "text or fields is required.");
    }
}
