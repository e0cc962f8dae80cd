//! Construction-Time Validation
//!
//! Every node runs [`Validate::validate`] before a constructor or constrained
//! setter hands it back. The rules come in three kinds:
//!
//! - **Length**: [`FieldSpec::check`] measures a value through [`Measure`] and
//!   compares it against the declared bounds. Unset values and values still at
//!   their declared default are skipped.
//! - **Closed sets**: field-specific enums (`Accessory`, `ActionElement`, ...)
//!   admit family values through `TryFrom`, see [`crate::models::blocks`].
//! - **Cross-field**: exclusivity and format rules shared by several node types
//!   live here as free functions.

use crate::models::field::{FieldDefault, FieldSpec};
use crate::models::node::ValidationError;

/// Construction-time validation for a node
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Length measurement used by [`FieldSpec::check`]
///
/// Strings count characters, lists count items, text objects count the
/// characters of their text. Anything else falls back to the length of its
/// string form.
pub trait Measure {
    /// Measured length, `None` when the value is unset
    fn measure(&self) -> Option<usize>;

    /// Whether the value equals the declared default
    fn matches_default(&self, _default: &FieldDefault) -> bool {
        false
    }
}

impl Measure for str {
    fn measure(&self) -> Option<usize> {
        Some(self.chars().count())
    }

    fn matches_default(&self, default: &FieldDefault) -> bool {
        matches!(default, FieldDefault::Str(value) if *value == self)
    }
}

impl Measure for String {
    fn measure(&self) -> Option<usize> {
        self.as_str().measure()
    }

    fn matches_default(&self, default: &FieldDefault) -> bool {
        self.as_str().matches_default(default)
    }
}

impl<T> Measure for [T] {
    fn measure(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T> Measure for Vec<T> {
    fn measure(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl<T: Measure> Measure for Option<T> {
    fn measure(&self) -> Option<usize> {
        self.as_ref().and_then(Measure::measure)
    }

    fn matches_default(&self, default: &FieldDefault) -> bool {
        match self {
            None => matches!(default, FieldDefault::Null),
            Some(value) => value.matches_default(default),
        }
    }
}

macro_rules! measure_integer {
    ($($int:ty),+) => {
        $(
            impl Measure for $int {
                fn measure(&self) -> Option<usize> {
                    Some(self.to_string().chars().count())
                }

                fn matches_default(&self, default: &FieldDefault) -> bool {
                    matches!(default, FieldDefault::Int(value) if i64::try_from(*self).ok() == Some(*value))
                }
            }
        )+
    };
}

measure_integer!(u8, u32, u64, i64, usize);

impl FieldSpec {
    /// Check a value against this field's length bounds
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Length` when the measured length falls outside
    /// `[min_length, max_length]`.
    pub fn check<V>(&self, value: &V) -> Result<(), ValidationError>
    where
        V: Measure + ?Sized,
    {
        if !self.is_constrained() || value.matches_default(&self.default) {
            return Ok(());
        }

        let Some(actual) = value.measure() else {
            return Ok(());
        };

        let too_short = self.min_length.is_some_and(|min| min > 0 && actual < min);
        let too_long = self.max_length.is_some_and(|max| actual > max);

        if too_short || too_long {
            tracing::debug!(
                "Rejected {}: length {} outside {:?}..={:?}",
                self.title,
                actual,
                self.min_length,
                self.max_length
            );
            return Err(ValidationError::length(
                self.title,
                actual,
                self.min_length,
                self.max_length,
            ));
        }

        Ok(())
    }
}

/// Reject setting both members of an exclusive pair
pub fn exactly_one<A, B>(
    first: (&'static str, &Option<A>),
    second: (&'static str, &Option<B>),
) -> Result<(), ValidationError> {
    match (first.1.is_some(), second.1.is_some()) {
        (true, true) => Err(ValidationError::MutuallyExclusive {
            first: first.0,
            second: second.0,
        }),
        (false, false) => Err(ValidationError::MissingOneOf {
            first: first.0,
            second: second.0,
        }),
        _ => Ok(()),
    }
}

/// Reject setting both members of a pair where neither is required
pub fn at_most_one<A, B>(
    first: (&'static str, &Option<A>),
    second: (&'static str, &Option<B>),
) -> Result<(), ValidationError> {
    if first.1.is_some() && second.1.is_some() {
        return Err(ValidationError::MutuallyExclusive {
            first: first.0,
            second: second.0,
        });
    }
    Ok(())
}

/// Require an `https://` URL when one is set
pub fn secure_url(field: &'static str, url: Option<&str>) -> Result<(), ValidationError> {
    match url {
        Some(url) if !url.starts_with("https://") => Err(ValidationError::invalid_value(
            field,
            format!("{} must start with https://", field),
        )),
        _ => Ok(()),
    }
}

/// Require a numeric value to stay within an upper bound
pub fn at_most<T>(field: &'static str, value: Option<T>, max: T) -> Result<(), ValidationError>
where
    T: PartialOrd + std::fmt::Display + Copy,
{
    match value {
        Some(value) if value > max => Err(ValidationError::invalid_value(
            field,
            format!("{} must be less than or equal to {}", value, max),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::field::describe;

    const BODY: FieldSpec = describe("body", "Body text", FieldDefault::Required, Some(1), Some(5));
    const HINT: FieldSpec = describe("hint", "Optional hint", FieldDefault::Null, Some(2), Some(4));
    const LABEL: FieldSpec = describe("label", "Label", FieldDefault::Str(""), Some(1), Some(3));

    #[test]
    fn test_check_accepts_bounds() {
        assert!(BODY.check("a").is_ok());
        assert!(BODY.check("abcde").is_ok());
    }

    #[test]
    fn test_check_rejects_outside_bounds() {
        let err = BODY.check("abcdef").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Length(ref e) if e.actual == 6 && e.max == Some(5)
        ));
        assert!(BODY.check("").is_err());
    }

    #[test]
    fn test_check_counts_characters_not_bytes() {
        // Five characters, more than five bytes
        assert!(BODY.check("héllo").is_ok());
        assert!(BODY.check("🎉🎉🎉🎉🎉").is_ok());
    }

    #[test]
    fn test_check_skips_unset_values() {
        let unset: Option<String> = None;
        assert!(HINT.check(&unset).is_ok());
        assert!(HINT.check(&Some("x".to_string())).is_err());
    }

    #[test]
    fn test_check_skips_declared_default() {
        // "" is the declared default, so the min bound does not apply
        assert!(LABEL.check("").is_ok());
        assert!(LABEL.check("abcd").is_err());
    }

    #[test]
    fn test_check_measures_lists() {
        let items = vec![1, 2, 3, 4, 5, 6];
        assert!(BODY.check(&items).is_err());
        assert!(BODY.check(&items[..5].to_vec()).is_ok());
    }

    #[test]
    fn test_check_falls_back_to_string_form() {
        assert!(BODY.check(&123456_u32).is_err());
        assert!(BODY.check(&12_u32).is_ok());
    }

    #[test]
    fn test_exactly_one() {
        let some = Some(1);
        let none: Option<i32> = None;
        assert!(exactly_one(("a", &some), ("b", &none)).is_ok());
        assert!(matches!(
            exactly_one(("a", &some), ("b", &some)),
            Err(ValidationError::MutuallyExclusive { .. })
        ));
        assert!(matches!(
            exactly_one(("a", &none), ("b", &none)),
            Err(ValidationError::MissingOneOf { .. })
        ));
    }

    #[test]
    fn test_secure_url() {
        assert!(secure_url("image_url", Some("https://example.com/a.png")).is_ok());
        assert!(secure_url("image_url", Some("http://example.com/a.png")).is_err());
        assert!(secure_url("image_url", None).is_ok());
    }

    #[test]
    fn test_at_most() {
        assert!(at_most("indent", Some(8_u8), 8).is_ok());
        assert!(at_most("indent", Some(9_u8), 8).is_err());
        assert!(at_most::<u8>("indent", None, 8).is_ok());
    }
}
