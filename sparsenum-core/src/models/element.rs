use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::ElementError;

/// Smallest index an element may carry.
pub const MIN_INDEX: i64 = 1;

/// Largest index an element may carry.
pub const MAX_INDEX: i64 = i64::MAX;

///
/// Element struct, one `(index, value)` entry of a sparse numeric vector.
///
/// The index is validated on construction to lie in `[MIN_INDEX, MAX_INDEX]`.
/// The value is not checked here: whether a zero may be stored is decided by
/// the container the element goes into.
///
/// ```
/// use sparsenum_core::models::Element;
///
/// let e = Element::new(3, 4.0).unwrap();
/// assert_eq!(e.index(), 3);
/// assert_eq!(e.value(), 4.0);
///
/// assert!(Element::new(0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawElement"))]
pub struct Element {
    index: i64,
    value: f64,
}

impl Element {
    ///
    /// Create a new element, checking the index range.
    ///
    pub fn new(index: i64, value: f64) -> Result<Element, ElementError> {
        if index < MIN_INDEX {
            return Err(ElementError::IndexOutOfRange(index));
        }
        Ok(Element { index, value })
    }

    #[inline]
    pub fn index(&self) -> i64 {
        self.index
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    ///
    /// Check if the value is exactly zero (`-0.0` included, NaN excluded).
    ///
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value == 0.0
    }
}

impl TryFrom<(i64, f64)> for Element {
    type Error = ElementError;

    fn try_from((index, value): (i64, f64)) -> Result<Self, Self::Error> {
        Element::new(index, value)
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(index {}, value {:?})", self.index, self.value)
    }
}

/// Unchecked wire form of [`Element`]; deserialization goes through
/// [`Element::new`] so out of range indices are rejected.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawElement {
    index: i64,
    value: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawElement> for Element {
    type Error = ElementError;

    fn try_from(raw: RawElement) -> Result<Self, Self::Error> {
        Element::new(raw.index, raw.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(1)]
    #[case(42)]
    #[case(MAX_INDEX)]
    fn test_new_accepts_valid_index(#[case] index: i64) {
        let e = Element::new(index, 1.5).unwrap();
        assert_eq!(e.index(), index);
        assert_eq!(e.value(), 1.5);
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(i64::MIN)]
    fn test_new_rejects_out_of_range_index(#[case] index: i64) {
        assert_eq!(
            Element::new(index, 1.0),
            Err(ElementError::IndexOutOfRange(index))
        );
    }

    #[rstest]
    fn test_zero_value_is_constructible() {
        // rejecting zeros is the vector's job
        let e = Element::new(5, 0.0).unwrap();
        assert!(e.is_zero());
        assert!(Element::new(5, -0.0).unwrap().is_zero());
        assert!(!Element::new(5, f64::NAN).unwrap().is_zero());
        assert!(!Element::new(5, f64::MIN_POSITIVE).unwrap().is_zero());
    }

    #[rstest]
    fn test_try_from_tuple() {
        let e = Element::try_from((7, -2.0)).unwrap();
        assert_eq!(e, Element::new(7, -2.0).unwrap());
        assert!(Element::try_from((0, -2.0)).is_err());
    }

    #[rstest]
    #[case(1, 3.0, "(index 1, value 3.0)")]
    #[case(12, -0.125, "(index 12, value -0.125)")]
    #[case(9223372036854775807, 2.5, "(index 9223372036854775807, value 2.5)")]
    #[case(4, f64::INFINITY, "(index 4, value inf)")]
    fn test_display(#[case] index: i64, #[case] value: f64, #[case] expected: &str) {
        let e = Element::new(index, value).unwrap();
        assert_eq!(e.to_string(), expected);
    }

    #[rstest]
    fn test_error_message() {
        let err = Element::new(0, 1.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Element index out of range [1, 9223372036854775807]: 0"
        );
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn test_serde_roundtrip_and_validation() {
        let e = Element::new(3, 4.0).unwrap();
        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(json, r#"{"index":3,"value":4.0}"#);

        let back: Element = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);

        let bad = serde_json::from_str::<Element>(r#"{"index":0,"value":4.0}"#);
        assert!(bad.is_err());
    }
}
