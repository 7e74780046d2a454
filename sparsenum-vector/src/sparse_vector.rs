use std::fmt::{self, Display};

use log::trace;

use sparsenum_core::errors::InsertError;
use sparsenum_core::models::Element;

use crate::iter::Iter;

/// A sparse numeric vector: the non-zero `(index, value)` entries of a
/// conceptually huge vector, stored in strictly increasing index order.
///
/// The vector upholds three invariants at all times:
///
/// - elements are sorted by index, ascending
/// - no two elements share an index
/// - no stored element has a value of exactly `0.0`
///
/// All of them are enforced by [`insert`](SparseVector::insert), the only way
/// to add elements.
///
/// # Examples
///
/// ```
/// use sparsenum_core::models::Element;
/// use sparsenum_vector::SparseVector;
///
/// let mut v = SparseVector::new();
/// v.insert(Element::new(1, 3.0).unwrap()).unwrap();
/// v.insert(Element::new(5, 2.0).unwrap()).unwrap();
/// v.insert(Element::new(3, 4.0).unwrap()).unwrap();
///
/// let indices: Vec<i64> = v.iter().map(|e| e.index()).collect();
/// assert_eq!(indices, vec![1, 3, 5]);
/// assert_eq!(v.size(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    /// Stored elements, sorted by index
    elements: Vec<Element>,
}

impl SparseVector {
    /// Create an empty vector.
    pub fn new() -> Self {
        SparseVector {
            elements: Vec::new(),
        }
    }

    /// Insert an element at the position that keeps the vector sorted by index.
    ///
    /// Fails, leaving the vector untouched, if the value is exactly zero
    /// ([`InsertError::ZeroValue`]) or if the index is already occupied
    /// ([`InsertError::DuplicateIndex`]). To update an existing entry, remove
    /// it first.
    ///
    /// ```
    /// use sparsenum_core::{errors::InsertError, models::Element};
    /// use sparsenum_vector::SparseVector;
    ///
    /// let mut v = SparseVector::new();
    /// v.insert(Element::new(2, 9.0).unwrap()).unwrap();
    ///
    /// let res = v.insert(Element::new(2, 1.0).unwrap());
    /// assert_eq!(res, Err(InsertError::DuplicateIndex(2)));
    /// assert_eq!(v.size(), 1);
    /// ```
    pub fn insert(&mut self, elem: Element) -> Result<(), InsertError> {
        if elem.is_zero() {
            trace!("rejected zero value at index {}", elem.index());
            return Err(InsertError::ZeroValue {
                index: elem.index(),
            });
        }

        match self.position(elem.index()) {
            Ok(_) => {
                trace!("rejected duplicate index {}", elem.index());
                Err(InsertError::DuplicateIndex(elem.index()))
            }
            Err(pos) => {
                self.elements.insert(pos, elem);
                Ok(())
            }
        }
    }

    /// Remove the element with the given index.
    ///
    /// Returns `true` if an element was removed and `false` if there was no
    /// element with that index. A missing index is not an error.
    pub fn remove(&mut self, index: i64) -> bool {
        match self.position(index) {
            Ok(pos) => {
                self.elements.remove(pos);
                true
            }
            Err(_) => {
                trace!("nothing to remove at index {}", index);
                false
            }
        }
    }

    /// Get the number of stored (non-zero) elements.
    #[inline]
    pub fn size(&self) -> u64 {
        self.elements.len() as u64
    }

    /// Get the number of stored elements as a `usize`.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the vector has no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The element with the lowest index, if any.
    #[inline]
    pub fn first(&self) -> Option<&Element> {
        self.elements.first()
    }

    /// Return an iterator over the elements, in ascending index order.
    ///
    /// Each call starts again from the first element.
    #[inline]
    pub fn iter(&'_ self) -> Iter<'_> {
        Iter::new(&self.elements)
    }

    /// Render every element as `(index <i>, value <v>)`, one per line.
    ///
    /// Meant for diagnostics only.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }

    /// Locate `index` in the sorted storage.
    ///
    /// `Ok(pos)` if it is stored at `pos`, otherwise `Err(pos)` with the
    /// position where it would have to be inserted.
    #[inline]
    fn position(&self, index: i64) -> Result<usize, usize> {
        self.elements.binary_search_by_key(&index, |e| e.index())
    }
}

impl Display for SparseVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for elem in self.iter() {
            writeln!(f, "{}", elem)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a SparseVector {
    type Item = &'a Element;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::de::{Deserialize, Deserializer, Error as DeError};
    use serde::ser::{Serialize, SerializeSeq, Serializer};

    use sparsenum_core::models::Element;

    use super::SparseVector;

    impl Serialize for SparseVector {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for elem in self.iter() {
                seq.serialize_element(elem)?;
            }
            seq.end()
        }
    }

    impl<'de> Deserialize<'de> for SparseVector {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let elements = Vec::<Element>::deserialize(deserializer)?;
            let mut vector = SparseVector::new();
            for elem in elements {
                vector.insert(elem).map_err(D::Error::custom)?;
            }
            Ok(vector)
        }
    }
}
