use std::iter::FusedIterator;

use sparsenum_core::models::Element;

/// An iterator over all elements of a [`SparseVector`](crate::SparseVector),
/// in ascending index order.
///
/// This struct is created by the [`iter`](crate::SparseVector::iter) method.
/// It borrows the vector, so the vector can't change while it is iterated.
///
/// # Examples
///
/// ```
/// use sparsenum_core::models::Element;
/// use sparsenum_vector::SparseVector;
///
/// let mut v = SparseVector::new();
/// v.insert(Element::new(4, 1.0).unwrap()).unwrap();
/// v.insert(Element::new(2, 0.5).unwrap()).unwrap();
///
/// for e in v.iter() {
///     println!("{}", e);
/// }
/// assert_eq!(v.iter().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    elements: &'a [Element],
    pos: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(elements: &'a [Element]) -> Self {
        Iter { elements, pos: 0 }
    }

    /// Look at the current element without advancing.
    #[inline]
    pub(crate) fn peek(&self) -> Option<&'a Element> {
        self.elements.get(self.pos)
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Element;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let elem = self.elements.get(self.pos)?;
        self.pos += 1;
        Some(elem)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.elements.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
