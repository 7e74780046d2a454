use std::cmp::Ordering;

use crate::SparseVector;

impl SparseVector {
    /// Compute the inner product with `other`.
    ///
    /// Both vectors are assumed to live in the same space; indices missing from
    /// either side contribute zero. The two sorted element sequences are walked
    /// with one cursor each: on equal indices the product is accumulated and
    /// both cursors move, otherwise the cursor at the smaller index moves. The
    /// walk stops as soon as one side runs out, so this is `O(m + n)`.
    ///
    /// ```
    /// use sparsenum_core::models::Element;
    /// use sparsenum_vector::SparseVector;
    ///
    /// let mut a = SparseVector::new();
    /// a.insert(Element::new(1, 2.0).unwrap()).unwrap();
    /// a.insert(Element::new(3, 4.0).unwrap()).unwrap();
    ///
    /// let mut b = SparseVector::new();
    /// b.insert(Element::new(2, 5.0).unwrap()).unwrap();
    /// b.insert(Element::new(3, 1.0).unwrap()).unwrap();
    ///
    /// assert_eq!(a.dot(&b), 4.0);
    /// ```
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let mut lhs = self.iter();
        let mut rhs = other.iter();
        let mut total = 0.0;

        while let (Some(x), Some(y)) = (lhs.peek(), rhs.peek()) {
            match x.index().cmp(&y.index()) {
                Ordering::Equal => {
                    total += x.value() * y.value();
                    lhs.next();
                    rhs.next();
                }
                Ordering::Less => {
                    lhs.next();
                }
                Ordering::Greater => {
                    rhs.next();
                }
            }
        }

        total
    }
}
