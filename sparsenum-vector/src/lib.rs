//! Ordered sparse numeric vectors.
//!
//! A [`SparseVector`] stores only the non-zero entries of a numeric vector
//! whose dimension may be as large as `i64::MAX`. Entries are kept in strictly
//! increasing index order, which makes the inner product a single linear merge
//! over both operands.
//!
//! ## Quick Start
//!
//! ```rust
//! use sparsenum_core::models::Element;
//! use sparsenum_vector::SparseVector;
//!
//! let mut a = SparseVector::new();
//! a.insert(Element::new(1, 2.0).unwrap()).unwrap();
//! a.insert(Element::new(3, 4.0).unwrap()).unwrap();
//!
//! let mut b = SparseVector::new();
//! b.insert(Element::new(3, 1.0).unwrap()).unwrap();
//! b.insert(Element::new(2, 5.0).unwrap()).unwrap();
//!
//! // only index 3 is shared
//! assert_eq!(a.dot(&b), 4.0);
//!
//! // zeros and duplicates are refused
//! assert!(a.insert(Element::new(7, 0.0).unwrap()).is_err());
//! assert!(a.insert(Element::new(1, 9.0).unwrap()).is_err());
//!
//! assert_eq!(a.remove(1), true);
//! assert_eq!(a.remove(1), false);
//! print!("{}", a);
//! ```
//!
//! ## Concurrency
//!
//! Mutation needs `&mut SparseVector`, so the borrow checker already rules out
//! changing a vector while it is being iterated or multiplied. Sharing one
//! vector between threads for writing needs an external lock.

/// Inner product between two vectors.
pub mod dot;

/// Borrowing iterator over the stored elements.
pub mod iter;

/// The vector container itself.
pub mod sparse_vector;

// re-exports
pub use self::iter::Iter;
pub use self::sparse_vector::SparseVector;
pub use sparsenum_core::errors::InsertError;
pub use sparsenum_core::models::Element;
