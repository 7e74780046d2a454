#[cfg(feature = "core")]
#[doc(inline)]
pub use sparsenum_core as core;

#[cfg(feature = "vector")]
#[doc(inline)]
pub use sparsenum_vector as vector;

#[cfg(feature = "vector")]
pub use sparsenum_vector::{Element, InsertError, SparseVector};
