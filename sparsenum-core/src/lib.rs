//! Core models for sparse numeric vectors.
//!
//! This crate holds the pieces shared by the rest of the sparsenum workspace:
//! the [`Element`](models::Element) value pair and the error types raised when
//! elements are built or inserted.
pub mod errors;
pub mod models;

pub use self::errors::{ElementError, InsertError};
pub use self::models::Element;
