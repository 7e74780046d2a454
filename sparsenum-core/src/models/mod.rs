pub mod element;

// re-export for cleaner imports
pub use self::element::{Element, MAX_INDEX, MIN_INDEX};
