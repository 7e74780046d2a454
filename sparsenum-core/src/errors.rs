use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementError {
    #[error("Element index out of range [1, {max}]: {0}", max = i64::MAX)]
    IndexOutOfRange(i64),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertError {
    #[error("Can't insert a zero value (index {index})")]
    ZeroValue { index: i64 },

    #[error("An element with index {0} already exists")]
    DuplicateIndex(i64),
}
