use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("cannot build a tree from an empty array")]
    EmptyInput,
    #[error("invalid range [{l}, {r}] for an array of length {len}")]
    InvalidRange { l: usize, r: usize, len: usize },
}

/// Checks that `[l, r]` is a non-empty inclusive range inside `0..len`.
pub fn check_range(len: usize, l: usize, r: usize) -> Result<(), RangeError> {
    if l <= r && r < len {
        Ok(())
    } else {
        Err(RangeError::InvalidRange { l, r, len })
    }
}
