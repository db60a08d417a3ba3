use thiserror::Error;

/// How many addresses a single request may ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSize(usize);

#[derive(Debug, Error)]
pub enum BatchSizeError {
    #[error("Count must be between 1 and {max}, got {actual}.")]
    OutOfRange { max: usize, actual: i64 },
}

impl BatchSize {
    /// Validate a caller supplied count against the configured maximum.
    pub fn parse(count: i64, max: usize) -> Result<Self, BatchSizeError> {
        match usize::try_from(count) {
            Ok(size) if size >= 1 && size <= max => Ok(Self(size)),
            _ => Err(BatchSizeError::OutOfRange { max, actual: count }),
        }
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl Default for BatchSize {
    fn default() -> Self {
        Self(1)
    }
}
