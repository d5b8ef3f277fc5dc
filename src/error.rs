//! Error types.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// Result does not fit in the integer width.
    Overflow,
}

impl core::fmt::Display for MathError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MathError::Overflow => f.write_str("integer overflow"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MathError {}

pub type MathResult<T> = core::result::Result<T, MathError>;
