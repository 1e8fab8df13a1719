//! Error type shared by the math kernel and the frame pipeline.
//!
//! Every failure here is local and synchronous: constructors and operators
//! report it to their immediate caller and nothing is retried. Sampling out
//! of bounds is not an error anywhere in the crate; coordinates are clamped
//! instead.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A vector or matrix was built from a sequence with too few elements.
    #[error("sequence too short: expected at least {expected} elements, got {got}")]
    ShortSequence { expected: usize, got: usize },

    /// A zero-length vector cannot be scaled to unit length.
    #[error("cannot normalize a zero-length vector")]
    DegenerateNormalization,

    /// Frame dimensions must both be nonzero.
    #[error("invalid frame dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// A raw pixel buffer does not hold `4 * width * height` bytes.
    #[error("pixel buffer holds {got} bytes, expected {expected}")]
    BufferSize { expected: usize, got: usize },

    /// A frame does not match the dimensions an operator was built for.
    #[error("frame is {got_width}x{got_height}, operator expects {width}x{height}")]
    DimensionMismatch {
        width: u32,
        height: u32,
        got_width: u32,
        got_height: u32,
    },
}
