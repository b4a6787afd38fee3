//! Buffer result codes

use thiserror::Error;

/// Recoverable failures reported by [`Buffer`](super::Buffer) operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BufferError {
    /// An absent buffer was passed where one is required
    #[error("buffer argument was absent")]
    NullArgument,

    /// The allocator could not provide a block
    #[error("out of memory")]
    OutOfMemory,

    /// Growing by the requested amount would overflow `usize`
    #[error("buffer capacity overflow")]
    Overflow,

    /// The value is not an encodable code point (0 or >= 0x110000)
    #[error("invalid code point: {0:#x}")]
    InvalidCodePoint(u32),
}
