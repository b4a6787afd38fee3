//! Buffer Module
//!
//! Growable, NUL-terminated byte sequences used to build and compare keys.
//!
//! ## Responsibilities
//! - Overflow-safe geometric growth (capacity doubles until it fits)
//! - Append / prepend of code points, raw runs and text
//! - Code-point-safe reversal
//! - ASCII case-insensitive key ordering
//! - Pluggable allocation through [`BufferAllocator`]
//!
//! ## Layout
//! ```text
//! ┌───────────────────────────────┬────┬──────────────┐
//! │ content (len bytes)           │ \0 │ spare        │
//! └───────────────────────────────┴────┴──────────────┘
//! ◄──────────────────── capacity ─────────────────────►
//! ```

mod alloc;
mod byte_buffer;
mod error;
mod io;
pub mod utf8;

pub use alloc::{BufferAllocator, Global};
pub use byte_buffer::{compare, length, Buffer, DEFAULT_CAPACITY};
pub use error::BufferError;
