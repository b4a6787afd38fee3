//! # Bookdex
//!
//! A multi-index book catalogue built on:
//! - An AVL index tree mapping keys to buckets of record handles
//! - A growable, UTF-8 aware byte buffer that builds and orders those keys
//! - A resizable array used for buckets and record lists
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Shell                                 │
//! │              (command loop, prompts, headings)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      Catalogue                               │
//! │        (record arena + one IndexTree per attribute)          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  IndexTree  │─────────►│  DynArray   │
//!   │    (AVL)    │ buckets  │             │
//!   └──────┬──────┘          └─────────────┘
//!          │ keys
//!          ▼
//!   ┌─────────────┐
//!   │   Buffer    │
//!   │  (UTF-8)    │
//!   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod buffer;
pub mod dynarray;
pub mod index;
pub mod catalogue;
pub mod shell;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{BookdexError, Result};
pub use config::Config;
pub use buffer::Buffer;
pub use dynarray::DynArray;
pub use index::IndexTree;
pub use catalogue::Catalogue;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Bookdex
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
