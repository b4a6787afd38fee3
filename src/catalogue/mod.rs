//! Catalogue Module
//!
//! Book records indexed by every searchable attribute.
//!
//! ## Responsibilities
//! - Own the book records (append-only arena, removal by flag)
//! - Keep one [`IndexTree`](crate::index::IndexTree) per attribute, each
//!   bucket holding handles of the books sharing that key
//! - Read and write the semicolon-delimited record format
//!
//! ## Indexes
//! ```text
//! titles ─────────────┐
//! authors ────────────┤
//! authors by last ────┤            ┌──────────────────────┐
//! ...                 ├── RecordId ──►  books: Vec<Book>  │
//! categories ─────────┤            └──────────────────────┘
//! years (i32 keys) ───┘
//! ```

mod area;
mod book;
pub mod record;
mod store;

pub use area::SearchArea;
pub use book::{Author, Book, BookBuilder};
pub use store::{Catalogue, LoadReport, RecordId};
