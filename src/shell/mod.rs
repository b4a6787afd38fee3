//! Shell Module
//!
//! Interactive front end over a [`Catalogue`](crate::Catalogue).
//!
//! ## Responsibilities
//! - Parse command lines into [`Command`]s
//! - Prompt for new books and append them to the catalogue file
//! - Print books, index keys and search results
//!
//! ## Session Flow
//! ```text
//!   ">>> " ──► read line ──► Command::parse ──► execute ──► Flow
//!      ▲                                                     │
//!      └───────────────────── Continue ◄─────────────────────┘
//! ```

mod command;
mod session;
pub mod style;

pub use command::Command;
pub use session::{Flow, Shell};
