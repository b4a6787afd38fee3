//! Catalogue line format
//!
//! ## Record Format
//! ```text
//! title;subtitle;authors;publisher;location;year;categories\n
//! ```
//! - authors: comma-separated, each a space-separated list of names
//! - year: decimal i32
//! - categories: comma-separated, may be empty

use std::io::Write;

use crate::buffer::{Buffer, BufferError};
use crate::dynarray::DynArray;
use crate::error::{BookdexError, Result};

use super::book::{Author, Book};

/// Separates the sections of a record
pub const FIELD_SEPARATOR: char = ';';

/// Separates authors and categories
pub const LIST_SEPARATOR: char = ',';

/// Sections in a record
const SECTION_COUNT: usize = 7;

/// Parse an author list: authors split on `','`, names split on `' '`
///
/// Empty names and empty authors are skipped.
pub fn parse_authors(text: &str) -> std::result::Result<DynArray<Author>, BufferError> {
    let mut authors = DynArray::new();
    for part in text.split(LIST_SEPARATOR) {
        let names = parse_list(part, ' ')?;
        if !names.is_empty() {
            authors.push(Author::from_names(names));
        }
    }
    Ok(authors)
}

/// Split `text` on `separator`, dropping empty items
pub fn parse_list(text: &str, separator: char) -> std::result::Result<DynArray<Buffer>, BufferError> {
    let mut items = DynArray::new();
    for item in text.split(separator).filter(|item| !item.is_empty()) {
        items.push(Buffer::from_text(item)?);
    }
    Ok(items)
}

/// Parse one record line (without its newline)
pub fn parse_record(line: &str, line_no: usize) -> Result<Book> {
    let sections: Vec<&str> = line.splitn(SECTION_COUNT, FIELD_SEPARATOR).collect();
    if sections.len() < SECTION_COUNT {
        return Err(BookdexError::InvalidRecord {
            line: line_no,
            reason: format!(
                "expected {} sections, found {}",
                SECTION_COUNT,
                sections.len()
            ),
        });
    }

    let year = sections[5]
        .trim()
        .parse::<i32>()
        .map_err(|_| BookdexError::InvalidRecord {
            line: line_no,
            reason: format!("invalid year '{}'", sections[5]),
        })?;

    Ok(Book {
        title: Buffer::from_text(sections[0])?,
        subtitle: Buffer::from_text(sections[1])?,
        authors: parse_authors(sections[2])?,
        publisher: Buffer::from_text(sections[3])?,
        location: Buffer::from_text(sections[4])?,
        year,
        categories: parse_list(sections[6], LIST_SEPARATOR)?,
        removed: false,
    })
}

/// Write `book` as one record line; removed books are skipped
pub fn write_record<W: Write>(book: &Book, out: &mut W) -> std::io::Result<()> {
    if book.removed {
        return Ok(());
    }
    out.write_all(book.title.as_bytes())?;
    write!(out, "{}", FIELD_SEPARATOR)?;
    out.write_all(book.subtitle.as_bytes())?;
    write!(out, "{}", FIELD_SEPARATOR)?;
    for (i, author) in book.authors.iter().enumerate() {
        if i > 0 {
            write!(out, "{}", LIST_SEPARATOR)?;
        }
        for (j, name) in author.names().iter().enumerate() {
            if j > 0 {
                out.write_all(b" ")?;
            }
            out.write_all(name.as_bytes())?;
        }
    }
    write!(out, "{}", FIELD_SEPARATOR)?;
    out.write_all(book.publisher.as_bytes())?;
    write!(out, "{}", FIELD_SEPARATOR)?;
    out.write_all(book.location.as_bytes())?;
    write!(out, "{}{}{}", FIELD_SEPARATOR, book.year, FIELD_SEPARATOR)?;
    for (i, category) in book.categories.iter().enumerate() {
        if i > 0 {
            write!(out, "{}", LIST_SEPARATOR)?;
        }
        out.write_all(category.as_bytes())?;
    }
    writeln!(out)
}
