//! Book records

use std::fmt;
use std::io::Write;

use crate::buffer::{Buffer, BufferError};
use crate::dynarray::DynArray;

use super::record;

/// One author as an ordered list of names (first ... last)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Author {
    names: DynArray<Buffer>,
}

impl Author {
    pub fn from_names(names: DynArray<Buffer>) -> Self {
        Self { names }
    }

    pub fn names(&self) -> &DynArray<Buffer> {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn first_name(&self) -> Option<&Buffer> {
        self.names.first()
    }

    pub fn last_name(&self) -> Option<&Buffer> {
        self.names.peek()
    }

    /// `"First Middle Last"`
    pub fn full_name(&self) -> Result<Buffer, BufferError> {
        let mut full = Buffer::new()?;
        for name in &self.names {
            full.concat(name)?;
            full.append_char(' ')?;
        }
        full.truncate_last_byte();
        Ok(full)
    }

    /// `"Last, First Middle"`
    ///
    /// A single-name author comes out as `"Last,"`.
    pub fn by_last_name(&self) -> Result<Buffer, BufferError> {
        let mut key = Buffer::new()?;
        let Some(last) = self.last_name() else {
            return Ok(key);
        };
        key.concat(last)?;
        key.append_str(", ")?;
        for name in self.names.iter().take(self.names.len() - 1) {
            key.concat(name)?;
            key.append_char(' ')?;
        }
        key.truncate_last_byte();
        Ok(key)
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", name)?;
        }
        Ok(())
    }
}

/// A catalogue record
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub title: Buffer,
    pub subtitle: Buffer,
    pub authors: DynArray<Author>,
    pub publisher: Buffer,
    pub location: Buffer,
    pub year: i32,
    pub categories: DynArray<Buffer>,
    /// Removed books stay in the arena but are hidden everywhere
    pub removed: bool,
}

impl Book {
    /// Start building a book with the given title
    pub fn builder(title: &str) -> BookBuilder {
        BookBuilder {
            title: title.to_string(),
            ..BookBuilder::default()
        }
    }

    /// Write the multi-line card shown by the shell
    pub fn write_card<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        if self.removed {
            return Ok(());
        }
        writeln!(out, "    Title: {}", self.title)?;
        writeln!(out, " Subtitle: {}", self.subtitle)?;
        write!(out, "Author(s): ")?;
        for (i, author) in self.authors.iter().enumerate() {
            if i > 0 {
                write!(out, ", ")?;
            }
            write!(out, "{}", author)?;
        }
        writeln!(out)?;
        writeln!(out, "Publisher: {}", self.publisher)?;
        writeln!(out, "     Year: {}", self.year)?;
        write!(out, " Location: {}", self.location)?;
        if !self.categories.is_empty() {
            write!(out, "\nCategories: ")?;
            for (i, category) in self.categories.iter().enumerate() {
                if i > 0 {
                    write!(out, ", ")?;
                }
                write!(out, "{}", category)?;
            }
        }
        writeln!(out)
    }
}

/// Builder for Book
#[derive(Debug, Default)]
pub struct BookBuilder {
    title: String,
    subtitle: String,
    authors: String,
    publisher: String,
    location: String,
    year: i32,
    categories: Vec<String>,
}

impl BookBuilder {
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    /// Authors in record syntax: `"First Last, Other Author"`
    pub fn authors(mut self, authors: impl Into<String>) -> Self {
        self.authors = authors.into();
        self
    }

    pub fn publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = publisher.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.categories.push(category.into());
        self
    }

    pub fn build(self) -> Result<Book, BufferError> {
        let mut categories = DynArray::new();
        for category in self.categories.iter().filter(|c| !c.is_empty()) {
            categories.push(Buffer::from_text(category)?);
        }
        Ok(Book {
            title: Buffer::from_text(&self.title)?,
            subtitle: Buffer::from_text(&self.subtitle)?,
            authors: record::parse_authors(&self.authors)?,
            publisher: Buffer::from_text(&self.publisher)?,
            location: Buffer::from_text(&self.location)?,
            year: self.year,
            categories,
            removed: false,
        })
    }
}
