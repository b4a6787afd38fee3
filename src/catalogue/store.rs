//! Catalogue implementation
//!
//! Books live in an append-only arena; every index tree stores `RecordId`
//! handles into it. Handles are borrowed by the trees, so they are inserted
//! with [`no_release`].

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::buffer::{Buffer, DEFAULT_CAPACITY};
use crate::dynarray::DynArray;
use crate::error::{BookdexError, Result};
use crate::index::{no_release, IndexTree};

use super::area::SearchArea;
use super::book::Book;
use super::record;

/// Handle to a book in the catalogue arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(usize);

impl RecordId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Outcome of loading a catalogue file
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Records added to the catalogue
    pub loaded: usize,

    /// Malformed records that were skipped
    pub skipped: usize,
}

/// One index tree per searchable attribute
#[derive(Default)]
struct Indexes {
    titles: IndexTree<Buffer, RecordId>,
    subtitles: IndexTree<Buffer, RecordId>,
    authors: IndexTree<Buffer, RecordId>,
    authors_by_last_name: IndexTree<Buffer, RecordId>,
    author_last_names: IndexTree<Buffer, RecordId>,
    author_first_names: IndexTree<Buffer, RecordId>,
    publishers: IndexTree<Buffer, RecordId>,
    categories: IndexTree<Buffer, RecordId>,
    locations: IndexTree<Buffer, RecordId>,
    years: IndexTree<i32, RecordId>,
}

impl Indexes {
    /// Tree for a text-keyed area; `None` for years
    fn text(&self, area: SearchArea) -> Option<&IndexTree<Buffer, RecordId>> {
        let tree = match area {
            SearchArea::Title => &self.titles,
            SearchArea::Subtitle => &self.subtitles,
            SearchArea::Author => &self.authors,
            SearchArea::AuthorByLastName => &self.authors_by_last_name,
            SearchArea::AuthorLastName => &self.author_last_names,
            SearchArea::AuthorFirstName => &self.author_first_names,
            SearchArea::Publisher => &self.publishers,
            SearchArea::Category => &self.categories,
            SearchArea::Location => &self.locations,
            SearchArea::Year => return None,
        };
        Some(tree)
    }

    fn add(&mut self, book: &Book, id: RecordId) -> Result<()> {
        self.titles.insert(book.title.try_clone()?, id, no_release);
        self.subtitles.insert(book.subtitle.try_clone()?, id, no_release);

        for author in book.authors.iter().filter(|a| !a.is_empty()) {
            if let Some(first) = author.first_name() {
                self.author_first_names.insert(first.try_clone()?, id, no_release);
            }
            if let Some(last) = author.last_name() {
                self.author_last_names.insert(last.try_clone()?, id, no_release);
            }
            self.authors.insert(author.full_name()?, id, no_release);
            self.authors_by_last_name.insert(author.by_last_name()?, id, no_release);
        }

        self.publishers.insert(book.publisher.try_clone()?, id, no_release);
        self.locations.insert(book.location.try_clone()?, id, no_release);
        self.years.insert(book.year, id, no_release);

        for category in &book.categories {
            self.categories.insert(category.try_clone()?, id, no_release);
        }
        Ok(())
    }
}

/// Multi-index book catalogue
#[derive(Default)]
pub struct Catalogue {
    /// Record arena, oldest first; never reordered
    books: Vec<Book>,

    indexes: Indexes,
}

impl Catalogue {
    /// Create an empty catalogue
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a book and index every attribute
    ///
    /// Returns `None` for a book already marked removed.
    pub fn add_book(&mut self, book: Book) -> Result<Option<RecordId>> {
        if book.removed {
            return Ok(None);
        }
        let id = RecordId(self.books.len());
        self.books.push(book);
        self.indexes.add(&self.books[id.0], id)?;
        tracing::trace!("indexed book #{}", id.0);
        Ok(Some(id))
    }

    /// Mark a book removed; returns false if it was unknown or already removed
    pub fn remove_book(&mut self, id: RecordId) -> bool {
        match self.books.get_mut(id.0) {
            Some(book) if !book.removed => {
                book.removed = true;
                true
            }
            _ => false,
        }
    }

    /// A live book by handle
    pub fn book(&self, id: RecordId) -> Option<&Book> {
        self.books.get(id.0).filter(|book| !book.removed)
    }

    /// Live books, newest first
    pub fn books(&self) -> impl Iterator<Item = &Book> {
        self.books.iter().rev().filter(|book| !book.removed)
    }

    /// Number of live books
    pub fn len(&self) -> usize {
        self.books().count()
    }

    pub fn is_empty(&self) -> bool {
        self.books().next().is_none()
    }

    /// Live books whose `area` key equals `query`, in insertion order
    ///
    /// Text areas compare ASCII case-insensitively; the year area parses
    /// `query` as an integer.
    pub fn search(&self, area: SearchArea, query: &str) -> Result<Vec<&Book>> {
        let bucket = match self.indexes.text(area) {
            Some(tree) => tree.get(&Buffer::from_text(query)?),
            None => {
                let year = query
                    .trim()
                    .parse::<i32>()
                    .map_err(|_| BookdexError::InvalidYear(query.to_string()))?;
                self.indexes.years.get(&year)
            }
        };
        Ok(bucket
            .map(|ids| ids.iter().filter_map(|&id| self.book(id)).collect())
            .unwrap_or_default())
    }

    /// Keys of `area` in order, skipping keys whose books are all removed
    pub fn keys(&self, area: SearchArea) -> Vec<String> {
        let mut keys = Vec::new();
        let mut visit = |key: String, ids: &DynArray<RecordId>| {
            if ids.any(|&id| self.book(id).is_some()) {
                keys.push(key);
            }
            Ok::<(), std::convert::Infallible>(())
        };
        let walked = match self.indexes.text(area) {
            Some(tree) => tree.walk(|key, ids| visit(key.to_string(), ids)),
            None => self.indexes.years.walk(|key, ids| visit(key.to_string(), ids)),
        };
        walked.unwrap_or_else(|never| match never {});
        keys
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Load records from a catalogue file
    pub fn load(&mut self, path: &Path) -> Result<LoadReport> {
        let file = File::open(path)?;
        let report = self.load_from(BufReader::new(file))?;
        tracing::debug!(
            "loaded {} records from {} ({} skipped)",
            report.loaded,
            path.display(),
            report.skipped
        );
        Ok(report)
    }

    /// Load records until end of input or the first blank line
    ///
    /// Malformed records are skipped with a warning.
    pub fn load_from<R: BufRead>(&mut self, mut reader: R) -> Result<LoadReport> {
        let mut report = LoadReport::default();
        let mut line_no = 0;

        while let Some(mut line) = Buffer::read_line(&mut reader, DEFAULT_CAPACITY)? {
            line_no += 1;
            line.trim_line_ending();
            if line.is_empty() {
                break;
            }

            let parsed = match line.as_str() {
                Some(text) => record::parse_record(text, line_no),
                None => Err(BookdexError::InvalidRecord {
                    line: line_no,
                    reason: "not valid UTF-8".to_string(),
                }),
            };

            match parsed {
                Ok(book) => {
                    self.add_book(book)?;
                    report.loaded += 1;
                }
                Err(e @ BookdexError::InvalidRecord { .. }) => {
                    tracing::warn!("skipping record: {}", e);
                    report.skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(report)
    }

    /// Write every live book to `path`, replacing its content
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        self.save_to(&mut out)?;
        out.flush()?;
        tracing::debug!("saved {} records to {}", self.len(), path.display());
        Ok(())
    }

    /// Write every live book, oldest first
    pub fn save_to<W: Write>(&self, out: &mut W) -> Result<()> {
        for book in &self.books {
            record::write_record(book, out)?;
        }
        Ok(())
    }
}
