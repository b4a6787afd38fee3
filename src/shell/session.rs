//! Shell session
//!
//! Reads commands from `input`, writes everything the user sees to `output`
//! and appends new records to `sink` (the open catalogue file).

use std::io::{BufRead, Write};

use crate::buffer::Buffer;
use crate::catalogue::{record, Book, Catalogue, SearchArea};
use crate::config::Config;
use crate::error::{BookdexError, Result};

use super::command::Command;
use super::style;

/// Whether the loop keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive catalogue session
pub struct Shell<R, W, S> {
    catalogue: Catalogue,
    config: Config,

    /// Resolved colour mode
    color: bool,

    input: R,
    output: W,

    /// Receives one record per added book
    sink: S,
}

impl<R: BufRead, W: Write, S: Write> Shell<R, W, S> {
    pub fn new(catalogue: Catalogue, config: Config, input: R, output: W, sink: S) -> Self {
        let color = config.color.enabled();
        Self {
            catalogue,
            config,
            color,
            input,
            output,
            sink,
        }
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Run the command loop until `quit` or end of input
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "\n{}", self.config.prompt)?;
            self.output.flush()?;

            let Some(line) = self.read_input()? else {
                tracing::debug!("input closed");
                break;
            };
            if self.execute(&line)? == Flow::Quit {
                break;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// Execute one command line
    pub fn execute(&mut self, line: &str) -> Result<Flow> {
        let command = Command::parse(line);
        tracing::debug!("executing {:?}", command);

        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => self.print_help()?,
            Command::Books => {
                style::heading(&mut self.output, "Books", self.color)?;
                self.print_books()?;
            }
            Command::List(area) => {
                style::heading(&mut self.output, area.heading(), self.color)?;
                self.print_keys(area)?;
            }
            Command::Add => {
                self.add_book()?;
            }
            Command::AddBooks => self.add_books()?,
            Command::Search => self.search()?,
            Command::Empty => {}
            Command::Unknown(_) => writeln!(self.output, "\nUnknown command")?,
        }
        Ok(Flow::Continue)
    }

    /// Print every book followed by the keys of every index
    pub fn print_overview(&mut self) -> Result<()> {
        style::heading(&mut self.output, "Books", self.color)?;
        self.print_books()?;
        for area in SearchArea::ALL {
            writeln!(self.output)?;
            style::heading(&mut self.output, area.heading(), self.color)?;
            self.print_keys(area)?;
        }
        Ok(())
    }

    // =========================================================================
    // Adding Books
    // =========================================================================

    /// Prompt for one book
    ///
    /// Returns false when the title was empty or input ran out, in which case
    /// nothing is added.
    pub fn add_book(&mut self) -> Result<bool> {
        let Some(book) = self.read_book()? else {
            return Ok(false);
        };

        record::write_record(&book, &mut self.sink)?;
        self.sink.flush()?;

        self.catalogue.add_book(book)?;
        Ok(true)
    }

    /// Prompt for books until an empty title is confirmed with `y`/`yes`
    pub fn add_books(&mut self) -> Result<()> {
        loop {
            writeln!(self.output)?;
            if self.add_book()? {
                continue;
            }
            let answer = self.prompt("Are you sure you want to exit? [y/n]: ")?;
            match answer.as_deref().map(str::trim) {
                None | Some("y") | Some("yes") => return Ok(()),
                Some(_) => {}
            }
        }
    }

    fn read_book(&mut self) -> Result<Option<Book>> {
        const FIELD: &[char] = &[record::FIELD_SEPARATOR];
        const LIST: &[char] = &[record::FIELD_SEPARATOR, record::LIST_SEPARATOR];

        let Some(title) = self.prompt_field("    Title: ", FIELD)? else {
            return Ok(None);
        };
        if title.is_empty() {
            return Ok(None);
        }
        let Some(subtitle) = self.prompt_field(" Subtitle: ", FIELD)? else {
            return Ok(None);
        };
        let Some(authors) = self.prompt_field("Author(s): ", LIST)? else {
            return Ok(None);
        };
        let Some(publisher) = self.prompt_field("Publisher: ", FIELD)? else {
            return Ok(None);
        };
        let Some(year) = self.prompt_year()? else {
            return Ok(None);
        };
        let Some(location) = self.prompt_field(" Location: ", FIELD)? else {
            return Ok(None);
        };
        let Some(categories) = self.prompt_field("Categories: ", LIST)? else {
            return Ok(None);
        };

        let mut builder = Book::builder(&title)
            .subtitle(subtitle)
            .authors(authors)
            .publisher(publisher)
            .year(year)
            .location(location);
        for category in categories.split(' ') {
            builder = builder.category(category);
        }
        Ok(Some(builder.build()?))
    }

    /// Prompt until the answer holds none of `reserved`
    fn prompt_field(&mut self, text: &str, reserved: &[char]) -> Result<Option<String>> {
        let mut answer = self.prompt(text)?;
        while let Some(field) = answer {
            let Some(c) = field.chars().find(|c| reserved.contains(c)) else {
                return Ok(Some(field));
            };
            writeln!(self.output, "Field cannot contain '{}'", c)?;
            answer = self.prompt(text)?;
        }
        Ok(None)
    }

    fn prompt_year(&mut self) -> Result<Option<i32>> {
        let mut answer = self.prompt("     Year: ")?;
        while let Some(text) = answer {
            if let Ok(year) = text.trim().parse::<i32>() {
                return Ok(Some(year));
            }
            writeln!(self.output, "Please enter a valid integer")?;
            answer = self.prompt("     Year: ")?;
        }
        Ok(None)
    }

    // =========================================================================
    // Searching
    // =========================================================================

    /// Prompt for a search area and a query, then print the matches
    pub fn search(&mut self) -> Result<()> {
        let Some(name) = self.prompt("Search area: ")? else {
            return Ok(());
        };
        let name = name.trim();
        if name.is_empty() {
            return Ok(());
        }
        if name == "h" || name == "help" {
            return self.print_search_help();
        }
        let Some(area) = SearchArea::parse(name) else {
            writeln!(self.output, "\nUnknown search area")?;
            return Ok(());
        };

        let Some(query) = self.prompt(&format!("Search {}: ", area.label()))? else {
            return Ok(());
        };
        let found = match self.catalogue.search(area, &query) {
            Ok(found) => found,
            Err(BookdexError::InvalidYear(_)) => {
                writeln!(self.output, "Please enter a valid integer")?;
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        tracing::debug!("{} matches for {:?} in {:?}", found.len(), query, area);

        for book in found {
            writeln!(self.output)?;
            book.write_card(&mut self.output)?;
        }
        Ok(())
    }

    // =========================================================================
    // Printing
    // =========================================================================

    fn print_books(&mut self) -> Result<()> {
        for book in self.catalogue.books() {
            book.write_card(&mut self.output)?;
            writeln!(self.output)?;
        }
        Ok(())
    }

    fn print_keys(&mut self, area: SearchArea) -> Result<()> {
        for key in self.catalogue.keys(area) {
            writeln!(self.output, "{}", key)?;
        }
        Ok(())
    }

    fn print_help(&mut self) -> Result<()> {
        style::heading(&mut self.output, "Commands", self.color)?;
        self.output.write_all(COMMAND_HELP.as_bytes())?;
        writeln!(self.output)?;
        self.print_search_help()
    }

    fn print_search_help(&mut self) -> Result<()> {
        style::heading(&mut self.output, "Catalogue Search Areas", self.color)?;
        self.output.write_all(SEARCH_HELP.as_bytes())?;
        Ok(())
    }

    // =========================================================================
    // Input
    // =========================================================================

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_input()
    }

    /// Next input line without its line ending; `None` at end of input
    fn read_input(&mut self) -> Result<Option<String>> {
        let capacity = self.config.initial_buffer_capacity;
        let Some(mut line) = Buffer::read_line(&mut self.input, capacity)? else {
            return Ok(None);
        };
        line.trim_line_ending();
        Ok(Some(String::from_utf8_lossy(line.as_bytes()).into_owned()))
    }
}

const COMMAND_HELP: &str = "\
 h,  help         print this help message
 q,  quit         leave the catalogue
 b,  books        list every book
 t,  titles       list titles
 st, subtitles    list subtitles
 a,  authors      list authors by full name
 l,  lastname     list authors, last name first
 al, authorlast   list author last names
 af, authorfirst  list author first names
 p,  pub          list publishers
 y,  years        list publication years
 c,  cat          list categories
 lc, locations    list locations
 add              add a book
 addbooks         add books until an empty title
 s,  search       search the catalogue
";

const SEARCH_HELP: &str = "\
 h,  help         print this help message
 t,  title        search for a book title
 st, subtitle     search for a book subtitle
 a,  author       search for author by full name
 l,  lastname     search for author by full name, starting
                   with last name (e.g. 'Hinton, Matthew')
 al, authorlast   search by author last name
 af, authorfirst  search by author first name
 p,  pub          search for a publisher
 y,  year         search by publication year
 c,  cat          search for a category
 lc, location     search by location
";
