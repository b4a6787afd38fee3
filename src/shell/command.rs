//! Command definitions
//!
//! Represents commands typed at the prompt.

use crate::catalogue::SearchArea;

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Leave the shell
    Quit,

    /// Print the command summary
    Help,

    /// Print every live book
    Books,

    /// Print the keys of one index
    List(SearchArea),

    /// Prompt for one book
    Add,

    /// Prompt for books until an empty title is confirmed
    AddBooks,

    /// Prompt for an area and a query
    Search,

    /// Blank line
    Empty,

    /// Anything else
    Unknown(String),
}

impl Command {
    /// Parse a command line; surrounding whitespace is ignored
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line {
            "" => Command::Empty,
            "q" | "quit" => Command::Quit,
            "h" | "help" => Command::Help,
            "b" | "books" => Command::Books,
            "t" | "titles" => Command::List(SearchArea::Title),
            "st" | "subtitles" => Command::List(SearchArea::Subtitle),
            "a" | "authors" => Command::List(SearchArea::Author),
            "l" | "lastname" => Command::List(SearchArea::AuthorByLastName),
            "al" | "authorlast" => Command::List(SearchArea::AuthorLastName),
            "af" | "authorfirst" => Command::List(SearchArea::AuthorFirstName),
            "p" | "pub" => Command::List(SearchArea::Publisher),
            "y" | "years" => Command::List(SearchArea::Year),
            "c" | "cat" => Command::List(SearchArea::Category),
            "lc" | "locations" => Command::List(SearchArea::Location),
            "add" => Command::Add,
            "addbooks" | "add books" => Command::AddBooks,
            "s" | "search" => Command::Search,
            other => Command::Unknown(other.to_string()),
        }
    }
}
