//! Searchable attributes

use std::str::FromStr;

use crate::error::BookdexError;

/// One searchable attribute, backed by its own index tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchArea {
    Title,
    Subtitle,
    /// Full name, `"First Last"`
    Author,
    /// Full name starting with the last name, `"Last, First"`
    AuthorByLastName,
    AuthorLastName,
    AuthorFirstName,
    Publisher,
    Year,
    Category,
    Location,
}

impl SearchArea {
    /// Every area, in listing order
    pub const ALL: [SearchArea; 10] = [
        SearchArea::Title,
        SearchArea::Subtitle,
        SearchArea::Author,
        SearchArea::AuthorByLastName,
        SearchArea::AuthorLastName,
        SearchArea::AuthorFirstName,
        SearchArea::Publisher,
        SearchArea::Year,
        SearchArea::Category,
        SearchArea::Location,
    ];

    /// Parse a search-area name (short or long form)
    pub fn parse(name: &str) -> Option<Self> {
        let area = match name {
            "t" | "title" => SearchArea::Title,
            "st" | "subtitle" => SearchArea::Subtitle,
            "a" | "author" => SearchArea::Author,
            "l" | "lastname" => SearchArea::AuthorByLastName,
            "al" | "authorlast" => SearchArea::AuthorLastName,
            "af" | "authorfirst" => SearchArea::AuthorFirstName,
            "p" | "pub" => SearchArea::Publisher,
            "y" | "year" => SearchArea::Year,
            "c" | "cat" => SearchArea::Category,
            "lc" | "location" => SearchArea::Location,
            _ => return None,
        };
        Some(area)
    }

    /// Heading used when listing the area
    pub fn heading(self) -> &'static str {
        match self {
            SearchArea::Title => "Titles",
            SearchArea::Subtitle => "Subtitles",
            SearchArea::Author => "Authors",
            SearchArea::AuthorByLastName => "Authors by Last Name",
            SearchArea::AuthorLastName => "Author Last Names",
            SearchArea::AuthorFirstName => "Author First Names",
            SearchArea::Publisher => "Publishers",
            SearchArea::Year => "Years",
            SearchArea::Category => "Categories",
            SearchArea::Location => "Locations",
        }
    }

    /// Noun used in the search prompt, e.g. `"Search titles: "`
    pub fn label(self) -> &'static str {
        match self {
            SearchArea::Title => "titles",
            SearchArea::Subtitle => "subtitles",
            SearchArea::Author | SearchArea::AuthorByLastName => "authors",
            SearchArea::AuthorLastName => "author last names",
            SearchArea::AuthorFirstName => "author first names",
            SearchArea::Publisher => "publishers",
            SearchArea::Year => "years",
            SearchArea::Category => "categories",
            SearchArea::Location => "locations",
        }
    }
}

impl FromStr for SearchArea {
    type Err = BookdexError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        SearchArea::parse(name).ok_or_else(|| BookdexError::UnknownArea(name.to_string()))
    }
}
