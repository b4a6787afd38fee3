//! Catalogue Tests
//!
//! Tests verify:
//! - Books are found through every index
//! - Key listings are ordered and skip removed books
//! - Save / load round trips through a real file
//! - Malformed records are skipped, a blank line ends loading

use std::io::Cursor;

use bookdex::catalogue::{Book, Catalogue, LoadReport, SearchArea};
use bookdex::BookdexError;
use tempfile::tempdir;

fn dune() -> Book {
    Book::builder("Dune")
        .subtitle("Book One")
        .authors("Frank Herbert")
        .publisher("Chilton")
        .location("Shelf A")
        .year(1965)
        .category("scifi")
        .category("classic")
        .build()
        .unwrap()
}

fn foundation() -> Book {
    Book::builder("Foundation")
        .authors("Isaac Asimov")
        .publisher("Gnome Press")
        .location("Shelf A")
        .year(1951)
        .category("scifi")
        .build()
        .unwrap()
}

fn good_omens() -> Book {
    Book::builder("Good Omens")
        .authors("Terry Pratchett, Neil Gaiman")
        .publisher("Gollancz")
        .location("Shelf B")
        .year(1990)
        .category("fantasy")
        .build()
        .unwrap()
}

fn library() -> Catalogue {
    let mut catalogue = Catalogue::new();
    catalogue.add_book(dune()).unwrap();
    catalogue.add_book(foundation()).unwrap();
    catalogue.add_book(good_omens()).unwrap();
    catalogue
}

fn titles<'a>(books: impl IntoIterator<Item = &'a Book>) -> Vec<String> {
    books.into_iter().map(|b| b.title.to_string()).collect()
}

// =============================================================================
// Add / Lookup Tests
// =============================================================================

#[test]
fn test_new_catalogue_is_empty() {
    let catalogue = Catalogue::new();
    assert!(catalogue.is_empty());
    assert_eq!(catalogue.len(), 0);
    assert!(catalogue.keys(SearchArea::Title).is_empty());
}

#[test]
fn test_add_book_returns_handle() {
    let mut catalogue = Catalogue::new();
    let id = catalogue.add_book(dune()).unwrap().unwrap();
    assert_eq!(id.index(), 0);
    assert_eq!(catalogue.book(id).unwrap().title, "Dune");
    assert_eq!(catalogue.len(), 1);
}

#[test]
fn test_add_removed_book_is_ignored() {
    let mut catalogue = Catalogue::new();
    let mut book = dune();
    book.removed = true;
    assert_eq!(catalogue.add_book(book).unwrap(), None);
    assert!(catalogue.is_empty());
}

#[test]
fn test_books_newest_first() {
    let catalogue = library();
    assert_eq!(titles(catalogue.books()), vec!["Good Omens", "Foundation", "Dune"]);
}

// =============================================================================
// Search Tests
// =============================================================================

#[test]
fn test_search_title_ignores_case() {
    let catalogue = library();
    let found = catalogue.search(SearchArea::Title, "dune").unwrap();
    assert_eq!(titles(found), vec!["Dune"]);
}

#[test]
fn test_search_every_author_form() {
    let catalogue = library();
    let cases = [
        (SearchArea::Author, "neil gaiman"),
        (SearchArea::AuthorByLastName, "Gaiman, Neil"),
        (SearchArea::AuthorLastName, "GAIMAN"),
        (SearchArea::AuthorFirstName, "Neil"),
    ];
    for (area, query) in cases {
        let found = catalogue.search(area, query).unwrap();
        assert_eq!(titles(found), vec!["Good Omens"], "{:?} {}", area, query);
    }
}

#[test]
fn test_search_shared_key_keeps_insertion_order() {
    let catalogue = library();
    let found = catalogue.search(SearchArea::Category, "SciFi").unwrap();
    assert_eq!(titles(found), vec!["Dune", "Foundation"]);

    let found = catalogue.search(SearchArea::Location, "shelf a").unwrap();
    assert_eq!(titles(found), vec!["Dune", "Foundation"]);
}

#[test]
fn test_search_year() {
    let catalogue = library();
    let found = catalogue.search(SearchArea::Year, " 1951 ").unwrap();
    assert_eq!(titles(found), vec!["Foundation"]);
    assert!(catalogue.search(SearchArea::Year, "2000").unwrap().is_empty());
}

#[test]
fn test_search_year_rejects_non_integer() {
    let catalogue = library();
    let result = catalogue.search(SearchArea::Year, "nineteen");
    assert!(matches!(result, Err(BookdexError::InvalidYear(_))));
}

#[test]
fn test_search_missing_and_empty_query() {
    let catalogue = library();
    assert!(catalogue.search(SearchArea::Publisher, "Ace").unwrap().is_empty());
    assert!(catalogue.search(SearchArea::Title, "").unwrap().is_empty());
}

#[test]
fn test_empty_subtitle_is_not_indexed() {
    let catalogue = library();
    assert_eq!(catalogue.keys(SearchArea::Subtitle), vec!["Book One"]);
}

// =============================================================================
// Key Listing Tests
// =============================================================================

#[test]
fn test_keys_are_ordered() {
    let catalogue = library();
    assert_eq!(
        catalogue.keys(SearchArea::Title),
        vec!["Dune", "Foundation", "Good Omens"]
    );
    assert_eq!(catalogue.keys(SearchArea::Year), vec!["1951", "1965", "1990"]);
    assert_eq!(
        catalogue.keys(SearchArea::AuthorByLastName),
        vec!["Asimov, Isaac", "Gaiman, Neil", "Herbert, Frank", "Pratchett, Terry"]
    );
}

#[test]
fn test_years_sort_numerically() {
    let mut catalogue = Catalogue::new();
    for year in [2001, 987, -50, 1999] {
        catalogue
            .add_book(Book::builder("t").year(year).build().unwrap())
            .unwrap();
    }
    assert_eq!(catalogue.keys(SearchArea::Year), vec!["-50", "987", "1999", "2001"]);
}

// =============================================================================
// Removal Tests
// =============================================================================

#[test]
fn test_removed_book_vanishes() {
    let mut catalogue = library();
    let id = catalogue.add_book(dune()).unwrap().unwrap();
    assert_eq!(catalogue.search(SearchArea::Title, "Dune").unwrap().len(), 2);

    assert!(catalogue.remove_book(id));
    assert!(!catalogue.remove_book(id));
    assert!(catalogue.book(id).is_none());
    assert_eq!(catalogue.search(SearchArea::Title, "Dune").unwrap().len(), 1);
    assert_eq!(catalogue.len(), 3);
}

#[test]
fn test_removed_key_leaves_listing() {
    let mut catalogue = Catalogue::new();
    let id = catalogue.add_book(foundation()).unwrap().unwrap();
    catalogue.add_book(dune()).unwrap();

    catalogue.remove_book(id);
    assert_eq!(titles(catalogue.books()), vec!["Dune"]);
    assert_eq!(catalogue.keys(SearchArea::Title), vec!["Dune"]);
    // Shared category keeps its remaining live book
    assert_eq!(catalogue.keys(SearchArea::Category), vec!["classic", "scifi"]);
    assert!(catalogue.search(SearchArea::Title, "Foundation").unwrap().is_empty());
}

// =============================================================================
// Persistence Tests
// =============================================================================

#[test]
fn test_save_then_load_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("library.txt");

    let original = library();
    original.save(&path).unwrap();

    let mut loaded = Catalogue::new();
    let report = loaded.load(&path).unwrap();
    assert_eq!(report, LoadReport { loaded: 3, skipped: 0 });
    assert_eq!(titles(loaded.books()), titles(original.books()));

    let found = loaded.search(SearchArea::Title, "good omens").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].authors.len(), 2);
    assert_eq!(found[0].year, 1990);
}

#[test]
fn test_save_skips_removed_books() {
    let mut catalogue = library();
    let id = catalogue.add_book(dune()).unwrap().unwrap();
    catalogue.remove_book(id);

    let mut out = Vec::new();
    catalogue.save_to(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 3);
    assert!(text.starts_with("Dune;"));
}

#[test]
fn test_save_is_stable_across_rewrites() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("library.txt");
    library().save(&path).unwrap();
    let first = std::fs::read_to_string(&path).unwrap();

    let mut reloaded = Catalogue::new();
    reloaded.load(&path).unwrap();
    reloaded.save(&path).unwrap();
    let second = std::fs::read_to_string(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_load_skips_malformed_records() {
    let input = "\
Dune;;Frank Herbert;Chilton;A;1965;scifi
broken line without sections
Emma;;Jane Austen;Murray;B;eighteen;
Emma;;Jane Austen;Murray;B;1815;
";
    let mut catalogue = Catalogue::new();
    let report = catalogue.load_from(Cursor::new(input)).unwrap();
    assert_eq!(report, LoadReport { loaded: 2, skipped: 2 });
    assert_eq!(catalogue.keys(SearchArea::Title), vec!["Dune", "Emma"]);
}

#[test]
fn test_load_stops_at_blank_line() {
    let input = "A;;;;;1;\n\nB;;;;;2;\n";
    let mut catalogue = Catalogue::new();
    let report = catalogue.load_from(Cursor::new(input)).unwrap();
    assert_eq!(report.loaded, 1);
    assert_eq!(catalogue.keys(SearchArea::Title), vec!["A"]);
}

#[test]
fn test_load_accepts_crlf() {
    let input = "A;sub;x y;p;l;2;c1,c2\r\n";
    let mut catalogue = Catalogue::new();
    catalogue.load_from(Cursor::new(input)).unwrap();
    assert_eq!(catalogue.keys(SearchArea::Category), vec!["c1", "c2"]);
}

#[test]
fn test_load_missing_file() {
    let dir = tempdir().unwrap();
    let mut catalogue = Catalogue::new();
    let result = catalogue.load(&dir.path().join("absent.txt"));
    assert!(matches!(result, Err(BookdexError::Io(_))));
}
