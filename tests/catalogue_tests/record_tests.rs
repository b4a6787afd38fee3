//! Record Format Tests
//!
//! Tests verify:
//! - Parsing of each record section
//! - Author and category list splitting
//! - Writing records and cards
//! - Author name forms

use bookdex::catalogue::record::{parse_authors, parse_list, parse_record, write_record};
use bookdex::catalogue::{Book, SearchArea};
use bookdex::BookdexError;

// =============================================================================
// Parse Tests
// =============================================================================

#[test]
fn test_parse_full_record() {
    let book = parse_record(
        "Good Omens;The Nice and Accurate Prophecies;Terry Pratchett, Neil Gaiman;Gollancz;Shelf B;1990;fantasy,comedy",
        1,
    )
    .unwrap();

    assert_eq!(book.title, "Good Omens");
    assert_eq!(book.subtitle, "The Nice and Accurate Prophecies");
    assert_eq!(book.authors.len(), 2);
    assert_eq!(book.authors[1].to_string(), "Neil Gaiman");
    assert_eq!(book.publisher, "Gollancz");
    assert_eq!(book.location, "Shelf B");
    assert_eq!(book.year, 1990);
    assert_eq!(book.categories.len(), 2);
    assert_eq!(book.categories[1], "comedy");
    assert!(!book.removed);
}

#[test]
fn test_parse_empty_sections() {
    let book = parse_record("Untitled;;;;;0;", 1).unwrap();
    assert_eq!(book.title, "Untitled");
    assert!(book.subtitle.is_empty());
    assert!(book.authors.is_empty());
    assert!(book.categories.is_empty());
}

#[test]
fn test_parse_missing_section() {
    let err = parse_record("Title;Sub;Author;Pub;Loc;1999", 7).unwrap_err();
    match err {
        BookdexError::InvalidRecord { line, .. } => assert_eq!(line, 7),
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_parse_bad_year() {
    let err = parse_record("T;;A;P;L;19x9;", 3).unwrap_err();
    assert!(matches!(err, BookdexError::InvalidRecord { line: 3, .. }));
}

#[test]
fn test_parse_negative_year() {
    let book = parse_record("Odyssey;;Homer;;;-700;epic", 1).unwrap();
    assert_eq!(book.year, -700);
}

#[test]
fn test_parse_authors_skips_blank_names() {
    let authors = parse_authors("  Ursula  K. Le Guin ,, ,Gene Wolfe").unwrap();
    assert_eq!(authors.len(), 2);
    assert_eq!(authors[0].names().len(), 4);
    assert_eq!(authors[0].to_string(), "Ursula K. Le Guin");
    assert_eq!(authors[1].to_string(), "Gene Wolfe");
}

#[test]
fn test_parse_list_drops_empty_items() {
    let items = parse_list(",a,,b,", ',').unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0], "a");
    assert_eq!(items[1], "b");
}

// =============================================================================
// Author Tests
// =============================================================================

#[test]
fn test_author_name_forms() {
    let authors = parse_authors("John Ronald Tolkien").unwrap();
    let author = &authors[0];
    assert_eq!(author.first_name().unwrap(), "John");
    assert_eq!(author.last_name().unwrap(), "Tolkien");
    assert_eq!(author.full_name().unwrap(), "John Ronald Tolkien");
    assert_eq!(author.by_last_name().unwrap(), "Tolkien, John Ronald");
}

#[test]
fn test_single_name_author() {
    let authors = parse_authors("Homer").unwrap();
    let author = &authors[0];
    assert_eq!(author.full_name().unwrap(), "Homer");
    assert_eq!(author.by_last_name().unwrap(), "Homer,");
}

// =============================================================================
// Write Tests
// =============================================================================

#[test]
fn test_write_record_round_trips() {
    let line = "Good Omens;;Terry Pratchett,Neil Gaiman;Gollancz;Shelf B;1990;fantasy,comedy";
    let book = parse_record(line, 1).unwrap();
    let mut out = Vec::new();
    write_record(&book, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", line));
}

#[test]
fn test_write_record_skips_removed() {
    let mut book = Book::builder("Gone").year(1).build().unwrap();
    book.removed = true;
    let mut out = Vec::new();
    write_record(&book, &mut out).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_write_card() {
    let book = Book::builder("Dune")
        .subtitle("Book One")
        .authors("Frank Herbert")
        .publisher("Chilton")
        .location("Shelf A")
        .year(1965)
        .category("scifi")
        .category("classic")
        .build()
        .unwrap();
    let mut out = Vec::new();
    book.write_card(&mut out).unwrap();
    let expected = "    Title: Dune
 Subtitle: Book One
Author(s): Frank Herbert
Publisher: Chilton
     Year: 1965
 Location: Shelf A
Categories: scifi, classic
";
    assert_eq!(String::from_utf8(out).unwrap(), expected);
}

#[test]
fn test_write_card_without_categories() {
    let book = Book::builder("Solo").year(2000).build().unwrap();
    let mut out = Vec::new();
    book.write_card(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.ends_with(" Location: \n"));
    assert!(!text.contains("Categories"));
}

// =============================================================================
// Search Area Tests
// =============================================================================

#[test]
fn test_search_area_names() {
    assert_eq!(SearchArea::parse("t"), Some(SearchArea::Title));
    assert_eq!(SearchArea::parse("lastname"), Some(SearchArea::AuthorByLastName));
    assert_eq!(SearchArea::parse("lc"), Some(SearchArea::Location));
    assert_eq!(SearchArea::parse("years"), None);

    let parsed: Result<SearchArea, _> = "shelf".parse();
    assert!(matches!(parsed, Err(BookdexError::UnknownArea(name)) if name == "shelf"));
}

#[test]
fn test_search_area_labels() {
    assert_eq!(SearchArea::AuthorByLastName.label(), "authors");
    assert_eq!(SearchArea::Year.heading(), "Years");
    assert_eq!(SearchArea::ALL.len(), 10);
}
