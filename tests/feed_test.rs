use std::io::Write;
use bookdex::core::catalog::Catalog;
use bookdex::core::error::ErrorKind;
use bookdex::core::feed::CatalogFeed;
use bookdex::core::types::{Book, BookId, BookRecord, BookTagRecord};
use tempfile::NamedTempFile;

const FEED: &str = r#"{
    "book_tags": [
        {"goodreads_book_id": 1, "tag_id": 11, "count": 3},
        {"goodreads_book_id": 2, "tag_id": 11, "count": 4},
        {"goodreads_book_id": 999, "tag_id": 11, "count": 1},
        {"goodreads_book_id": 1, "tag_id": 500, "count": 8}
    ],
    "tags": [
        {"tag_id": 11, "tag_name": "fantasy"},
        {"tag_id": 12, "tag_name": "classics"}
    ],
    "books": [
        {"goodreads_book_id": "1", "title": "A", "authors": "J.Doe",
         "average_rating": "4.0", "original_publication_year": "2001.0"},
        {"goodreads_book_id": 2, "title": "B", "authors": "J.Doe",
         "average_rating": 3.0, "original_publication_year": 2001},
        {"goodreads_book_id": 3, "title": "C", "authors": "Someone, Else",
         "average_rating": 3.5, "original_publication_year": ""}
    ]
}"#;

#[test]
fn loads_in_dependency_order() {
    let feed = CatalogFeed::from_json_str(FEED).unwrap();
    let mut catalog = Catalog::new();
    let summary = catalog.load(feed).unwrap();

    assert_eq!(summary.books, 2);
    assert_eq!(summary.rejected_books, 1);
    assert_eq!(summary.tags, 2);
    assert_eq!(summary.associations, 4);
    assert_eq!(summary.unknown_book_associations, 1);
    assert_eq!(summary.unknown_tag_associations, 1);

    assert_eq!(catalog.count_books(), 2);
    assert_eq!(catalog.count_tags(), 2);
    assert_eq!(catalog.count_authors(), 1);
    assert_eq!(catalog.author("J.Doe").unwrap().average_rating, 3.5);
    assert_eq!(catalog.books_by_year(2001).unwrap().len(), 2);

    let fantasy = catalog.tag("fantasy").unwrap();
    assert_eq!(fantasy.total_books, 3);
    assert_eq!(fantasy.count, 8.0);
    assert_eq!(fantasy.books.len(), 2);
    assert_eq!(catalog.tag("classics").unwrap().total_books, 0);
}

#[test]
fn attribution_string_is_one_author() {
    let feed = CatalogFeed::from_json_str(
        r#"{"books": [{"goodreads_book_id": 8, "title": "Good Omens",
            "authors": "Terry Pratchett, Neil Gaiman",
            "average_rating": 4.25, "original_publication_year": 1990.0}]}"#,
    )
    .unwrap();
    let catalog = Catalog::from_feed(feed).unwrap();

    assert_eq!(catalog.count_authors(), 1);
    assert!(catalog.author("Terry Pratchett, Neil Gaiman").is_some());
    assert!(catalog.author("Neil Gaiman").is_none());
}

#[test]
fn loads_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(FEED.as_bytes()).unwrap();
    file.flush().unwrap();

    let feed = CatalogFeed::from_path(file.path()).unwrap();
    assert_eq!(feed.books.len(), 3);
    assert_eq!(feed.tags.len(), 2);
    assert_eq!(feed.book_tags.len(), 4);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = CatalogFeed::from_path(dir.path().join("absent.json")).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Io);
}

#[test]
fn malformed_json_is_parse_error() {
    let err = CatalogFeed::from_json_str("{\"books\": [").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Parse);
}

#[test]
fn record_conversion_validates_numbers() {
    let record = BookRecord {
        goodreads_book_id: Some(4),
        title: "D".to_string(),
        authors: "X".to_string(),
        average_rating: 3.0,
        original_publication_year: -750.0,
    };
    let book = Book::try_from(record.clone()).unwrap();
    assert_eq!(book.id, BookId(4));
    assert_eq!(book.publication_year().unwrap(), -750);

    let bad_id = BookRecord { goodreads_book_id: None, ..record.clone() };
    assert_eq!(Book::try_from(bad_id).unwrap_err().kind, ErrorKind::InvalidInput);

    let bad_year = BookRecord { original_publication_year: f64::INFINITY, ..record };
    assert_eq!(Book::try_from(bad_year).unwrap_err().kind, ErrorKind::InvalidInput);
}

#[test]
fn large_ids_stay_distinct() {
    let feed = CatalogFeed::from_json_str(
        r#"{"books": [
            {"goodreads_book_id": 9007199254740993, "title": "A", "authors": "X",
             "average_rating": 4.0, "original_publication_year": 2001},
            {"goodreads_book_id": 9007199254740992, "title": "B", "authors": "X",
             "average_rating": 4.0, "original_publication_year": 2001},
            {"goodreads_book_id": "18446744073709551615", "title": "C", "authors": "X",
             "average_rating": 4.0, "original_publication_year": 2001}
        ]}"#,
    )
    .unwrap();
    let catalog = Catalog::from_feed(feed).unwrap();

    assert_eq!(catalog.count_books(), 3);
    assert_eq!(catalog.book(BookId(9007199254740993)).unwrap().title, "A");
    assert_eq!(catalog.book(BookId(9007199254740992)).unwrap().title, "B");
    assert_eq!(catalog.book(BookId(u64::MAX)).unwrap().title, "C");
}

#[test]
fn non_integer_ids_reject_only_their_row() {
    let feed = CatalogFeed::from_json_str(
        r#"{"books": [
            {"goodreads_book_id": "4.5", "title": "A", "authors": "X",
             "average_rating": 4.0, "original_publication_year": 2001},
            {"goodreads_book_id": 4.5, "title": "B", "authors": "X",
             "average_rating": 4.0, "original_publication_year": 2001},
            {"goodreads_book_id": -3, "title": "C", "authors": "X",
             "average_rating": 4.0, "original_publication_year": 2001},
            {"goodreads_book_id": "5", "title": "D", "authors": "X",
             "average_rating": 4.0, "original_publication_year": 2001}
        ]}"#,
    )
    .unwrap();
    let mut catalog = Catalog::new();
    let summary = catalog.load(feed).unwrap();

    assert_eq!(summary.books, 1);
    assert_eq!(summary.rejected_books, 3);
    assert_eq!(catalog.book(BookId(5)).unwrap().title, "D");
}

#[test]
fn tag_rows_accept_numeric_strings() {
    let feed = CatalogFeed::from_json_str(
        r#"{
            "books": [{"goodreads_book_id": "1", "title": "A", "authors": "J.Doe",
                       "average_rating": "4.0", "original_publication_year": "2001.0"}],
            "tags": [{"tag_id": "11", "tag_name": "fantasy"}],
            "book_tags": [
                {"goodreads_book_id": "1", "tag_id": "11", "count": "3"},
                {"goodreads_book_id": " 1 ", "tag_id": 11, "count": -1}
            ]
        }"#,
    )
    .unwrap();
    assert_eq!(feed.book_tags[0], BookTagRecord::new(1, 11, 3));

    let catalog = Catalog::from_feed(feed).unwrap();
    let fantasy = catalog.tag_by_id(11).unwrap();
    assert_eq!(fantasy.name, "fantasy");
    assert_eq!(fantasy.total_books, 2);
    assert_eq!(fantasy.count, 2.0);
    assert_eq!(fantasy.books.len(), 2);
}

#[test]
fn non_integer_tag_fields_are_parse_errors() {
    let err = CatalogFeed::from_json_str(r#"{"tags": [{"tag_id": "eleven", "tag_name": "x"}]}"#)
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Parse);

    let err = CatalogFeed::from_json_str(
        r#"{"book_tags": [{"goodreads_book_id": 1, "tag_id": 11, "count": "3.5"}]}"#,
    )
    .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Parse);
}
