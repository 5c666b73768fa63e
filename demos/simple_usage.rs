/// Bookdex API Demo
///
/// Walks through catalog construction and every query:
/// - Inserting books and linking authors
/// - Registering tags and applying associations
/// - Lookups by author, tag and year
/// - Statistics

use bookdex::core::catalog::Catalog;
use bookdex::core::feed::CatalogFeed;
use bookdex::core::types::{Book, BookTagRecord, TagRecord};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("\n╔═══════════════════════════════════════════════╗");
    println!("║        Bookdex Catalog - API Demo             ║");
    println!("╚═══════════════════════════════════════════════╝\n");

    // Step 1: Create catalog
    println!("Creating catalog...");
    let mut catalog = Catalog::new();
    println!("Done!\n");

    // Step 2: TAGS - Register tags before associations reference them
    println!("Step 2: TAGS - Registering tags...");
    catalog.register_tag(TagRecord::new(11, "fantasy"));
    catalog.register_tag(TagRecord::new(12, "classics"));
    println!("  Registered {} tags\n", catalog.count_tags());

    // Step 3: INSERT - Add books and link their authors
    println!("Step 3: INSERT - Adding books...");
    let books = [
        Book::new(1, "The Hobbit", "J.R.R. Tolkien", 4.25, 1937.0),
        Book::new(2, "The Silmarillion", "J.R.R. Tolkien", 3.9, 1977.0),
        Book::new(3, "Pride and Prejudice", "Jane Austen", 4.24, 1813.0),
        Book::new(4, "Emma", "Jane Austen", 3.99, 1815.0),
    ];
    for book in books {
        let book = catalog.insert_book(book)?;
        let authors = book.authors.clone();
        catalog.insert_book_author(&authors, &book);
    }
    println!("  Inserted {} books by {} authors\n", catalog.count_books(), catalog.count_authors());

    // Step 4: ASSOCIATE - Tag books
    println!("Step 4: ASSOCIATE - Tagging books...");
    catalog.associate_book_tag(BookTagRecord::new(1, 11, 120));
    catalog.associate_book_tag(BookTagRecord::new(2, 11, 40));
    catalog.associate_book_tag(BookTagRecord::new(3, 12, 200));
    catalog.associate_book_tag(BookTagRecord::new(99, 12, 5));
    println!();

    // Step 5: QUERY - Lookups through each index
    println!("Step 5: QUERY - Reading indices...");
    if let Some(author) = catalog.author("J.R.R. Tolkien") {
        println!("  {}: {} books, average rating {:.3}", author.name, author.books.len(), author.average_rating);
    }
    if let Some(tag) = catalog.tag("classics") {
        println!("  '{}': {} associations, {} books listed, count {}", tag.name, tag.total_books, tag.books.len(), tag.count);
    }
    match catalog.books_by_year(1815) {
        Some(books) => {
            for book in books {
                println!("  1815: {}", book.title);
            }
        }
        None => println!("  1815: no books"),
    }
    println!();

    // Step 6: FEED - Load a second catalog from JSON
    println!("Step 6: FEED - Loading from JSON...");
    let feed = CatalogFeed::from_json_str(
        r#"{
            "books": [
                {"goodreads_book_id": 5, "title": "Dune", "authors": "Frank Herbert",
                 "average_rating": "4.22", "original_publication_year": "1965.0"}
            ],
            "tags": [{"tag_id": 30, "tag_name": "sci-fi"}],
            "book_tags": [{"goodreads_book_id": 5, "tag_id": 30, "count": 17}]
        }"#,
    )?;
    let loaded = Catalog::from_feed(feed)?;
    println!("  Loaded {} books, {} tags\n", loaded.count_books(), loaded.count_tags());

    // Step 7: STATS - Index statistics
    println!("Step 7: STATISTICS - Index metrics:");
    println!("  ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    let stats = catalog.stats();
    for index in &stats.indices {
        println!(
            "  {:<10} {:?} len={} capacity={} load={:.3} resizes={}",
            index.name, index.map_type, index.len, index.capacity, index.current_load, index.resizes
        );
    }

    println!("\n╔════════════════════════════════════════╗");
    println!("║    All API Operations Completed!      ║");
    println!("╚════════════════════════════════════════╝\n");

    Ok(())
}
