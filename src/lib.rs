pub mod core;
pub mod index;

pub use crate::core::catalog::Catalog;
pub use crate::core::error::{Error, ErrorKind, Result};

/*
┌──────────────────────────────────────────────────────────────────────────────────┐
│                            BOOKDEX STRUCT ARCHITECTURE                           │
└──────────────────────────────────────────────────────────────────────────────────┘

┌─────────────────────────────────── CORE LAYER ───────────────────────────────────┐
│                                                                                  │
│  ┌────────────────────────────────────────────────────────────────────────────┐  │
│  │                              struct Catalog                                │  │
│  │  ┌──────────────────────────────────────────────────────────────────────┐  │  │
│  │  │ config: CatalogConfig              // Index sizes and strategies     │  │  │
│  │  │ books: Sequence<Arc<Book>>         // Every insertion, in order      │  │  │
│  │  │ book_ids: HashIndex<BookId, Arc<Book>>       // probing, 200 @ 0.4   │  │  │
│  │  │ authors: HashIndex<String, Author>           // probing, 200 @ 0.4   │  │  │
│  │  │ tags: HashIndex<String, TagSlot>             // chaining, 1000 @ 0.7 │  │  │
│  │  │ tag_ids: HashIndex<u64, TagSlot>             // chaining, 1000 @ 0.7 │  │  │
│  │  │ tag_store: Vec<Tag>                // Shared by both tag indices     │  │  │
│  │  │ years: HashIndex<i32, YearBucket>            // chaining, 500 @ 0.7  │  │  │
│  │  └──────────────────────────────────────────────────────────────────────┘  │  │
│  └────────────────────────────────────────────────────────────────────────────┘  │
│                                                                                  │
│  ┌──────────────────┐  ┌──────────────────────┐  ┌────────────────────────────┐  │
│  │ struct Book      │  │ struct Author        │  │ struct Tag                 │  │
│  │ • id: BookId     │  │ • name               │  │ • name, tag_id             │  │
│  │ • title, authors │  │ • books: Sequence    │  │ • total_books: u64         │  │
│  │ • average_rating │  │ • average_rating     │  │ • count: f64               │  │
│  │ • original_pub.. │  └──────────────────────┘  │ • books: Sequence          │  │
│  └──────────────────┘                            └────────────────────────────┘  │
│  ┌──────────────────┐  ┌──────────────────────┐  ┌────────────────────────────┐  │
│  │ struct YearBucket│  │ struct CatalogFeed   │  │ struct SharedCatalog       │  │
│  │ • year: i32      │  │ • books, tags,       │  │ • Arc<RwLock<Catalog>>     │  │
│  │ • books          │  │   book_tags          │  └────────────────────────────┘  │
│  └──────────────────┘  └──────────────────────┘                                  │
└──────────────────────────────────────────────────────────────────────────────────┘

┌───────────────────────────────── INDEXING LAYER ─────────────────────────────────┐
│                                                                                  │
│  ┌─────────────────────────┐  ┌─────────────────────────┐  ┌──────────────────┐  │
│  │ enum HashIndex          │  │ trait Map               │  │ struct Sequence  │  │
│  │ • Probing(ProbingMap)   │  │ • put / get / get_mut   │  │ • items: Vec<T>  │  │
│  │ • Chaining(ChainingMap) │  │ • contains / len        │  │ • comparator     │  │
│  └─────────────────────────┘  └─────────────────────────┘  └──────────────────┘  │
│                                                                                  │
│  ┌─────────────────────────┐  ┌─────────────────────────┐  ┌──────────────────┐  │
│  │ struct ProbingMap       │  │ struct ChainingMap      │  │ trait            │  │
│  │ • slots: Vec<Option<E>> │  │ • buckets: Vec<Seq<E>>  │  │ EntryComparator  │  │
│  │ • linear probing        │  │ • per-bucket chains     │  │ key vs. entry    │  │
│  └─────────────────────────┘  └─────────────────────────┘  └──────────────────┘  │
│                                                                                  │
│  Growth: len / capacity >= load_factor  =>  capacity = next_prime(2 * capacity)  │
└──────────────────────────────────────────────────────────────────────────────────┘
*/
