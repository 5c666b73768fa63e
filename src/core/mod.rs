pub mod types;
pub mod catalog;
pub mod compare;
pub mod config;
pub mod error;
pub mod feed;
pub mod shared;
pub mod stats;
