pub mod sequence;
pub mod entry;
pub mod hashing;
pub mod probing;
pub mod chaining;
pub mod hash_index;
