pub mod rewrite;
pub use rewrite::Pagination;

pub mod serializer;
pub use serializer::{Clauses, Serializer};

pub use pagewise_core::stmt;
