//! Host adapters
//!
//! - `MemoryDocument`: arena-backed document tree
//! - `PageBuilder`: standard page skeleton (panel, overlay, messages, forms)

mod memory_document;
mod page_builder;

pub use memory_document::MemoryDocument;
pub use page_builder::{PageBuilder, PageElements};
