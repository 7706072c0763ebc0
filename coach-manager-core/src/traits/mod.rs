//! Host abstraction trait definitions

mod document;
mod preference_store;

pub use document::Document;
pub use preference_store::{InMemoryPreferenceStore, PreferenceStore};
