//! Coach Manager Core Library
//!
//! Client-side behavioral layer for server-rendered pages:
//! - Responsive navigation panel + overlay state machine
//! - Timed removal of transient flash messages
//! - Theme preference, required-field gating and small time helpers
//!
//! The host document and the preference store are abstracted through traits,
//! so the same controllers drive an in-memory document in tests and a
//! terminal host in `coach-manager-tui`.

pub mod adapters;
pub mod config;
pub mod error;
pub mod runtime;
pub mod services;
pub mod surface;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::ControllerConfig;
pub use error::{CoreError, CoreResult};
pub use services::PageController;
pub use surface::CoachManager;
pub use traits::{Document, PreferenceStore};
