//! Shared type definitions

mod element;
mod event;
mod theme;
mod viewport;

pub use element::ElementId;
pub use event::{DispatchOutcome, HostEvent};
pub use theme::Theme;
pub use viewport::{Breakpoints, Orientation, Viewport, ViewportClass};
