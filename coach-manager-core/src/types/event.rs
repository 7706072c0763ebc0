//! Host input events

use serde::Serialize;

use super::ElementId;

/// Events the host environment delivers to the page controller.
///
/// Viewport events carry no dimensions: the controller always re-queries the
/// document when it needs them, so a stale snapshot is never acted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// Click (pointer up) on an element
    Click(ElementId),
    /// Pointer down on an element
    PointerDown(ElementId),
    /// Viewport resized
    Resize,
    /// Device orientation changed (dimensions may not have settled yet)
    OrientationChange,
    /// Form submission
    Submit(ElementId),
    /// Text input on a field
    Input(ElementId),
}

/// Result of dispatching one host event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DispatchOutcome {
    /// The host must cancel the event's default action (e.g. form submission).
    pub default_prevented: bool,
}

impl DispatchOutcome {
    #[must_use]
    pub const fn prevented() -> Self {
        Self {
            default_prevented: true,
        }
    }
}
