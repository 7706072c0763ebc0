//! Page services
//!
//! - `navigation`: panel + overlay state machine
//! - `notification`: flash message removal sequence
//! - `scheduler`: deadline queue shared by all deferred work
//! - `page`: wires everything to a document at DOM-ready
//! - `theme_service`, `form_validation`, `search`: stateless collaborators

pub mod form_validation;
pub mod navigation;
pub mod notification;
mod page;
pub mod scheduler;
pub mod search;
pub mod theme_service;

pub use form_validation::{validate_submit, FormValidationContext, SubmitDecision};
pub use navigation::{
    ClickRegion, NavigationController, NavigationEffect, NavigationEvent, PanelState, Transition,
};
pub use notification::{NotificationLifecycleManager, NotificationPhase, NotificationRecord};
pub use page::{PageController, TimerTask};
pub use scheduler::{Due, TimerHandle, TimerQueue};
pub use search::SearchDebouncer;
pub use theme_service::ThemeService;
