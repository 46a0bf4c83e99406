//! Navigation state machine
//!
//! Tracks the current screen, the single-slot history, appliance
//! selection, and main-menu paging. Screen transitions mark the display
//! dirty; the renderer is only invoked when something changed.

pub mod screen;
pub mod state;

pub use screen::Screen;
pub use state::Nav;
