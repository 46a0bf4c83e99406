//! Touch input handling
//!
//! A raw `(x, y, pressed)` sample per cycle goes through edge detection
//! to become a discrete event, then through priority-ordered rectangle
//! hit-testing against the active screen's zone table to become an
//! action.

pub mod dispatch;
pub mod event;
pub mod zones;

pub use dispatch::{resolve, Action, DispatchCtx};
pub use event::{TouchEvent, TouchSample, TouchTracker};
pub use zones::{zones_for, Zone, ZoneAction, POWER_ZONE};
