//! Hardware-facing traits
//!
//! These are the interfaces the core consumes; board code implements
//! them over the actual display, touch controller, and (via
//! [`heliograph_ir::IrEmitter`]) the IR LED.

use crate::device::Appliance;
use crate::nav::Screen;

/// Everything a renderer needs to redraw the current screen.
#[derive(Debug, Clone, Copy)]
pub struct ScreenView<'a> {
    /// Screen to draw
    pub screen: Screen,
    /// Selected appliance, when one is
    pub appliance: Option<&'a Appliance>,
    /// Current main-menu page
    pub page: u8,
    /// Total main-menu pages
    pub total_pages: u8,
    /// Error screen message, empty otherwise
    pub error: &'a str,
}

/// Display renderer. Called only when the view changed.
pub trait Renderer {
    fn render(&mut self, view: &ScreenView<'_>);
}

/// Touch panel, one calibrated sample per cycle.
pub trait TouchSource {
    fn sample(&mut self) -> crate::touch::TouchSample;
}
