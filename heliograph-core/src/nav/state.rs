//! Navigation state
//!
//! The history is deliberately a single slot, not a stack: returning
//! twice in a row toggles between the last two screens. That matches the
//! shipped behavior and the sub-menus are only ever one level deep.

use heapless::String;

use super::screen::Screen;
use crate::config::{MAX_ERROR_LEN, SPLASH_DURATION_MS};
use crate::device::bounded;

/// Navigation state machine.
#[derive(Debug, Clone)]
pub struct Nav {
    current: Screen,
    previous: Screen,
    selected: Option<usize>,
    page: u8,
    entered_at_ms: u64,
    needs_redraw: bool,
    error: String<MAX_ERROR_LEN>,
}

impl Nav {
    /// Start on the splash screen at `now_ms`.
    pub fn new(now_ms: u64) -> Self {
        Self {
            current: Screen::Splash,
            previous: Screen::Splash,
            selected: None,
            page: 0,
            entered_at_ms: now_ms,
            needs_redraw: true,
            error: String::new(),
        }
    }

    /// Screen currently shown.
    pub fn current(&self) -> Screen {
        self.current
    }

    /// The single-slot history.
    pub fn previous(&self) -> Screen {
        self.previous
    }

    /// Selected appliance index, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Current main-menu page.
    pub fn page(&self) -> u8 {
        self.page
    }

    /// Message for the error screen, empty if none.
    pub fn error_message(&self) -> &str {
        &self.error
    }

    /// Enter a screen, pushing the current one into the history slot.
    pub fn set_screen(&mut self, screen: Screen, now_ms: u64) {
        self.previous = self.current;
        self.current = screen;
        self.enter(now_ms);
    }

    /// Swap current and previous screen (single-slot back).
    pub fn go_back(&mut self, now_ms: u64) {
        core::mem::swap(&mut self.current, &mut self.previous);
        self.enter(now_ms);
    }

    /// Whether the splash dwell has elapsed.
    pub fn splash_done(&self, now_ms: u64) -> bool {
        self.current == Screen::Splash
            && now_ms.saturating_sub(self.entered_at_ms) > SPLASH_DURATION_MS
    }

    /// Select an appliance; out-of-range indices are ignored.
    pub fn select_device(&mut self, index: usize, count: usize) {
        if index < count {
            self.selected = Some(index);
        }
    }

    /// Advance a page, clamped to the last one.
    pub fn next_page(&mut self, total_pages: u8) {
        if self.page + 1 < total_pages {
            self.page += 1;
            self.needs_redraw = true;
        }
    }

    /// Go back a page, clamped to the first one.
    pub fn prev_page(&mut self) {
        if self.page > 0 {
            self.page -= 1;
            self.needs_redraw = true;
        }
    }

    /// Drop the selection and return to the first page (catalog reload).
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.page = 0;
        self.needs_redraw = true;
    }

    /// Route to the error screen with a (truncated) message.
    pub fn fail(&mut self, message: &str, now_ms: u64) {
        self.error = bounded(message);
        self.set_screen(Screen::Error, now_ms);
    }

    /// Force a redraw on the next render pass.
    pub fn mark_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Return and clear the redraw flag.
    pub fn take_redraw(&mut self) -> bool {
        let needed = self.needs_redraw;
        self.needs_redraw = false;
        needed
    }

    fn enter(&mut self, now_ms: u64) {
        self.entered_at_ms = now_ms;
        self.needs_redraw = true;
    }
}
