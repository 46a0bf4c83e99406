//! Main controller coordinating catalog, navigation, touch, and IR
//!
//! One explicit context object instead of globals: the controller owns
//! the repository, the navigation state, the touch tracker, and the
//! transmitter, and is handed to the board's main loop. Each cycle is
//! sample -> classify -> resolve -> apply; transmission happens inside
//! the cycle and blocks for its full protocol-mandated duration.

use embedded_hal::delay::DelayNs;

use heliograph_ir::{IrEmitter, Transmitter};

use crate::catalog::{self, CatalogError, CatalogSource};
use crate::device::Repository;
use crate::nav::{Nav, Screen};
use crate::touch::{resolve, Action, DispatchCtx, TouchSample, TouchTracker};
use crate::traits::{Renderer, ScreenView, TouchSource};

/// Application context: all core state behind one handle.
pub struct Controller<E: IrEmitter, D: DelayNs> {
    repo: Repository,
    nav: Nav,
    tracker: TouchTracker,
    tx: Transmitter<E, D>,
}

impl<E: IrEmitter, D: DelayNs> Controller<E, D> {
    /// Create the controller; call [`begin`](Self::begin) once hardware
    /// is up.
    pub fn new(emitter: E, delay: D, now_ms: u64) -> Self {
        Self {
            repo: Repository::new(),
            nav: Nav::new(now_ms),
            tracker: TouchTracker::new(),
            tx: Transmitter::new(emitter, delay),
        }
    }

    /// Mark the IR emitter initialized.
    pub fn begin(&mut self) {
        self.tx.begin();
    }

    /// Load (or reload) the catalog, wholesale.
    ///
    /// On failure the navigation routes to the error screen with the
    /// fixed message; on success after an error the main menu comes back.
    pub fn load_catalog<S: CatalogSource>(
        &mut self,
        source: &mut S,
        now_ms: u64,
    ) -> Result<usize, CatalogError> {
        match catalog::load(source) {
            Ok(repo) => {
                self.repo = repo;
                self.nav.clear_selection();
                if self.nav.current() == Screen::Error {
                    self.nav.set_screen(Screen::Main, now_ms);
                }
                self.nav.mark_redraw();
                Ok(self.repo.len())
            }
            Err(err) => {
                self.nav.fail(err.message(), now_ms);
                Err(err)
            }
        }
    }

    /// Run one cycle against this touch sample.
    ///
    /// Returns the action that was applied, if any.
    pub fn tick(&mut self, sample: TouchSample, now_ms: u64) -> Option<Action> {
        if self.nav.splash_done(now_ms) {
            self.nav.set_screen(Screen::Main, now_ms);
        }

        let event = self.tracker.update(&sample, now_ms);
        let ctx = DispatchCtx {
            screen: self.nav.current(),
            page: self.nav.page(),
            total_pages: self.repo.total_pages(),
            device_count: self.repo.len(),
        };
        let action = resolve(&ctx, event, sample.x, sample.y)?;

        match action {
            Action::SelectDevice(index) => {
                self.nav.select_device(index, self.repo.len());
                self.nav.set_screen(Screen::Device, now_ms);
            }
            Action::NextPage => self.nav.next_page(self.repo.total_pages()),
            Action::PrevPage => self.nav.prev_page(),
            Action::OpenVolume => self.nav.set_screen(Screen::Volume, now_ms),
            Action::OpenChannel => self.nav.set_screen(Screen::Channel, now_ms),
            Action::Back => self.nav.go_back(now_ms),
            Action::Send(name) => self.send_current(name, now_ms),
            Action::Power => self.send_current("power", now_ms),
        }
        Some(action)
    }

    /// Sample the touch source and run one cycle.
    pub fn poll<T: TouchSource>(&mut self, touch: &mut T, now_ms: u64) -> Option<Action> {
        let sample = touch.sample();
        self.tick(sample, now_ms)
    }

    /// Redraw through the renderer if anything changed, then clear the
    /// redraw flag.
    pub fn render_if_needed<R: Renderer>(&mut self, renderer: &mut R) {
        if !self.nav.take_redraw() {
            return;
        }
        let view = ScreenView {
            screen: self.nav.current(),
            appliance: self.nav.selected().and_then(|i| self.repo.get(i)),
            page: self.nav.page(),
            total_pages: self.repo.total_pages(),
            error: self.nav.error_message(),
        };
        renderer.render(&view);
    }

    /// The loaded catalog.
    pub fn repository(&self) -> &Repository {
        &self.repo
    }

    /// Navigation state, read-only.
    pub fn nav(&self) -> &Nav {
        &self.nav
    }

    /// The transmitter, for cooldown and error inspection.
    pub fn transmitter(&self) -> &Transmitter<E, D> {
        &self.tx
    }

    /// Tear down into the transmitter (host tests).
    pub fn into_transmitter(self) -> Transmitter<E, D> {
        self.tx
    }

    /// Send a canonical command on the selected appliance, honoring the
    /// cooldown. Failures stay on-screen; only the last-error records them.
    fn send_current(&mut self, name: &str, now_ms: u64) {
        if !self.tx.can_repeat(now_ms) {
            return;
        }
        let command = self
            .nav
            .selected()
            .and_then(|i| self.repo.get(i))
            .and_then(|dev| dev.find_command(name));
        match command {
            Some(cmd) => {
                // Errors are already recorded in the transmitter; a failed
                // press must not disturb the current screen.
                let _ = self.tx.send(cmd.protocol, cmd.code, now_ms);
            }
            None => self.tx.record_error("Command not found"),
        }
    }
}
