//! Touch event classification
//!
//! Edge detection over the per-cycle sample stream. A press edge is a
//! `Tap`; holding past the repeat threshold yields `Hold` on every
//! further cycle (the mechanism behind press-and-hold volume repeat);
//! the release edge is a single `Release`.

use crate::config::REPEAT_DELAY_MS;

/// One raw touch sample, already in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TouchSample {
    pub x: i32,
    pub y: i32,
    pub pressed: bool,
}

impl TouchSample {
    /// A released (idle) sample.
    pub const fn released() -> Self {
        Self {
            x: 0,
            y: 0,
            pressed: false,
        }
    }

    /// A pressed sample at the given point.
    pub const fn pressed(x: i32, y: i32) -> Self {
        Self { x, y, pressed: true }
    }
}

/// Discrete events derived from the sample stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TouchEvent {
    /// Nothing happened this cycle
    None,
    /// Press edge
    Tap,
    /// Still pressed past the repeat threshold
    Hold,
    /// Release edge
    Release,
}

/// Edge detector over consecutive samples.
#[derive(Debug, Clone, Default)]
pub struct TouchTracker {
    active: bool,
    pressed_at_ms: u64,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify this cycle's sample.
    pub fn update(&mut self, sample: &TouchSample, now_ms: u64) -> TouchEvent {
        match (sample.pressed, self.active) {
            (true, false) => {
                self.active = true;
                self.pressed_at_ms = now_ms;
                TouchEvent::Tap
            }
            (true, true) => {
                if now_ms.saturating_sub(self.pressed_at_ms) > REPEAT_DELAY_MS {
                    TouchEvent::Hold
                } else {
                    TouchEvent::None
                }
            }
            (false, true) => {
                self.active = false;
                TouchEvent::Release
            }
            (false, false) => TouchEvent::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_edge_is_a_single_tap() {
        let mut tracker = TouchTracker::new();
        assert_eq!(tracker.update(&TouchSample::pressed(10, 10), 0), TouchEvent::Tap);
        // Still pressed, threshold not yet reached
        assert_eq!(
            tracker.update(&TouchSample::pressed(10, 10), 50),
            TouchEvent::None
        );
    }

    #[test]
    fn holding_past_threshold_repeats_until_release() {
        let mut tracker = TouchTracker::new();
        tracker.update(&TouchSample::pressed(10, 10), 0);

        assert_eq!(
            tracker.update(&TouchSample::pressed(10, 10), REPEAT_DELAY_MS),
            TouchEvent::None
        );
        assert_eq!(
            tracker.update(&TouchSample::pressed(10, 10), REPEAT_DELAY_MS + 1),
            TouchEvent::Hold
        );
        assert_eq!(
            tracker.update(&TouchSample::pressed(10, 10), REPEAT_DELAY_MS + 100),
            TouchEvent::Hold
        );
        assert_eq!(
            tracker.update(&TouchSample::released(), REPEAT_DELAY_MS + 150),
            TouchEvent::Release
        );
        assert_eq!(
            tracker.update(&TouchSample::released(), REPEAT_DELAY_MS + 200),
            TouchEvent::None
        );
    }

    #[test]
    fn release_resets_the_hold_timer() {
        let mut tracker = TouchTracker::new();
        tracker.update(&TouchSample::pressed(10, 10), 0);
        tracker.update(&TouchSample::released(), 500);

        // A fresh press starts its own hold window
        assert_eq!(tracker.update(&TouchSample::pressed(10, 10), 600), TouchEvent::Tap);
        assert_eq!(
            tracker.update(&TouchSample::pressed(10, 10), 700),
            TouchEvent::None
        );
        assert_eq!(
            tracker.update(&TouchSample::pressed(10, 10), 600 + REPEAT_DELAY_MS + 1),
            TouchEvent::Hold
        );
    }

    #[test]
    fn idle_stream_stays_silent() {
        let mut tracker = TouchTracker::new();
        for t in 0..5u64 {
            assert_eq!(
                tracker.update(&TouchSample::released(), t * 100),
                TouchEvent::None
            );
        }
    }
}
