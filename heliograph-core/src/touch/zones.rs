//! Screen zone tables
//!
//! Static rectangle-to-action bindings for the 320x240 landscape layout.
//! Containment is half-open: a point on the far edge is outside. Within a
//! screen the declared order is the hit-test priority; the global power
//! zone outranks every table and is live on all screens except Splash.

use super::event::TouchEvent;
use crate::nav::Screen;

/// What a zone does when hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ZoneAction {
    /// Appliance row `n` on the current main-menu page
    DeviceRow(u8),
    /// Next main-menu page
    NextPage,
    /// Previous main-menu page
    PrevPage,
    /// Enter the volume sub-menu
    OpenVolume,
    /// Enter the channel sub-menu
    OpenChannel,
    /// Send the `input` command
    Input,
    /// Return to the previous screen
    Back,
    /// Send `volUp`
    VolumeUp,
    /// Send `volDown`
    VolumeDown,
    /// Send `chUp`
    ChannelUp,
    /// Send `chDown`
    ChannelDown,
    /// Send `power` (global zone)
    Power,
}

/// One rectangle-to-action binding.
#[derive(Debug, Clone, Copy)]
pub struct Zone {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub action: ZoneAction,
    /// Whether the zone also fires on `Hold` (auto-repeat while held)
    pub hold_repeats: bool,
}

impl Zone {
    /// Zone that fires on `Tap` only.
    pub const fn tap(x: i32, y: i32, w: i32, h: i32, action: ZoneAction) -> Self {
        Self {
            x,
            y,
            w,
            h,
            action,
            hold_repeats: false,
        }
    }

    /// Zone that fires on `Tap` and repeats on `Hold`.
    pub const fn repeating(x: i32, y: i32, w: i32, h: i32, action: ZoneAction) -> Self {
        Self {
            x,
            y,
            w,
            h,
            action,
            hold_repeats: true,
        }
    }

    /// Half-open containment: `x in [zx, zx+zw)`, `y in [zy, zy+zh)`.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }

    /// Whether this zone reacts to the given event.
    pub fn accepts(&self, event: TouchEvent) -> bool {
        match event {
            TouchEvent::Tap => true,
            TouchEvent::Hold => self.hold_repeats,
            TouchEvent::None | TouchEvent::Release => false,
        }
    }
}

/// Global power zone, top-right corner, live on every screen but Splash.
pub const POWER_ZONE: Zone = Zone::tap(240, 10, 70, 30, ZoneAction::Power);

/// Main menu: four appliance rows plus the pagination pair.
static MAIN_ZONES: &[Zone] = &[
    Zone::tap(20, 60, 200, 30, ZoneAction::DeviceRow(0)),
    Zone::tap(20, 100, 200, 30, ZoneAction::DeviceRow(1)),
    Zone::tap(20, 140, 200, 30, ZoneAction::DeviceRow(2)),
    Zone::tap(20, 180, 200, 30, ZoneAction::DeviceRow(3)),
    Zone::tap(220, 60, 80, 30, ZoneAction::NextPage),
    Zone::tap(220, 100, 80, 30, ZoneAction::PrevPage),
];

/// Device menu: volume/channel/input rows and the back button.
static DEVICE_ZONES: &[Zone] = &[
    Zone::tap(20, 60, 120, 30, ZoneAction::OpenVolume),
    Zone::tap(20, 100, 120, 30, ZoneAction::OpenChannel),
    Zone::tap(20, 140, 120, 30, ZoneAction::Input),
    Zone::tap(240, 220, 70, 20, ZoneAction::Back),
];

/// Volume menu: adjust rows repeat while held, back is tap-only.
static VOLUME_ZONES: &[Zone] = &[
    Zone::repeating(20, 60, 120, 30, ZoneAction::VolumeUp),
    Zone::repeating(20, 100, 120, 30, ZoneAction::VolumeDown),
    Zone::tap(240, 220, 70, 20, ZoneAction::Back),
];

/// Channel menu: same layout as volume.
static CHANNEL_ZONES: &[Zone] = &[
    Zone::repeating(20, 60, 120, 30, ZoneAction::ChannelUp),
    Zone::repeating(20, 100, 120, 30, ZoneAction::ChannelDown),
    Zone::tap(240, 220, 70, 20, ZoneAction::Back),
];

/// Zone table for a screen. Splash and Error have no zones of their own.
pub fn zones_for(screen: Screen) -> &'static [Zone] {
    match screen {
        Screen::Main => MAIN_ZONES,
        Screen::Device => DEVICE_ZONES,
        Screen::Volume => VOLUME_ZONES,
        Screen::Channel => CHANNEL_ZONES,
        Screen::Splash | Screen::Error => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn containment_is_half_open() {
        let zone = Zone::tap(20, 60, 200, 30, ZoneAction::DeviceRow(0));
        // Near corner is inside
        assert!(zone.contains(20, 60));
        // Far edges are outside
        assert!(!zone.contains(220, 60));
        assert!(!zone.contains(20, 90));
        // Last interior point
        assert!(zone.contains(219, 89));
        assert!(!zone.contains(19, 60));
    }

    #[test]
    fn repeat_zones_accept_hold() {
        let up = &VOLUME_ZONES[0];
        assert!(up.accepts(TouchEvent::Tap));
        assert!(up.accepts(TouchEvent::Hold));
        assert!(!up.accepts(TouchEvent::Release));

        let back = &VOLUME_ZONES[2];
        assert!(back.accepts(TouchEvent::Tap));
        assert!(!back.accepts(TouchEvent::Hold));
    }

    #[test]
    fn splash_and_error_have_no_tables() {
        assert!(zones_for(Screen::Splash).is_empty());
        assert!(zones_for(Screen::Error).is_empty());
        assert!(!zones_for(Screen::Main).is_empty());
    }

    #[test]
    fn power_zone_skips_splash_only() {
        assert!(!Screen::Splash.power_zone_active());
        assert!(Screen::Main.power_zone_active());
        assert!(Screen::Error.power_zone_active());
    }

    proptest! {
        /// Containment holds exactly on the half-open rectangle.
        #[test]
        fn containment_matches_half_open_ranges(x in 0i32..340, y in 0i32..260) {
            let zone = POWER_ZONE;
            let inside = (zone.x..zone.x + zone.w).contains(&x)
                && (zone.y..zone.y + zone.h).contains(&y);
            prop_assert_eq!(zone.contains(x, y), inside);
        }
    }
}
