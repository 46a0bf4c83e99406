//! Screen enumeration

/// Screens the remote can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Boot splash, auto-advances to Main after a fixed dwell
    Splash,
    /// Paginated appliance list
    Main,
    /// Per-appliance control menu
    Device,
    /// Volume up/down sub-menu
    Volume,
    /// Channel up/down sub-menu
    Channel,
    /// Catalog load failure; exits only via a fresh load
    Error,
}

impl Screen {
    /// Whether the global power zone is live on this screen.
    pub fn power_zone_active(&self) -> bool {
        !matches!(self, Screen::Splash)
    }
}
