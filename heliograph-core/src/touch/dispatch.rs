//! Zone dispatch
//!
//! Resolves a classified touch event at a point into an action, honoring
//! the priority order: global power zone first, then the active screen's
//! table in declared order, first containing zone wins. A zone match
//! whose action is disabled in the current state (empty appliance row,
//! pagination at its end stop) is a no-op, not a fall-through.

use super::event::TouchEvent;
use super::zones::{zones_for, ZoneAction, POWER_ZONE};
use crate::config::DEVICES_PER_PAGE;
use crate::nav::Screen;

/// Dispatch-relevant state snapshot.
#[derive(Debug, Clone, Copy)]
pub struct DispatchCtx {
    pub screen: Screen,
    pub page: u8,
    pub total_pages: u8,
    pub device_count: usize,
}

/// A resolved, enabled action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Select the appliance at this repository index and open its menu
    SelectDevice(usize),
    NextPage,
    PrevPage,
    OpenVolume,
    OpenChannel,
    Back,
    /// Send the named canonical command on the selected appliance
    Send(&'static str),
    /// Send `power` on the selected appliance
    Power,
}

/// Resolve one touch event against the zone tables.
pub fn resolve(ctx: &DispatchCtx, event: TouchEvent, x: i32, y: i32) -> Option<Action> {
    if event == TouchEvent::None || event == TouchEvent::Release {
        return None;
    }

    // Global power zone outranks the screen tables and stops the search
    if ctx.screen.power_zone_active() && POWER_ZONE.contains(x, y) {
        if POWER_ZONE.accepts(event) {
            return Some(Action::Power);
        }
        return None;
    }

    let zone = zones_for(ctx.screen)
        .iter()
        .find(|zone| zone.contains(x, y))?;
    if !zone.accepts(event) {
        return None;
    }

    match zone.action {
        ZoneAction::DeviceRow(row) => {
            let index = ctx.page as usize * DEVICES_PER_PAGE + row as usize;
            (index < ctx.device_count).then_some(Action::SelectDevice(index))
        }
        ZoneAction::NextPage => (ctx.page + 1 < ctx.total_pages).then_some(Action::NextPage),
        ZoneAction::PrevPage => (ctx.page > 0).then_some(Action::PrevPage),
        ZoneAction::OpenVolume => Some(Action::OpenVolume),
        ZoneAction::OpenChannel => Some(Action::OpenChannel),
        ZoneAction::Input => Some(Action::Send("input")),
        ZoneAction::Back => Some(Action::Back),
        ZoneAction::VolumeUp => Some(Action::Send("volUp")),
        ZoneAction::VolumeDown => Some(Action::Send("volDown")),
        ZoneAction::ChannelUp => Some(Action::Send("chUp")),
        ZoneAction::ChannelDown => Some(Action::Send("chDown")),
        ZoneAction::Power => Some(Action::Power),
    }
}
