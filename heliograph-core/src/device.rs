//! Appliance and command data model
//!
//! Pure data, built once by the catalog loader and owned by the
//! controller for the rest of the session. Fixed capacities throughout;
//! oversized names are truncated, never rejected.

use heapless::{String, Vec};

use heliograph_ir::Protocol;

use crate::config::{
    DEVICES_PER_PAGE, MAX_COMMANDS, MAX_COMMAND_NAME, MAX_DEVICES, MAX_DEVICE_NAME,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Copy `text` into a bounded string, truncating at the capacity.
pub(crate) fn bounded<const N: usize>(text: &str) -> String<N> {
    let mut out = String::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

/// One named button function with its transmit code.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Command {
    /// Canonical function name (`power`, `volUp`, `"0"`..`"9"`, ...)
    pub name: String<MAX_COMMAND_NAME>,
    /// Synthesized transmit code
    pub code: u64,
    /// Encoding scheme the code belongs to
    pub protocol: Protocol,
}

impl Command {
    /// Create a command, truncating the name to its capacity.
    pub fn new(name: &str, code: u64, protocol: Protocol) -> Self {
        Self {
            name: bounded(name),
            code,
            protocol,
        }
    }
}

/// One controllable device and its command set, in catalog order.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Appliance {
    /// Display name derived from the catalog file name
    pub name: String<MAX_DEVICE_NAME>,
    /// Commands in catalog insertion order
    pub commands: Vec<Command, MAX_COMMANDS>,
}

impl Appliance {
    /// Create an empty appliance with a (truncated) display name.
    pub fn new(name: &str) -> Self {
        Self {
            name: bounded(name),
            commands: Vec::new(),
        }
    }

    /// Look up a command by exact, case-sensitive name.
    pub fn find_command(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.name.as_str() == name)
    }

    /// Add a command; silently ignored once at capacity.
    pub fn push_command(&mut self, command: Command) {
        let _ = self.commands.push(command);
    }
}

/// The loaded catalog: every appliance the remote can drive.
///
/// Built wholesale by the loader and replaced wholesale on reload.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Repository {
    appliances: Vec<Appliance, MAX_DEVICES>,
}

impl Repository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of loaded appliances.
    pub fn len(&self) -> usize {
        self.appliances.len()
    }

    /// Whether the repository holds no appliances.
    pub fn is_empty(&self) -> bool {
        self.appliances.is_empty()
    }

    /// Appliance at `index`, if loaded.
    pub fn get(&self, index: usize) -> Option<&Appliance> {
        self.appliances.get(index)
    }

    /// Whether another appliance still fits.
    pub fn has_capacity(&self) -> bool {
        self.appliances.len() < MAX_DEVICES
    }

    /// Add an appliance; silently ignored once at capacity.
    pub fn push(&mut self, appliance: Appliance) {
        let _ = self.appliances.push(appliance);
    }

    /// Main-menu page count at [`DEVICES_PER_PAGE`] rows per page.
    pub fn total_pages(&self) -> u8 {
        self.appliances.len().div_ceil(DEVICES_PER_PAGE) as u8
    }

    /// Iterate over the loaded appliances.
    pub fn iter(&self) -> impl Iterator<Item = &Appliance> {
        self.appliances.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_name_truncates() {
        let cmd = Command::new("a-very-long-function-name", 1, Protocol::Nec);
        assert_eq!(cmd.name.len(), MAX_COMMAND_NAME);
        assert_eq!(&cmd.name, "a-very-long-fun");
    }

    #[test]
    fn appliance_name_truncates() {
        let name = "living room television upstairs hallway";
        let dev = Appliance::new(name);
        assert_eq!(dev.name.len(), MAX_DEVICE_NAME);
        assert_eq!(&dev.name, &name[..MAX_DEVICE_NAME]);
    }

    #[test]
    fn find_command_is_exact_and_case_sensitive() {
        let mut dev = Appliance::new("tv");
        dev.push_command(Command::new("volUp", 10, Protocol::Nec));
        dev.push_command(Command::new("power", 1, Protocol::Nec));

        assert_eq!(dev.find_command("power").unwrap().code, 1);
        assert!(dev.find_command("POWER").is_none());
        assert!(dev.find_command("pow").is_none());
    }

    #[test]
    fn command_capacity_is_capped() {
        let mut dev = Appliance::new("tv");
        for i in 0..(MAX_COMMANDS + 3) {
            dev.push_command(Command::new("x", i as u64, Protocol::Nec));
        }
        assert_eq!(dev.commands.len(), MAX_COMMANDS);
        // Insertion order preserved for the rows that fit
        assert_eq!(dev.commands[0].code, 0);
        assert_eq!(dev.commands[MAX_COMMANDS - 1].code, (MAX_COMMANDS - 1) as u64);
    }

    #[test]
    fn page_count_rounds_up() {
        let mut repo = Repository::new();
        assert_eq!(repo.total_pages(), 0);
        for i in 0..6 {
            let mut dev = Appliance::new("dev");
            dev.push_command(Command::new("power", i, Protocol::Nec));
            repo.push(dev);
        }
        assert_eq!(repo.len(), 6);
        assert_eq!(repo.total_pages(), 2);
    }
}
