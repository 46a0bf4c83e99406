//! Board-agnostic application logic for the Heliograph IR remote
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Catalog loading and function-name normalization
//! - The appliance/command data model
//! - Navigation state machine (screens, paging, single-slot history)
//! - Touch event classification and zone dispatch
//! - The controller tying everything to the transmitter
//!
//! Hardware (display, touch panel, IR LED, storage medium) is reached
//! through traits, so the whole crate builds and tests on the host.

#![no_std]
#![deny(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod controller;
pub mod device;
pub mod nav;
pub mod touch;
pub mod traits;
