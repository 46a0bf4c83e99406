//! IR protocol synthesis and transmission for the Heliograph remote
//!
//! This crate owns everything that has to be bit-exact: the per-protocol
//! code synthesis used when loading catalog files, and the transmit
//! sequencing (repeat counts, inter-frame gaps, send cooldown) layered on
//! top of the raw waveform primitives.
//!
//! # Layering
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ Transmitter: repeat cadence, cooldown, error │
//! ├──────────────────────────────────────────────┤
//! │ IrEmitter: per-protocol waveform primitives  │  (hardware)
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The `IrEmitter` trait is implemented by board code driving the IR LED;
//! everything above it is pure logic and tested on the host.

#![no_std]
#![deny(unsafe_code)]

pub mod emitter;
pub mod protocol;
pub mod transmitter;

pub use emitter::IrEmitter;
pub use protocol::Protocol;
pub use transmitter::{SendError, Transmitter, SEND_COOLDOWN_MS};
