//! Waveform primitive trait for the IR LED
//!
//! Board code implements this for the actual emitter hardware (carrier
//! generation, mark/space timing). The transmitter layers repeat counts
//! and inter-frame gaps on top, so implementations emit exactly one
//! pulse train per call.

/// Per-protocol waveform primitives.
///
/// Each method blasts a single frame and returns when the pulse train is
/// complete. Implementations do not repeat frames or insert gaps; that
/// sequencing belongs to [`Transmitter`](crate::transmitter::Transmitter).
pub trait IrEmitter {
    /// NEC frame, 32 bits (also used for extended NEC).
    fn nec(&mut self, code: u32);

    /// Samsung frame, 32 bits (NEC timing, 4.5 ms header).
    fn samsung(&mut self, code: u32);

    /// Sony SIRC frame, 12/15/20 bits.
    fn sony(&mut self, code: u32, bits: u8);

    /// RC5 frame, 13 bits including the start bits.
    fn rc5(&mut self, code: u16);

    /// RC6 frame, `bits` data bits after the leader and mode field.
    fn rc6(&mut self, code: u32, bits: u8);

    /// Panasonic frame: 16-bit address followed by 32 data bits.
    fn panasonic(&mut self, address: u16, data: u32);

    /// JVC frame, 16 bits. `repeat` frames omit the header mark.
    fn jvc(&mut self, code: u16, repeat: bool);
}
