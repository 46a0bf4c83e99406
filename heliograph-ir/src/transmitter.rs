//! Transmit sequencing on top of the waveform primitives
//!
//! Owns the protocol repeat cadences (Sony wants every frame three times,
//! JVC wants a headerless repeat frame) and the minimum cooldown between
//! consecutive sends. Transmission is synchronous and blocking, including
//! the inter-frame gaps: the gaps are part of the protocol contract and
//! must not be shortened.

use embedded_hal::delay::DelayNs;
use heapless::String;

use crate::emitter::IrEmitter;
use crate::protocol::Protocol;

/// Minimum gap between consecutive sends, in milliseconds.
///
/// The touch layer uses the same threshold as its hold-repeat delay, so a
/// held button can never outrun the emitter.
pub const SEND_COOLDOWN_MS: u64 = 200;

/// Gap between the three Sony frames, in milliseconds.
pub const SONY_GAP_MS: u32 = 40;

/// Gap before the JVC repeat frame, in milliseconds.
pub const JVC_GAP_MS: u32 = 50;

/// Maximum retained error message length in bytes.
pub const MAX_ERROR_LEN: usize = 63;

/// Errors from a send attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SendError {
    /// [`Transmitter::begin`] has not been called
    NotInitialized,
    /// The protocol has no transmission routine
    UnknownProtocol,
}

/// IR transmitter: emitter + delay source + repeat bookkeeping.
///
/// Send failures are recorded in a retrievable last-error message and do
/// not advance the last-send timestamp, so a failed press leaves the
/// cooldown untouched.
pub struct Transmitter<E: IrEmitter, D: DelayNs> {
    emitter: E,
    delay: D,
    initialized: bool,
    last_send_ms: Option<u64>,
    last_error: String<MAX_ERROR_LEN>,
}

impl<E: IrEmitter, D: DelayNs> Transmitter<E, D> {
    /// Create a transmitter. Call [`begin`](Self::begin) before sending.
    pub fn new(emitter: E, delay: D) -> Self {
        Self {
            emitter,
            delay,
            initialized: false,
            last_send_ms: None,
            last_error: String::new(),
        }
    }

    /// Mark the emitter hardware as brought up.
    pub fn begin(&mut self) {
        self.initialized = true;
    }

    /// Send one command frame (or frame group, per protocol).
    ///
    /// Blocks for the full transmission including mandated gaps. On
    /// success the cooldown restarts from `now_ms`.
    pub fn send(&mut self, protocol: Protocol, code: u64, now_ms: u64) -> Result<(), SendError> {
        if !self.initialized {
            self.set_error("IR not initialized");
            return Err(SendError::NotInitialized);
        }

        match protocol {
            Protocol::Nec => self.emitter.nec(code as u32),
            Protocol::Samsung => self.emitter.samsung(code as u32),
            Protocol::Sony12 | Protocol::Sony15 | Protocol::Sony20 => {
                // Sony receivers ignore a lone frame; the protocol wants
                // every code sent three times.
                for i in 0..3 {
                    self.emitter.sony(code as u32, protocol.bits());
                    if i < 2 {
                        self.delay.delay_ms(SONY_GAP_MS);
                    }
                }
            }
            Protocol::Rc5 => self.emitter.rc5(code as u16),
            Protocol::Rc6 => self.emitter.rc6(code as u32, protocol.bits()),
            Protocol::Panasonic => {
                // 48-bit frame splits into a 16-bit address and 32 data bits
                let address = ((code >> 32) & 0xFFFF) as u16;
                let data = code as u32;
                self.emitter.panasonic(address, data);
            }
            Protocol::Jvc => {
                self.emitter.jvc(code as u16, false);
                self.delay.delay_ms(JVC_GAP_MS);
                self.emitter.jvc(code as u16, true);
            }
            Protocol::Sharp | Protocol::Denon | Protocol::Pronto | Protocol::Unknown => {
                self.set_error("Unknown protocol");
                return Err(SendError::UnknownProtocol);
            }
        }

        self.last_send_ms = Some(now_ms);
        Ok(())
    }

    /// Whether the inter-send cooldown has elapsed.
    pub fn can_repeat(&self, now_ms: u64) -> bool {
        match self.last_send_ms {
            None => true,
            Some(t) => now_ms.saturating_sub(t) >= SEND_COOLDOWN_MS,
        }
    }

    /// Restart the cooldown without sending.
    pub fn reset_repeat_timer(&mut self, now_ms: u64) {
        self.last_send_ms = Some(now_ms);
    }

    /// Message recorded by the most recent failure, empty if none.
    pub fn last_error(&self) -> &str {
        &self.last_error
    }

    /// Record a failure without a send attempt (e.g. command lookup miss).
    pub fn record_error(&mut self, message: &str) {
        self.set_error(message);
    }

    /// Tear down into the emitter and delay source.
    pub fn into_parts(self) -> (E, D) {
        (self.emitter, self.delay)
    }

    fn set_error(&mut self, message: &str) {
        self.last_error.clear();
        // Truncate on overflow, stopping at a character boundary.
        for ch in message.chars() {
            if self.last_error.push(ch).is_err() {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use heapless::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Emitted {
        Nec(u32),
        Samsung(u32),
        Sony(u32, u8),
        Rc5(u16),
        Rc6(u32, u8),
        Panasonic(u16, u32),
        Jvc(u16, bool),
    }

    #[derive(Default)]
    struct MockEmitter {
        calls: Vec<Emitted, 8>,
    }

    impl IrEmitter for MockEmitter {
        fn nec(&mut self, code: u32) {
            let _ = self.calls.push(Emitted::Nec(code));
        }
        fn samsung(&mut self, code: u32) {
            let _ = self.calls.push(Emitted::Samsung(code));
        }
        fn sony(&mut self, code: u32, bits: u8) {
            let _ = self.calls.push(Emitted::Sony(code, bits));
        }
        fn rc5(&mut self, code: u16) {
            let _ = self.calls.push(Emitted::Rc5(code));
        }
        fn rc6(&mut self, code: u32, bits: u8) {
            let _ = self.calls.push(Emitted::Rc6(code, bits));
        }
        fn panasonic(&mut self, address: u16, data: u32) {
            let _ = self.calls.push(Emitted::Panasonic(address, data));
        }
        fn jvc(&mut self, code: u16, repeat: bool) {
            let _ = self.calls.push(Emitted::Jvc(code, repeat));
        }
    }

    #[derive(Default)]
    struct MockDelay {
        delays_ms: Vec<u32, 8>,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            let _ = self.delays_ms.push(ns / 1_000_000);
        }
    }

    fn transmitter() -> Transmitter<MockEmitter, MockDelay> {
        let mut tx = Transmitter::new(MockEmitter::default(), MockDelay::default());
        tx.begin();
        tx
    }

    #[test]
    fn send_before_begin_fails() {
        let mut tx = Transmitter::new(MockEmitter::default(), MockDelay::default());
        assert_eq!(
            tx.send(Protocol::Nec, 0x05FA0AF5, 0),
            Err(SendError::NotInitialized)
        );
        assert_eq!(tx.last_error(), "IR not initialized");
        let (emitter, _) = tx.into_parts();
        assert!(emitter.calls.is_empty());
    }

    #[test]
    fn nec_sends_once() {
        let mut tx = transmitter();
        tx.send(Protocol::Nec, 0x05FA0AF5, 100).unwrap();
        let (emitter, delay) = tx.into_parts();
        assert_eq!(emitter.calls.as_slice(), &[Emitted::Nec(0x05FA0AF5)]);
        assert!(delay.delays_ms.is_empty());
    }

    #[test]
    fn sony_sends_three_frames_with_gaps() {
        let mut tx = transmitter();
        tx.send(Protocol::Sony12, 0x095, 100).unwrap();
        let (emitter, delay) = tx.into_parts();
        assert_eq!(
            emitter.calls.as_slice(),
            &[
                Emitted::Sony(0x095, 12),
                Emitted::Sony(0x095, 12),
                Emitted::Sony(0x095, 12),
            ]
        );
        assert_eq!(delay.delays_ms.as_slice(), &[SONY_GAP_MS, SONY_GAP_MS]);
    }

    #[test]
    fn sony_bits_follow_variant() {
        let mut tx = transmitter();
        tx.send(Protocol::Sony20, 0x12345, 100).unwrap();
        let (emitter, _) = tx.into_parts();
        assert_eq!(emitter.calls[0], Emitted::Sony(0x12345, 20));
    }

    #[test]
    fn jvc_repeats_without_header() {
        let mut tx = transmitter();
        tx.send(Protocol::Jvc, 0x30CD, 100).unwrap();
        let (emitter, delay) = tx.into_parts();
        assert_eq!(
            emitter.calls.as_slice(),
            &[Emitted::Jvc(0x30CD, false), Emitted::Jvc(0x30CD, true)]
        );
        assert_eq!(delay.delays_ms.as_slice(), &[JVC_GAP_MS]);
    }

    #[test]
    fn panasonic_splits_address_and_data() {
        let mut tx = transmitter();
        let code = (0x4004u64 << 32) | 0x1234_5678;
        tx.send(Protocol::Panasonic, code, 100).unwrap();
        let (emitter, _) = tx.into_parts();
        assert_eq!(emitter.calls.as_slice(), &[Emitted::Panasonic(0x4004, 0x1234_5678)]);
    }

    #[test]
    fn panasonic_synthesized_frames_carry_the_prefix_address() {
        let mut tx = transmitter();
        let code = Protocol::Panasonic.encode(0xA0, 0x02, 0x3D);
        tx.send(Protocol::Panasonic, code, 100).unwrap();
        let (emitter, _) = tx.into_parts();
        assert_eq!(
            emitter.calls.as_slice(),
            &[Emitted::Panasonic(0x4004, (0xA0 << 24) | (0x02 << 16) | (0x3D << 8))]
        );
    }

    #[test]
    fn error_truncates_at_char_boundary() {
        let mut tx = transmitter();
        // 62 ASCII bytes, then a 2-byte char straddling the 63-byte cap.
        let mut message: String<80> = String::new();
        for _ in 0..62 {
            message.push('x').unwrap();
        }
        message.push('é').unwrap();
        tx.record_error(&message);
        assert_eq!(tx.last_error().len(), 62);
        assert!(tx.last_error().chars().all(|c| c == 'x'));
    }

    #[test]
    fn unknown_protocol_fails_without_emitting() {
        let mut tx = transmitter();
        assert_eq!(
            tx.send(Protocol::Sharp, 0x30009, 100),
            Err(SendError::UnknownProtocol)
        );
        assert_eq!(tx.last_error(), "Unknown protocol");
        // Failure leaves the cooldown untouched
        assert!(tx.can_repeat(100));
        let (emitter, _) = tx.into_parts();
        assert!(emitter.calls.is_empty());
    }

    #[test]
    fn cooldown_is_monotonic_around_threshold() {
        let mut tx = transmitter();
        assert!(tx.can_repeat(0));
        tx.send(Protocol::Rc5, 0x100C, 1_000).unwrap();
        assert!(!tx.can_repeat(1_000));
        assert!(!tx.can_repeat(1_000 + SEND_COOLDOWN_MS - 1));
        assert!(tx.can_repeat(1_000 + SEND_COOLDOWN_MS));
        assert!(tx.can_repeat(1_000 + SEND_COOLDOWN_MS + 1));
    }

    #[test]
    fn reset_repeat_timer_restarts_cooldown() {
        let mut tx = transmitter();
        tx.send(Protocol::Rc6, 0x070D, 1_000).unwrap();
        tx.reset_repeat_timer(1_500);
        assert!(!tx.can_repeat(1_600));
        assert!(tx.can_repeat(1_500 + SEND_COOLDOWN_MS));
    }
}
