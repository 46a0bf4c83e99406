//! IR protocol enumeration and code synthesis
//!
//! Catalog files carry raw `(protocolId, device, subdevice, function)`
//! tuples; this module turns them into the single numeric code each
//! protocol actually transmits. The same synthesis serves the catalog
//! loader and the transmitter, so the two can never disagree.

/// Infrared encoding schemes understood by the firmware.
///
/// The last four variants are accepted by the catalog parser but have no
/// transmission routine; sending them fails with
/// [`SendError::UnknownProtocol`](crate::transmitter::SendError).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Protocol {
    /// NEC (standard or extended), also covers the NEC2 catalog variant
    Nec,
    /// Samsung (NEC timing, address byte repeated instead of inverted)
    Samsung,
    /// Sony SIRC, 12-bit frame
    Sony12,
    /// Sony SIRC, 15-bit frame
    Sony15,
    /// Sony SIRC, 20-bit frame
    Sony20,
    /// Philips RC5, 13-bit frame
    Rc5,
    /// Philips RC6, 16-bit frame
    Rc6,
    /// Panasonic/Kaseikyo, 48-bit frame
    Panasonic,
    /// JVC, 16-bit frame
    Jvc,
    /// Sharp (parsed only, no send rule)
    Sharp,
    /// Denon (parsed only, no send rule)
    Denon,
    /// Pronto hex (parsed only, no send rule)
    Pronto,
    /// Anything outside the catalog enumeration
    Unknown,
}

impl Protocol {
    /// Map a catalog protocol id to a protocol.
    ///
    /// The catalog enumeration is `0 = NEC1, 1 = NEC2, 2 = RC5, 3 = RC6,
    /// 4 = SAMSUNG, 5..=7 = SONY12/15/20, 8 = PANASONIC, 9 = JVC,
    /// 10 = SHARP, 11 = DENON, 12 = PRONTO`. NEC1 and NEC2 differ only in
    /// repeat framing, which the emitter owns, so both map to [`Protocol::Nec`].
    pub fn from_catalog_id(id: i32) -> Self {
        match id {
            0 | 1 => Protocol::Nec,
            2 => Protocol::Rc5,
            3 => Protocol::Rc6,
            4 => Protocol::Samsung,
            5 => Protocol::Sony12,
            6 => Protocol::Sony15,
            7 => Protocol::Sony20,
            8 => Protocol::Panasonic,
            9 => Protocol::Jvc,
            10 => Protocol::Sharp,
            11 => Protocol::Denon,
            12 => Protocol::Pronto,
            _ => Protocol::Unknown,
        }
    }

    /// Textual tag for display, at most 7 characters.
    pub fn tag(&self) -> &'static str {
        match self {
            Protocol::Nec => "NEC",
            Protocol::Samsung => "SAMSUNG",
            Protocol::Sony12 => "SONY12",
            Protocol::Sony15 => "SONY15",
            Protocol::Sony20 => "SONY20",
            Protocol::Rc5 => "RC5",
            Protocol::Rc6 => "RC6",
            Protocol::Panasonic => "PANASON",
            Protocol::Jvc => "JVC",
            Protocol::Sharp => "SHARP",
            Protocol::Denon => "DENON",
            Protocol::Pronto => "PRONTO",
            Protocol::Unknown => "UNKNOWN",
        }
    }

    /// Frame width in bits.
    pub fn bits(&self) -> u8 {
        match self {
            Protocol::Nec | Protocol::Samsung => 32,
            Protocol::Sony12 => 12,
            Protocol::Sony15 => 15,
            Protocol::Sony20 => 20,
            Protocol::Rc5 => 13,
            Protocol::Rc6 => 16,
            Protocol::Panasonic => 48,
            Protocol::Jvc => 16,
            Protocol::Sharp | Protocol::Denon | Protocol::Pronto | Protocol::Unknown => 32,
        }
    }

    /// Whether the transmitter has a send routine for this protocol.
    pub fn can_send(&self) -> bool {
        !matches!(
            self,
            Protocol::Sharp | Protocol::Denon | Protocol::Pronto | Protocol::Unknown
        )
    }

    /// Synthesize the transmit code from raw catalog fields.
    ///
    /// `subdevice` is `-1` when the catalog row has no subdevice; protocols
    /// that use one treat a negative value as "not supplied".
    pub fn encode(&self, device: i32, subdevice: i32, function: i32) -> u64 {
        let d = (device & 0xFF) as u64;
        let f = (function & 0xFF) as u64;

        match self {
            Protocol::Nec => {
                if subdevice >= 0 {
                    // Extended NEC: subdevice replaces the inverted address
                    let s = (subdevice & 0xFF) as u64;
                    (d << 24) | (s << 16) | (f << 8) | ((!function & 0xFF) as u64)
                } else {
                    (d << 24) | (((!device & 0xFF) as u64) << 16) | (f << 8)
                        | ((!function & 0xFF) as u64)
                }
            }
            // Samsung repeats the address byte rather than inverting it
            Protocol::Samsung => (d << 24) | (d << 16) | (f << 8) | ((!function & 0xFF) as u64),
            // Sony frames: 7-bit command in the low bits, address above it
            Protocol::Sony12 => ((function & 0x7F) as u64) | (((device & 0x1F) as u64) << 7),
            Protocol::Sony15 => ((function & 0x7F) as u64) | (((device & 0xFF) as u64) << 7),
            Protocol::Sony20 => {
                ((function & 0x7F) as u64)
                    | (((device & 0x1F) as u64) << 7)
                    | (((subdevice & 0xFF) as u64) << 12)
            }
            // RC5: two start bits + toggle + 5-bit address + 6-bit command
            Protocol::Rc5 => 0x1000 | (((device & 0x1F) as u64) << 6) | ((function & 0x3F) as u64),
            Protocol::Rc6 => (d << 8) | f,
            // Panasonic: manufacturer prefix in the upper 16 bits, then
            // device + subdevice + function. Transmission splits the frame
            // back into the prefix address and the low 32 data bits.
            Protocol::Panasonic => {
                let s = (subdevice & 0xFF) as u64;
                (0x4004 << 32) | (d << 24) | (s << 16) | (f << 8)
            }
            Protocol::Jvc => (d << 8) | f,
            // Best-effort fallback for protocols with no synthesis rule
            Protocol::Sharp | Protocol::Denon | Protocol::Pronto | Protocol::Unknown => {
                (d << 16) | f
            }
        }
    }
}
