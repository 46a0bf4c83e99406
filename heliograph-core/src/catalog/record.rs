//! Catalog record parsing
//!
//! One record per line: `functionName,protocolId,device,subdevice,function`.
//! The subdevice is `-1` when the protocol has none. Parsing is
//! skip-and-continue: a malformed line yields `None` and the rest of the
//! file still loads.

/// A parsed catalog row, fields still raw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawRecord<'a> {
    /// Vendor function spelling, not yet normalized
    pub function_name: &'a str,
    /// Catalog protocol id (0 = NEC1, 1 = NEC2, ...)
    pub protocol_id: i32,
    /// Device (address) code
    pub device: i32,
    /// Subdevice code, -1 if not supplied
    pub subdevice: i32,
    /// Function (command) code
    pub function: i32,
}

impl<'a> RawRecord<'a> {
    /// Parse one catalog line.
    ///
    /// Returns `None` for blank lines, comments (`#` or `/` prefixed),
    /// and lines whose five fields do not all resolve.
    pub fn parse(line: &'a str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('/') {
            return None;
        }

        let mut fields = line.split(',');
        let function_name = fields.next()?.trim();
        if function_name.is_empty() {
            return None;
        }
        let protocol_id = fields.next()?.trim().parse().ok()?;
        let device = fields.next()?.trim().parse().ok()?;
        let subdevice = fields.next()?.trim().parse().ok()?;
        let function = fields.next()?.trim().parse().ok()?;

        Some(Self {
            function_name,
            protocol_id,
            device,
            subdevice,
            function,
        })
    }
}
