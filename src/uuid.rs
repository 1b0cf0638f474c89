//! Canonical UUID form and the wire/text codecs.
//!
//! Bluetooth carries a UUID on the wire in one of three widths: 2, 4, or
//! 16 bytes, little-endian. Every 128-bit UUID assembled from the Bluetooth
//! base template shares a fixed 12-byte tail, so the three widths can spell
//! the same logical identifier. Both decoders reduce such spellings to the
//! minimal width, which makes canonical values directly comparable and
//! usable as registry keys.

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use crate::error::{CodecError, ValidationError};

/// Fixed tail (big-endian bytes 4..16) of the Bluetooth base UUID
/// `00000000-0000-1000-8000-00805f9b34fb`.
pub const BASE_UUID_TAIL: [u8; 12] = [
    0x00, 0x00, 0x10, 0x00, 0x80, 0x00, 0x00, 0x80, 0x5F, 0x9B, 0x34, 0xFB,
];

/// Shape every accepted textual UUID must match; `X` marks a hex digit.
const TEXT_TEMPLATE: &[u8] = b"XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX";

/// Minimal width of a canonical UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UuidWidth {
    /// 16-bit short form (assigned numbers)
    Uuid16,
    /// 32-bit form
    Uuid32,
    /// Full 128-bit form
    Uuid128,
}

impl UuidWidth {
    /// Number of significant bytes at this width.
    pub const fn bytes(self) -> usize {
        match self {
            UuidWidth::Uuid16 => 2,
            UuidWidth::Uuid32 => 4,
            UuidWidth::Uuid128 => 16,
        }
    }

    fn from_wire_len(len: usize) -> Result<Self, CodecError> {
        match len {
            2 => Ok(UuidWidth::Uuid16),
            4 => Ok(UuidWidth::Uuid32),
            16 => Ok(UuidWidth::Uuid128),
            width => Err(CodecError::InvalidWidth { width }),
        }
    }
}

/// A UUID reduced to its minimal width, stored big-endian.
///
/// Values of this type are always fully reduced: a 128-bit UUID whose tail
/// matches [`BASE_UUID_TAIL`] cannot escape the constructors at width 16,
/// and a 32-bit value that fits in 16 bits cannot escape at width 4.
/// Equality and hashing therefore agree with logical identity across wire
/// spellings.
///
/// # Example
///
/// ```
/// use btuuid::{CanonicalUuid, UuidWidth};
///
/// // 2-byte wire field, little-endian on the wire.
/// let uuid = CanonicalUuid::from_wire(&[0x00, 0x28])?;
/// assert_eq!(uuid.width(), UuidWidth::Uuid16);
/// assert_eq!(uuid.short_value(), Some(0x2800));
/// assert_eq!(uuid.to_string(), "2800");
/// # Ok::<(), btuuid::CodecError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanonicalUuid {
    width: UuidWidth,
    /// Big-endian; only the first `width.bytes()` bytes are significant,
    /// the remainder is kept zeroed so the derived Eq/Hash are exact.
    data: [u8; 16],
}

impl CanonicalUuid {
    /// Decode a little-endian wire field.
    ///
    /// The slice length is the wire width and must be 2, 4, or 16 bytes;
    /// anything else is [`CodecError::InvalidWidth`]. Base-template
    /// spellings are reduced to their minimal width.
    ///
    /// # Example
    ///
    /// ```
    /// use btuuid::{CanonicalUuid, UuidWidth};
    ///
    /// // 0x0000180f as a 4-byte wire field reduces to the 16-bit form.
    /// let uuid = CanonicalUuid::from_wire(&[0x0f, 0x18, 0x00, 0x00])?;
    /// assert_eq!(uuid.width(), UuidWidth::Uuid16);
    /// assert_eq!(uuid.short_value(), Some(0x180f));
    /// # Ok::<(), btuuid::CodecError>(())
    /// ```
    pub fn from_wire(wire: &[u8]) -> Result<Self, CodecError> {
        let width = UuidWidth::from_wire_len(wire.len())?;
        let mut data = [0u8; 16];
        for (i, byte) in wire.iter().enumerate() {
            data[wire.len() - 1 - i] = *byte;
        }
        Ok(Self { width, data }.reduce())
    }

    /// Apply the base-template reductions.
    ///
    /// A 128-bit UUID whose tail equals the base template collapses to
    /// 32-bit, and a 32-bit value whose top two bytes are zero collapses
    /// to 16-bit. Both the wire and the text decoder funnel through here,
    /// so equivalent spellings always produce identical canonical values.
    /// The dropped bytes are exactly the base template, which
    /// [`expand`](Self::expand) re-inserts.
    fn reduce(mut self) -> Self {
        if self.width == UuidWidth::Uuid128 && self.data[4..] == BASE_UUID_TAIL {
            self.width = UuidWidth::Uuid32;
            self.data[4..].fill(0);
        }
        if self.width == UuidWidth::Uuid32 && self.data[0] == 0 && self.data[1] == 0 {
            self.width = UuidWidth::Uuid16;
            self.data[0] = self.data[2];
            self.data[1] = self.data[3];
            self.data[2] = 0;
            self.data[3] = 0;
        }
        self
    }

    /// Minimal width of this UUID.
    pub fn width(&self) -> UuidWidth {
        self.width
    }

    /// The significant bytes, big-endian.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.width.bytes()]
    }

    /// The 16-bit numeric value, present iff this UUID reduced to the
    /// short form. This is the key into the assigned-numbers tables.
    pub fn short_value(&self) -> Option<u16> {
        match self.width {
            UuidWidth::Uuid16 => Some(u16::from_be_bytes([self.data[0], self.data[1]])),
            _ => None,
        }
    }

    /// Re-insert the base template and return the full 128-bit big-endian
    /// form. Inverse of the reductions applied by the decoders.
    ///
    /// # Example
    ///
    /// ```
    /// use btuuid::CanonicalUuid;
    ///
    /// let uuid: CanonicalUuid = "180f".parse()?;
    /// let full = CanonicalUuid::from_wire(&{
    ///     let mut wire = uuid.expand();
    ///     wire.reverse();
    ///     wire
    /// })?;
    /// assert_eq!(full, uuid);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn expand(&self) -> [u8; 16] {
        let mut full = [0u8; 16];
        match self.width {
            UuidWidth::Uuid16 => {
                full[2] = self.data[0];
                full[3] = self.data[1];
                full[4..].copy_from_slice(&BASE_UUID_TAIL);
            }
            UuidWidth::Uuid32 => {
                full[..4].copy_from_slice(&self.data[..4]);
                full[4..].copy_from_slice(&BASE_UUID_TAIL);
            }
            UuidWidth::Uuid128 => full = self.data,
        }
        full
    }

    /// Little-endian wire bytes at this UUID's own width. Inverse of
    /// [`from_wire`](Self::from_wire).
    pub fn to_wire(&self) -> SmallVec<[u8; 16]> {
        self.as_bytes().iter().rev().copied().collect()
    }
}

/// The normalized textual form: 4 or 8 lowercase hex digits for the short
/// widths, the hyphenated 8-4-4-4-12 grouping for 128-bit. Registry keys
/// are stored in exactly this form.
impl fmt::Display for CanonicalUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.as_bytes().iter().enumerate() {
            if self.width == UuidWidth::Uuid128 && matches!(i, 4 | 6 | 8 | 10) {
                f.write_str("-")?;
            }
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

fn hex_val(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        // Callers only pass bytes already matched against TEXT_TEMPLATE.
        _ => 0,
    }
}

impl FromStr for CanonicalUuid {
    type Err = ValidationError;

    /// Parse a user-supplied textual UUID.
    ///
    /// Surrounding whitespace is trimmed; the remainder must be exactly 4
    /// or 8 hex digits, or the 36-character hyphenated form. Hex digits
    /// are case-insensitive. The same reductions as the wire decoder
    /// apply, so `"0000180f-0000-1000-8000-00805f9b34fb"` parses equal to
    /// `"180f"`.
    fn from_str(s: &str) -> Result<Self, ValidationError> {
        let s = s.trim();
        let len = s.len();
        if len != 4 && len != 8 && len != TEXT_TEMPLATE.len() {
            return Err(ValidationError::MalformedIdentifier);
        }

        for (expected, byte) in TEXT_TEMPLATE.iter().zip(s.bytes()) {
            let ok = match expected {
                b'X' => byte.is_ascii_hexdigit(),
                _ => byte == *expected,
            };
            if !ok {
                return Err(ValidationError::MalformedIdentifier);
            }
        }

        let width = match len {
            4 => UuidWidth::Uuid16,
            8 => UuidWidth::Uuid32,
            _ => UuidWidth::Uuid128,
        };

        let nibbles: SmallVec<[u8; 32]> = s
            .bytes()
            .filter(|byte| *byte != b'-')
            .map(hex_val)
            .collect();
        let mut data = [0u8; 16];
        for i in 0..width.bytes() {
            data[i] = nibbles[2 * i] << 4 | nibbles[2 * i + 1];
        }

        Ok(Self { width, data }.reduce())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire128(short: u16) -> [u8; 16] {
        // Little-endian wire spelling of 0000xxxx-0000-1000-8000-00805f9b34fb
        let mut wire = [0u8; 16];
        let mut tail = BASE_UUID_TAIL;
        tail.reverse();
        wire[..12].copy_from_slice(&tail);
        wire[12] = (short & 0xff) as u8;
        wire[13] = (short >> 8) as u8;
        wire
    }

    // ========== from_wire tests ==========

    #[test]
    fn test_from_wire_16bit() {
        let uuid = CanonicalUuid::from_wire(&[0x00, 0x28]).unwrap();
        assert_eq!(uuid.width(), UuidWidth::Uuid16);
        assert_eq!(uuid.as_bytes(), &[0x28, 0x00]);
        assert_eq!(uuid.short_value(), Some(0x2800));
    }

    #[test]
    fn test_from_wire_32bit_reduces_when_high_bytes_zero() {
        let uuid = CanonicalUuid::from_wire(&[0x0f, 0x18, 0x00, 0x00]).unwrap();
        assert_eq!(uuid.width(), UuidWidth::Uuid16);
        assert_eq!(uuid.short_value(), Some(0x180f));
    }

    #[test]
    fn test_from_wire_32bit_stays_wide() {
        let uuid = CanonicalUuid::from_wire(&[0x78, 0x56, 0x34, 0x12]).unwrap();
        assert_eq!(uuid.width(), UuidWidth::Uuid32);
        assert_eq!(uuid.as_bytes(), &[0x12, 0x34, 0x56, 0x78]);
        assert_eq!(uuid.short_value(), None);
    }

    #[test]
    fn test_from_wire_128bit_base_pattern_reduces() {
        let uuid = CanonicalUuid::from_wire(&wire128(0x180f)).unwrap();
        assert_eq!(uuid.width(), UuidWidth::Uuid16);
        assert_eq!(uuid.short_value(), Some(0x180f));
    }

    #[test]
    fn test_from_wire_128bit_base_pattern_32bit_value() {
        // Base tail matches but the leading 32 bits exceed 16 bits, so the
        // value only reduces to width 4.
        let mut wire = wire128(0x180f);
        wire[14] = 0x01;
        let uuid = CanonicalUuid::from_wire(&wire).unwrap();
        assert_eq!(uuid.width(), UuidWidth::Uuid32);
        assert_eq!(uuid.as_bytes(), &[0x00, 0x01, 0x18, 0x0f]);
    }

    #[test]
    fn test_from_wire_128bit_vendor_uuid_stays_full() {
        let text = "7905f431-b5ce-4e99-a40f-4b1e122d00d0";
        let canonical: CanonicalUuid = text.parse().unwrap();
        let mut wire = canonical.expand();
        wire.reverse();
        let uuid = CanonicalUuid::from_wire(&wire).unwrap();
        assert_eq!(uuid.width(), UuidWidth::Uuid128);
        assert_eq!(uuid, canonical);
    }

    #[test]
    fn test_from_wire_rejects_bad_widths() {
        for len in [0usize, 1, 3, 5, 8, 15, 17] {
            let buf = vec![0u8; len];
            assert_eq!(
                CanonicalUuid::from_wire(&buf),
                Err(CodecError::InvalidWidth { width: len }),
                "width {len} should be rejected"
            );
        }
    }

    // ========== Display tests ==========

    #[test]
    fn test_display_forms() {
        let short = CanonicalUuid::from_wire(&[0x00, 0x28]).unwrap();
        assert_eq!(short.to_string(), "2800");

        let wide = CanonicalUuid::from_wire(&[0x78, 0x56, 0x34, 0x12]).unwrap();
        assert_eq!(wide.to_string(), "12345678");

        let full: CanonicalUuid = "7905F431-B5CE-4E99-A40F-4B1E122D00D0".parse().unwrap();
        assert_eq!(full.to_string(), "7905f431-b5ce-4e99-a40f-4b1e122d00d0");
    }

    // ========== from_str tests ==========

    #[test]
    fn test_parse_short_forms() {
        let uuid: CanonicalUuid = "180F".parse().unwrap();
        assert_eq!(uuid.short_value(), Some(0x180f));

        let uuid: CanonicalUuid = "0000180f".parse().unwrap();
        assert_eq!(uuid.width(), UuidWidth::Uuid16);
        assert_eq!(uuid.short_value(), Some(0x180f));

        let uuid: CanonicalUuid = "12345678".parse().unwrap();
        assert_eq!(uuid.width(), UuidWidth::Uuid32);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let uuid: CanonicalUuid = "  180f\t".parse().unwrap();
        assert_eq!(uuid.short_value(), Some(0x180f));
    }

    #[test]
    fn test_parse_base_pattern_reduces() {
        let uuid: CanonicalUuid = "0000180f-0000-1000-8000-00805f9b34fb".parse().unwrap();
        assert_eq!(uuid.width(), UuidWidth::Uuid16);
        assert_eq!(uuid.short_value(), Some(0x180f));
        assert_eq!(uuid.to_string(), "180f");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        let bad = [
            "",
            "12345",
            "12g4",
            "1234567-89012345-678901234567890",
            "7905f431b-5ce-4e99-a40f-4b1e122d00d0",
            "7905f431-b5ce-4e99-a40f-4b1e122d00dg",
            "1234-678",
            "0x128f",
        ];
        for input in bad {
            assert_eq!(
                input.parse::<CanonicalUuid>(),
                Err(ValidationError::MalformedIdentifier),
                "{input:?} should be rejected"
            );
        }
    }

    // ========== round-trip tests ==========

    #[test]
    fn test_wire_text_round_trip() {
        let from_wire = CanonicalUuid::from_wire(&wire128(0x2800)).unwrap();
        let reparsed: CanonicalUuid = from_wire.to_string().parse().unwrap();
        assert_eq!(reparsed, from_wire);
        assert_eq!(reparsed.width(), UuidWidth::Uuid16);
    }

    #[test]
    fn test_to_wire_round_trip() {
        for text in ["2800", "12345678", "7905f431-b5ce-4e99-a40f-4b1e122d00d0"] {
            let uuid: CanonicalUuid = text.parse().unwrap();
            let wire = uuid.to_wire();
            assert_eq!(wire.len(), uuid.width().bytes());
            assert_eq!(CanonicalUuid::from_wire(&wire).unwrap(), uuid);
        }
    }

    #[test]
    fn test_expand_reinserts_base_template() {
        let uuid: CanonicalUuid = "2800".parse().unwrap();
        let full = uuid.expand();
        assert_eq!(&full[..4], &[0x00, 0x00, 0x28, 0x00]);
        assert_eq!(&full[4..], &BASE_UUID_TAIL);

        // Expansion of a reduced value parses back to the same canonical form.
        let mut wire = full;
        wire.reverse();
        assert_eq!(CanonicalUuid::from_wire(&wire).unwrap(), uuid);
    }
}
