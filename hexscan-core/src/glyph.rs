//! Seven-segment glyph table
//!
//! Patterns use one bit per segment, segment `g` in bit 0 up to segment `a`
//! in bit 6. Bit 7 is unused. A set bit means the segment is lit; the bus
//! driver handles the wire polarity.
//!
//! ```text
//!    aaa
//!   f   b
//!   f   b
//!    ggg
//!   e   c
//!   e   c
//!    ddd
//! ```

/// Number of meaningful bits in a pattern
pub const SEGMENT_COUNT: u8 = 7;

/// A single display segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Segment {
    G = 0,
    F = 1,
    E = 2,
    D = 3,
    C = 4,
    B = 5,
    A = 6,
}

/// Lit-segment pattern for one digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentPattern(u8);

impl SegmentPattern {
    /// Mask covering the seven segment bits
    pub const MASK: u8 = 0x7F;

    /// All segments off
    pub const BLANK: Self = Self(0);

    /// Build a pattern from raw bits; bit 7 is discarded
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::MASK)
    }

    /// Raw pattern bits (segment on = 1)
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Bits as driven onto an active-low (common-anode) bus
    pub const fn active_low(self) -> u8 {
        !self.0 & Self::MASK
    }

    /// Bit at `index` (0..7)
    pub const fn bit(self, index: u8) -> bool {
        (self.0 >> index) & 1 != 0
    }

    /// Check whether a segment is lit
    pub const fn is_lit(self, segment: Segment) -> bool {
        self.bit(segment as u8)
    }
}

/// Hex digit glyphs, indexed by value
pub const GLYPHS: [SegmentPattern; 16] = [
    SegmentPattern(0x7E), // 0
    SegmentPattern(0x30), // 1
    SegmentPattern(0x6D), // 2
    SegmentPattern(0x79), // 3
    SegmentPattern(0x33), // 4
    SegmentPattern(0x5B), // 5
    SegmentPattern(0x5F), // 6
    SegmentPattern(0x70), // 7
    SegmentPattern(0x7F), // 8
    SegmentPattern(0x7B), // 9
    SegmentPattern(0x77), // A
    SegmentPattern(0x1F), // b
    SegmentPattern(0x4E), // C
    SegmentPattern(0x3D), // d
    SegmentPattern(0x4F), // E
    SegmentPattern(0x47), // F
];

/// Look up the glyph for a hex value
///
/// Only the low nibble of `value` is used, so every input maps to a glyph.
pub const fn encode(value: u8) -> SegmentPattern {
    GLYPHS[(value & 0x0F) as usize]
}
