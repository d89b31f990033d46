//! Digit positions and selection
//!
//! The display has four digit positions. Exactly one is enabled at a time;
//! [`DigitSelector`] tracks which one and moves it with wraparound.

/// Number of digit positions on the display
pub const DIGIT_COUNT: usize = 4;

/// One of the four digit positions, leftmost first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Digit {
    #[default]
    Digit1 = 0,
    Digit2 = 1,
    Digit3 = 2,
    Digit4 = 3,
}

impl Digit {
    /// All positions, leftmost first
    pub const ALL: [Digit; DIGIT_COUNT] = [
        Digit::Digit1,
        Digit::Digit2,
        Digit::Digit3,
        Digit::Digit4,
    ];

    /// Zero-based index of this position
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Position from a zero-based index
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Digit::Digit1),
            1 => Some(Digit::Digit2),
            2 => Some(Digit::Digit3),
            3 => Some(Digit::Digit4),
            _ => None,
        }
    }

    /// Position from its one-based label (1..=4)
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1..=4 => Self::from_index(number as usize - 1),
            _ => None,
        }
    }

    /// One-based label
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// One-hot enable mask for this position
    pub const fn mask(self) -> DigitMask {
        DigitMask(1 << self as u8)
    }

    /// Neighbor to the left, wrapping from the leftmost to the rightmost
    pub const fn left(self) -> Self {
        match self {
            Digit::Digit1 => Digit::Digit4,
            Digit::Digit2 => Digit::Digit1,
            Digit::Digit3 => Digit::Digit2,
            Digit::Digit4 => Digit::Digit3,
        }
    }

    /// Neighbor to the right, wrapping from the rightmost to the leftmost
    pub const fn right(self) -> Self {
        match self {
            Digit::Digit1 => Digit::Digit2,
            Digit::Digit2 => Digit::Digit3,
            Digit::Digit3 => Digit::Digit4,
            Digit::Digit4 => Digit::Digit1,
        }
    }
}

/// One-hot mask over the digit enable lines
///
/// Bit `n` enables position `n`. Only [`Digit::mask`] builds one, so a mask
/// always has exactly one bit set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitMask(u8);

impl DigitMask {
    /// Mask covering every enable line
    pub const ALL_LINES: u8 = (1 << DIGIT_COUNT) - 1;

    /// Raw mask bits
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// The position this mask enables
    pub const fn digit(self) -> Digit {
        match self.0 {
            0b0001 => Digit::Digit1,
            0b0010 => Digit::Digit2,
            0b0100 => Digit::Digit3,
            _ => Digit::Digit4,
        }
    }
}

impl From<Digit> for DigitMask {
    fn from(digit: Digit) -> Self {
        digit.mask()
    }
}

/// Direction to move the enabled digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShiftDirection {
    Left,
    Right,
}

/// Tracks the enabled digit position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DigitSelector {
    position: Digit,
}

impl DigitSelector {
    /// Create a selector starting at `position`
    pub const fn new(position: Digit) -> Self {
        Self { position }
    }

    /// Current position
    pub const fn position(&self) -> Digit {
        self.position
    }

    /// Enable mask for the current position
    pub const fn current(&self) -> DigitMask {
        self.position.mask()
    }

    /// Move one position left, wrapping Digit1 -> Digit4
    pub fn shift_left(&mut self) -> DigitMask {
        self.position = self.position.left();
        self.current()
    }

    /// Move one position right, wrapping Digit4 -> Digit1
    pub fn shift_right(&mut self) -> DigitMask {
        self.position = self.position.right();
        self.current()
    }

    /// Move in the given direction
    pub fn shift(&mut self, direction: ShiftDirection) -> DigitMask {
        match direction {
            ShiftDirection::Left => self.shift_left(),
            ShiftDirection::Right => self.shift_right(),
        }
    }
}
