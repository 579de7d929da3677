//! The 8-bit "desired lit" state for the eight LED positions.
//!
//! See [`LedMask`].

/// Number of LED positions (and multiplex phases) on the board.
pub const LED_COUNT: u8 = 8;

/// Which of the eight LED positions should be lit during their time slot.
///
/// Bit *i* set means LED position *i* is desired lit. The mask only declares desire:
/// the multiplexer still lights at most one LED at any instant.
///
/// # Example
///
/// ```rust
/// use pair_of_dice::led_mask::LedMask;
///
/// let mask = LedMask::FIRST.with(3);
/// assert!(mask.is_lit(0) && mask.is_lit(3));
/// assert_eq!(LedMask::new(0b1000_0000).step(), LedMask::FIRST);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedMask(u8);

impl LedMask {
    /// No LED desired lit.
    pub const EMPTY: Self = Self(0);

    /// Only LED position 0 desired lit.
    pub const FIRST: Self = Self(0b0000_0001);

    /// Wrap raw mask bits.
    #[must_use]
    pub const fn new(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw mask bits.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether LED `position` is desired lit. Positions at or past [`LED_COUNT`] are never lit.
    #[must_use]
    pub const fn is_lit(self, position: u8) -> bool {
        position < LED_COUNT && self.0 & (1 << position) != 0
    }

    /// This mask plus LED `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is not below [`LED_COUNT`].
    #[must_use]
    pub const fn with(self, position: u8) -> Self {
        assert!(position < LED_COUNT, "LED position out of range");
        Self(self.0 | (1 << position))
    }

    /// Whether no LED is desired lit.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// One step of the walking light: shift every bit up one position.
    ///
    /// A bit shifted out of position 7 does not wrap on its own; when the shift leaves
    /// the mask empty, position 0 is lit instead, so an animation never goes dark.
    ///
    /// ```rust
    /// use pair_of_dice::led_mask::LedMask;
    ///
    /// assert_eq!(LedMask::new(0b0000_0011).step(), LedMask::new(0b0000_0110));
    /// assert_eq!(LedMask::EMPTY.step(), LedMask::FIRST);
    /// ```
    #[must_use]
    pub const fn step(self) -> Self {
        match self.0 << 1 {
            0 => Self::FIRST,
            shifted => Self(shifted),
        }
    }
}

impl From<u8> for LedMask {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}

impl From<LedMask> for u8 {
    fn from(mask: LedMask) -> Self {
        mask.0
    }
}
