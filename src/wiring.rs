//! Compile-time description of how the eight LED positions hang off the four shared lines.
//!
//! See [`PhaseTable`] and the board table [`PAIR_OF_DICE`].

use crate::led_mask::{LED_COUNT, LedMask};
use crate::{Error, Result};

/// Number of multiplex phases; one per LED position.
pub const PHASE_COUNT: usize = LED_COUNT as usize;

/// Port bits of every shared line (GP1, GP2, GP4, GP5).
pub const SHARED_LINES: u8 = SharedLine::Drv1.bit()
    | SharedLine::Drv2.bit()
    | SharedLine::Drv4.bit()
    | SharedLine::Drv5.bit();

/// One of the four shared drive lines.
///
/// The discriminant is the line's bit position in the 8-bit port register.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SharedLine {
    /// GP1, through 100 Ω to the centre pips.
    Drv1 = 1,
    /// GP2, through 75 Ω.
    Drv2 = 2,
    /// GP4, through 75 Ω.
    Drv4 = 4,
    /// GP5, through 75 Ω.
    Drv5 = 5,
}

impl SharedLine {
    /// All shared lines, in port bit order.
    pub const ALL: [Self; 4] = [Self::Drv1, Self::Drv2, Self::Drv4, Self::Drv5];

    /// Single-bit port mask for this line.
    #[must_use]
    pub const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// The wiring serviced by one phase: which mask bit it tests and which two lines it drives.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhaseWiring {
    /// LED position (mask bit) lit by this phase.
    pub mask_bit: u8,
    /// Line driven to logic 1 (LED anode side).
    pub high: SharedLine,
    /// Line driven to logic 0 (LED cathode side).
    pub low: SharedLine,
}

impl PhaseWiring {
    /// Describe one phase.
    #[must_use]
    pub const fn new(mask_bit: u8, high: SharedLine, low: SharedLine) -> Self {
        Self {
            mask_bit,
            high,
            low,
        }
    }

    /// Port bits of both lines this phase turns into outputs.
    #[must_use]
    pub const fn lines(self) -> u8 {
        self.high.bit() | self.low.bit()
    }
}

/// Phase-indexed wiring table for a charlieplexed board.
///
/// Entry *p* is the wiring serviced during phase *p*. The table is configuration data
/// taken from the board schematic; it cannot be derived.
///
/// ## Validation
///
/// [`PhaseTable::new`] is `const` and, when used in a `const`, rejects bad tables at
/// **compile time**; [`PhaseTable::try_new`] performs the same checks at run time:
/// - each phase drives two different lines
/// - mask bits are in `0..8` and each appears exactly once
/// - no two phases drive the same (high, low) pair
///
/// # Example
///
/// ```rust
/// use pair_of_dice::wiring::{PAIR_OF_DICE, SharedLine};
///
/// let phase_0 = PAIR_OF_DICE.phase(0);
/// assert_eq!(phase_0.mask_bit, 0);
/// assert_eq!((phase_0.high, phase_0.low), (SharedLine::Drv2, SharedLine::Drv1));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PhaseTable {
    entries: [PhaseWiring; PHASE_COUNT],
}

impl PhaseTable {
    /// Constructor: panics if the table fails any check listed on [`PhaseTable`].
    ///
    /// # Panics
    ///
    /// Panics (at compile time in a `const`) on an invalid table.
    #[must_use]
    pub const fn new(entries: [PhaseWiring; PHASE_COUNT]) -> Self {
        match validate(&entries) {
            Ok(()) => Self { entries },
            Err(Error::SameHighAndLow { .. }) => panic!("phase drives one line both high and low"),
            Err(Error::MaskBitOutOfRange { .. }) => panic!("mask bit out of range"),
            Err(Error::DuplicateMaskBit { .. }) => panic!("duplicate mask bit in wiring table"),
            Err(_) => panic!("duplicate (high, low) pair in wiring table"),
        }
    }

    /// Fallible constructor with the same checks as [`PhaseTable::new`].
    ///
    /// # Errors
    ///
    /// Returns the first fault found, tagged with its phase.
    pub const fn try_new(entries: [PhaseWiring; PHASE_COUNT]) -> Result<Self> {
        match validate(&entries) {
            Ok(()) => Ok(Self { entries }),
            Err(err) => Err(err),
        }
    }

    /// Wiring for `phase`. Phases wrap modulo [`PHASE_COUNT`].
    #[must_use]
    pub const fn phase(&self, phase: u8) -> PhaseWiring {
        self.entries[phase as usize % PHASE_COUNT]
    }

    /// All entries, phase order.
    #[must_use]
    pub const fn entries(&self) -> &[PhaseWiring; PHASE_COUNT] {
        &self.entries
    }

    /// LED positions conducting for a given pair of port registers.
    ///
    /// `direction` uses set bits for inputs; `latch` holds output levels. An LED conducts
    /// when its high line is an output at 1 and its low line an output at 0.
    #[must_use]
    pub const fn lit_by(&self, direction: u8, latch: u8) -> LedMask {
        let mut lit = LedMask::EMPTY;
        let mut index = 0;
        while index < PHASE_COUNT {
            let wiring = self.entries[index];
            let outputs = !direction;
            if outputs & wiring.lines() == wiring.lines()
                && latch & wiring.high.bit() != 0
                && latch & wiring.low.bit() == 0
            {
                lit = lit.with(wiring.mask_bit);
            }
            index += 1;
        }
        lit
    }
}

const fn validate(entries: &[PhaseWiring; PHASE_COUNT]) -> Result<()> {
    let mut seen_bits = 0u8;
    let mut index = 0;
    while index < PHASE_COUNT {
        let wiring = entries[index];
        #[expect(clippy::cast_possible_truncation, reason = "index < PHASE_COUNT")]
        let phase = index as u8;
        if wiring.high as u8 == wiring.low as u8 {
            return Err(Error::SameHighAndLow { phase });
        }
        if wiring.mask_bit >= LED_COUNT {
            return Err(Error::MaskBitOutOfRange { phase });
        }
        let bit = 1u8 << wiring.mask_bit;
        if seen_bits & bit != 0 {
            return Err(Error::DuplicateMaskBit { phase });
        }
        seen_bits |= bit;

        let mut earlier = 0;
        while earlier < index {
            let other = entries[earlier];
            if other.high as u8 == wiring.high as u8 && other.low as u8 == wiring.low as u8 {
                return Err(Error::DuplicateLinePair { phase });
            }
            earlier += 1;
        }
        index += 1;
    }
    Ok(())
}

/// Wiring of the pair-of-dice board.
///
/// ```text
///     (D1.2a)        (D1.3b)    (D2.2a)        (D2.3b)
///     (D1.4a) (D1.1) (D1.4b)    (D2.4a) (D2.1) (D2.4b)
///     (D1.3a)        (D1.2b)    (D2.3a)        (D2.2b)
/// ```
///
/// Positions 0..=3 are die 1 (D1.1..D1.4), 4..=7 are die 2 (D2.1..D2.4). The "a"/"b"
/// LEDs of a position are in series and light together.
pub const PAIR_OF_DICE: PhaseTable = PhaseTable::new([
    PhaseWiring::new(0, SharedLine::Drv2, SharedLine::Drv1), // D1.1
    PhaseWiring::new(1, SharedLine::Drv4, SharedLine::Drv2), // D1.2
    PhaseWiring::new(2, SharedLine::Drv2, SharedLine::Drv4), // D1.3
    PhaseWiring::new(3, SharedLine::Drv5, SharedLine::Drv4), // D1.4
    PhaseWiring::new(4, SharedLine::Drv1, SharedLine::Drv2), // D2.1
    PhaseWiring::new(5, SharedLine::Drv4, SharedLine::Drv5), // D2.2
    PhaseWiring::new(6, SharedLine::Drv2, SharedLine::Drv5), // D2.3
    PhaseWiring::new(7, SharedLine::Drv5, SharedLine::Drv2), // D2.4
]);
