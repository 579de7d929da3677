//! Die faces on the two four-position dice, and a press-to-roll loop.
//!
//! Each die is four LED positions: its centre pip, the two diagonals, and the middle pair.
//! Die 1 uses mask bits 0..=3, die 2 bits 4..=7. See [`DieFace`] and [`RollDice`].

use embedded_hal::digital::InputPin;

use crate::button::{ButtonEvent, PolledButton};
use crate::charlieplex::{Charlieplex, SharedPort};
use crate::led_mask::LedMask;
use crate::timing::HalfPeriods;
use crate::{Error, Result};

const CENTRE: u8 = 0b0001;
const DIAGONAL_A: u8 = 0b0010;
const DIAGONAL_B: u8 = 0b0100;
const MIDDLE_PAIR: u8 = 0b1000;

/// A face of a six-sided die.
///
/// ```rust
/// use pair_of_dice::dice::DieFace;
/// use pair_of_dice::led_mask::LedMask;
///
/// let mask = LedMask::from_dice(DieFace::try_from(5)?, DieFace::One);
/// assert_eq!(mask.bits(), 0b0001_0111);
/// # Ok::<(), pair_of_dice::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DieFace {
    /// Centre pip.
    One = 1,
    /// One diagonal.
    Two,
    /// Centre and one diagonal.
    Three,
    /// Both diagonals.
    Four,
    /// Both diagonals and the centre.
    Five,
    /// Both diagonals and the middle pair.
    Six,
}

impl DieFace {
    /// Faces in pip order.
    pub const ALL: [Self; 6] = [
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
    ];

    /// Number of pips.
    #[must_use]
    pub const fn pips(self) -> u8 {
        self as u8
    }

    /// The four-bit mask for one die.
    #[must_use]
    pub const fn nibble(self) -> u8 {
        match self {
            Self::One => CENTRE,
            Self::Two => DIAGONAL_A,
            Self::Three => CENTRE | DIAGONAL_A,
            Self::Four => DIAGONAL_A | DIAGONAL_B,
            Self::Five => CENTRE | DIAGONAL_A | DIAGONAL_B,
            Self::Six => DIAGONAL_A | DIAGONAL_B | MIDDLE_PAIR,
        }
    }

    /// The next face, wrapping six back to one.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::Three,
            Self::Three => Self::Four,
            Self::Four => Self::Five,
            Self::Five => Self::Six,
            Self::Six => Self::One,
        }
    }

    /// A face picked from any byte, e.g. a counter sample.
    #[must_use]
    pub const fn from_byte(byte: u8) -> Self {
        match byte % 6 {
            0 => Self::One,
            1 => Self::Two,
            2 => Self::Three,
            3 => Self::Four,
            4 => Self::Five,
            _ => Self::Six,
        }
    }
}

impl TryFrom<u8> for DieFace {
    type Error = Error;

    fn try_from(pips: u8) -> Result<Self> {
        match pips {
            1..=6 => Ok(Self::from_byte(pips.saturating_sub(1))),
            _ => Err(Error::DieFaceOutOfRange(pips)),
        }
    }
}

impl LedMask {
    /// Show `left` on die 1 and `right` on die 2.
    #[must_use]
    pub const fn from_dice(left: DieFace, right: DieFace) -> Self {
        Self::new(left.nibble() | (right.nibble() << 4))
    }
}

/// The pair of faces on show, tumbling while a roll is in progress.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DiceRoller {
    left: DieFace,
    right: DieFace,
    rolling: bool,
}

impl DiceRoller {
    /// Show double one, not rolling.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            left: DieFace::One,
            right: DieFace::One,
            rolling: false,
        }
    }

    /// Start tumbling.
    pub const fn start(&mut self) {
        self.rolling = true;
    }

    /// Stop tumbling; the faces on show are the result.
    pub const fn stop(&mut self) {
        self.rolling = false;
    }

    /// Whether a roll is in progress.
    #[must_use]
    pub const fn is_rolling(&self) -> bool {
        self.rolling
    }

    /// Advance one loop iteration. While rolling, die 2 steps to its next face every
    /// iteration and die 1 steps once per half period, so neither face follows the counter.
    pub const fn tumble(&mut self, half_period_ended: bool) {
        if !self.rolling {
            return;
        }
        self.right = self.right.next();
        if half_period_ended {
            self.left = self.left.next();
        }
    }

    /// The faces on show.
    #[must_use]
    pub const fn faces(&self) -> (DieFace, DieFace) {
        (self.left, self.right)
    }

    /// LED mask for the faces on show.
    #[must_use]
    pub const fn mask(&self) -> LedMask {
        LedMask::from_dice(self.left, self.right)
    }
}

impl Default for DiceRoller {
    fn default() -> Self {
        Self::new()
    }
}

/// Press-to-roll loop body: hold the button to tumble both dice, release to stop.
///
/// Like [`WalkingLight`](crate::walking_light::WalkingLight), each [`poll`](Self::poll)
/// refreshes the LEDs exactly once before doing anything else.
pub struct RollDice<I> {
    half_periods: HalfPeriods,
    button: PolledButton<I>,
    roller: DiceRoller,
}

impl<I: InputPin> RollDice<I> {
    /// Start from the counter sample `tick`, showing double one.
    #[must_use]
    pub const fn new(button: PolledButton<I>, tick: u8) -> Self {
        Self {
            half_periods: HalfPeriods::new(tick),
            button,
            roller: DiceRoller::new(),
        }
    }

    /// One loop iteration. Returns the debounced button event handled, if any.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ButtonRead`] if the button pin cannot be read. The LEDs were
    /// already refreshed for this iteration.
    pub fn poll<P: SharedPort>(
        &mut self,
        charlieplex: &mut Charlieplex<P>,
        tick: u8,
    ) -> Result<Option<ButtonEvent>> {
        charlieplex.refresh();

        let toggled = self.half_periods.observe(tick);
        let event = self.button.poll(toggled)?;
        match event {
            Some(ButtonEvent::Pressed) => self.roller.start(),
            Some(ButtonEvent::Released) => self.roller.stop(),
            None => {}
        }
        self.roller.tumble(toggled);
        charlieplex.set_mask(self.roller.mask());
        Ok(event)
    }

    /// The dice state.
    #[must_use]
    pub const fn roller(&self) -> &DiceRoller {
        &self.roller
    }
}
