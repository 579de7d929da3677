//! A device abstraction that multiplexes eight LED positions over four shared lines.
//!
//! See [`Charlieplex`] for the refresh sequence and a usage example.

use crate::led_mask::LedMask;
use crate::wiring::{PAIR_OF_DICE, PHASE_COUNT, PhaseTable, SHARED_LINES};

/// Direction register value with every line a high-impedance input.
pub const ALL_INPUTS: u8 = 0xFF;

/// Register-level access to the 8-bit port carrying the shared lines.
///
/// Writes only; the direction register may be unreadable on some parts, which is why
/// [`Charlieplex`] keeps a shadow copy.
pub trait SharedPort {
    /// Write the whole direction register. A set bit makes that line a high-impedance input;
    /// a clear bit makes it an output.
    fn write_direction(&mut self, direction: u8);

    /// Write output latch levels for the lines in `lines`, leaving the other lines' latches alone.
    fn write_latch(&mut self, lines: u8, levels: u8);
}

impl<P: SharedPort + ?Sized> SharedPort for &mut P {
    fn write_direction(&mut self, direction: u8) {
        (**self).write_direction(direction);
    }

    fn write_latch(&mut self, lines: u8, levels: u8) {
        (**self).write_latch(lines, levels);
    }
}

/// Counts the multiplex phases down: 7, 6, … 1, 0, 7, …
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhaseCounter {
    // Always in 1..=PHASE_COUNT; the next phase is one less.
    next: u8,
}

impl PhaseCounter {
    #[expect(clippy::cast_possible_truncation, reason = "PHASE_COUNT is 8")]
    const CEILING: u8 = PHASE_COUNT as u8;

    /// A counter whose first [`advance`](Self::advance) yields phase 7.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next: Self::CEILING,
        }
    }

    /// Move to the next phase and return it. Returning phase 0 resets the counter to its ceiling.
    pub const fn advance(&mut self) -> u8 {
        let phase = self.next.saturating_sub(1);
        self.next = if phase == 0 { Self::CEILING } else { phase };
        phase
    }

    /// The phase the next [`advance`](Self::advance) returns.
    #[must_use]
    pub const fn upcoming(&self) -> u8 {
        self.next.saturating_sub(1)
    }
}

impl Default for PhaseCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// A device abstraction for eight charlieplexed LED positions.
///
/// `Charlieplex` owns the driver state: the port, the LED mask, the phase counter, and a
/// shadow of the port's direction register. Every direction change updates the shadow and
/// then the register, with nothing in between.
///
/// # Refresh sequence
///
/// Each [`refresh`](Self::refresh) services one phase:
///
/// 1. advance the phase counter (7, 6, … 0, then around again);
/// 2. look up the phase's mask bit and (high, low) line pair;
/// 3. make all four shared lines inputs, lit or not;
/// 4. if the mask bit is set, write the latch (low line 0, high line 1) and only then
///    turn those two lines into outputs, so each line carries its level the instant it drives.
///
/// At most two lines are ever outputs, and always exactly two or none.
///
/// # Example
///
/// ```rust,no_run
/// use pair_of_dice::charlieplex::{Charlieplex, SharedPort};
/// use pair_of_dice::led_mask::LedMask;
///
/// fn example(port: impl SharedPort) -> ! {
///     let mut charlieplex = Charlieplex::new(port);
///     charlieplex.set_mask(LedMask::new(0b0000_0101));
///     loop {
///         charlieplex.refresh(); // call as often as possible
///     }
/// }
/// ```
pub struct Charlieplex<P> {
    port: P,
    table: PhaseTable,
    mask: LedMask,
    phase: PhaseCounter,
    direction: u8,
}

impl<P: SharedPort> Charlieplex<P> {
    /// Take over `port` with the [`PAIR_OF_DICE`] wiring.
    ///
    /// See [`Charlieplex::with_table`].
    #[must_use]
    pub fn new(port: P) -> Self {
        Self::with_table(port, PAIR_OF_DICE)
    }

    /// Take over `port` with a custom wiring table.
    ///
    /// Drives every shared latch low and makes every line an input. The mask starts empty.
    #[must_use]
    pub fn with_table(mut port: P, table: PhaseTable) -> Self {
        port.write_latch(SHARED_LINES, 0);
        port.write_direction(ALL_INPUTS);
        Self {
            port,
            table,
            mask: LedMask::EMPTY,
            phase: PhaseCounter::new(),
            direction: ALL_INPUTS,
        }
    }

    /// Service the next phase.
    ///
    /// Never blocks and may be called back to back. See the [struct-level docs](Self)
    /// for the sequence.
    pub fn refresh(&mut self) {
        let wiring = self.table.phase(self.phase.advance());
        let lit = self.mask.is_lit(wiring.mask_bit);

        self.release();

        if lit {
            let lines = wiring.lines();
            self.port.write_latch(lines, wiring.high.bit());
            self.direction &= !lines;
            self.port.write_direction(self.direction);
        }
    }

    /// Make every shared line a high-impedance input.
    pub fn release(&mut self) {
        self.direction |= SHARED_LINES;
        self.port.write_direction(self.direction);
    }

    /// The LED mask the driver is showing.
    #[must_use]
    pub const fn mask(&self) -> LedMask {
        self.mask
    }

    /// Replace the LED mask. Takes effect from the next [`refresh`](Self::refresh).
    pub const fn set_mask(&mut self, mask: LedMask) {
        self.mask = mask;
    }

    /// Shadow of the port direction register (set bit = input).
    #[must_use]
    pub const fn direction(&self) -> u8 {
        self.direction
    }

    /// The phase the next [`refresh`](Self::refresh) will service.
    #[must_use]
    pub const fn upcoming_phase(&self) -> u8 {
        self.phase.upcoming()
    }

    /// The wiring table in use.
    #[must_use]
    pub const fn table(&self) -> &PhaseTable {
        &self.table
    }

    /// Borrow the port, e.g. to inspect a test double.
    #[must_use]
    pub const fn port(&self) -> &P {
        &self.port
    }
}
