#![cfg(feature = "host")]
//! Host-side stand-ins for the port, the counter and the button pin.

use core::cell::Cell;

use embedded_hal::digital::{Error as DigitalError, ErrorKind, ErrorType, InputPin};

use crate::charlieplex::{ALL_INPUTS, SharedPort};
use crate::led_mask::LedMask;
use crate::timing::TickSource;
use crate::wiring::{PhaseTable, SHARED_LINES};

/// One register write seen by a [`RecordingPort`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PortWrite {
    /// Whole direction register (set bit = input).
    Direction(u8),
    /// Latch levels for the lines in `lines`.
    Latch {
        /// Lines written.
        lines: u8,
        /// Levels written to those lines.
        levels: u8,
    },
}

/// Port registers as they stood after a write.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PortState {
    /// Direction register (set bit = input).
    pub direction: u8,
    /// Output latch.
    pub latch: u8,
}

impl PortState {
    /// Shared lines currently configured as outputs.
    #[must_use]
    pub const fn output_lines(self) -> u8 {
        !self.direction & SHARED_LINES
    }

    /// Number of shared lines currently outputs.
    #[must_use]
    pub const fn output_count(self) -> u32 {
        self.output_lines().count_ones()
    }
}

/// A [`SharedPort`] that records every write and the register state after it.
///
/// Starts as after reset: every line an input, latch low.
#[derive(Clone, Debug)]
pub struct RecordingPort {
    state: PortState,
    writes: Vec<PortWrite>,
    states: Vec<PortState>,
}

impl RecordingPort {
    /// A port fresh out of reset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: PortState {
                direction: ALL_INPUTS,
                latch: 0,
            },
            writes: Vec::new(),
            states: Vec::new(),
        }
    }

    /// Current register state.
    #[must_use]
    pub const fn state(&self) -> PortState {
        self.state
    }

    /// Every write so far, oldest first.
    #[must_use]
    pub fn writes(&self) -> &[PortWrite] {
        &self.writes
    }

    /// Register state after each write, parallel to [`writes`](Self::writes).
    #[must_use]
    pub fn states(&self) -> &[PortState] {
        &self.states
    }

    /// Forget the history, keeping the current register state.
    pub fn clear_history(&mut self) {
        self.writes.clear();
        self.states.clear();
    }

    /// LED positions conducting right now under `table`.
    #[must_use]
    pub const fn lit(&self, table: &PhaseTable) -> LedMask {
        table.lit_by(self.state.direction, self.state.latch)
    }

    fn record(&mut self, write: PortWrite) {
        self.writes.push(write);
        self.states.push(self.state);
    }
}

impl Default for RecordingPort {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedPort for RecordingPort {
    fn write_direction(&mut self, direction: u8) {
        self.state.direction = direction;
        self.record(PortWrite::Direction(direction));
    }

    fn write_latch(&mut self, lines: u8, levels: u8) {
        self.state.latch = (self.state.latch & !lines) | (levels & lines);
        self.record(PortWrite::Latch { lines, levels });
    }
}

/// A counter that advances by a fixed step on every sample.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SteppingTicks {
    value: u8,
    step: u8,
    samples: u32,
}

impl SteppingTicks {
    /// Start at `value`, adding `step` (wrapping) after each sample.
    ///
    /// A step of 16 toggles the top bit every 8 samples; a step of `0x80` on every sample.
    #[must_use]
    pub const fn new(value: u8, step: u8) -> Self {
        Self {
            value,
            step,
            samples: 0,
        }
    }

    /// Number of samples taken so far.
    #[must_use]
    pub const fn samples(&self) -> u32 {
        self.samples
    }
}

impl TickSource for SteppingTicks {
    fn now(&mut self) -> u8 {
        let value = self.value;
        self.value = self.value.wrapping_add(self.step);
        self.samples = self.samples.saturating_add(1);
        value
    }
}

/// Error returned by a failing [`FakePin`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FakePinError;

impl DigitalError for FakePinError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// An input pin whose level the test controls through a shared [`Cell`].
#[derive(Clone, Copy, Debug)]
pub struct FakePin<'a> {
    high: &'a Cell<bool>,
    fails: bool,
}

impl<'a> FakePin<'a> {
    /// A pin reading `high`.
    #[must_use]
    pub const fn new(high: &'a Cell<bool>) -> Self {
        Self { high, fails: false }
    }

    /// A pin whose every read fails.
    #[must_use]
    pub const fn failing(high: &'a Cell<bool>) -> Self {
        Self { high, fails: true }
    }
}

impl ErrorType for FakePin<'_> {
    type Error = FakePinError;
}

impl InputPin for FakePin<'_> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        if self.fails {
            Err(FakePinError)
        } else {
            Ok(self.high.get())
        }
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}
