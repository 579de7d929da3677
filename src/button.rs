//! A polled, debounced button on the SW1 line.
//!
//! See [`PolledButton`] for usage example.

use embedded_hal::digital::InputPin;

use crate::{Error, Result};

// ============================================================================
// Constants
// ============================================================================

/// Half periods the raw level must hold before a change is reported (about 16 ms).
pub const DEBOUNCE_HALF_PERIODS: u8 = 2;

// ============================================================================
// PressedTo - How the button is wired
// ============================================================================

/// Describes how the button is physically wired.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressedTo {
    /// Button connects pin to voltage (3.3V) when pressed.
    /// Use a pull-down resistor. Pin reads HIGH when pressed.
    ///
    /// Note: The original Pico 2 (RP2350) has a known silicon bug with pull-down resistors
    /// that can cause pins to stay HIGH after button release. Use Ground instead.
    Voltage,

    /// Button connects pin to ground (GND) when pressed.
    /// Use a pull-up resistor. Pin reads LOW when pressed.
    Ground,
}

// ============================================================================
// ButtonEvent - Debounced edges
// ============================================================================

/// A debounced change of the button state.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// The button went down.
    Pressed,
    /// The button came back up.
    Released,
}

// ============================================================================
// PolledButton
// ============================================================================

/// A button read from the polling loop, debounced against counter half periods.
///
/// The firmware never blocks, so instead of waiting, [`poll`](Self::poll) is called on
/// every loop iteration with whether a half period just ended. A new raw level must hold
/// for [`DEBOUNCE_HALF_PERIODS`] toggles before it is reported.
///
/// # Example
///
/// ```rust,no_run
/// use embedded_hal::digital::InputPin;
/// use pair_of_dice::button::{ButtonEvent, PolledButton, PressedTo};
/// use pair_of_dice::timing::{HalfPeriods, TickSource};
///
/// fn example(pin: impl InputPin, mut ticks: impl TickSource) -> pair_of_dice::Result<()> {
///     let mut button = PolledButton::new(pin, PressedTo::Ground);
///     let mut half_periods = HalfPeriods::new(ticks.now());
///     loop {
///         let toggled = half_periods.observe(ticks.now());
///         if button.poll(toggled)? == Some(ButtonEvent::Pressed) {
///             return Ok(());
///         }
///     }
/// }
/// ```
pub struct PolledButton<I> {
    input: I,
    pressed_to: PressedTo,
    pressed: bool,
    candidate: bool,
    stable_for: u8,
}

impl<I: InputPin> PolledButton<I> {
    /// Creates a new `PolledButton`, assumed released.
    #[must_use]
    pub const fn new(input: I, pressed_to: PressedTo) -> Self {
        Self {
            input,
            pressed_to,
            pressed: false,
            candidate: false,
            stable_for: 0,
        }
    }

    /// Reads whether the button is down right now, without debouncing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ButtonRead`] if the pin cannot be read.
    pub fn is_pressed_raw(&mut self) -> Result<bool> {
        let high = self.input.is_high().map_err(|_| Error::ButtonRead)?;
        Ok(match self.pressed_to {
            PressedTo::Voltage => high,
            PressedTo::Ground => !high,
        })
    }

    /// The debounced state.
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Sample the pin and report a debounced edge, if one completed.
    ///
    /// `half_period_ended` should be `true` on iterations where the counter's top bit toggled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ButtonRead`] if the pin cannot be read.
    pub fn poll(&mut self, half_period_ended: bool) -> Result<Option<ButtonEvent>> {
        let raw = self.is_pressed_raw()?;
        if raw != self.candidate {
            // otherwise it was bounce; start over
            self.candidate = raw;
            self.stable_for = 0;
            return Ok(None);
        }
        if !half_period_ended || self.candidate == self.pressed {
            return Ok(None);
        }
        self.stable_for = self.stable_for.saturating_add(1);
        if self.stable_for < DEBOUNCE_HALF_PERIODS {
            return Ok(None);
        }
        self.pressed = self.candidate;
        self.stable_for = 0;
        Ok(Some(if self.pressed {
            ButtonEvent::Pressed
        } else {
            ButtonEvent::Released
        }))
    }
}
