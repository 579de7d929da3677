//! Timer-derived constants: the power-on settle delay and the animation step delay.
//!
//! This file uses nothing outside `core`, not even feature-gated derives: `build.rs`
//! includes it to flag an out-of-range built-in configuration while building, and build
//! scripts see the package features but not its dependencies.

/// Which bound a computed settle delay was clamped to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Clamp {
    /// The delay computed below one toggle and was raised to 1.
    TooShort,
    /// The delay computed above 255 toggles (or had a zero divisor) and was lowered to 255.
    TooLong,
}

impl Clamp {
    /// Short description for log lines.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TooShort => "too short",
            Self::TooLong => "too long",
        }
    }
}

/// Power-on settle delay in half-period toggles, with any clamp applied.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SettleDelay {
    /// Toggles to wait, always in `1..=255`.
    pub toggles: u8,
    /// Set when the computed value was out of range.
    pub clamp: Option<Clamp>,
}

/// Timer rates and delays the firmware is built with.
///
/// The free-running 8-bit counter advances once every `prescale` cycles of
/// `counter_clock_hz`; its top bit toggles every `counts_per_half_period` counts.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TimerConfig {
    /// Clock feeding the prescaler, in Hz.
    pub counter_clock_hz: u32,
    /// Clock cycles per counter increment.
    pub prescale: u32,
    /// Counter increments between top-bit toggles (128 for an 8-bit counter).
    pub counts_per_half_period: u32,
    /// The settle delay lasts `1 / settle_hz` seconds.
    pub settle_hz: u32,
    /// Toggles between walking-light steps.
    pub step_delay: u8,
}

impl TimerConfig {
    /// 1 MHz counter clock, prescale 64: one toggle every 8.192 ms, a half-second
    /// settle, and a walking-light step about every 0.52 s.
    pub const DEFAULT: Self = Self {
        counter_clock_hz: 1_000_000,
        prescale: 64,
        counts_per_half_period: 128,
        settle_hz: 2,
        step_delay: 64,
    };

    /// Toggles to wait after power-on, clamped into `1..=255`.
    ///
    /// Out-of-range configurations are clamped rather than rejected; check
    /// [`SettleDelay::clamp`] to report them.
    #[must_use]
    pub const fn settle_delay(&self) -> SettleDelay {
        let per_toggle = (self.settle_hz as u64)
            .saturating_mul(self.counts_per_half_period as u64)
            .saturating_mul(self.prescale as u64);
        let Some(toggles) = (self.counter_clock_hz as u64).checked_div(per_toggle) else {
            return SettleDelay {
                toggles: u8::MAX,
                clamp: Some(Clamp::TooLong),
            };
        };
        if toggles > u8::MAX as u64 {
            SettleDelay {
                toggles: u8::MAX,
                clamp: Some(Clamp::TooLong),
            }
        } else if toggles < 1 {
            SettleDelay {
                toggles: 1,
                clamp: Some(Clamp::TooShort),
            }
        } else {
            SettleDelay {
                toggles: toggles as u8,
                clamp: None,
            }
        }
    }

    /// Toggles between walking-light steps; a zero step delay counts as 1.
    #[must_use]
    pub const fn step_toggles(&self) -> u8 {
        if self.step_delay == 0 {
            1
        } else {
            self.step_delay
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
