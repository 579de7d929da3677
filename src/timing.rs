//! Polled timing from a free-running 8-bit counter.
//!
//! Nothing here reads an absolute time; everything counts toggles of the counter's top
//! bit, so any counter at least 8 bits wide will do.

/// Bit of the counter whose toggles mark half periods.
pub const HALF_PERIOD_BIT: u8 = 0x80;

/// A free-running 8-bit hardware counter.
pub trait TickSource {
    /// Sample the counter.
    fn now(&mut self) -> u8;
}

impl<T: TickSource + ?Sized> TickSource for &mut T {
    fn now(&mut self) -> u8 {
        (**self).now()
    }
}

/// Detects toggles of the counter's top bit between successive samples.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HalfPeriods {
    last: u8,
}

impl HalfPeriods {
    /// Start watching from the sample `tick`.
    #[must_use]
    pub const fn new(tick: u8) -> Self {
        Self { last: tick }
    }

    /// Report whether the top bit differs from the remembered sample; if so, remember `tick`.
    pub const fn observe(&mut self, tick: u8) -> bool {
        let toggled = (tick ^ self.last) & HALF_PERIOD_BIT != 0;
        if toggled {
            self.last = tick;
        }
        toggled
    }
}

/// Busy-wait until `toggles` half periods have passed.
///
/// Used once at power-on. Counting toggles instead of wall-clock time means a slower
/// counter only stretches the wait.
pub fn settle(ticks: &mut impl TickSource, toggles: u8) {
    let mut half_periods = HalfPeriods::new(ticks.now());
    let mut remaining = toggles;
    while remaining != 0 {
        if half_periods.observe(ticks.now()) {
            remaining = remaining.saturating_sub(1);
        }
    }
}
