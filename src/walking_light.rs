//! The walking-light animation: one lit position stepping across all eight LEDs.
//!
//! See [`WalkingLight`].

use crate::charlieplex::{Charlieplex, SharedPort};
use crate::timer_config::TimerConfig;
use crate::timing::{HalfPeriods, TickSource};

/// Cooperative scheduler that refreshes the LEDs and, every `step_delay` half periods,
/// steps the mask with [`LedMask::step`](crate::led_mask::LedMask::step).
///
/// Two cycles interleave in one loop: the driver's 8-phase refresh on every call, and the
/// slower step countdown driven by counter toggles. A mask change lands between two
/// refreshes, so no phase is skipped or repeated.
///
/// # Example
///
/// ```rust,no_run
/// use pair_of_dice::charlieplex::{Charlieplex, SharedPort};
/// use pair_of_dice::timer_config::TimerConfig;
/// use pair_of_dice::timing::TickSource;
/// use pair_of_dice::walking_light::WalkingLight;
///
/// fn example(port: impl SharedPort, mut ticks: impl TickSource) -> ! {
///     let mut charlieplex = Charlieplex::new(port);
///     let walking_light = WalkingLight::new(&TimerConfig::DEFAULT, ticks.now());
///     walking_light.run(&mut charlieplex, &mut ticks)
/// }
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WalkingLight {
    half_periods: HalfPeriods,
    countdown: u8,
    step_delay: u8,
}

impl WalkingLight {
    /// Start the step countdown from the counter sample `tick`.
    #[must_use]
    pub const fn new(config: &TimerConfig, tick: u8) -> Self {
        let step_delay = config.step_toggles();
        Self {
            half_periods: HalfPeriods::new(tick),
            countdown: step_delay,
            step_delay,
        }
    }

    /// One loop iteration: refresh once, then count a toggle if `tick` shows one.
    ///
    /// Returns `true` when this call stepped the mask.
    pub fn poll<P: SharedPort>(&mut self, charlieplex: &mut Charlieplex<P>, tick: u8) -> bool {
        charlieplex.refresh();

        if !self.half_periods.observe(tick) {
            return false;
        }
        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown != 0 {
            return false;
        }
        charlieplex.set_mask(charlieplex.mask().step());
        self.countdown = self.step_delay;
        true
    }

    /// Half periods left before the next step.
    #[must_use]
    pub const fn countdown(&self) -> u8 {
        self.countdown
    }

    /// The process loop. Never returns.
    pub fn run<P: SharedPort>(
        mut self,
        charlieplex: &mut Charlieplex<P>,
        ticks: &mut impl TickSource,
    ) -> ! {
        loop {
            if self.poll(charlieplex, ticks.now()) {
                #[cfg(feature = "defmt")]
                defmt::debug!("walking light: mask {=u8:b}", charlieplex.mask().bits());
            }
        }
    }
}
