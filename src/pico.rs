//! Pico bindings: four GPIOs as the shared lines, the system timer as the 8-bit counter.
//!
//! See [`FlexPort`] for an example.

use defmt::info;
use embassy_rp::Peri;
use embassy_rp::gpio::{Flex, Input, Level, Pin, Pull};
use embassy_time::Instant;

use crate::button::{PolledButton, PressedTo};
use crate::charlieplex::SharedPort;
use crate::timer_config::TimerConfig;
use crate::timing::TickSource;
use crate::wiring::SharedLine;

/// The four shared lines as [`Flex`] pins, addressed through 8-bit port registers.
///
/// Bits of the direction and latch values follow [`SharedLine`]: GP1, GP2, GP4, GP5 of
/// the original board. The pins can be any Pico GPIOs.
///
/// # Example
///
/// ```rust,no_run
/// # #![no_std]
/// # #![no_main]
/// # use panic_probe as _;
/// use pair_of_dice::charlieplex::Charlieplex;
/// use pair_of_dice::pico::FlexPort;
///
/// fn example(p: embassy_rp::Peripherals) -> ! {
///     let port = FlexPort::new(p.PIN_1, p.PIN_2, p.PIN_4, p.PIN_5);
///     let mut charlieplex = Charlieplex::new(port);
///     loop {
///         charlieplex.refresh();
///     }
/// }
/// ```
pub struct FlexPort<'d> {
    lines: [(SharedLine, Flex<'d>); 4],
}

impl<'d> FlexPort<'d> {
    /// Creates a new `FlexPort`. Every line starts as an input with no pull.
    #[must_use]
    pub fn new(
        drv1: Peri<'d, impl Pin>,
        drv2: Peri<'d, impl Pin>,
        drv4: Peri<'d, impl Pin>,
        drv5: Peri<'d, impl Pin>,
    ) -> Self {
        let lines = [
            (SharedLine::Drv1, line(drv1)),
            (SharedLine::Drv2, line(drv2)),
            (SharedLine::Drv4, line(drv4)),
            (SharedLine::Drv5, line(drv5)),
        ];
        info!("FlexPort: shared lines ready");
        Self { lines }
    }
}

fn line<'d>(pin: Peri<'d, impl Pin>) -> Flex<'d> {
    let mut flex = Flex::new(pin);
    flex.set_pull(Pull::None);
    flex.set_as_input();
    flex
}

impl SharedPort for FlexPort<'_> {
    fn write_direction(&mut self, direction: u8) {
        for (shared_line, flex) in &mut self.lines {
            if direction & shared_line.bit() == 0 {
                flex.set_as_output();
            } else {
                flex.set_as_input();
            }
        }
    }

    fn write_latch(&mut self, lines: u8, levels: u8) {
        for (shared_line, flex) in &mut self.lines {
            let bit = shared_line.bit();
            if lines & bit != 0 {
                flex.set_level(Level::from(levels & bit != 0));
            }
        }
    }
}

/// The free-running 8-bit counter, taken from the 1 MHz system timer.
///
/// Counts once every `prescale` microseconds, as if the timer fed a prescaler and an
/// 8-bit register. Pair with a [`TimerConfig`] whose `counter_clock_hz` is 1 MHz.
pub struct TimerTicks {
    prescale: u64,
}

impl TimerTicks {
    /// Creates a new `TimerTicks` from `config.prescale` (a zero prescale counts as 1).
    #[must_use]
    pub fn new(config: &TimerConfig) -> Self {
        assert!(
            config.counter_clock_hz == 1_000_000,
            "TimerTicks counts the 1 MHz system timer"
        );
        let prescale = u64::from(config.prescale).max(1);
        info!("TimerTicks: 1 MHz / {}", prescale);
        Self { prescale }
    }
}

impl TickSource for TimerTicks {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "keeps the low byte of the free-running count"
    )]
    fn now(&mut self) -> u8 {
        (Instant::now().as_micros() / self.prescale) as u8
    }
}

/// Creates a [`PolledButton`] on `pin`, pulled the way `pressed_to` needs.
#[must_use]
pub fn button<'d>(pin: Peri<'d, impl Pin>, pressed_to: PressedTo) -> PolledButton<Input<'d>> {
    let pull = match pressed_to {
        PressedTo::Voltage => Pull::Down,
        PressedTo::Ground => Pull::Up,
    };
    PolledButton::new(Input::new(pin, pull), pressed_to)
}
