#![allow(missing_docs)]
#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use defmt::{info, warn};
use embassy_executor::Spawner;
use pair_of_dice::{
    charlieplex::Charlieplex,
    pico::{FlexPort, TimerTicks},
    timer_config::TimerConfig,
    timing::{TickSource, settle},
    walking_light::WalkingLight,
};
use {defmt_rtt as _, panic_probe as _};

const TIMER_CONFIG: TimerConfig = TimerConfig::DEFAULT;

#[embassy_executor::main]
async fn main(_spawner: Spawner) -> ! {
    let p = embassy_rp::init(Default::default());
    // Everything below is polled; nothing may preempt the refresh loop.
    cortex_m::interrupt::disable();

    let mut ticks = TimerTicks::new(&TIMER_CONFIG);
    let settle_delay = TIMER_CONFIG.settle_delay();
    if let Some(clamp) = settle_delay.clamp {
        warn!(
            "settle delay {} and clamped to {} toggles",
            clamp.as_str(),
            settle_delay.toggles
        );
    }
    info!("settling for {} half periods", settle_delay.toggles);
    settle(&mut ticks, settle_delay.toggles);

    let mut charlieplex = Charlieplex::new(FlexPort::new(p.PIN_1, p.PIN_2, p.PIN_4, p.PIN_5));
    let walking_light = WalkingLight::new(&TIMER_CONFIG, ticks.now());
    info!("walking light: step every {} half periods", TIMER_CONFIG.step_toggles());
    walking_light.run(&mut charlieplex, &mut ticks)
}
