#![allow(missing_docs)]
#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use core::convert::Infallible;

use defmt::{info, warn};
use embassy_executor::Spawner;
use pair_of_dice::{
    Result,
    button::{ButtonEvent, PressedTo},
    charlieplex::Charlieplex,
    dice::RollDice,
    pico::{self, FlexPort, TimerTicks},
    timer_config::TimerConfig,
    timing::{TickSource, settle},
};
use {defmt_rtt as _, panic_probe as _};

const TIMER_CONFIG: TimerConfig = TimerConfig::DEFAULT;

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(_spawner: Spawner) -> Result<Infallible> {
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
    settle(&mut ticks, settle_delay.toggles);

    let mut charlieplex = Charlieplex::new(FlexPort::new(p.PIN_1, p.PIN_2, p.PIN_4, p.PIN_5));
    let button = pico::button(p.PIN_0, PressedTo::Voltage); // SW1 pulls up to VDD
    let mut roll_dice = RollDice::new(button, ticks.now());
    info!("roll dice: hold SW1 to roll");

    loop {
        match roll_dice.poll(&mut charlieplex, ticks.now())? {
            Some(ButtonEvent::Pressed) => info!("rolling"),
            Some(ButtonEvent::Released) => {
                let (left, right) = roll_dice.roller().faces();
                info!("rolled {} and {}", left.pips(), right.pips());
            }
            None => {}
        }
    }
}
