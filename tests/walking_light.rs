#![allow(missing_docs)]
//! Host-level tests for the walking-light animation.

use pair_of_dice::charlieplex::Charlieplex;
use pair_of_dice::host::{RecordingPort, SteppingTicks};
use pair_of_dice::led_mask::LedMask;
use pair_of_dice::timer_config::TimerConfig;
use pair_of_dice::timing::TickSource;
use pair_of_dice::walking_light::WalkingLight;

#[test]
fn step_shifts_left_and_refills_bit_zero() {
    assert_eq!(LedMask::new(0b1000_0000).step(), LedMask::new(0b0000_0001));
    assert_eq!(LedMask::new(0b0000_0011).step(), LedMask::new(0b0000_0110));
    assert_eq!(LedMask::new(0b0000_0001).step(), LedMask::new(0b0000_0010));
    assert_eq!(LedMask::EMPTY.step(), LedMask::FIRST);
}

#[test]
fn walk_visits_every_position_in_order() {
    let mut mask = LedMask::FIRST;
    let mut visited = Vec::new();
    for _ in 0..9 {
        visited.push(mask.bits());
        mask = mask.step();
    }
    assert_eq!(
        visited,
        [1, 2, 4, 8, 16, 32, 64, 128, 1]
    );
}

#[test]
fn first_expiry_lights_position_zero() {
    let mut charlieplex = Charlieplex::new(RecordingPort::new());
    let config = TimerConfig {
        step_delay: 2,
        ..TimerConfig::DEFAULT
    };
    let mut walking_light = WalkingLight::new(&config, 0x00);

    assert!(!walking_light.poll(&mut charlieplex, 0x80));
    assert_eq!(charlieplex.mask(), LedMask::EMPTY);
    assert!(walking_light.poll(&mut charlieplex, 0x00));
    assert_eq!(charlieplex.mask(), LedMask::FIRST);
    assert_eq!(walking_light.countdown(), 2);
}

#[test]
fn sixty_four_toggles_step_once_without_disturbing_phases() {
    let mut charlieplex = Charlieplex::new(RecordingPort::new());
    charlieplex.set_mask(LedMask::FIRST);
    // Step 16 toggles the top bit every 8 samples.
    let mut ticks = SteppingTicks::new(0, 16);
    let mut walking_light = WalkingLight::new(&TimerConfig::DEFAULT, ticks.now());

    let mut phases = Vec::new();
    let mut steps = 0;
    let mut polls = 0;
    while steps == 0 {
        phases.push(charlieplex.upcoming_phase());
        if walking_light.poll(&mut charlieplex, ticks.now()) {
            steps += 1;
        }
        polls += 1;
    }

    assert_eq!(polls, 64 * 8);
    assert_eq!(charlieplex.mask(), LedMask::new(0b0000_0010));
    assert_eq!(walking_light.countdown(), 64);
    // The phase cycle keeps going 7, 6, … 0 straight through the step.
    for (index, phase) in phases.iter().enumerate() {
        assert_eq!(usize::from(*phase), 7 - index % 8);
    }
    assert_eq!(charlieplex.upcoming_phase(), 7);
}

#[test]
fn refresh_happens_every_poll_even_without_toggles() {
    let mut charlieplex = Charlieplex::new(RecordingPort::new());
    let mut walking_light = WalkingLight::new(&TimerConfig::DEFAULT, 0x00);
    for _ in 0..5 {
        assert!(!walking_light.poll(&mut charlieplex, 0x00));
    }
    // Two set-up writes, then one release per poll with an empty mask.
    assert_eq!(charlieplex.port().writes().len(), 2 + 5);
    assert_eq!(charlieplex.upcoming_phase(), 2);
    assert_eq!(walking_light.countdown(), 64);
}
