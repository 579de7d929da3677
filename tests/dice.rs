#![allow(missing_docs)]
//! Host-level tests for die faces and the press-to-roll loop.

use core::cell::Cell;
use std::collections::BTreeSet;

use pair_of_dice::Error;
use pair_of_dice::button::{ButtonEvent, PolledButton, PressedTo};
use pair_of_dice::charlieplex::Charlieplex;
use pair_of_dice::dice::{DiceRoller, DieFace, RollDice};
use pair_of_dice::host::{FakePin, RecordingPort, SteppingTicks};
use pair_of_dice::led_mask::LedMask;
use pair_of_dice::timing::TickSource;

#[test]
fn faces_use_the_expected_pips() {
    let nibbles: Vec<u8> = DieFace::ALL.iter().map(|face| face.nibble()).collect();
    assert_eq!(nibbles, [0b0001, 0b0010, 0b0011, 0b0110, 0b0111, 0b1110]);
    for (index, face) in DieFace::ALL.iter().enumerate() {
        assert_eq!(usize::from(face.pips()), index + 1);
    }
}

#[test]
fn try_from_accepts_one_to_six_only() {
    assert_eq!(DieFace::try_from(1), Ok(DieFace::One));
    assert_eq!(DieFace::try_from(6), Ok(DieFace::Six));
    assert_eq!(DieFace::try_from(0), Err(Error::DieFaceOutOfRange(0)));
    assert_eq!(DieFace::try_from(7), Err(Error::DieFaceOutOfRange(7)));
    assert_eq!(Error::DieFaceOutOfRange(7).to_string(), "die face 7 is outside 1..=6");
}

#[test]
fn next_wraps_six_to_one() {
    assert_eq!(DieFace::Five.next(), DieFace::Six);
    assert_eq!(DieFace::Six.next(), DieFace::One);
}

#[test]
fn from_dice_puts_right_die_in_high_nibble() {
    assert_eq!(
        LedMask::from_dice(DieFace::Six, DieFace::One),
        LedMask::new(0b0001_1110)
    );
    assert_eq!(
        LedMask::from_dice(DieFace::One, DieFace::Four),
        LedMask::new(0b0110_0001)
    );
}

#[test]
fn roller_only_tumbles_while_rolling() {
    let mut roller = DiceRoller::new();
    roller.tumble(true);
    assert_eq!(roller.faces(), (DieFace::One, DieFace::One));

    roller.start();
    roller.tumble(true);
    assert_eq!(roller.faces(), (DieFace::Two, DieFace::Two));
    roller.tumble(false);
    assert_eq!(roller.faces(), (DieFace::Two, DieFace::Three));
    roller.stop();
    roller.tumble(true);
    assert_eq!(roller.faces(), (DieFace::Two, DieFace::Three));
    assert_eq!(roller.mask(), LedMask::new(0b0011_0010));
}

#[test]
fn held_button_reaches_every_face_on_both_dice() {
    let high = Cell::new(true);
    let button = PolledButton::new(FakePin::new(&high), PressedTo::Voltage);
    let mut charlieplex = Charlieplex::new(RecordingPort::new());
    // One count per poll: the top bit only toggles every 128 polls.
    let mut ticks = SteppingTicks::new(0, 1);
    let mut roll_dice = RollDice::new(button, ticks.now());

    let mut lefts = BTreeSet::new();
    let mut rights = BTreeSet::new();
    for _ in 0..4_000 {
        roll_dice.poll(&mut charlieplex, ticks.now()).unwrap();
        if roll_dice.roller().is_rolling() {
            let (left, right) = roll_dice.roller().faces();
            lefts.insert(left);
            rights.insert(right);
        }
    }
    assert!(roll_dice.roller().is_rolling());
    assert_eq!(lefts.len(), DieFace::ALL.len(), "left faces: {lefts:?}");
    assert_eq!(rights.len(), DieFace::ALL.len(), "right faces: {rights:?}");
}

#[test]
fn holding_the_button_rolls_and_release_settles() {
    let high = Cell::new(false);
    let button = PolledButton::new(FakePin::new(&high), PressedTo::Voltage);
    let mut charlieplex = Charlieplex::new(RecordingPort::new());
    let mut roll_dice = RollDice::new(button, 0x00);

    // Idle: double one on show.
    assert_eq!(roll_dice.poll(&mut charlieplex, 0x00), Ok(None));
    assert_eq!(charlieplex.mask(), LedMask::from_dice(DieFace::One, DieFace::One));

    high.set(true);
    assert_eq!(roll_dice.poll(&mut charlieplex, 0x00), Ok(None));
    assert_eq!(roll_dice.poll(&mut charlieplex, 0x80), Ok(None));
    assert_eq!(
        roll_dice.poll(&mut charlieplex, 0x00),
        Ok(Some(ButtonEvent::Pressed))
    );
    assert!(roll_dice.roller().is_rolling());
    assert_eq!(roll_dice.roller().faces().0, DieFace::Two);

    high.set(false);
    assert_eq!(roll_dice.poll(&mut charlieplex, 0x00), Ok(None));
    assert_eq!(roll_dice.poll(&mut charlieplex, 0x80), Ok(None));
    assert_eq!(
        roll_dice.poll(&mut charlieplex, 0x00),
        Ok(Some(ButtonEvent::Released))
    );
    assert!(!roll_dice.roller().is_rolling());
    assert_eq!(charlieplex.mask(), roll_dice.roller().mask());
    // Every poll refreshed exactly one phase.
    assert_eq!(charlieplex.upcoming_phase(), 0);
}

#[test]
fn button_read_failure_is_reported_after_refresh() {
    let high = Cell::new(false);
    let button = PolledButton::new(FakePin::failing(&high), PressedTo::Ground);
    let mut charlieplex = Charlieplex::new(RecordingPort::new());
    let mut roll_dice = RollDice::new(button, 0x00);

    assert_eq!(roll_dice.poll(&mut charlieplex, 0x00), Err(Error::ButtonRead));
    assert_eq!(charlieplex.upcoming_phase(), 6);
}
