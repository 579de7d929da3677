#![allow(missing_docs)]
//! Host-level tests for wiring tables.

use pair_of_dice::Error;
use pair_of_dice::led_mask::LedMask;
use pair_of_dice::wiring::{
    PAIR_OF_DICE, PHASE_COUNT, PhaseTable, PhaseWiring, SHARED_LINES, SharedLine,
};

const fn entry(mask_bit: u8, high: SharedLine, low: SharedLine) -> PhaseWiring {
    PhaseWiring::new(mask_bit, high, low)
}

fn board_entries() -> [PhaseWiring; PHASE_COUNT] {
    *PAIR_OF_DICE.entries()
}

#[test]
fn shared_lines_are_gp1_gp2_gp4_gp5() {
    assert_eq!(SHARED_LINES, 0b0011_0110);
    assert_eq!(SharedLine::Drv1.bit(), 0b0000_0010);
    assert_eq!(SharedLine::Drv5.bit(), 0b0010_0000);
}

#[test]
fn pair_of_dice_matches_schematic() {
    use SharedLine::{Drv1, Drv2, Drv4, Drv5};
    let expected = [
        (0, Drv2, Drv1),
        (1, Drv4, Drv2),
        (2, Drv2, Drv4),
        (3, Drv5, Drv4),
        (4, Drv1, Drv2),
        (5, Drv4, Drv5),
        (6, Drv2, Drv5),
        (7, Drv5, Drv2),
    ];
    for (phase, (mask_bit, high, low)) in expected.into_iter().enumerate() {
        let wiring = PAIR_OF_DICE.phase(u8::try_from(phase).unwrap());
        assert_eq!(wiring, entry(mask_bit, high, low), "phase {phase}");
    }
}

#[test]
fn lit_by_models_one_led_per_directed_pair() {
    // Drv2 high, Drv1 low: D1.1 only.
    let direction = !(SharedLine::Drv1.bit() | SharedLine::Drv2.bit());
    assert_eq!(
        PAIR_OF_DICE.lit_by(direction, SharedLine::Drv2.bit()),
        LedMask::new(0b0000_0001)
    );
    // Same lines, reversed polarity: D2.1 only.
    assert_eq!(
        PAIR_OF_DICE.lit_by(direction, SharedLine::Drv1.bit()),
        LedMask::new(0b0001_0000)
    );
    // Both high: nothing conducts.
    assert_eq!(
        PAIR_OF_DICE.lit_by(direction, SHARED_LINES),
        LedMask::EMPTY
    );
    // Everything an input: nothing conducts whatever the latch holds.
    assert_eq!(PAIR_OF_DICE.lit_by(0xFF, 0xFF), LedMask::EMPTY);
}

#[test]
fn try_new_accepts_board_table() {
    assert_eq!(PhaseTable::try_new(board_entries()), Ok(PAIR_OF_DICE));
}

#[test]
fn try_new_rejects_same_high_and_low() {
    let mut entries = board_entries();
    entries[3] = entry(3, SharedLine::Drv4, SharedLine::Drv4);
    assert_eq!(
        PhaseTable::try_new(entries),
        Err(Error::SameHighAndLow { phase: 3 })
    );
}

#[test]
fn try_new_rejects_mask_bit_out_of_range() {
    let mut entries = board_entries();
    entries[5].mask_bit = 8;
    assert_eq!(
        PhaseTable::try_new(entries),
        Err(Error::MaskBitOutOfRange { phase: 5 })
    );
}

#[test]
fn try_new_rejects_duplicate_mask_bit() {
    let mut entries = board_entries();
    entries[6].mask_bit = 2;
    assert_eq!(
        PhaseTable::try_new(entries),
        Err(Error::DuplicateMaskBit { phase: 6 })
    );
}

#[test]
fn try_new_rejects_duplicate_line_pair() {
    let mut entries = board_entries();
    entries[7].high = SharedLine::Drv2;
    entries[7].low = SharedLine::Drv1;
    assert_eq!(
        PhaseTable::try_new(entries),
        Err(Error::DuplicateLinePair { phase: 7 })
    );
}

#[test]
fn errors_display_their_phase() {
    assert_eq!(
        Error::DuplicateLinePair { phase: 7 }.to_string(),
        "phase 7 repeats a (high, low) pair used by an earlier phase"
    );
}

#[test]
#[should_panic(expected = "duplicate mask bit in wiring table")]
fn new_panics_on_duplicate_mask_bit() {
    let mut entries = board_entries();
    entries[1].mask_bit = 0;
    let _ = PhaseTable::new(entries);
}

#[test]
#[should_panic(expected = "phase drives one line both high and low")]
fn new_panics_on_same_high_and_low() {
    let mut entries = board_entries();
    entries[0].low = SharedLine::Drv2;
    let _ = PhaseTable::new(entries);
}

#[test]
#[should_panic(expected = "duplicate (high, low) pair in wiring table")]
fn new_panics_on_duplicate_line_pair() {
    let mut entries = board_entries();
    entries[2] = entry(2, SharedLine::Drv4, SharedLine::Drv2);
    let _ = PhaseTable::new(entries);
}
