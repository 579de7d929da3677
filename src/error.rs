//! Crate-wide error type.

use derive_more::{Display, Error as DeriveError};

/// Errors reported by this crate.
///
/// The multiplex driver and the animation loop cannot fail; errors come from
/// checking wiring tables and die faces supplied at run time, and from reading
/// the button line.
#[derive(Clone, Copy, Debug, Display, DeriveError, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A phase drives the same line both high and low.
    #[display("phase {phase} uses the same line for high and low")]
    SameHighAndLow {
        /// Offending phase.
        phase: u8,
    },

    /// A phase names a mask bit outside `0..8`.
    #[display("phase {phase} names a mask bit outside 0..8")]
    MaskBitOutOfRange {
        /// Offending phase.
        phase: u8,
    },

    /// Two phases share one mask bit.
    #[display("phase {phase} repeats a mask bit used by an earlier phase")]
    DuplicateMaskBit {
        /// Offending phase.
        phase: u8,
    },

    /// Two phases drive the same (high, low) line pair, so their LEDs would light together.
    #[display("phase {phase} repeats a (high, low) pair used by an earlier phase")]
    DuplicateLinePair {
        /// Offending phase.
        phase: u8,
    },

    /// A die face must be in `1..=6`.
    #[display("die face {_0} is outside 1..=6")]
    DieFaceOutOfRange(#[error(not(source))] u8),

    /// The button line could not be read.
    #[display("button line read failed")]
    ButtonRead,
}

/// Result type used throughout this crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
