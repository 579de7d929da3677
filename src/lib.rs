//! Charlieplexed LED firmware for a pair of dice on Pico 1 and 2.
//!
//! Eight LED positions (four per die) hang off four shared lines. Each call to
//! [`Charlieplex::refresh`](crate::charlieplex::Charlieplex::refresh) services one
//! position, so calling it from a tight loop makes every desired LED appear lit at once.
//!
//! # Glossary
//!
//! - **Charlieplexing ([wiki](https://en.wikipedia.org/wiki/Charlieplexing)):** driving
//!   N(N−1) LEDs from N lines by leaving all but two lines as high-impedance inputs.
//! - **Phase:** one of the 8 repeating time slots, each dedicated to one LED position.
//! - **Shared line:** an I/O line reconfigured every phase as output or high-impedance input.
//! - **Mask:** the 8-bit "desired lit" state, see [`LedMask`](crate::led_mask::LedMask).
//! - **Half period:** the time between two toggles of the 8-bit counter's top bit.
#![cfg_attr(not(feature = "host"), no_std)]
#![cfg_attr(not(feature = "host"), no_main)]

// Compile-time checks: exactly one board must be selected (unless testing with host feature)
#[cfg(all(not(any(feature = "pico1", feature = "pico2")), not(feature = "host")))]
compile_error!("Must enable exactly one board feature: 'pico1' or 'pico2'");

#[cfg(all(feature = "pico1", feature = "pico2"))]
compile_error!("Cannot enable both 'pico1' and 'pico2' features simultaneously");

// Compile-time checks: exactly one architecture must be selected (unless testing with host feature)
#[cfg(all(not(any(feature = "arm", feature = "riscv")), not(feature = "host")))]
compile_error!("Must enable exactly one architecture feature: 'arm' or 'riscv'");

#[cfg(all(feature = "arm", feature = "riscv"))]
compile_error!("Cannot enable both 'arm' and 'riscv' features simultaneously");

// Compile-time check: pico1 only supports ARM
#[cfg(all(feature = "pico1", feature = "riscv"))]
compile_error!("Pico 1 (RP2040) only supports ARM architecture, not RISC-V");

pub mod button;
pub mod charlieplex;
pub mod dice;
mod error;
// Test doubles for ports, counters and pins; only built for the host
#[cfg(feature = "host")]
pub mod host;
pub mod led_mask;
// These modules require embassy_rp and are excluded when testing on host
#[cfg(not(feature = "host"))]
pub mod pico;
pub mod timer_config;
pub mod timing;
pub mod walking_light;
pub mod wiring;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
