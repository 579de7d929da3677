//! Build script for pair-of-dice.

use std::{env, fs, path::PathBuf};

#[path = "src/timer_config.rs"]
#[allow(dead_code, reason = "build script only evaluates the built-in configuration")]
mod timer_config;

use timer_config::TimerConfig;

fn main() {
    println!("cargo:rustc-check-cfg=cfg(rust_analyzer)");
    println!("cargo:rerun-if-changed=src/timer_config.rs");

    // 1) Flag a built-in settle delay that had to be clamped
    let settle_delay = TimerConfig::DEFAULT.settle_delay();
    if let Some(clamp) = settle_delay.clamp {
        println!(
            "cargo:warning=power-on settle delay {}; clamped to {} toggles",
            clamp.as_str(),
            settle_delay.toggles
        );
    }

    // 2) Handle memory.x based on target
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let target = env::var("TARGET").unwrap();

    let memory_file = if target.starts_with("thumbv8m") || target.starts_with("riscv32imac") {
        // Pico 2 (ARM or RISC-V core)
        Some("memory-pico2.x")
    } else if target.starts_with("thumbv6m") {
        // Pico 1
        Some("memory-pico1.x")
    } else {
        None
    };

    if let Some(memory_file) = memory_file {
        let memory_x = fs::read_to_string(memory_file)
            .unwrap_or_else(|_| panic!("Failed to read {memory_file}"));
        let dest = out_dir.join("memory.x");
        fs::write(&dest, memory_x).expect("Failed to write memory.x");
        println!("cargo:rustc-link-search={}", out_dir.display());
        println!("cargo:rerun-if-changed={memory_file}");
    }
}
