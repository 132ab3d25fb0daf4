//! Traffic Light Tick Driver
//!
//! This demo drives a three-light controller one tick per second over a
//! fixed pulse sequence, printing the light color after every tick.
//!
//! Key concepts:
//! - Priming the controller via `reset` before the first tick
//! - One input symbol in, one output symbol out, per tick
//! - Fixed inter-tick pacing that never delays the first tick
//! - Fail-fast rejection of tokens outside the input alphabet
//!
//! Run with: cargo run --example traffic_light

use lockstep::builder::{entry, hold, ControllerBuilder};
use lockstep::core::Symbol;
use lockstep::driver::{Pacing, TickDriver};
use lockstep::{state_enum, symbol_enum};
use std::process;
use std::time::Duration;

state_enum! {
    pub enum Light {
        Red,
        Green,
        Yellow,
    }
}

symbol_enum! {
    pub enum Pulse {
        Hold => '0',
        Advance => '1',
    }
}

symbol_enum! {
    pub enum Color {
        Red => 'R',
        Green => 'G',
        Yellow => 'Y',
    }
}

fn main() {
    let controller = ControllerBuilder::new()
        .reset_state(Light::Red)
        .entries(vec![
            entry(Light::Red, Pulse::Advance, Light::Green, Color::Green),
            entry(Light::Green, Pulse::Advance, Light::Yellow, Color::Yellow),
            entry(Light::Yellow, Pulse::Advance, Light::Red, Color::Red),
            hold(Light::Red, Pulse::Hold, Color::Red),
            hold(Light::Green, Pulse::Hold, Color::Green),
            hold(Light::Yellow, Pulse::Hold, Color::Yellow),
        ])
        .build()
        .expect("traffic table is total over both alphabets");

    let driver =
        TickDriver::new(controller).with_pacing(Pacing::Fixed(Duration::from_secs(1)));

    if let Err(err) = driver.run_with("11101010101", |color| {
        println!("Light color: {}", color.glyph());
    }) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
