//! Unreachable State Check
//!
//! This demo declares a traffic-light controller with a maintenance mode
//! (flashing) that no transition ever enters, then lets the reachability
//! harness find the dead state and its dead output.
//!
//! Key concepts:
//! - Declared state universe vs. actually reachable states
//! - Bounded breadth-first exploration from the reset state
//! - Findings as review material, not execution errors
//!
//! Run with: cargo run --example unreachable_check

use lockstep::builder::{entry, hold, ControllerBuilder};
use lockstep::reachability::ReachabilityHarness;
use lockstep::{state_enum, symbol_enum};

state_enum! {
    pub enum Light {
        Red,
        Green,
        Yellow,
        Flashing,
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
        Flash => 'F',
    }
}

fn main() {
    println!("=== Unreachable State Check ===\n");

    // Flashing is fully modeled - it just has no incoming transition.
    let controller = ControllerBuilder::new()
        .reset_state(Light::Red)
        .entries(vec![
            entry(Light::Red, Pulse::Advance, Light::Green, Color::Green),
            entry(Light::Green, Pulse::Advance, Light::Yellow, Color::Yellow),
            entry(Light::Yellow, Pulse::Advance, Light::Red, Color::Red),
            hold(Light::Red, Pulse::Hold, Color::Red),
            hold(Light::Green, Pulse::Hold, Color::Green),
            hold(Light::Yellow, Pulse::Hold, Color::Yellow),
            entry(Light::Flashing, Pulse::Advance, Light::Red, Color::Red),
            hold(Light::Flashing, Pulse::Hold, Color::Flash),
        ])
        .build()
        .expect("maintenance table is total over both alphabets");

    let mut harness = ReachabilityHarness::new(controller);
    harness.explore(16);

    let report = harness.report();
    println!(
        "Explored exhaustively: {}",
        if report.is_exhaustive() { "yes" } else { "no (bound hit)" }
    );
    println!("States observed:  {}", report.observed_states.len());
    println!("Outputs observed: {}\n", report.observed_outputs.len());

    if report.is_clean() {
        println!("No findings: every declared state and output is reachable.");
    } else {
        println!("Findings:");
        for finding in report.findings() {
            println!("  - {finding}");
        }
    }

    println!(
        "\nReport as JSON:\n{}",
        serde_json::to_string_pretty(&report).expect("report serializes")
    );

    println!("\n=== Check Complete ===");
}
