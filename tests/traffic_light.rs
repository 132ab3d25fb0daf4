//! End-to-end scenario: a three-light controller under the tick driver,
//! and its maintenance-mode variant under the reachability harness.

use lockstep::builder::{entry, hold, ControllerBuilder};
use lockstep::core::Symbol;
use lockstep::driver::{DriverError, Pacing, TickDriver};
use lockstep::engine::TableController;
use lockstep::reachability::{Finding, ReachabilityHarness};
use lockstep::{state_enum, symbol_enum};
use std::time::Duration;

state_enum! {
    enum Light {
        Red,
        Green,
        Yellow,
    }
}

symbol_enum! {
    enum Pulse {
        Hold => '0',
        Advance => '1',
    }
}

symbol_enum! {
    enum Color {
        Red => 'R',
        Green => 'G',
        Yellow => 'Y',
    }
}

/// Advance cycles Red -> Green -> Yellow -> Red; Hold keeps the light.
fn lights() -> TableController<Light, Pulse, Color> {
    ControllerBuilder::new()
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
        .unwrap()
}

#[test]
fn the_bench_sequence_produces_eleven_outputs() {
    let driver = TickDriver::new(lights());
    let outcome = driver.run("11101010101").unwrap();

    assert_eq!(outcome.outputs.len(), 11);
    let rendered: String = outcome.outputs.iter().map(|o| o.glyph()).collect();
    assert_eq!(rendered, "GYRRGGYYRRG");
}

#[test]
fn the_bench_sequence_is_reproducible_bit_for_bit() {
    let driver = TickDriver::new(lights());
    let first = driver.run("11101010101").unwrap();
    let second = driver.run("11101010101").unwrap();

    assert_eq!(first.outputs, second.outputs);
    assert_eq!(first.trace.path(), second.trace.path());
    assert_eq!(first.final_state, second.final_state);
}

#[test]
fn pacing_is_cosmetic() {
    let unpaced = TickDriver::new(lights()).run("110101").unwrap();
    let paced = TickDriver::new(lights())
        .with_pacing(Pacing::Fixed(Duration::from_millis(1)))
        .run("110101")
        .unwrap();

    assert_eq!(unpaced.outputs, paced.outputs);
    assert_eq!(unpaced.final_state, paced.final_state);
}

#[test]
fn foreign_digit_is_rejected_before_stepping() {
    let driver = TickDriver::new(lights());
    let mut surfaced = 0usize;
    let err = driver.run_with("112", |_| surfaced += 1).unwrap_err();

    match err {
        DriverError::InvalidSymbol { position, source } => {
            assert_eq!(position, 2);
            assert_eq!(source.raw, '2');
        }
    }
    assert_eq!(surfaced, 2);
}

mod maintenance_variant {
    use super::*;

    state_enum! {
        enum MaintLight {
            Red,
            Green,
            Yellow,
            Flashing,
        }
    }

    symbol_enum! {
        enum MaintColor {
            Red => 'R',
            Green => 'G',
            Yellow => 'Y',
            Flash => 'F',
        }
    }

    /// Same cycle as `lights()`, plus a declared maintenance mode that
    /// no transition ever enters.
    fn maintenance_lights() -> TableController<MaintLight, Pulse, MaintColor> {
        ControllerBuilder::new()
            .reset_state(MaintLight::Red)
            .entries(vec![
                entry(
                    MaintLight::Red,
                    Pulse::Advance,
                    MaintLight::Green,
                    MaintColor::Green,
                ),
                entry(
                    MaintLight::Green,
                    Pulse::Advance,
                    MaintLight::Yellow,
                    MaintColor::Yellow,
                ),
                entry(
                    MaintLight::Yellow,
                    Pulse::Advance,
                    MaintLight::Red,
                    MaintColor::Red,
                ),
                hold(MaintLight::Red, Pulse::Hold, MaintColor::Red),
                hold(MaintLight::Green, Pulse::Hold, MaintColor::Green),
                hold(MaintLight::Yellow, Pulse::Hold, MaintColor::Yellow),
                entry(
                    MaintLight::Flashing,
                    Pulse::Advance,
                    MaintLight::Red,
                    MaintColor::Red,
                ),
                hold(MaintLight::Flashing, Pulse::Hold, MaintColor::Flash),
            ])
            .build()
            .unwrap()
    }

    #[test]
    fn dead_maintenance_state_is_flagged() {
        let mut harness = ReachabilityHarness::new(maintenance_lights());
        harness.explore(12);

        let report = harness.report();
        assert!(report.is_exhaustive());
        assert!(!report.is_clean());
        assert_eq!(
            report.findings(),
            vec![
                Finding::UnreachableState(MaintLight::Flashing),
                Finding::UnreachableOutput(MaintColor::Flash),
            ]
        );
    }

    #[test]
    fn the_bench_sequence_alone_misses_nothing_extra() {
        // The hand-chosen bench sequence already covers the live cycle:
        // its findings match exhaustive exploration's.
        let mut replayed = ReachabilityHarness::new(maintenance_lights());
        replayed.replay_raw("11101010101").unwrap();

        let mut explored = ReachabilityHarness::new(maintenance_lights());
        explored.explore(12);

        assert_eq!(replayed.report().findings(), explored.report().findings());
    }

    #[test]
    fn report_round_trips_through_json() {
        let mut harness = ReachabilityHarness::new(maintenance_lights());
        harness.explore(12);
        let report = harness.report();

        let json = serde_json::to_string(&report).unwrap();
        let deserialized: lockstep::reachability::ReachabilityReport<MaintLight, MaintColor> =
            serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.unreachable_states, report.unreachable_states);
        assert_eq!(deserialized.bound_exhausted, report.bound_exhausted);
    }
}
