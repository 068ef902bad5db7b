//! Pre-defined encounter scenarios for demos and testing.

use rand::Rng;
use tcas_core::{AircraftState, Vector3};

/// A named own-ship/intruder encounter.
pub struct Encounter {
    pub name: String,
    pub own: AircraftState,
    pub intruder: AircraftState,
}

impl Encounter {
    fn new(name: &str, own: AircraftState, intruder: AircraftState) -> Self {
        Self {
            name: name.to_string(),
            own,
            intruder,
        }
    }
}

fn state(position: (f64, f64, f64), velocity: (f64, f64, f64)) -> AircraftState {
    AircraftState::new(
        Vector3::new(position.0, position.1, position.2),
        Vector3::new(velocity.0, velocity.1, velocity.2),
    )
}

/// Crossing traffic at FL150 with the intruder 200 ft below and drifting
/// vertically. Produces a traffic advisory and, evaluated for a
/// maneuver, favors a climb.
pub fn crossing_descent() -> Encounter {
    Encounter::new(
        "crossing_descent",
        state((0.0, -4000.0, 15000.0), (0.0, 400.0, 0.0)),
        state((-4000.0, 0.0, 14800.0), (400.0, 0.0, 6.0)),
    )
}

/// Converging pair just above the lowest band, close enough that
/// resolution advisories are armed.
pub fn converging_low() -> Encounter {
    Encounter::new(
        "converging_low",
        state((0.0, 0.0, 5000.0), (0.0, 100.0, 0.0)),
        state((-300.0, 0.0, 4950.0), (100.0, 100.0, 1.0)),
    )
}

/// Same converging geometry inside the SL2 band, where RA thresholds
/// are zero and only a TA can fire.
pub fn converging_terminal() -> Encounter {
    Encounter::new(
        "converging_terminal",
        state((0.0, 0.0, 2000.0), (0.0, 100.0, 0.0)),
        state((-300.0, 0.0, 1950.0), (100.0, 100.0, 1.0)),
    )
}

/// Widely separated traffic on a parallel track; no threat.
pub fn parallel_distant() -> Encounter {
    Encounter::new(
        "parallel_distant",
        state((0.0, 0.0, 35000.0), (0.0, 450.0, 0.0)),
        state((60_000.0, -5000.0, 36000.0), (0.0, 450.0, 0.0)),
    )
}

/// All canned scenarios, mildest last.
pub fn builtin_scenarios() -> Vec<Encounter> {
    vec![
        crossing_descent(),
        converging_low(),
        converging_terminal(),
        parallel_distant(),
    ]
}

/// Look up a canned scenario by name.
pub fn find_scenario(name: &str) -> Option<Encounter> {
    builtin_scenarios()
        .into_iter()
        .find(|scenario| scenario.name == name)
}

/// Generate a random encounter around a mid-altitude own-ship.
///
/// The intruder spawns within a few thousand feet laterally and a few
/// hundred vertically, with a velocity roughly mirroring own-ship so a
/// useful share of draws actually converge.
pub fn random_encounter(index: usize) -> Encounter {
    let mut rng = rand::rng();

    let altitude = rng.random_range(2_000.0..40_000.0);
    let own = state((0.0, 0.0, altitude), (0.0, rng.random_range(150.0..450.0), 0.0));

    let intruder = state(
        (
            rng.random_range(-6_000.0..6_000.0),
            rng.random_range(-6_000.0..6_000.0),
            altitude + rng.random_range(-400.0..400.0),
        ),
        (
            rng.random_range(-450.0..450.0),
            rng.random_range(-450.0..450.0),
            rng.random_range(-10.0..10.0),
        ),
    );

    Encounter::new(&format!("random_{index:03}"), own, intruder)
}
