//! Vertical escape maneuver selection for resolution advisories.

use serde::{Deserialize, Serialize};

use crate::geometry::RelativeState;
use crate::models::{AircraftState, Maneuver};

/// Performance limits for the escape maneuver model.
///
/// Velocity and acceleration limits are the TCAS book values in m/s and
/// m/s² while the positions they act on arrive in feet; no unit
/// conversion happens anywhere in this crate. Passed in per evaluation,
/// never held as global state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryConfig {
    /// Maximum vertical escape velocity
    pub vmax_mps: f64,
    /// Maximum vertical acceleration
    pub amax_mps2: f64,
    /// Expected delay between advisory issue and maneuver onset, seconds
    pub reaction_time_s: f64,
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            vmax_mps: 7.62,
            amax_mps2: 2.45,
            reaction_time_s: 5.0,
        }
    }
}

/// Time of closest approach under constant relative velocity.
///
/// With zero relative motion the closest approach is undefined; `0.0` is
/// returned so callers treat the current instant as closest rather than
/// dividing by zero.
pub fn time_to_closest_approach(rel: &RelativeState) -> f64 {
    let vr_sq = rel.vr.magnitude_sq();
    if vr_sq == 0.0 {
        return 0.0;
    }
    -rel.closure_projection() / vr_sq
}

/// Pick the vertical maneuver that maximizes the predicted separation at
/// the time of closest approach.
///
/// Single-shot greedy choice, recomputed from scratch each cycle: the
/// intruder is assumed to hold its current vertical rate, own-ship flies
/// a reaction-delayed, velocity-capped escape profile in each direction,
/// and the direction with the larger worst-case separation wins. An
/// exact tie resolves to `Descend`.
pub fn advise_maneuver(
    own: &AircraftState,
    intruder: &AircraftState,
    rel: &RelativeState,
    config: &AdvisoryConfig,
) -> Maneuver {
    let tca = time_to_closest_approach(rel);

    let v1z = own.velocity.z;
    let vmax = config.vmax_mps;
    let amax = config.amax_mps2;
    let react = config.reaction_time_s;

    // Largest altitude offsets own-ship can reach by tca, accounting for
    // the reaction delay before acceleration begins.
    let reused = (v1z * v1z - vmax * vmax) / (2.0 * amax);
    let down_deviation = -vmax * (tca - react - (v1z + vmax) / amax) + (reused + react * v1z);
    let up_deviation = vmax * (tca - react - (-v1z + vmax) / amax) + (-reused + react * v1z);

    // Predicted vertical separation at tca under each candidate maneuver.
    let down_difference =
        (own.position.z + down_deviation - intruder.position.z + tca * intruder.velocity.z).abs();
    let up_difference =
        (own.position.z + up_deviation - intruder.position.z + tca * intruder.velocity.z).abs();

    if up_difference > down_difference {
        Maneuver::Climb
    } else {
        Maneuver::Descend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vector3;

    fn state(px: f64, py: f64, pz: f64, vx: f64, vy: f64, vz: f64) -> AircraftState {
        AircraftState::new(Vector3::new(px, py, pz), Vector3::new(vx, vy, vz))
    }

    #[test]
    fn crossing_descending_intruder_advises_climb() {
        let own = state(0.0, -4000.0, 15000.0, 0.0, 400.0, 0.0);
        let intruder = state(-4000.0, 0.0, 14800.0, 400.0, 0.0, 6.0);
        let rel = RelativeState::between(&own, &intruder);
        let config = AdvisoryConfig::default();

        let tca = time_to_closest_approach(&rel);
        assert!((tca - 10.0).abs() < 0.01);

        assert_eq!(advise_maneuver(&own, &intruder, &rel, &config), Maneuver::Climb);
    }

    #[test]
    fn predicted_separations_match_hand_computation() {
        // Same geometry as above; down ≈ 233.7, up ≈ 286.3.
        let own = state(0.0, -4000.0, 15000.0, 0.0, 400.0, 0.0);
        let intruder = state(-4000.0, 0.0, 14800.0, 400.0, 0.0, 6.0);
        let rel = RelativeState::between(&own, &intruder);
        let config = AdvisoryConfig::default();

        let tca = time_to_closest_approach(&rel);
        let reused = (own.velocity.z.powi(2) - config.vmax_mps.powi(2)) / (2.0 * config.amax_mps2);
        let down_dev = -config.vmax_mps
            * (tca - config.reaction_time_s - (own.velocity.z + config.vmax_mps) / config.amax_mps2)
            + (reused + config.reaction_time_s * own.velocity.z);
        let up_dev = config.vmax_mps
            * (tca - config.reaction_time_s - (-own.velocity.z + config.vmax_mps) / config.amax_mps2)
            + (-reused + config.reaction_time_s * own.velocity.z);

        let down_diff =
            (own.position.z + down_dev - intruder.position.z + tca * intruder.velocity.z).abs();
        let up_diff =
            (own.position.z + up_dev - intruder.position.z + tca * intruder.velocity.z).abs();
        assert!((down_diff - 233.7).abs() < 0.2, "down_diff = {down_diff}");
        assert!((up_diff - 286.3).abs() < 0.2, "up_diff = {up_diff}");
    }

    #[test]
    fn symmetric_geometry_ties_to_descend() {
        // Level own-ship, level co-altitude intruder: the up and down
        // deviations are exact mirrors, so both predicted separations are
        // bit-identical and the default branch must pick Descend.
        let own = state(0.0, -4000.0, 15000.0, 0.0, 400.0, 0.0);
        let intruder = state(-4000.0, 0.0, 15000.0, 400.0, 0.0, 0.0);
        let rel = RelativeState::between(&own, &intruder);
        let config = AdvisoryConfig::default();

        assert_eq!(
            advise_maneuver(&own, &intruder, &rel, &config),
            Maneuver::Descend
        );
    }

    #[test]
    fn zero_relative_motion_treats_closest_approach_as_now() {
        let own = state(0.0, 0.0, 10000.0, 250.0, 0.0, 0.0);
        let intruder = state(900.0, 0.0, 10100.0, 250.0, 0.0, 0.0);
        let rel = RelativeState::between(&own, &intruder);

        assert_eq!(time_to_closest_approach(&rel), 0.0);

        // Still produces a maneuver without dividing by zero.
        let maneuver = advise_maneuver(&own, &intruder, &rel, &AdvisoryConfig::default());
        assert!(matches!(maneuver, Maneuver::Climb | Maneuver::Descend));
    }

    #[test]
    fn own_ship_above_slow_intruder_advises_climb_away() {
        // Own-ship 150 ft above the intruder at closest approach;
        // climbing opens the gap while descending closes it.
        let own = state(0.0, 0.0, 12000.0, 0.0, 300.0, 0.0);
        let intruder = state(0.0, 3000.0, 11850.0, 0.0, 200.0, 15.0);
        let rel = RelativeState::between(&own, &intruder);

        assert_eq!(
            advise_maneuver(&own, &intruder, &rel, &AdvisoryConfig::default()),
            Maneuver::Climb
        );
    }
}
