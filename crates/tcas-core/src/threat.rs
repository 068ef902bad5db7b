//! Threat classification for a single own-ship/intruder encounter.

use serde::{Deserialize, Serialize};

use crate::geometry::RelativeState;
use crate::models::ThreatLevel;
use crate::sensitivity::ThresholdSet;

/// Tau substituted when a closure denominator is zero: the pair is not
/// closing on that axis, so no time-based threat exists.
pub const TAU_SENTINEL_S: f64 = 500.0;

/// Time-based threat metrics for an encounter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TauEstimates {
    /// Projected seconds until range closes, `|pr·pr / pr·vr|`
    pub tau_range_s: f64,
    /// Projected seconds until vertical separation closes, `|pr.z / vr.z|`
    pub tau_vert_s: f64,
}

impl TauEstimates {
    /// Compute both taus with zero-denominator guards.
    ///
    /// A zero closure projection or zero relative vertical rate resolves
    /// to [`TAU_SENTINEL_S`]; NaN and infinity never reach the threshold
    /// comparisons.
    pub fn from_relative(rel: &RelativeState) -> Self {
        let prmagsq = rel.range_sq();
        let vrproj = rel.closure_projection();

        let tau_range_s = if vrproj == 0.0 {
            TAU_SENTINEL_S
        } else {
            (prmagsq / vrproj).abs()
        };

        let tau_vert_s = if rel.vr.z == 0.0 {
            TAU_SENTINEL_S
        } else {
            (rel.pr.z / rel.vr.z).abs()
        };

        Self {
            tau_range_s,
            tau_vert_s,
        }
    }
}

/// TA/RA flags for one evaluation cycle.
///
/// Both flags are pure functions of the same inputs. The table makes an
/// RA imply a TA, but the classifier itself does not enforce that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreatDecision {
    pub ta: bool,
    pub ra: bool,
}

impl ThreatDecision {
    /// Collapse the flags into a single alert level; RA wins.
    pub fn threat_level(&self) -> ThreatLevel {
        if self.ra {
            ThreatLevel::ResolutionAdvisory
        } else if self.ta {
            ThreatLevel::TrafficAdvisory
        } else {
            ThreatLevel::None
        }
    }
}

/// Classify an encounter against the given thresholds.
///
/// An advisory fires when the range criterion (tau below threshold or
/// squared range inside the protection volume) and the vertical
/// criterion (vertical tau below threshold or absolute vertical
/// separation inside the threshold) hold together.
pub fn detect_threat(rel: &RelativeState, thresholds: &ThresholdSet) -> ThreatDecision {
    let taus = TauEstimates::from_relative(rel);
    let prmagsq = rel.range_sq();
    let vert_sep = rel.pr.z.abs();

    let ta = (taus.tau_range_s < thresholds.tau_ta_s
        || prmagsq < thresholds.range_ta_ft * thresholds.range_ta_ft)
        && (taus.tau_vert_s < thresholds.tau_ta_s || vert_sep < thresholds.vert_ta_ft);

    let ra = (taus.tau_range_s < thresholds.tau_ra_s
        || prmagsq < thresholds.range_ra_ft * thresholds.range_ra_ft)
        && (taus.tau_vert_s < thresholds.tau_ra_s || vert_sep < thresholds.vert_ra_ft);

    ThreatDecision { ta, ra }
}
