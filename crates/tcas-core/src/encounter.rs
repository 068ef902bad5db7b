//! Single-encounter evaluation pipeline.
//!
//! Ties the relative-state, threshold, classification, and advisory
//! stages together for one own-ship/intruder pair per surveillance
//! cycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::advisory::{advise_maneuver, time_to_closest_approach, AdvisoryConfig};
use crate::geometry::RelativeState;
use crate::models::{AircraftState, Maneuver, ThreatLevel};
use crate::sensitivity::{SensitivityLevel, ThresholdSet};
use crate::threat::{detect_threat, TauEstimates};

/// Result of evaluating one own-ship/intruder pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatAssessment {
    pub threat_level: ThreatLevel,
    pub sensitivity_level: SensitivityLevel,
    /// Thresholds the classification ran against
    pub thresholds: ThresholdSet,
    pub taus: TauEstimates,
    /// Seconds to predicted closest approach
    pub time_to_closest_s: f64,
    /// Recommended escape maneuver; present only under a resolution
    /// advisory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maneuver: Option<Maneuver>,
    pub timestamp: DateTime<Utc>,
}

/// Evaluates one intruder against own-ship each surveillance cycle.
///
/// Stateless between calls: every assessment is recomputed from the
/// states supplied for that cycle, so identical inputs yield identical
/// decisions. Evaluators for different intruders are independent and may
/// run in parallel as long as the configuration stays read-only.
#[derive(Debug, Clone, Default)]
pub struct EncounterEvaluator {
    pub config: AdvisoryConfig,
}

impl EncounterEvaluator {
    pub fn new(config: AdvisoryConfig) -> Self {
        Self { config }
    }

    /// Run the full detection pipeline for one cycle.
    ///
    /// Sensitivity comes from own-ship altitude, classification from the
    /// relative state, and the maneuver advisory is computed only when
    /// the classification asserts an RA.
    pub fn evaluate(&self, own: &AircraftState, intruder: &AircraftState) -> ThreatAssessment {
        let rel = RelativeState::between(own, intruder);
        let sensitivity_level = SensitivityLevel::from_altitude(own.altitude());
        let thresholds = sensitivity_level.thresholds();
        let decision = detect_threat(&rel, &thresholds);

        let maneuver = if decision.ra {
            Some(advise_maneuver(own, intruder, &rel, &self.config))
        } else {
            None
        };

        ThreatAssessment {
            threat_level: decision.threat_level(),
            sensitivity_level,
            thresholds,
            taus: TauEstimates::from_relative(&rel),
            time_to_closest_s: time_to_closest_approach(&rel),
            maneuver,
            timestamp: Utc::now(),
        }
    }
}
