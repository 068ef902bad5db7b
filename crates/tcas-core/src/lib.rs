//! Core decision logic for a traffic-alert and collision-avoidance
//! function.
//!
//! Given the kinematic states of own-ship and one intruder, the crate
//! selects altitude-dependent detection thresholds, classifies the
//! encounter as no-threat / traffic advisory / resolution advisory, and,
//! when an RA is warranted, recommends the vertical maneuver that
//! maximizes worst-case separation at the predicted closest approach.
//!
//! Everything here is pure and synchronous; surveillance acquisition,
//! scheduling, display, and multi-intruder arbitration belong to the
//! host system.

pub mod advisory;
pub mod encounter;
pub mod geometry;
pub mod models;
pub mod sensitivity;
pub mod threat;

pub use advisory::{advise_maneuver, time_to_closest_approach, AdvisoryConfig};
pub use encounter::{EncounterEvaluator, ThreatAssessment};
pub use geometry::{RelativeState, Vector3};
pub use models::{AircraftState, Maneuver, StateValidationError, ThreatLevel};
pub use sensitivity::{calculate_thresholds, SensitivityLevel, ThresholdSet};
pub use threat::{detect_threat, TauEstimates, ThreatDecision, TAU_SENTINEL_S};
