//! Core data models for the collision avoidance system.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Vector3;

/// Kinematic state of one aircraft for a single evaluation cycle.
///
/// The surveillance collaborator supplies a fresh own-ship/intruder pair
/// each cycle; states are immutable once handed to the evaluator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AircraftState {
    pub position: Vector3,
    pub velocity: Vector3,
}

impl AircraftState {
    pub fn new(position: Vector3, velocity: Vector3) -> Self {
        Self { position, velocity }
    }

    /// Own-ship altitude as read by the sensitivity level lookup.
    pub fn altitude(&self) -> f64 {
        self.position.z
    }

    /// Reject states with non-finite components.
    ///
    /// Boundary check for callers ingesting external data; the decision
    /// functions themselves assume finite inputs and handle every
    /// numeric-domain edge via defined fallbacks instead of errors.
    pub fn validate(&self) -> Result<(), StateValidationError> {
        if !self.position.is_finite() {
            return Err(StateValidationError::NonFinitePosition(self.position));
        }
        if !self.velocity.is_finite() {
            return Err(StateValidationError::NonFiniteVelocity(self.velocity));
        }
        Ok(())
    }
}

/// Invalid kinematic input detected at the evaluation boundary.
#[derive(Debug, Error)]
pub enum StateValidationError {
    #[error("non-finite position component in ({0})")]
    NonFinitePosition(Vector3),
    #[error("non-finite velocity component in ({0})")]
    NonFiniteVelocity(Vector3),
}

/// Alert level produced for an encounter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreatLevel {
    /// No developing conflict
    #[default]
    None,
    /// Developing conflict; crew alerted, no maneuver required
    TrafficAdvisory,
    /// Conflict requiring an active vertical avoidance maneuver
    ResolutionAdvisory,
}

/// Recommended vertical escape maneuver.
///
/// Produced only when a resolution advisory is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Maneuver {
    Climb,
    Descend,
}
