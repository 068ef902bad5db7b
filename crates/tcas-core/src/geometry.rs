//! Vector math for relative encounter geometry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};

use crate::models::AircraftState;

/// 3-D vector in a local NED-like frame with z on the altitude axis.
///
/// Used for both positions and velocities; components are whatever unit
/// the surveillance feed supplies and are never converted here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Squared magnitude. Threat comparisons work on squared ranges, so
    /// the square root is rarely needed.
    pub fn magnitude_sq(&self) -> f64 {
        self.dot(self)
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude_sq().sqrt()
    }

    /// True when every component is a finite real number.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.x, self.y, self.z)
    }
}

/// Relative geometry between own-ship and one intruder.
///
/// Derived fresh each evaluation cycle from the two aircraft states;
/// never mutated independently of them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RelativeState {
    /// Relative position `p1 - p2` (own minus intruder)
    pub pr: Vector3,
    /// Relative velocity `v1 - v2`
    pub vr: Vector3,
}

impl RelativeState {
    /// Derive the relative state for an own-ship/intruder pair.
    pub fn between(own: &AircraftState, intruder: &AircraftState) -> Self {
        Self {
            pr: own.position - intruder.position,
            vr: own.velocity - intruder.velocity,
        }
    }

    /// Squared range to the intruder.
    pub fn range_sq(&self) -> f64 {
        self.pr.magnitude_sq()
    }

    /// Closure projection `pr · vr`; negative while the pair converges.
    pub fn closure_projection(&self) -> f64 {
        self.pr.dot(&self.vr)
    }
}
