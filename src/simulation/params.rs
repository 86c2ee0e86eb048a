//! Physical constants for the simulation
//!
//! `SimParams` holds everything a step needs besides the state and `dt`:
//! - spring stiffness and damping (shared by every spring),
//! - particle mass (shared by every particle),
//! - gravity as an acceleration vector,
//! - boundary restitution

use crate::error::SimError;
use super::vector::NVec3;

#[derive(Debug, Clone)]
pub struct SimParams {
    pub stiffness: f64, // spring constant
    pub damping: f64, // damping coefficient
    pub mass: f64, // per-particle mass
    pub gravity: NVec3, // acceleration
    pub restitution: f64, // boundary bounce coefficient
}

impl SimParams {
    /// Range checks applied when a scene is built from configuration
    ///
    /// The step itself only insists on a positive mass, so hand-built
    /// parameters outside these ranges still integrate.
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.mass > 0.0) {
            return Err(SimError::NonPositiveMass(self.mass));
        }
        if !self.mass.is_finite() {
            return Err(SimError::InvalidParameter { name: "mass", value: self.mass });
        }
        if !(self.stiffness > 0.0) || !self.stiffness.is_finite() {
            return Err(SimError::InvalidParameter { name: "stiffness", value: self.stiffness });
        }
        if !(self.damping >= 0.0) || !self.damping.is_finite() {
            return Err(SimError::InvalidParameter { name: "damping", value: self.damping });
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(SimError::InvalidParameter { name: "restitution", value: self.restitution });
        }
        if let Some(g) = self.gravity.iter().find(|g| !g.is_finite()) {
            return Err(SimError::InvalidParameter { name: "gravity", value: *g });
        }
        Ok(())
    }
}
