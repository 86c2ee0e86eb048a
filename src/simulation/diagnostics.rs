//! Energy bookkeeping for a simulation state
//!
//! Used by the driver for progress logging and by the tests to check that
//! damping only ever removes energy.

use super::params::SimParams;
use super::states::SimulationState;
use super::vector;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Energy {
    pub kinetic: f64,
    pub elastic: f64,
    pub gravitational: f64,
}

impl Energy {
    pub fn total(&self) -> f64 {
        self.kinetic + self.elastic + self.gravitational
    }
}

/// `0.5 * m * |v|^2` summed over all particles
pub fn kinetic_energy(state: &SimulationState, mass: f64) -> f64 {
    state
        .velocities()
        .iter()
        .map(|v| 0.5 * mass * vector::dot(*v, *v))
        .sum()
}

/// `0.5 * k * (L - rest)^2` summed over all springs
pub fn elastic_energy(state: &SimulationState, stiffness: f64) -> f64 {
    state
        .springs()
        .map(|s| {
            let length = vector::length(vector::sub(state.position(s.p1), state.position(s.p0)));
            let stretch = length - s.rest;
            0.5 * stiffness * stretch * stretch
        })
        .sum()
}

/// `-m * g . x` summed over all particles, zero at the origin
pub fn gravitational_energy(state: &SimulationState, mass: f64, gravity: vector::NVec3) -> f64 {
    state
        .positions()
        .iter()
        .map(|x| -mass * vector::dot(gravity, *x))
        .sum()
}

pub fn energy(state: &SimulationState, params: &SimParams) -> Energy {
    Energy {
        kinetic: kinetic_energy(state, params.mass),
        elastic: elastic_energy(state, params.stiffness),
        gravitational: gravitational_energy(state, params.mass, params.gravity),
    }
}
