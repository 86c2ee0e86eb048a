//! Core state types for the mass-spring simulation.
//!
//! Particles are not objects: particle `i` is `positions[i]` together with
//! `velocities[i]`. The two sequences always have the same length and are
//! never resized or reordered once the scene is built.
//!
//! - `Spring` joins two particle indices with a rest length
//! - `SimulationState` owns positions, velocities, springs and the current time `t`

use crate::error::SimError;
use super::vector::NVec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub p0: usize, // first endpoint
    pub p1: usize, // second endpoint
    pub rest: f64, // rest length
}

impl Spring {
    pub fn new(p0: usize, p1: usize, rest: f64) -> Self {
        Self { p0, p1, rest }
    }
}

#[derive(Debug, Clone)]
pub struct SimulationState {
    positions: Vec<NVec3>,
    velocities: Vec<NVec3>,
    springs: Vec<Spring>,
    pub t: f64, // simulated time, sum of the dt of every applied step
}

impl SimulationState {
    /// Build a state from parallel position/velocity sequences and a spring list
    ///
    /// # Errors
    /// - `LengthMismatch` if the two sequences differ in length
    /// - `InvalidSpringIndex` if a spring endpoint is out of range
    /// - `SelfLoopSpring` if a spring joins a particle to itself
    pub fn new(positions: Vec<NVec3>, velocities: Vec<NVec3>, springs: Vec<Spring>) -> Result<Self, SimError> {
        check_lengths(&positions, &velocities)?;
        check_springs(&springs, positions.len())?;
        if let Some((s, spring)) = springs.iter().enumerate().find(|(_, s)| s.p0 == s.p1) {
            return Err(SimError::SelfLoopSpring { spring: s, index: spring.p0 });
        }

        Ok(Self {
            positions,
            velocities,
            springs,
            t: 0.0,
        })
    }

    pub fn particle_count(&self) -> usize {
        self.positions.len()
    }

    /// # Panics
    /// If `i >= particle_count()`
    pub fn position(&self, i: usize) -> NVec3 {
        self.positions[i]
    }

    /// # Panics
    /// If `i >= particle_count()`
    pub fn set_position(&mut self, i: usize, p: NVec3) {
        self.positions[i] = p;
    }

    /// # Panics
    /// If `i >= particle_count()`
    pub fn velocity(&self, i: usize) -> NVec3 {
        self.velocities[i]
    }

    /// # Panics
    /// If `i >= particle_count()`
    pub fn set_velocity(&mut self, i: usize, v: NVec3) {
        self.velocities[i] = v;
    }

    pub fn positions(&self) -> &[NVec3] {
        &self.positions
    }

    pub fn velocities(&self) -> &[NVec3] {
        &self.velocities
    }

    pub fn springs(&self) -> impl Iterator<Item = &Spring> {
        self.springs.iter()
    }

    pub fn spring_slice(&self) -> &[Spring] {
        &self.springs
    }

    /// Split borrow used by the integrator: positions and velocities mutable,
    /// springs read-only
    pub(crate) fn parts_mut(&mut self) -> (&mut [NVec3], &mut [NVec3], &[Spring]) {
        (self.positions.as_mut_slice(), self.velocities.as_mut_slice(), self.springs.as_slice())
    }
}

// helpers ==============================================================================

pub(crate) fn check_lengths(positions: &[NVec3], velocities: &[NVec3]) -> Result<(), SimError> {
    if positions.len() != velocities.len() {
        return Err(SimError::LengthMismatch {
            positions: positions.len(),
            velocities: velocities.len(),
        });
    }
    Ok(())
}

/// Every endpoint must index an existing particle
pub(crate) fn check_springs(springs: &[Spring], particle_count: usize) -> Result<(), SimError> {
    for (s, spring) in springs.iter().enumerate() {
        for index in [spring.p0, spring.p1] {
            if index >= particle_count {
                return Err(SimError::InvalidSpringIndex {
                    spring: s,
                    index,
                    particle_count,
                });
            }
        }
    }
    Ok(())
}
