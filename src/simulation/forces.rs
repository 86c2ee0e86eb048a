//! Force contributors for the mass-spring engine
//!
//! Gravity seeds one accumulator per particle; every spring then adds an
//! equal and opposite pair of forces to its two endpoints. Spring forces are
//! evaluated from copies of the endpoint state taken before the step mutates
//! anything, so the order in which springs are visited never matters.

use crate::error::SimError;
use super::states::Spring;
use super::vector::{self, NVec3};

/// Copy of one endpoint's state at the start of a step
#[derive(Debug, Clone, Copy)]
pub struct EndpointSnapshot {
    pub pos: NVec3,
    pub vel: NVec3,
}

impl EndpointSnapshot {
    pub fn capture(positions: &[NVec3], velocities: &[NVec3], i: usize) -> Self {
        Self {
            pos: positions[i],
            vel: velocities[i],
        }
    }
}

/// Forces a spring applies to its two endpoints; `on_p1 == -on_p0` always
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringForce {
    pub on_p0: NVec3,
    pub on_p1: NVec3,
}

impl SpringForce {
    pub fn zero() -> Self {
        Self {
            on_p0: NVec3::zeros(),
            on_p1: NVec3::zeros(),
        }
    }
}

/// Elastic + damping force for one spring
///
/// - direction `d0` points from `p0` to `p1`, `d1 = -d0`
/// - elastic scalar `stiffness * (L - rest)`
/// - damping scalar `damping * (L - prevL)`, where `prevL` is the separation of
///   `pos - vel` for both endpoints
///
/// Both endpoints get the same scalar along their own direction, so the pair
/// is antiparallel by construction.
///
/// # Errors
/// `DegenerateSpring` when the endpoints coincide
pub fn spring_force(spring: &Spring, a: EndpointSnapshot, b: EndpointSnapshot, stiffness: f64, damping: f64) -> Result<SpringForce, SimError> {
    // displacement from p0 to p1
    let span = vector::sub(b.pos, a.pos);
    let d0 = vector::normalize(span).map_err(|_| SimError::DegenerateSpring {
        p0: spring.p0,
        p1: spring.p1,
    })?;
    let d1 = -d0;

    let length = vector::length(span);
    let elastic = stiffness * (length - spring.rest);

    // previous separation estimated as pos - vel for each endpoint
    let prev_a = vector::sub(a.pos, a.vel);
    let prev_b = vector::sub(b.pos, b.vel);
    let prev_length = vector::length(vector::sub(prev_a, prev_b));
    let damp = damping * (length - prev_length);

    let scalar = elastic + damp;
    Ok(SpringForce {
        on_p0: vector::scale(d0, scalar),
        on_p1: vector::scale(d1, scalar),
    })
}

/// One independent accumulator per particle, each starting at `mass * gravity`
pub fn gravity_seed(n: usize, mass: f64, gravity: NVec3) -> Vec<NVec3> {
    let weight = vector::scale(gravity, mass);
    vec![weight; n]
}

/// Add every spring's force pair into `out`
///
/// Endpoint indices must already be validated against `positions.len()`.
/// A spring whose endpoints coincide contributes nothing this step.
///
/// Returns the number of degenerate springs that were skipped.
pub fn accumulate_spring_forces(
    springs: &[Spring],
    positions: &[NVec3],
    velocities: &[NVec3],
    stiffness: f64,
    damping: f64,
    out: &mut [NVec3],
) -> usize {
    let mut degenerate = 0;

    for spring in springs {
        let a = EndpointSnapshot::capture(positions, velocities, spring.p0);
        let b = EndpointSnapshot::capture(positions, velocities, spring.p1);

        let force = match spring_force(spring, a, b, stiffness, damping) {
            Ok(force) => force,
            Err(e) => {
                ftlog::debug!("skipping spring this step: {e}");
                degenerate += 1;
                SpringForce::zero()
            }
        };

        out[spring.p0] = vector::add(out[spring.p0], force.on_p0);
        out[spring.p1] = vector::add(out[spring.p1], force.on_p1);
    }

    degenerate
}
