//! Fixed-step semi-implicit (symplectic) Euler integrator
//!
//! One step runs four phases, each finished for every particle before the
//! next begins:
//! 1. forces: `mass * gravity` plus every spring's contribution
//! 2. velocities: `v_n+1 = v_n + (F / m) * dt`
//! 3. positions: `x_n+1 = x_n + v_n+1 * dt`
//! 4. boundary: per-axis correction against the world cube
//!
//! All input checks happen before phase 1, so a rejected step leaves the
//! state exactly as it was.

use crate::error::SimError;
use super::collision::{inside_bounds, resolve_boundary};
use super::forces::{accumulate_spring_forces, gravity_seed};
use super::params::SimParams;
use super::states::{check_lengths, check_springs, SimulationState, Spring};
use super::vector::{self, NVec3};

/// What happened during one accepted step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub degenerate_springs: usize, // springs skipped for coincident endpoints
    pub boundary_hits: usize, // particles corrected by the boundary
    pub escaped: usize, // particles still outside the cube after correction
}

/// Advance raw particle arrays by one step of `dt`
///
/// # Errors
/// - `InvalidTimeStep` if `dt` is negative or not finite
/// - `NonPositiveMass` if `params.mass <= 0`
/// - `LengthMismatch` if positions and velocities differ in length
/// - `InvalidSpringIndex` if a spring endpoint is out of range
///
/// On error nothing is written.
pub fn sim_time_step(dt: f64, positions: &mut [NVec3], velocities: &mut [NVec3], springs: &[Spring], params: &SimParams) -> Result<StepReport, SimError> {
    if !(dt >= 0.0) || !dt.is_finite() {
        return Err(SimError::InvalidTimeStep(dt));
    }
    if !(params.mass > 0.0) {
        return Err(SimError::NonPositiveMass(params.mass));
    }
    check_lengths(positions, velocities)?;
    check_springs(springs, positions.len())?;

    let n = positions.len();

    // Phase 1: independent accumulators seeded with weight, then springs
    let mut forces = gravity_seed(n, params.mass, params.gravity);
    let degenerate_springs = accumulate_spring_forces(
        springs,
        positions,
        velocities,
        params.stiffness,
        params.damping,
        &mut forces,
    );

    // a = F / m, computed for everyone before any velocity changes
    let accels = forces
        .into_iter()
        .map(|f| vector::div(f, params.mass))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| SimError::NonPositiveMass(params.mass))?;

    // Phase 2: kick, from old velocities only
    for (v, a) in velocities.iter_mut().zip(accels.iter()) {
        *v = vector::add(*v, vector::scale(*a, dt));
    }

    // Phase 3: drift with the new velocities
    for (x, v) in positions.iter_mut().zip(velocities.iter()) {
        *x = vector::add(*x, vector::scale(*v, dt));
    }

    // Phase 4: containment
    let boundary_hits = resolve_boundary(positions, velocities, params.restitution);
    let escaped = positions.iter().filter(|x| !inside_bounds(x)).count();

    Ok(StepReport {
        degenerate_springs,
        boundary_hits,
        escaped,
    })
}

/// Advance a [`SimulationState`] by one step and move its clock forward
pub fn advance(state: &mut SimulationState, params: &SimParams, dt: f64) -> Result<StepReport, SimError> {
    let (positions, velocities, springs) = state.parts_mut();
    let report = sim_time_step(dt, positions, velocities, springs, params)?;
    state.t += dt;
    Ok(report)
}

/// Run `steps` consecutive steps, stopping at the first rejected one
///
/// Counters are summed over the run, except `escaped` which is taken from the
/// last step.
pub fn run(state: &mut SimulationState, params: &SimParams, dt: f64, steps: usize) -> Result<StepReport, SimError> {
    let mut total = StepReport::default();
    for _ in 0..steps {
        let report = advance(state, params, dt)?;
        total.degenerate_springs += report.degenerate_springs;
        total.boundary_hits += report.boundary_hits;
        total.escaped = report.escaped;
    }
    Ok(total)
}
