//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - run settings (`dt`, `steps`)
//! - physical constants (`SimParams`)
//! - system state (`SimulationState` with particles and springs at t = 0)
//!
//! This is the scene-setup side of the engine: particles and springs are
//! created here once and never again during stepping.

use crate::configuration::config::{LatticeConfig, ParticleConfig, ScenarioConfig};
use crate::error::SimError;
use crate::simulation::integrator::{self, StepReport};
use crate::simulation::params::SimParams;
use crate::simulation::states::{check_springs, SimulationState, Spring};
use crate::simulation::vector::{self, NVec3};

/// Largest lattice `build_scenario` will allocate
pub const MAX_LATTICE_PARTICLES: usize = 1 << 22;

/// Neighbour offsets along the axes; each pair of nodes is visited once
const AXIS_OFFSETS: [[i64; 3]; 3] = [[1, 0, 0], [0, 1, 0], [0, 0, 1]];

/// Face and body diagonals with a positive leading component
const DIAGONAL_OFFSETS: [[i64; 3]; 10] = [
    [1, 1, 0],
    [1, -1, 0],
    [1, 0, 1],
    [1, 0, -1],
    [0, 1, 1],
    [0, 1, -1],
    [1, 1, 1],
    [1, 1, -1],
    [1, -1, 1],
    [1, -1, -1],
];

/// A fully-initialized scene, ready to be stepped
#[derive(Debug, Clone)]
pub struct Scenario {
    pub dt: f64,
    pub steps: usize,
    pub parameters: SimParams,
    pub state: SimulationState,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = SimParams {
            stiffness: p_cfg.stiffness,
            damping: p_cfg.damping,
            mass: p_cfg.mass,
            gravity: vec3("gravity", &p_cfg.gravity)?,
            restitution: p_cfg.restitution,
        };
        parameters.validate()?;

        let dt = cfg.run.dt;
        if !(dt >= 0.0) || !dt.is_finite() {
            return Err(SimError::InvalidTimeStep(dt));
        }

        // Explicit particles come first
        let mut positions = Vec::with_capacity(cfg.particles.len());
        let mut velocities = Vec::with_capacity(cfg.particles.len());
        for pc in &cfg.particles {
            let (x, v) = particle(pc)?;
            positions.push(x);
            velocities.push(v);
        }

        // Generated lattice is appended after them
        let mut springs = Vec::new();
        if let Some(lattice_cfg) = &cfg.lattice {
            let (xs, vs, ss) = lattice(lattice_cfg, positions.len())?;
            positions.extend(xs);
            velocities.extend(vs);
            springs.extend(ss);
        }

        // Explicit springs; indices must be checked before measuring rest lengths
        let explicit: Vec<Spring> = cfg.springs.iter().map(|sc| Spring::new(sc.p0, sc.p1, 0.0)).collect();
        check_springs(&explicit, positions.len())?;
        for (sc, mut spring) in cfg.springs.iter().zip(explicit) {
            spring.rest = match sc.rest {
                Some(rest) if rest >= 0.0 && rest.is_finite() => rest,
                Some(rest) => return Err(SimError::InvalidParameter { name: "rest", value: rest }),
                None => separation(&positions, spring.p0, spring.p1),
            };
            springs.push(spring);
        }

        let state = SimulationState::new(positions, velocities, springs)?;

        ftlog::info!(
            "built scenario: {} particles, {} springs, dt = {}, steps = {}",
            state.particle_count(),
            state.spring_slice().len(),
            dt,
            cfg.run.steps
        );

        Ok(Self {
            dt,
            steps: cfg.run.steps,
            parameters,
            state,
        })
    }

    /// Step the scene once with its own `dt`
    pub fn step(&mut self) -> Result<StepReport, SimError> {
        integrator::advance(&mut self.state, &self.parameters, self.dt)
    }
}

/// Generate a regular grid of particles with springs between neighbours
///
/// Indices of the generated particles start at `base`. Rest lengths are the
/// initial separations, so a freshly built lattice carries no elastic load.
pub fn lattice(cfg: &LatticeConfig, base: usize) -> Result<(Vec<NVec3>, Vec<NVec3>, Vec<Spring>), SimError> {
    let [nx, ny, nz] = cfg.counts;
    if nx == 0 || ny == 0 || nz == 0 {
        return Err(SimError::InvalidScenario(format!("lattice counts must be positive, got {:?}", cfg.counts)));
    }
    let min = vec3("lattice.min", &cfg.min)?;
    let max = vec3("lattice.max", &cfg.max)?;
    let velocity = match &cfg.velocity {
        Some(v) => vec3("lattice.velocity", v)?,
        None => NVec3::zeros(),
    };

    let counts = [nx, ny, nz];
    let n = nx
        .checked_mul(ny)
        .and_then(|n| n.checked_mul(nz))
        .filter(|n| *n <= MAX_LATTICE_PARTICLES)
        .ok_or_else(|| {
            SimError::InvalidScenario(format!(
                "lattice counts {:?} exceed {MAX_LATTICE_PARTICLES} particles",
                cfg.counts
            ))
        })?;
    let index = |ix: usize, iy: usize, iz: usize| ix + nx * (iy + ny * iz);

    let mut positions = Vec::with_capacity(n);
    for iz in 0..nz {
        for iy in 0..ny {
            for ix in 0..nx {
                let mut x = min;
                for (a, i) in [ix, iy, iz].into_iter().enumerate() {
                    if counts[a] > 1 {
                        let frac = i as f64 / (counts[a] - 1) as f64;
                        x[a] = min[a] + (max[a] - min[a]) * frac;
                    }
                }
                positions.push(x);
            }
        }
    }
    let velocities = vec![velocity; n];

    let offsets: Vec<[i64; 3]> = if cfg.diagonals {
        AXIS_OFFSETS.iter().chain(DIAGONAL_OFFSETS.iter()).copied().collect()
    } else {
        AXIS_OFFSETS.to_vec()
    };

    let mut springs = Vec::new();
    for iz in 0..nz {
        for iy in 0..ny {
            for ix in 0..nx {
                let here = index(ix, iy, iz);
                for off in &offsets {
                    let Some(there) = neighbour([ix, iy, iz], *off, counts) else {
                        continue;
                    };
                    let there = index(there[0], there[1], there[2]);
                    let rest = separation(&positions, here, there);
                    springs.push(Spring::new(base + here, base + there, rest));
                }
            }
        }
    }

    Ok((positions, velocities, springs))
}

// helpers ===========================================================================

/// Convert a YAML list into a 3-vector, rejecting the wrong arity and
/// non-finite components
fn vec3(name: &str, xs: &[f64]) -> Result<NVec3, SimError> {
    match xs {
        [x, y, z] if xs.iter().all(|c| c.is_finite()) => Ok(NVec3::new(*x, *y, *z)),
        [_, _, _] => Err(SimError::InvalidScenario(format!("`{name}` has a non-finite component: {xs:?}"))),
        _ => Err(SimError::InvalidScenario(format!(
            "`{name}` needs 3 components, got {}",
            xs.len()
        ))),
    }
}

fn particle(pc: &ParticleConfig) -> Result<(NVec3, NVec3), SimError> {
    let x = vec3("particle.x", &pc.x)?;
    let v = match &pc.v {
        Some(v) => vec3("particle.v", v)?,
        None => NVec3::zeros(),
    };
    Ok((x, v))
}

fn separation(positions: &[NVec3], i: usize, j: usize) -> f64 {
    vector::length(vector::sub(positions[j], positions[i]))
}

/// Grid coordinates of `at + off`, or `None` if that falls off the lattice
fn neighbour(at: [usize; 3], off: [i64; 3], counts: [usize; 3]) -> Option<[usize; 3]> {
    let mut out = [0usize; 3];
    for a in 0..3 {
        let c = at[a] as i64 + off[a];
        if c < 0 || c >= counts[a] as i64 {
            return None;
        }
        out[a] = c as usize;
    }
    Some(out)
}
