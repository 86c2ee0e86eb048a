use std::time::Instant;

use crate::configuration::config::LatticeConfig;
use crate::error::SimError;
use crate::simulation::integrator::advance;
use crate::simulation::params::SimParams;
use crate::simulation::scenario::lattice;
use crate::simulation::states::SimulationState;
use crate::simulation::vector::NVec3;

/// Helper to build a cubic lattice with `side^3` particles
fn make_lattice(side: usize, diagonals: bool) -> Result<SimulationState, SimError> {
    let cfg = LatticeConfig {
        counts: [side, side, side],
        min: vec![-0.5, -0.5, -0.5],
        max: vec![0.5, 0.5, 0.5],
        velocity: Some(vec![0.3, 0.0, -0.2]),
        diagonals,
    };

    let (positions, velocities, springs) = lattice(&cfg, 0)?;
    SimulationState::new(positions, velocities, springs)
}

/// Helper to build a fixed parameter set
fn make_params() -> SimParams {
    SimParams {
        stiffness: 50.0,
        damping: 0.5,
        mass: 0.1,
        gravity: NVec3::new(0.0, -9.8, 0.0),
        restitution: 0.8,
    }
}

/// Time `steps` calls to `advance` on a lattice, in milliseconds per step
fn time_steps(state: &mut SimulationState, params: &SimParams, steps: usize) -> f64 {
    let dt = 0.001;
    let t0 = Instant::now();
    for _ in 0..steps {
        if let Err(e) = advance(state, params, dt) {
            ftlog::warn!("benchmark step rejected: {e}");
            break;
        }
    }
    t0.elapsed().as_secs_f64() * 1000.0 / steps as f64
}

pub fn bench_step() -> Result<(), SimError> {
    // Lattice sides to test, particle count grows with side^3
    let sides = [4, 8, 12, 16, 24, 32];
    let steps = 20;
    let params = make_params();

    for side in sides {
        // Axis springs only
        let mut sparse = make_lattice(side, false)?;
        // Warm up
        time_steps(&mut sparse, &params, 1);
        let ms_sparse = time_steps(&mut sparse, &params, steps);

        // Axis + diagonal springs
        let mut dense = make_lattice(side, true)?;
        time_steps(&mut dense, &params, 1);
        let ms_dense = time_steps(&mut dense, &params, steps);

        println!(
            "N = {:6}, axis springs = {:7}, step = {:8.4} ms,   all springs = {:7}, step = {:8.4} ms",
            sparse.particle_count(),
            sparse.spring_slice().len(),
            ms_sparse,
            dense.spring_slice().len(),
            ms_dense
        );
    }

    Ok(())
}

/// Benchmark `advance` for a range of lattice sizes
/// Paste output directly into a spreadsheet to graph
pub fn bench_step_curve() -> Result<(), SimError> {
    println!("N,springs,step_ms");

    let params = make_params();
    for side in (2..=40).step_by(2) {
        // Small lattices: average over more steps to smooth noise
        let steps = if side <= 16 { 50 } else { 5 };

        let mut state = make_lattice(side, true)?;
        let ms = time_steps(&mut state, &params, steps);

        println!("{},{},{:.6}", state.particle_count(), state.spring_slice().len(), ms);
    }

    Ok(())
}
