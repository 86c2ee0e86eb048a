//! Containment against the fixed world cube `[-1, 1]^3`
//!
//! Each axis is corrected on its own: a particle past a face is pushed back
//! by its overshoot plus `restitution * overshoot`, and the velocity along that
//! axis is reversed and scaled by `restitution`. One pass only, so a large
//! overshoot can still leave the particle outside the cube.

use super::vector::NVec3;

/// Half extent of the world cube on every axis
pub const BOUND: f64 = 1.0;

/// Resolve one coordinate against `[-BOUND, BOUND]`
/// Returns the corrected `(position, velocity)` for that axis
#[inline]
pub fn resolve_axis(p: f64, v: f64, restitution: f64) -> (f64, f64) {
    let excess = p.abs() - BOUND;
    if !(excess > 0.0) {
        return (p, v);
    }

    // push back toward the interior
    let direction = if p > 0.0 { -1.0 } else { 1.0 };
    let rebound = restitution * excess;

    (p + direction * excess + direction * rebound, -restitution * v)
}

/// Resolve all three axes of one particle independently
pub fn resolve_particle(p: NVec3, v: NVec3, restitution: f64) -> (NVec3, NVec3) {
    let mut p_new = p;
    let mut v_new = v;
    for a in 0..3 {
        let (pa, va) = resolve_axis(p[a], v[a], restitution);
        p_new[a] = pa;
        v_new[a] = va;
    }
    (p_new, v_new)
}

/// Apply [`resolve_particle`] to every particle in place
///
/// Returns how many particles touched at least one face.
pub fn resolve_boundary(positions: &mut [NVec3], velocities: &mut [NVec3], restitution: f64) -> usize {
    let mut hits = 0;
    for (p, v) in positions.iter_mut().zip(velocities.iter_mut()) {
        let (p_new, v_new) = resolve_particle(*p, *v, restitution);
        if p_new != *p {
            hits += 1;
        }
        *p = p_new;
        *v = v_new;
    }
    hits
}

/// True when every coordinate lies inside the closed cube
pub fn inside_bounds(p: &NVec3) -> bool {
    p.iter().all(|c| c.abs() <= BOUND)
}
