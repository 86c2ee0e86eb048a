//! 3D vector arithmetic for the particle state
//!
//! `NVec3` is nalgebra's `Vector3<f64>`, a `Copy` value type: every function
//! here takes its inputs by value and returns a fresh vector, so no two
//! particles ever share storage.

use nalgebra::Vector3;

use crate::error::SimError;

pub type NVec3 = Vector3<f64>;

/// Component-wise sum
#[inline]
pub fn add(a: NVec3, b: NVec3) -> NVec3 {
    a + b
}

/// Component-wise difference `a - b`
#[inline]
pub fn sub(a: NVec3, b: NVec3) -> NVec3 {
    a - b
}

#[inline]
pub fn scale(v: NVec3, s: f64) -> NVec3 {
    v * s
}

/// Divide every component by `s`
/// - fails with [`SimError::ZeroDivisor`] when `s == 0`
#[inline]
pub fn div(v: NVec3, s: f64) -> Result<NVec3, SimError> {
    if s == 0.0 {
        return Err(SimError::ZeroDivisor);
    }
    Ok(v / s)
}

#[inline]
pub fn dot(a: NVec3, b: NVec3) -> f64 {
    a.dot(&b)
}

/// Euclidean norm
#[inline]
pub fn length(v: NVec3) -> f64 {
    v.norm()
}

/// Unit vector along `v`
/// - fails with [`SimError::DegenerateVector`] when `length(v) == 0`
#[inline]
pub fn normalize(v: NVec3) -> Result<NVec3, SimError> {
    let len = length(v);
    if len == 0.0 {
        return Err(SimError::DegenerateVector);
    }
    Ok(v / len)
}
