//! Error taxonomy for the mass-spring engine
//!
//! Fatal variants (`NonPositiveMass`, `InvalidSpringIndex`, `LengthMismatch`,
//! `InvalidTimeStep`) reject a whole step before any particle is touched.
//! `DegenerateSpring` is recovered inside the step by dropping that spring's
//! contribution. The vector variants only surface from `simulation::vector`.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Particle mass is zero, negative or NaN
    NonPositiveMass(f64),
    /// A spring references a particle outside `[0, particle_count)`
    InvalidSpringIndex {
        spring: usize,
        index: usize,
        particle_count: usize,
    },
    /// A spring connects a particle to itself
    SelfLoopSpring { spring: usize, index: usize },
    /// Spring endpoints coincide, so the spring has no direction
    DegenerateSpring { p0: usize, p1: usize },
    /// `normalize` of a zero-length vector
    DegenerateVector,
    /// Component-wise division by zero
    ZeroDivisor,
    /// Position and velocity sequences differ in length
    LengthMismatch { positions: usize, velocities: usize },
    /// dt is negative or not finite
    InvalidTimeStep(f64),
    /// A physical constant is out of its allowed range
    InvalidParameter { name: &'static str, value: f64 },
    /// Scenario description could not be turned into a runtime scene
    InvalidScenario(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveMass(m) => write!(f, "particle mass must be positive, got {m}"),
            Self::InvalidSpringIndex { spring, index, particle_count } => write!(
                f,
                "spring {spring} references particle {index} but only {particle_count} particles exist"
            ),
            Self::SelfLoopSpring { spring, index } => {
                write!(f, "spring {spring} connects particle {index} to itself")
            }
            Self::DegenerateSpring { p0, p1 } => {
                write!(f, "spring between particles {p0} and {p1} has coincident endpoints")
            }
            Self::DegenerateVector => write!(f, "cannot normalize a zero-length vector"),
            Self::ZeroDivisor => write!(f, "division of a vector by zero"),
            Self::LengthMismatch { positions, velocities } => write!(
                f,
                "{positions} positions but {velocities} velocities"
            ),
            Self::InvalidTimeStep(dt) => write!(f, "time step must be finite and non-negative, got {dt}"),
            Self::InvalidParameter { name, value } => write!(f, "invalid value {value} for `{name}`"),
            Self::InvalidScenario(msg) => write!(f, "invalid scenario: {msg}"),
        }
    }
}

impl std::error::Error for SimError {}
