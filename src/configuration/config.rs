//! Configuration types for loading mass-spring scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`RunConfig`]        – time step and how many steps to take
//! - [`ParametersConfig`] – physical constants shared by every particle/spring
//! - [`ParticleConfig`]   – initial state for each explicitly listed particle
//! - [`SpringConfig`]     – springs between explicit or generated particles
//! - [`LatticeConfig`]    – optional generated grid of particles and springs
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! A small scenario matching these types:
//!
//! ```yaml
//! run:
//!   dt: 0.005               # fixed step size
//!   steps: 2000             # number of steps to run
//!
//! parameters:
//!   stiffness: 50.0
//!   damping: 0.5
//!   mass: 0.1
//!   gravity: [ 0.0, -9.8, 0.0 ]
//!   restitution: 0.8
//!
//! particles:
//!   - x: [ -0.25, 0.0, 0.0 ]
//!     v: [  0.0,  0.0, 0.0 ]
//!   - x: [  0.25, 0.0, 0.0 ]
//!
//! springs:
//!   - p0: 0
//!     p1: 1
//!     rest: 0.4             # omit to use the initial separation
//!
//! lattice:
//!   counts: [ 3, 3, 3 ]
//!   min: [ -0.3, 0.2, -0.3 ]
//!   max: [  0.3, 0.8,  0.3 ]
//!   diagonals: true
//! ```
//!
//! `Scenario::build_scenario` maps this onto the runtime types and rejects
//! anything the integrator could not step.

use serde::Deserialize;

/// How the driver steps the scene
#[derive(Deserialize, Debug, Clone)]
pub struct RunConfig {
    pub dt: f64, // fixed time step
    pub steps: usize, // number of steps to run
}

/// Physical constants for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub stiffness: f64, // spring constant, > 0
    pub damping: f64, // spring damping, >= 0
    pub mass: f64, // mass of every particle, > 0
    pub gravity: Vec<f64>, // gravitational acceleration, 3 components
    pub restitution: f64, // boundary bounce factor in [0, 1]
}

/// Initial state of one explicitly listed particle
#[derive(Deserialize, Debug, Clone)]
pub struct ParticleConfig {
    pub x: Vec<f64>, // initial position, 3 components
    #[serde(default)]
    pub v: Option<Vec<f64>>, // initial velocity, zero when omitted
}

/// A spring between two particle indices
/// Indices count explicit particles first, then lattice particles
#[derive(Deserialize, Debug, Clone)]
pub struct SpringConfig {
    pub p0: usize,
    pub p1: usize,
    #[serde(default)]
    pub rest: Option<f64>, // rest length, initial separation when omitted
}

/// Regular grid of particles filling an axis-aligned box
/// Neighbours along each axis are joined by springs at their initial separation
#[derive(Deserialize, Debug, Clone)]
pub struct LatticeConfig {
    pub counts: [usize; 3], // particles per axis, each >= 1
    pub min: Vec<f64>, // lower corner
    pub max: Vec<f64>, // upper corner
    #[serde(default)]
    pub velocity: Option<Vec<f64>>, // shared initial velocity
    #[serde(default)]
    pub diagonals: bool, // also join face and body diagonals of each cell
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub run: RunConfig, // stepping controls
    pub parameters: ParametersConfig, // physical constants
    #[serde(default)]
    pub particles: Vec<ParticleConfig>, // explicit particles
    #[serde(default)]
    pub springs: Vec<SpringConfig>, // explicit springs
    #[serde(default)]
    pub lattice: Option<LatticeConfig>, // generated particles and springs
}
