//! Simulation parameters and the value types shared across the crate.
//!
//! [`SimulationParams`] holds the single immutable parameter set. It is
//! validated once, up front, and then passed by reference into every
//! integrator call.

mod params;
mod types;
mod validate;

pub use params::*;
pub use types::{ChargingMode, InitialConditions, Sample};
pub use validate::{validate_capacitance, validate_params, validate_resistance};
