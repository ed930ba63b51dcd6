//! Time-stepping solver.
//!
//! Both charging modes are integrated with the explicit (forward) Euler
//! method at a fixed timestep:
//!
//! ```text
//! x[t] = x[t-1] + dt * f(x[t-1])
//! ```
//!
//! [`Simulator`] drives the passes; [`analytic`] holds the exact solutions
//! used to check them.

pub mod analytic;
mod euler;
mod simulator;

pub use euler::{constant_current_charge, constant_voltage_charge};
pub use simulator::{PassSummary, Simulator};
