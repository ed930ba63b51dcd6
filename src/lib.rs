//! # Capsim
//!
//! Simulation of a capacitor charging under two kinds of excitation.
//!
//! This library provides:
//! - A capacitor model that owns its time, voltage and current trajectory
//! - Forward-Euler integrators for constant-current and constant-voltage (RC) charging
//! - Closed-form reference solutions for both circuits
//! - A console reporter that prints periodic progress lines
//!
//! ## Architecture
//!
//! - [`circuit`] - Simulation parameters, validation and shared value types
//! - [`components`] - The capacitor trajectory and the two sources
//! - [`solver`] - Euler integrators and the pass driver
//! - [`report`] - Header and progress-line formatting
//!
//! ## Usage
//!
//! ```no_run
//! use capsim::{ChargingMode, Reporter, SimulationParams, Simulator};
//!
//! let simulator = Simulator::new(SimulationParams::default())?;
//! let mut reporter = Reporter::new(std::io::stdout());
//! simulator.run(&ChargingMode::ALL, &mut reporter)?;
//! # Ok::<(), capsim::CapsimError>(())
//! ```
//!
//! ## Charging Modes
//!
//! With timestep `dt`, capacitance `C`, series resistance `R`:
//!
//! - Constant current `I`: `v[t] = v[t-1] + I dt / C`, a linear ramp.
//! - Constant voltage `V0`: `i[t] = i[t-1] (1 - dt / RC)` and
//!   `v[t] = V0 - i[t] R`, an exponential approach to `V0` with time
//!   constant `RC`.

pub mod circuit;
pub mod components;
pub mod error;
pub mod report;
pub mod solver;

// Re-export main types for convenience
pub use circuit::{ChargingMode, InitialConditions, Sample, SimulationParams};
pub use components::Capacitor;
pub use error::{CapsimError, Result};
pub use report::Reporter;
pub use solver::{PassSummary, Simulator};
