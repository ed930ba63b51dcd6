//! Simulation parameters.

use crate::error::Result;

use super::validate::validate_params;

/// Timestep in seconds.
pub const DEFAULT_TIMESTEP: f64 = 1e-10;

/// Simulation horizon in seconds.
pub const DEFAULT_FINAL_TIME: f64 = 5e-6;

/// Series resistance for constant-voltage charging (ohms).
pub const DEFAULT_RESISTANCE: f64 = 1e3;

/// Capacitance (farads).
pub const DEFAULT_CAPACITANCE: f64 = 100e-12;

/// Source current for constant-current charging (amperes).
pub const DEFAULT_SOURCE_CURRENT: f64 = 1e-2;

/// Source voltage for constant-voltage charging (volts).
pub const DEFAULT_SOURCE_VOLTAGE: f64 = 10.0;

/// A progress line is reported every this many timesteps.
pub const DEFAULT_REPORT_INTERVAL: usize = 200;

/// Upper bound on the trajectory length.
///
/// Three `f64` sequences of this length take 1.2 GB; a horizon needing more
/// samples is rejected as an invalid timestep.
pub const MAX_TIMESTEPS: usize = 50_000_000;

/// The immutable parameter set shared by both integrators.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParams {
    /// Timestep (seconds).
    pub dt: f64,
    /// Simulation horizon (seconds).
    pub final_time: f64,
    /// Series resistance used in constant-voltage mode (ohms).
    pub resistance: f64,
    /// Capacitance (farads).
    pub capacitance: f64,
    /// Constant-current source value (amperes).
    pub source_current: f64,
    /// Constant-voltage source value (volts).
    pub source_voltage: f64,
    /// Timesteps between progress lines.
    pub report_interval: usize,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            dt: DEFAULT_TIMESTEP,
            final_time: DEFAULT_FINAL_TIME,
            resistance: DEFAULT_RESISTANCE,
            capacitance: DEFAULT_CAPACITANCE,
            source_current: DEFAULT_SOURCE_CURRENT,
            source_voltage: DEFAULT_SOURCE_VOLTAGE,
            report_interval: DEFAULT_REPORT_INTERVAL,
        }
    }
}

impl SimulationParams {
    /// Create a parameter set with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timestep (seconds).
    pub fn with_timestep(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    /// Set the simulation horizon (seconds).
    pub fn with_final_time(mut self, final_time: f64) -> Self {
        self.final_time = final_time;
        self
    }

    /// Set the series resistance (ohms).
    pub fn with_resistance(mut self, resistance: f64) -> Self {
        self.resistance = resistance;
        self
    }

    /// Set the capacitance (farads).
    pub fn with_capacitance(mut self, capacitance: f64) -> Self {
        self.capacitance = capacitance;
        self
    }

    /// Set the constant-current source value (amperes).
    pub fn with_source_current(mut self, current: f64) -> Self {
        self.source_current = current;
        self
    }

    /// Set the constant-voltage source value (volts).
    pub fn with_source_voltage(mut self, voltage: f64) -> Self {
        self.source_voltage = voltage;
        self
    }

    /// Set how many timesteps separate two progress lines.
    pub fn with_report_interval(mut self, interval: usize) -> Self {
        self.report_interval = interval;
        self
    }

    /// Number of samples in the trajectory, `floor(final_time / dt)`.
    ///
    /// Returns 0 when the ratio is not a finite, non-negative number, and
    /// saturates at `usize::MAX` for ratios beyond it.
    pub fn num_timesteps(&self) -> usize {
        let ratio = (self.final_time / self.dt).floor();
        if ratio.is_finite() && ratio >= 0.0 {
            ratio as usize
        } else {
            0
        }
    }

    /// RC time constant in seconds.
    pub fn time_constant(&self) -> f64 {
        self.resistance * self.capacitance
    }

    /// Check every parameter, failing on the first bad one.
    pub fn validate(&self) -> Result<()> {
        validate_params(self)
    }
}
