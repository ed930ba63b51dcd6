//! Core types shared by the container, the sources and the integrators.

use std::fmt;

/// The excitation applied to the capacitor during a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChargingMode {
    /// Ideal current source, linear voltage rise.
    ConstantCurrent,
    /// Ideal voltage source behind a series resistor, exponential rise.
    ConstantVoltage,
}

impl ChargingMode {
    /// Both modes in the order the simulator runs them.
    pub const ALL: [ChargingMode; 2] = [
        ChargingMode::ConstantCurrent,
        ChargingMode::ConstantVoltage,
    ];
}

impl fmt::Display for ChargingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChargingMode::ConstantCurrent => write!(f, "Constant Current Charging"),
            ChargingMode::ConstantVoltage => write!(f, "Constant Voltage Charging"),
        }
    }
}

/// Values written into index 0 before a pass starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialConditions {
    /// Capacitor voltage at t = 0 (volts)
    pub voltage: f64,
    /// Capacitor current at t = 0 (amperes)
    pub current: f64,
}

/// One row of a simulated trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub index: usize,
    pub time: f64,
    pub voltage: f64,
    pub current: f64,
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Timestep {}: Voltage = {:.10} V, Current = {:.10} A",
            self.index, self.voltage, self.current
        )
    }
}
