//! Voltage and current sources driving the capacitor.

use crate::circuit::{ChargingMode, InitialConditions, SimulationParams};

/// An ideal current source.
///
/// The source forces the same current into the capacitor at every timestep,
/// regardless of the voltage across it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentSource {
    /// Source current (amperes)
    pub current: f64,
}

impl CurrentSource {
    /// Create a new current source.
    pub fn new(current: f64) -> Self {
        Self { current }
    }

    /// Build the source from the simulation parameters.
    pub fn from_params(params: &SimulationParams) -> Self {
        Self::new(params.source_current)
    }

    /// Uncharged capacitor with the full source current flowing.
    pub fn initial_conditions(&self) -> InitialConditions {
        InitialConditions {
            voltage: 0.0,
            current: self.current,
        }
    }
}

/// An ideal voltage source in series with a resistor.
///
/// The charging current is limited by the resistor: `i = (V0 - v_c) / R`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoltageSource {
    /// Source voltage (volts)
    pub voltage: f64,
    /// Series resistance (ohms)
    pub resistance: f64,
}

impl VoltageSource {
    /// Create a new voltage source with a series resistor.
    pub fn new(voltage: f64, resistance: f64) -> Self {
        Self {
            voltage,
            resistance,
        }
    }

    /// Build the source from the simulation parameters.
    pub fn from_params(params: &SimulationParams) -> Self {
        Self::new(params.source_voltage, params.resistance)
    }

    /// Uncharged capacitor, so the whole source voltage drops across the
    /// resistor: `i(0) = V0 / R`.
    pub fn initial_conditions(&self) -> InitialConditions {
        InitialConditions {
            voltage: 0.0,
            current: self.voltage / self.resistance,
        }
    }
}

impl ChargingMode {
    /// Initial conditions for a pass in this mode.
    pub fn initial_conditions(&self, params: &SimulationParams) -> InitialConditions {
        match self {
            ChargingMode::ConstantCurrent => {
                CurrentSource::from_params(params).initial_conditions()
            }
            ChargingMode::ConstantVoltage => {
                VoltageSource::from_params(params).initial_conditions()
            }
        }
    }
}
