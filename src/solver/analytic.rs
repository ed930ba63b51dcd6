//! Closed-form solutions of the two charging circuits.
//!
//! These are the continuous-time responses the Euler integrators
//! approximate, used to measure discretization error.

use crate::circuit::{ChargingMode, SimulationParams};

/// Capacitor voltage under constant current: `v(t) = I t / C`.
pub fn constant_current_voltage(params: &SimulationParams, t: f64) -> f64 {
    params.source_current * t / params.capacitance
}

/// Charging current through the series resistor: `i(t) = (V0 / R) e^{-t/RC}`.
pub fn rc_current(params: &SimulationParams, t: f64) -> f64 {
    params.source_voltage / params.resistance * (-t / params.time_constant()).exp()
}

/// Capacitor voltage under RC charging: `v(t) = V0 (1 - e^{-t/RC})`.
pub fn rc_voltage(params: &SimulationParams, t: f64) -> f64 {
    params.source_voltage * (1.0 - (-t / params.time_constant()).exp())
}

/// Exact capacitor voltage at time `t` for the given mode.
pub fn voltage(mode: ChargingMode, params: &SimulationParams, t: f64) -> f64 {
    match mode {
        ChargingMode::ConstantCurrent => constant_current_voltage(params, t),
        ChargingMode::ConstantVoltage => rc_voltage(params, t),
    }
}

/// Exact capacitor current at time `t` for the given mode.
pub fn current(mode: ChargingMode, params: &SimulationParams, t: f64) -> f64 {
    match mode {
        ChargingMode::ConstantCurrent => params.source_current,
        ChargingMode::ConstantVoltage => rc_current(params, t),
    }
}
