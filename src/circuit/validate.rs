//! Parameter validation.

use crate::error::{CapsimError, Result};

use super::{SimulationParams, MAX_TIMESTEPS};

/// Validate a parameter set for simulation.
///
/// Checks:
/// - Capacitance is positive and finite
/// - Resistance is positive and finite
/// - The timestep yields at least one and at most [`MAX_TIMESTEPS`] samples
/// - The report interval is non-zero
pub fn validate_params(params: &SimulationParams) -> Result<()> {
    validate_capacitance(params.capacitance)?;
    validate_resistance(params.resistance)?;

    let dt = params.dt;
    let final_time = params.final_time;
    if !dt.is_finite() || !final_time.is_finite() || dt <= 0.0 || dt > final_time {
        return Err(CapsimError::invalid_timestep(dt, final_time));
    }
    let n = params.num_timesteps();
    if n == 0 || n > MAX_TIMESTEPS {
        return Err(CapsimError::invalid_timestep(dt, final_time));
    }

    if params.report_interval == 0 {
        return Err(CapsimError::InvalidReportInterval);
    }

    Ok(())
}

/// Reject a non-positive or non-finite capacitance.
pub fn validate_capacitance(capacitance: f64) -> Result<()> {
    if capacitance.is_finite() && capacitance > 0.0 {
        Ok(())
    } else {
        Err(CapsimError::InvalidCapacitance { value: capacitance })
    }
}

/// Reject a non-positive or non-finite resistance.
pub fn validate_resistance(resistance: f64) -> Result<()> {
    if resistance.is_finite() && resistance > 0.0 {
        Ok(())
    } else {
        Err(CapsimError::InvalidResistance { value: resistance })
    }
}
