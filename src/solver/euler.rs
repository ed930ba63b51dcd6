//! Forward-Euler integrators for the two charging modes.
//!
//! Both integrators walk the trajectory from index 1 to the end. Each step
//! reads only the previous index, so a pass is fully determined by the
//! values in index 0 and the parameters.

use std::io::Write;

use crate::circuit::{validate_resistance, Sample, SimulationParams};
use crate::components::Capacitor;
use crate::error::{CapsimError, Result};
use crate::report::Reporter;

/// Charge the capacitor from an ideal current source.
///
/// Expects index 0 to hold `v = 0` and `i = I`. For every later index:
///
/// ```text
/// v[t] = v[t-1] + i[t-1] * dt / C
/// i[t] = I
/// ```
///
/// Returns the number of steps taken.
pub fn constant_current_charge<W: Write>(
    cap: &mut Capacitor,
    params: &SimulationParams,
    reporter: &mut Reporter<W>,
) -> Result<usize> {
    let interval = check_preconditions(cap, params)?;
    let dt = params.dt;
    let c = cap.capacitance();
    let source_current = params.source_current;

    let (time, voltage, current) = cap.state_mut();
    let n = time.len();
    let _span = tracing::info_span!("constant_current_charge", steps = n - 1).entered();

    for t in 1..n {
        voltage[t] = voltage[t - 1] + current[t - 1] * dt / c;
        current[t] = source_current;
        if t % interval == 0 {
            reporter.progress(&Sample {
                index: t,
                time: time[t],
                voltage: voltage[t],
                current: current[t],
            })?;
        }
    }

    tracing::debug!(final_voltage = voltage[n - 1], "constant current pass complete");
    Ok(n - 1)
}

/// Charge the capacitor from an ideal voltage source through a resistor.
///
/// Expects index 0 to hold `v = 0` and `i = V0 / R`. For every later index:
///
/// ```text
/// i[t] = i[t-1] - i[t-1] * dt / (R * C)
/// v[t] = V0 - i[t] * R
/// ```
///
/// Returns the number of steps taken.
pub fn constant_voltage_charge<W: Write>(
    cap: &mut Capacitor,
    params: &SimulationParams,
    reporter: &mut Reporter<W>,
) -> Result<usize> {
    let interval = check_preconditions(cap, params)?;
    validate_resistance(params.resistance)?;
    let dt = params.dt;
    let r = params.resistance;
    let rc = r * cap.capacitance();
    let source_voltage = params.source_voltage;

    let (time, voltage, current) = cap.state_mut();
    let n = time.len();
    let _span = tracing::info_span!("constant_voltage_charge", steps = n - 1, tau = rc).entered();

    for t in 1..n {
        current[t] = current[t - 1] - (current[t - 1] * dt) / rc;
        voltage[t] = source_voltage - current[t] * r;
        if t % interval == 0 {
            reporter.progress(&Sample {
                index: t,
                time: time[t],
                voltage: voltage[t],
                current: current[t],
            })?;
        }
    }

    tracing::debug!(
        final_voltage = voltage[n - 1],
        final_current = current[n - 1],
        "constant voltage pass complete"
    );
    Ok(n - 1)
}

/// Shared checks; returns the report interval.
fn check_preconditions(cap: &Capacitor, params: &SimulationParams) -> Result<usize> {
    if !cap.is_allocated() {
        return Err(CapsimError::Released);
    }
    cap.check_matches(params)?;
    if params.report_interval == 0 {
        return Err(CapsimError::InvalidReportInterval);
    }
    Ok(params.report_interval)
}
