//! Pass orchestration.

use std::io::Write;

use crate::circuit::{ChargingMode, Sample, SimulationParams};
use crate::components::Capacitor;
use crate::error::{CapsimError, Result};
use crate::report::Reporter;

use super::{analytic, constant_current_charge, constant_voltage_charge};

/// Outcome of one integrator pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PassSummary {
    /// Mode that was simulated
    pub mode: ChargingMode,
    /// Number of Euler steps taken
    pub steps: usize,
    /// Last sample of the trajectory
    pub final_sample: Sample,
    /// Largest |v_euler - v_exact| over the pass (volts)
    pub max_voltage_error: f64,
}

/// Runs charging passes over a shared trajectory.
#[derive(Debug, Clone)]
pub struct Simulator {
    params: SimulationParams,
}

impl Simulator {
    /// Create a simulator, rejecting bad parameters before anything runs.
    pub fn new(params: SimulationParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Get the parameters.
    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    /// Run each mode in order over one container, then release it.
    ///
    /// The container is reset to the mode's initial conditions before each
    /// pass, so passes never see each other's index 0.
    pub fn run<W: Write>(
        &self,
        modes: &[ChargingMode],
        reporter: &mut Reporter<W>,
    ) -> Result<Vec<PassSummary>> {
        let mut cap = Capacitor::initialize(self.params.capacitance, &self.params)?;

        let summaries = modes
            .iter()
            .map(|&mode| self.run_mode(&mut cap, mode, reporter))
            .collect::<Result<Vec<_>>>()?;

        cap.release();
        Ok(summaries)
    }

    /// Run a single pass: header, reset, integrate.
    pub fn run_mode<W: Write>(
        &self,
        cap: &mut Capacitor,
        mode: ChargingMode,
        reporter: &mut Reporter<W>,
    ) -> Result<PassSummary> {
        let _span = tracing::info_span!("pass", %mode).entered();

        if cap.is_allocated() {
            cap.check_matches(&self.params)?;
        }
        reporter.header(mode)?;
        cap.reset(mode.initial_conditions(&self.params))?;

        let steps = match mode {
            ChargingMode::ConstantCurrent => constant_current_charge(cap, &self.params, reporter)?,
            ChargingMode::ConstantVoltage => constant_voltage_charge(cap, &self.params, reporter)?,
        };

        let final_sample = cap.last_sample().ok_or(CapsimError::Released)?;
        let max_voltage_error = cap
            .samples()
            .map(|s| (s.voltage - analytic::voltage(mode, &self.params, s.time)).abs())
            .fold(0.0, f64::max);

        tracing::info!(
            steps,
            final_voltage = final_sample.voltage,
            final_current = final_sample.current,
            max_voltage_error,
            "pass complete"
        );

        Ok(PassSummary {
            mode,
            steps,
            final_sample,
            max_voltage_error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_new_rejects_bad_params() {
        let err = Simulator::new(SimulationParams::new().with_capacitance(0.0)).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_run_both_modes() {
        let sim = Simulator::new(SimulationParams::default()).unwrap();
        let summaries = sim.run(&ChargingMode::ALL, &mut Reporter::sink()).unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].mode, ChargingMode::ConstantCurrent);
        assert_eq!(summaries[0].steps, 49_999);
        assert_abs_diff_eq!(summaries[0].final_sample.voltage, 499.99, epsilon = 1e-6);
        assert_abs_diff_eq!(summaries[1].final_sample.voltage, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_second_pass_starts_from_its_own_initial_conditions() {
        let params = SimulationParams::new().with_final_time(2e-8);
        let sim = Simulator::new(params.clone()).unwrap();
        let mut cap = Capacitor::initialize(params.capacitance, &params).unwrap();

        sim.run_mode(&mut cap, ChargingMode::ConstantCurrent, &mut Reporter::sink()).unwrap();
        sim.run_mode(&mut cap, ChargingMode::ConstantVoltage, &mut Reporter::sink()).unwrap();

        let mut fresh = Capacitor::initialize(params.capacitance, &params).unwrap();
        sim.run_mode(&mut fresh, ChargingMode::ConstantVoltage, &mut Reporter::sink()).unwrap();

        assert_eq!(cap.voltage(), fresh.voltage());
        assert_eq!(cap.current(), fresh.current());
    }

    #[test]
    fn test_run_mode_rejects_foreign_container() {
        let params = SimulationParams::new().with_final_time(2e-8);
        let sim = Simulator::new(params).unwrap();
        let other = SimulationParams::new()
            .with_final_time(2e-8)
            .with_capacitance(200e-12)
            .with_timestep(2e-10);
        let mut cap = Capacitor::initialize(other.capacitance, &other).unwrap();
        let mut reporter = Reporter::new(Vec::new());

        let err = sim
            .run_mode(&mut cap, ChargingMode::ConstantVoltage, &mut reporter)
            .unwrap_err();
        assert!(matches!(err, CapsimError::MismatchedTrajectory { .. }));
        assert_eq!(cap.current()[0], other.source_current);
        assert!(reporter.into_inner().is_empty());
    }

    #[test]
    fn test_euler_error_is_small() {
        let sim = Simulator::new(SimulationParams::default()).unwrap();
        let summaries = sim.run(&ChargingMode::ALL, &mut Reporter::sink()).unwrap();
        for s in &summaries {
            assert!(s.max_voltage_error < 1e-2, "{:?} error {}", s.mode, s.max_voltage_error);
        }
    }
}
