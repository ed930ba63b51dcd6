//! The capacitor and the trajectory it accumulates.

use crate::circuit::{
    validate_capacitance, InitialConditions, Sample, SimulationParams, MAX_TIMESTEPS,
};
use crate::error::{CapsimError, Result};

/// A capacitor together with its simulated trajectory.
///
/// The three sequences share one length, fixed at construction. `time` is
/// filled once and never written again; `voltage` and `current` are
/// overwritten by each integrator pass.
#[derive(Debug, Clone)]
pub struct Capacitor {
    /// Sample times (seconds), `time[i] = i * dt`
    time: Vec<f64>,
    /// Voltage across the capacitor (volts)
    voltage: Vec<f64>,
    /// Current into the capacitor (amperes)
    current: Vec<f64>,
    /// Capacitance (farads)
    capacitance: f64,
    /// Timestep the time axis was built with (seconds)
    dt: f64,
}

impl Capacitor {
    /// Allocate a trajectory of `params.num_timesteps()` samples.
    ///
    /// Index 0 is preset to zero volts and the constant-current source value,
    /// so the container is ready for a constant-current pass.
    pub fn initialize(capacitance: f64, params: &SimulationParams) -> Result<Self> {
        validate_capacitance(capacitance)?;

        let dt = params.dt;
        let n = params.num_timesteps();
        if n == 0 || n > MAX_TIMESTEPS {
            return Err(CapsimError::invalid_timestep(dt, params.final_time));
        }

        let bad_horizon = || CapsimError::invalid_timestep(dt, params.final_time);
        let mut time = zeroed(n).ok_or_else(bad_horizon)?;
        let mut voltage = zeroed(n).ok_or_else(bad_horizon)?;
        let mut current = zeroed(n).ok_or_else(bad_horizon)?;
        for (i, t) in time.iter_mut().enumerate() {
            *t = i as f64 * dt;
        }
        voltage[0] = 0.0;
        current[0] = params.source_current;

        tracing::debug!(samples = n, capacitance, "trajectory allocated");

        Ok(Self {
            time,
            voltage,
            current,
            capacitance,
            dt,
        })
    }

    /// Check that this trajectory was allocated for `params`.
    ///
    /// Length, timestep and capacitance must all agree; otherwise stepping
    /// with `params` would break `time[i] = i * dt`.
    pub fn check_matches(&self, params: &SimulationParams) -> Result<()> {
        let checks = [
            ("length", params.num_timesteps() as f64, self.len() as f64),
            ("timestep", params.dt, self.dt),
            ("capacitance", params.capacitance, self.capacitance),
        ];
        for (field, expected, actual) in checks {
            if expected != actual {
                return Err(CapsimError::MismatchedTrajectory {
                    field,
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }

    /// Overwrite index 0 with a pass's initial conditions.
    pub fn reset(&mut self, initial: InitialConditions) -> Result<()> {
        if !self.is_allocated() {
            return Err(CapsimError::Released);
        }
        self.voltage[0] = initial.voltage;
        self.current[0] = initial.current;
        Ok(())
    }

    /// Free the trajectory storage. Calling this more than once is a no-op.
    pub fn release(&mut self) {
        if !self.is_allocated() {
            return;
        }
        self.time = Vec::new();
        self.voltage = Vec::new();
        self.current = Vec::new();
        tracing::debug!("trajectory released");
    }

    /// Whether the trajectory storage is still held.
    pub fn is_allocated(&self) -> bool {
        !self.time.is_empty()
    }

    /// Number of samples (0 once released).
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Capacitance in farads.
    pub fn capacitance(&self) -> f64 {
        self.capacitance
    }

    /// Timestep of the time axis in seconds.
    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn voltage(&self) -> &[f64] {
        &self.voltage
    }

    pub fn current(&self) -> &[f64] {
        &self.current
    }

    /// The time axis plus mutable voltage and current, for integrators.
    pub(crate) fn state_mut(&mut self) -> (&[f64], &mut [f64], &mut [f64]) {
        (&self.time, &mut self.voltage, &mut self.current)
    }

    /// Get the sample at `index`, if it exists.
    pub fn sample(&self, index: usize) -> Option<Sample> {
        Some(Sample {
            index,
            time: *self.time.get(index)?,
            voltage: *self.voltage.get(index)?,
            current: *self.current.get(index)?,
        })
    }

    /// The last sample of the trajectory.
    pub fn last_sample(&self) -> Option<Sample> {
        self.len().checked_sub(1).and_then(|i| self.sample(i))
    }

    /// Iterate over all samples in index order.
    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        self.time
            .iter()
            .zip(&self.voltage)
            .zip(&self.current)
            .enumerate()
            .map(|(index, ((&time, &voltage), &current))| Sample {
                index,
                time,
                voltage,
                current,
            })
    }
}

/// A zero-filled buffer of `n` samples, or `None` if it cannot be allocated.
fn zeroed(n: usize) -> Option<Vec<f64>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(n).ok()?;
    buf.resize(n, 0.0);
    Some(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_time_axis() {
        let params = SimulationParams::default();
        let cap = Capacitor::initialize(params.capacitance, &params).unwrap();

        assert_eq!(cap.len(), 50_000);
        assert_eq!(cap.voltage().len(), cap.len());
        assert_eq!(cap.current().len(), cap.len());
        for (i, &t) in cap.time().iter().enumerate() {
            assert_eq!(t, i as f64 * params.dt);
        }
    }

    #[test]
    fn test_initialize_presets_constant_current() {
        let params = SimulationParams::default();
        let cap = Capacitor::initialize(params.capacitance, &params).unwrap();
        let first = cap.sample(0).unwrap();
        assert_eq!(first.voltage, 0.0);
        assert_eq!(first.current, params.source_current);
    }

    #[test]
    fn test_initialize_rejects_bad_capacitance() {
        let params = SimulationParams::default();
        assert!(matches!(
            Capacitor::initialize(0.0, &params),
            Err(CapsimError::InvalidCapacitance { .. })
        ));
        assert!(matches!(
            Capacitor::initialize(-100e-12, &params),
            Err(CapsimError::InvalidCapacitance { .. })
        ));
    }

    #[test]
    fn test_initialize_rejects_empty_horizon() {
        let params = SimulationParams::new().with_final_time(0.0);
        assert!(matches!(
            Capacitor::initialize(params.capacitance, &params),
            Err(CapsimError::InvalidTimestep { .. })
        ));
    }

    #[test]
    fn test_initialize_rejects_oversized_horizon() {
        let params = SimulationParams::new().with_timestep(1e-300);
        assert!(matches!(
            Capacitor::initialize(params.capacitance, &params),
            Err(CapsimError::InvalidTimestep { .. })
        ));
    }

    #[test]
    fn test_check_matches() {
        let params = SimulationParams::new().with_final_time(2e-8);
        let cap = Capacitor::initialize(params.capacitance, &params).unwrap();
        assert_eq!(cap.dt(), params.dt);
        assert!(cap.check_matches(&params).is_ok());

        let other_dt = params.clone().with_timestep(2e-10);
        assert!(matches!(
            cap.check_matches(&other_dt),
            Err(CapsimError::MismatchedTrajectory { field: "length", .. })
        ));

        let other_c = params.clone().with_capacitance(200e-12);
        assert!(matches!(
            cap.check_matches(&other_c),
            Err(CapsimError::MismatchedTrajectory { field: "capacitance", .. })
        ));
    }

    #[test]
    fn test_check_matches_timestep_with_equal_length() {
        let params = SimulationParams::new().with_timestep(1.0).with_final_time(4.0);
        let cap = Capacitor::initialize(params.capacitance, &params).unwrap();
        let stretched = params.clone().with_timestep(2.0).with_final_time(8.0);
        assert_eq!(stretched.num_timesteps(), cap.len());
        assert!(matches!(
            cap.check_matches(&stretched),
            Err(CapsimError::MismatchedTrajectory { field: "timestep", .. })
        ));
    }

    #[test]
    fn test_reset_only_touches_first_sample() {
        let params = SimulationParams::new().with_final_time(1e-9);
        let mut cap = Capacitor::initialize(params.capacitance, &params).unwrap();
        let (_, voltage, current) = cap.state_mut();
        voltage[1] = 3.0;
        current[1] = 4.0;

        cap.reset(InitialConditions { voltage: 1.0, current: 2.0 }).unwrap();

        assert_eq!(cap.voltage()[..2], [1.0, 3.0]);
        assert_eq!(cap.current()[..2], [2.0, 4.0]);
    }

    #[test]
    fn test_release_is_idempotent() {
        let params = SimulationParams::new().with_final_time(1e-9);
        let mut cap = Capacitor::initialize(params.capacitance, &params).unwrap();
        assert!(cap.is_allocated());

        cap.release();
        assert!(!cap.is_allocated());
        assert!(cap.is_empty());
        cap.release();
        assert_eq!(cap.len(), 0);
        assert!(cap.last_sample().is_none());

        let err = cap.reset(InitialConditions { voltage: 0.0, current: 0.0 });
        assert!(matches!(err, Err(CapsimError::Released)));
    }

    #[test]
    fn test_samples_iterator() {
        let params = SimulationParams::new().with_final_time(5e-10);
        let cap = Capacitor::initialize(params.capacitance, &params).unwrap();
        let samples: Vec<Sample> = cap.samples().collect();
        assert_eq!(samples.len(), 5);
        assert_eq!(samples[4].index, 4);
        assert_eq!(cap.last_sample(), Some(samples[4]));
    }
}
