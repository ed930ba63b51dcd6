//! Error types for the capacitor charging simulator.
//!
//! Every parameter problem is reported by [`CapsimError`] before any time
//! stepping starts. The stepping loops themselves only fail when the progress
//! report cannot be written.

use thiserror::Error;

/// Result type alias using [`CapsimError`].
pub type Result<T> = std::result::Result<T, CapsimError>;

/// Unified error type for all capsim operations.
#[derive(Error, Debug)]
pub enum CapsimError {
    // ============ Parameter Errors ============
    /// Capacitance is zero, negative, or not a finite number
    #[error("Invalid capacitance {value:.3e} F: must be positive and finite")]
    InvalidCapacitance { value: f64 },

    /// Series resistance is zero, negative, or not a finite number
    #[error("Invalid resistance {value:.3e} ohm: must be positive and finite")]
    InvalidResistance { value: f64 },

    /// Timestep yields no samples, or more than the trajectory limit
    #[error("Invalid timestep {dt:.3e} s for horizon {final_time:.3e} s: bad sample count")]
    InvalidTimestep { dt: f64, final_time: f64 },

    /// Progress report interval of zero
    #[error("Report interval must be at least one timestep")]
    InvalidReportInterval,

    // ============ State Errors ============
    /// Trajectory storage has already been released
    #[error("Capacitor trajectory has been released")]
    Released,

    /// Trajectory was allocated for a different parameter set
    #[error("Trajectory {field} is {actual:e}, simulation expects {expected:e}")]
    MismatchedTrajectory {
        field: &'static str,
        expected: f64,
        actual: f64,
    },

    // ============ I/O Errors ============
    /// Error writing the progress report
    #[error("Failed to write report: {source}")]
    Output {
        #[from]
        source: std::io::Error,
    },
}

impl CapsimError {
    /// Create an invalid timestep error
    pub fn invalid_timestep(dt: f64, final_time: f64) -> Self {
        Self::InvalidTimestep { dt, final_time }
    }

    /// Whether this error was caused by a bad simulation parameter.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidCapacitance { .. }
                | Self::InvalidResistance { .. }
                | Self::InvalidTimestep { .. }
                | Self::InvalidReportInterval
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_errors() {
        assert!(CapsimError::InvalidCapacitance { value: 0.0 }.is_configuration());
        assert!(CapsimError::invalid_timestep(-1.0, 1.0).is_configuration());
        assert!(!CapsimError::Released.is_configuration());
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: CapsimError = io.into();
        assert!(matches!(err, CapsimError::Output { .. }));
        assert!(err.to_string().contains("pipe closed"));
    }
}
