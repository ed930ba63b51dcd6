//! Capsim - Capacitor Charging Simulator
//!
//! Runs the constant-current and constant-voltage charging passes with the
//! built-in parameters and prints a progress line every 200 timesteps.
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=capsim=info capsim --mode both
//! ```

use std::io::{self, BufWriter};

use capsim::{error::Result, ChargingMode, Reporter, SimulationParams, Simulator};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Capacitor charging simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Which charging passes to run
    #[arg(short, long, value_enum, default_value_t = ModeArg::Both)]
    mode: ModeArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    /// Constant-current charging only
    Current,
    /// Constant-voltage (RC) charging only
    Voltage,
    /// Constant current, then constant voltage
    Both,
}

impl ModeArg {
    fn modes(self) -> &'static [ChargingMode] {
        match self {
            ModeArg::Current => &[ChargingMode::ConstantCurrent],
            ModeArg::Voltage => &[ChargingMode::ConstantVoltage],
            ModeArg::Both => &ChargingMode::ALL,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let simulator = Simulator::new(SimulationParams::default())?;

    let stdout = io::stdout();
    let mut reporter = Reporter::new(BufWriter::new(stdout.lock()));
    simulator.run(args.mode.modes(), &mut reporter)?;
    reporter.flush()?;

    Ok(())
}
