//! Component models for the charging circuit.
//!
//! - [`Capacitor`]: the capacitor and the trajectory it accumulates
//! - [`CurrentSource`], [`VoltageSource`]: the two excitation sources

mod capacitor;
mod sources;

pub use capacitor::Capacitor;
pub use sources::{CurrentSource, VoltageSource};
