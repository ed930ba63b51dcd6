//! Console progress reporting.
//!
//! Each pass prints a header naming the charging mode, then one line per
//! reported timestep with voltage and current in fixed-point notation.

use std::io::{self, Write};

use crate::circuit::{ChargingMode, Sample};
use crate::error::Result;

/// Writes pass headers and progress lines to any [`Write`] sink.
pub struct Reporter<W: Write> {
    out: W,
    /// Progress lines written so far (headers excluded)
    lines: usize,
}

impl<W: Write> Reporter<W> {
    /// Create a reporter writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out, lines: 0 }
    }

    /// Write the blank separator line and the header for a pass.
    pub fn header(&mut self, mode: ChargingMode) -> Result<()> {
        write!(self.out, "\n{mode}:\n")?;
        Ok(())
    }

    /// Write one progress line.
    pub fn progress(&mut self, sample: &Sample) -> Result<()> {
        writeln!(self.out, "{sample}")?;
        self.lines += 1;
        Ok(())
    }

    /// Number of progress lines written.
    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Consume the reporter and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl Reporter<io::Sink> {
    /// A reporter that discards everything.
    pub fn sink() -> Self {
        Self::new(io::sink())
    }
}
