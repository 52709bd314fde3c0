// Report
use std::fmt;
use std::io::{self, Write};
use std::time::Duration;

use crate::engine::controller::RunSummary;

fn millis(d: Duration) -> f64 {
    d.as_secs_f64() * 1_000.0
}

/// The fixed-format summary printed on stdout.
impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "File: {} ({} numbers)", self.path.display(), self.numbers)?;
        if self.skipped > 0 {
            writeln!(f, "Skipped: {} malformed lines", self.skipped)?;
        }

        writeln!(f)?;
        writeln!(f, "[Single-Threaded]")?;
        writeln!(f, "  Primes found: {}", self.sequential.primes)?;
        writeln!(f, "  Time: {:.3} ms", millis(self.sequential.elapsed))?;

        writeln!(f)?;
        writeln!(f, "[Multi-Threaded] ({} threads)", self.threads)?;
        writeln!(f, "  Primes found: {}", self.parallel.primes)?;
        writeln!(f, "  Time: {:.3} ms", millis(self.parallel.elapsed))?;

        if let Some(speedup) = self.speedup() {
            writeln!(f)?;
            writeln!(f, "Speedup: {speedup:.2}x")?;
        }
        Ok(())
    }
}

pub fn render(summary: &RunSummary) -> String {
    summary.to_string()
}

pub fn print(summary: &RunSummary, mut w: impl Write) -> io::Result<()> {
    write!(w, "{summary}")?;
    w.flush()
}
