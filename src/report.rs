use std::io::Write;

use crate::{Result, TrialResult};

pub const TABLE_WIDTH: usize = 100;

pub fn write_header<W: Write>(out: &mut W, name: &str) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Running tests for function: {}", name)?;
    writeln!(out, "{}", "=".repeat(TABLE_WIDTH))?;
    writeln!(
        out,
        "{:<20}{:<25}{:<20}{:<15}{:<15}",
        "Test Size", "Result", "Time Taken (s)", "CPU Cycles", "Adds per Cycle"
    )?;
    writeln!(out, "{}", "-".repeat(TABLE_WIDTH))?;
    Ok(())
}

pub fn write_row<W: Write>(out: &mut W, trial: &TrialResult) -> Result<()> {
    writeln!(
        out,
        "{:<20}{:<25}{:<20.6}{:<15}{:<15.6}",
        trial.size,
        trial.result,
        trial.min_elapsed_secs,
        trial.cycles_truncated(),
        trial.throughput
    )?;
    Ok(())
}

pub fn write_footer<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", "=".repeat(TABLE_WIDTH))?;
    Ok(())
}

/// Renders a whole table at once. The runner streams the same three pieces
/// row by row instead.
pub fn render_table(name: &str, trials: &[TrialResult]) -> Result<String> {
    let mut buf = Vec::new();
    write_header(&mut buf, name)?;
    for trial in trials {
        write_row(&mut buf, trial)?;
    }
    write_footer(&mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
