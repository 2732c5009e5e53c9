use core::time::Duration;
use std::{hint::black_box, io::Write, time::Instant};

use log::{debug, info, trace};

use crate::{report, BenchConfig, InputSequence, Result, Strategy};

/// Times a single call. Split out so tests can feed scripted durations.
pub trait Stopwatch {
    fn time<R>(&mut self, f: impl FnOnce() -> R) -> (R, Duration);
}

/// Backed by `Instant`, which is monotonic and nanosecond resolution on the
/// platforms we care about.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonotonicStopwatch;

impl Stopwatch for MonotonicStopwatch {
    #[inline]
    fn time<R>(&mut self, f: impl FnOnce() -> R) -> (R, Duration) {
        let start = Instant::now();
        let out = f();
        (out, start.elapsed())
    }
}

/// One row of a results table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrialResult {
    pub size: usize,
    pub result: i64,
    pub min_elapsed_secs: f64,
    pub estimated_cycles: f64,
    pub throughput: f64,
}

impl TrialResult {
    pub fn derive(size: usize, result: i64, min_elapsed: Duration, cpu_frequency_hz: f64) -> Self {
        let min_elapsed_secs = min_elapsed.as_secs_f64();
        let estimated_cycles = min_elapsed_secs * cpu_frequency_hz;
        // 0 / 0 would be NaN, an empty input did no adds
        let throughput = if size == 0 {
            0.0
        } else {
            size as f64 / estimated_cycles
        };
        Self {
            size,
            result,
            min_elapsed_secs,
            estimated_cycles,
            throughput,
        }
    }

    #[inline]
    pub fn cycles_truncated(&self) -> u64 {
        self.estimated_cycles as u64
    }
}

pub struct Runner<S = MonotonicStopwatch> {
    config: BenchConfig,
    stopwatch: S,
}

impl Runner<MonotonicStopwatch> {
    pub fn new(config: BenchConfig) -> Result<Self> {
        Self::with_stopwatch(config, MonotonicStopwatch)
    }
}

impl<S> Runner<S>
where
    S: Stopwatch,
{
    pub fn with_stopwatch(config: BenchConfig, stopwatch: S) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, stopwatch })
    }

    #[inline]
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Runs `strategy` over `seq` `runs` times and keeps the fastest one. The
    /// reported result is the one from the last repetition.
    pub fn measure(&mut self, strategy: Strategy, seq: &InputSequence) -> TrialResult {
        let size = seq.len();
        let mut min_elapsed = Duration::MAX;
        let mut result = 0;

        for run in 0..self.config.runs {
            let (sum, elapsed) = self
                .stopwatch
                .time(|| black_box(strategy.sum(size, black_box(seq.as_slice()))));
            trace!("{} size={} run={} elapsed={:?}", strategy, size, run, elapsed);
            if elapsed < min_elapsed {
                min_elapsed = elapsed;
            }
            result = sum;
        }

        let trial = TrialResult::derive(size, result, min_elapsed, self.config.cpu_frequency_hz);
        debug!(
            "{} over {:?}: min={:.9}s cycles={:.0} adds/cycle={:.6}",
            strategy, seq, trial.min_elapsed_secs, trial.estimated_cycles, trial.throughput
        );
        trial
    }

    /// Measures every configured size in order and streams the table to `out`.
    pub fn run_strategy<W: Write>(
        &mut self,
        strategy: Strategy,
        out: &mut W,
    ) -> Result<Vec<TrialResult>> {
        info!(
            "running {} over {} sizes, {} runs each",
            strategy,
            self.config.sizes.len(),
            self.config.runs
        );
        report::write_header(out, strategy.name())?;

        let sizes = self.config.sizes.clone();
        let mut trials = Vec::with_capacity(sizes.len());
        for size in sizes {
            // built fresh per size and outside the timed region
            let seq = InputSequence::arange(size);
            let trial = self.measure(strategy, &seq);
            report::write_row(out, &trial)?;
            out.flush()?;
            trials.push(trial);
        }

        report::write_footer(out)?;
        Ok(trials)
    }

    pub fn run_all<W: Write>(&mut self, out: &mut W) -> Result<Vec<(Strategy, Vec<TrialResult>)>> {
        let strategies = self.config.strategies.clone();
        strategies
            .into_iter()
            .map(|strategy| Ok((strategy, self.run_strategy(strategy, out)?)))
            .collect()
    }
}

#[cfg(test)]
#[path = "./runner_test.rs"]
mod tests;
