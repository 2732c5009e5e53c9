use crate::{BenchError, Result, Strategy};

/// 4.4 GHz all-core turbo.
pub const DEFAULT_CPU_FREQUENCY_HZ: f64 = 4_400_000_000.0;
pub const DEFAULT_RUNS: usize = 2;
pub const DEFAULT_SIZES: [usize; 5] = [5000, 20000, 312500, 6000000, 25000000];

/// Knobs for a benchmark run. The frequency is only used to turn elapsed time
/// into an estimated cycle count, it is never read from the hardware.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchConfig {
    pub cpu_frequency_hz: f64,
    pub runs: usize,
    pub sizes: Vec<usize>,
    pub strategies: Vec<Strategy>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            cpu_frequency_hz: DEFAULT_CPU_FREQUENCY_HZ,
            runs: DEFAULT_RUNS,
            sizes: DEFAULT_SIZES.to_vec(),
            strategies: Strategy::CORE.to_vec(),
        }
    }
}

impl BenchConfig {
    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    pub fn with_cpu_frequency(mut self, hz: f64) -> Self {
        self.cpu_frequency_hz = hz;
        self
    }

    pub fn with_sizes(mut self, sizes: &[usize]) -> Self {
        self.sizes = sizes.to_vec();
        self
    }

    pub fn with_strategies(mut self, strategies: &[Strategy]) -> Self {
        self.strategies = strategies.to_vec();
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.runs == 0 {
            return Err(BenchError::InvalidRuns(self.runs));
        }
        if !self.cpu_frequency_hz.is_finite() || self.cpu_frequency_hz <= 0.0 {
            return Err(BenchError::InvalidFrequency(self.cpu_frequency_hz));
        }
        Ok(())
    }
}
