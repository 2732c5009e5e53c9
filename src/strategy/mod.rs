pub mod scalar;
pub mod simd;

pub use scalar::{BuiltinSum, ElementSum, IndexedSum, Unroll2Sum, Unroll4Sum};
pub use simd::{ParallelSum, Simd128Sum, VectorizedSum};

use crate::BenchError;
use core::{fmt::Display, str::FromStr};

/// A way of adding up `0..size`. Implementations are zero sized and must not
/// touch anything outside `data`.
pub trait Summation {
    const NAME: &'static str;

    fn sum(size: usize, data: &[i64]) -> i64;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Strategy {
    Indexed,
    Elements,
    Vectorized,
    Builtin,

    Unroll2,
    Unroll4,
    Simd128,
    Parallel,
}

impl Strategy {
    /// What the binary runs, in print order.
    pub const CORE: [Strategy; 4] = [
        Strategy::Indexed,
        Strategy::Elements,
        Strategy::Vectorized,
        Strategy::Builtin,
    ];

    pub const ALL: [Strategy; 8] = [
        Strategy::Indexed,
        Strategy::Elements,
        Strategy::Vectorized,
        Strategy::Builtin,
        Strategy::Unroll2,
        Strategy::Unroll4,
        Strategy::Simd128,
        Strategy::Parallel,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Indexed => IndexedSum::NAME,
            Self::Elements => ElementSum::NAME,
            Self::Vectorized => VectorizedSum::NAME,
            Self::Builtin => BuiltinSum::NAME,
            Self::Unroll2 => Unroll2Sum::NAME,
            Self::Unroll4 => Unroll4Sum::NAME,
            Self::Simd128 => Simd128Sum::NAME,
            Self::Parallel => ParallelSum::NAME,
        }
    }

    #[inline]
    pub fn sum(self, size: usize, data: &[i64]) -> i64 {
        match self {
            Self::Indexed => IndexedSum::sum(size, data),
            Self::Elements => ElementSum::sum(size, data),
            Self::Vectorized => VectorizedSum::sum(size, data),
            Self::Builtin => BuiltinSum::sum(size, data),
            Self::Unroll2 => Unroll2Sum::sum(size, data),
            Self::Unroll4 => Unroll4Sum::sum(size, data),
            Self::Simd128 => Simd128Sum::sum(size, data),
            Self::Parallel => ParallelSum::sum(size, data),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| BenchError::UnknownStrategy(s.to_string()))
    }
}

#[cfg(test)]
#[path = "./strategy_test.rs"]
pub(crate) mod tests;
