use super::Summation;
use rayon::prelude::*;
use wide::{i64x2, i64x4};

/// 256 bit lanes, four i64 partial sums folded together at the end.
pub struct VectorizedSum;

pub struct Simd128Sum;

/// Splits the slice across rayon's global pool.
pub struct ParallelSum;

impl Summation for VectorizedSum {
    const NAME: &'static str = "VectorizedSum";

    fn sum(_size: usize, data: &[i64]) -> i64 {
        let mut chunks = data.chunks_exact(4);
        let acc = (&mut chunks).fold(i64x4::splat(0), |acc, c| {
            acc + i64x4::new([c[0], c[1], c[2], c[3]])
        });
        acc.to_array().iter().sum::<i64>() + chunks.remainder().iter().sum::<i64>()
    }
}

impl Summation for Simd128Sum {
    const NAME: &'static str = "Simd128Sum";

    fn sum(_size: usize, data: &[i64]) -> i64 {
        let mut chunks = data.chunks_exact(2);
        let acc = (&mut chunks).fold(i64x2::splat(0), |acc, c| acc + i64x2::new([c[0], c[1]]));
        acc.to_array().iter().sum::<i64>() + chunks.remainder().iter().sum::<i64>()
    }
}

impl Summation for ParallelSum {
    const NAME: &'static str = "ParallelSum";

    fn sum(_size: usize, data: &[i64]) -> i64 {
        data.par_iter().sum::<i64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::tests::Tests as strategy_tests;

    #[test]
    fn test_vectorized_sum() {
        strategy_tests::<VectorizedSum>::test_sum();
        strategy_tests::<VectorizedSum>::test_empty();
        strategy_tests::<VectorizedSum>::test_ragged_tail();
        strategy_tests::<VectorizedSum>::test_does_not_mutate();
    }

    #[test]
    fn test_simd128_sum() {
        strategy_tests::<Simd128Sum>::test_sum();
        strategy_tests::<Simd128Sum>::test_empty();
        strategy_tests::<Simd128Sum>::test_ragged_tail();
    }

    #[test]
    fn test_parallel_sum() {
        strategy_tests::<ParallelSum>::test_sum();
        strategy_tests::<ParallelSum>::test_empty();
        strategy_tests::<ParallelSum>::test_ragged_tail();
    }

    #[test]
    fn test_vectorized_sum_unaligned_start() {
        // a subslice starting one element in is off the cache line the buffer was allocated on
        let seq = crate::InputSequence::arange(37);
        let tail = &seq.as_slice()[1..];
        assert_eq!(VectorizedSum::sum(tail.len(), tail), seq.expected_sum());
    }
}
