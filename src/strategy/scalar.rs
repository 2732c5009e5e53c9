use super::Summation;

/// Walks indices `0..size` and reads `data[i]` on every step.
pub struct IndexedSum;

/// Walks the elements directly, `size` is ignored.
pub struct ElementSum;

/// Hands the whole slice to `Iterator::sum`.
pub struct BuiltinSum;

pub struct Unroll2Sum;
pub struct Unroll4Sum;

impl Summation for IndexedSum {
    const NAME: &'static str = "IndexedSum";

    #[allow(clippy::needless_range_loop)]
    fn sum(size: usize, data: &[i64]) -> i64 {
        let mut total = 0;
        for i in 0..size {
            total += data[i];
        }
        total
    }
}

impl Summation for ElementSum {
    const NAME: &'static str = "ElementSum";

    fn sum(_size: usize, data: &[i64]) -> i64 {
        let mut total = 0;
        for &x in data {
            total += x;
        }
        total
    }
}

impl Summation for BuiltinSum {
    const NAME: &'static str = "BuiltinSum";

    fn sum(_size: usize, data: &[i64]) -> i64 {
        data.iter().sum()
    }
}

impl Summation for Unroll2Sum {
    const NAME: &'static str = "Unroll2Sum";

    fn sum(size: usize, data: &[i64]) -> i64 {
        let mut total = 0;
        let mut i = 0;
        while i + 2 <= size {
            total += data[i];
            total += data[i + 1];
            i += 2;
        }
        // odd sizes leave one element behind
        while i < size {
            total += data[i];
            i += 1;
        }
        total
    }
}

impl Summation for Unroll4Sum {
    const NAME: &'static str = "Unroll4Sum";

    fn sum(size: usize, data: &[i64]) -> i64 {
        let mut total = 0;
        let mut i = 0;
        while i + 4 <= size {
            total += data[i];
            total += data[i + 1];
            total += data[i + 2];
            total += data[i + 3];
            i += 4;
        }
        while i < size {
            total += data[i];
            i += 1;
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::tests::Tests as strategy_tests;

    #[test]
    fn test_indexed_sum() {
        strategy_tests::<IndexedSum>::test_sum();
        strategy_tests::<IndexedSum>::test_empty();
        strategy_tests::<IndexedSum>::test_does_not_mutate();
    }

    #[test]
    fn test_element_sum() {
        strategy_tests::<ElementSum>::test_sum();
        strategy_tests::<ElementSum>::test_empty();
        strategy_tests::<ElementSum>::test_does_not_mutate();
    }

    #[test]
    fn test_builtin_sum() {
        strategy_tests::<BuiltinSum>::test_sum();
        strategy_tests::<BuiltinSum>::test_empty();
        strategy_tests::<BuiltinSum>::test_does_not_mutate();
    }

    #[test]
    fn test_unroll2_sum() {
        strategy_tests::<Unroll2Sum>::test_sum();
        strategy_tests::<Unroll2Sum>::test_empty();
        strategy_tests::<Unroll2Sum>::test_ragged_tail();
    }

    #[test]
    fn test_unroll4_sum() {
        strategy_tests::<Unroll4Sum>::test_sum();
        strategy_tests::<Unroll4Sum>::test_empty();
        strategy_tests::<Unroll4Sum>::test_ragged_tail();
    }

    #[test]
    #[should_panic]
    fn test_indexed_sum_size_past_end() {
        IndexedSum::sum(4, &[1, 2, 3]);
    }
}
