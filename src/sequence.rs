use aligned_vec::{AVec, CACHELINE_ALIGN};
use core::{fmt::Debug, ops::Deref};

/// The `0..len` input every strategy sums. Built once per size, outside the
/// timed region, and never mutated afterwards.
#[derive(Eq, PartialEq)]
pub struct InputSequence {
    pub(crate) data: AVec<i64>,
}

impl Debug for InputSequence {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "InputSequence with len: {} and alignment: {}",
            self.data.len(),
            self.data.alignment()
        )
    }
}

impl InputSequence {
    pub fn arange(len: usize) -> Self {
        // the buffer is cache line aligned so the simd strategies start on a lane boundary
        let data = AVec::from_iter(CACHELINE_ALIGN, 0..len as i64);
        Self { data }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[i64] {
        self.data.as_slice()
    }

    /// Closed form of `0 + 1 + ... + (len - 1)`.
    pub fn expected_sum(&self) -> i64 {
        arithmetic_sum(self.len())
    }
}

impl Deref for InputSequence {
    type Target = [i64];

    fn deref(&self) -> &[i64] {
        self.as_slice()
    }
}

#[inline]
pub fn arithmetic_sum(n: usize) -> i64 {
    let n = n as i64;
    // halve the even factor first, n * (n - 1) alone overflows past ~3.04e9
    if n % 2 == 0 {
        (n / 2) * (n - 1)
    } else {
        n * ((n - 1) / 2)
    }
}
