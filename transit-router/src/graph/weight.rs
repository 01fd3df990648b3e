//! Edge weight abstraction.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::Add;

/// A non-negative quantity that path lengths are measured in.
pub trait Weight: Copy + Add<Output = Self> + Debug {
    /// Weight of the empty path.
    const ZERO: Self;

    /// Total order used by the shortest-path search.
    fn compare(&self, other: &Self) -> Ordering;
}

impl Weight for f64 {
    const ZERO: Self = 0.0;

    fn compare(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

macro_rules! integer_weight {
    ($($ty:ty),*) => {
        $(
            impl Weight for $ty {
                const ZERO: Self = 0;

                fn compare(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

integer_weight!(u32, u64, usize);
