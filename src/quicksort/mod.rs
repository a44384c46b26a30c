//! Recursive quicksort with a pluggable pivot strategy and single-pivot Lomuto style partition.
//!
//! Recursion depth is *O*(log(*n*)) for good pivots but degrades to *O*(*n*) for adversarial
//! inputs, eg. `First` or `Last` on sorted input, or any strategy on all equal input. Stack space,
//! not heap, bounds the worst case.

use tracing::debug;

pub mod pivot;

use pivot::PivotStrategy;

/// Comparisons attributed to a quicksort run.
///
/// Each call on a range of `n > 0` elements adds `n - 1`, whatever the partition actually did.
/// This is a coarse estimate for comparing pivot strategies, not an exact comparison count.
pub type ComparisonCount = u64;

macro_rules! strategy_sort_impl {
    ($($strategy:ident),*) => {
        paste::paste! {
            $(
                #[doc = "`quicksort` with the `" $strategy "` pivot strategy, as [`sort_test_tools::Sort`]."]
                pub struct [<$strategy SortImpl>];

                impl sort_test_tools::Sort for [<$strategy SortImpl>] {
                    fn name() -> String {
                        format!("quicksort_{}_unstable", PivotStrategy::$strategy.name())
                    }

                    #[inline]
                    fn sort(v: &mut [i32]) {
                        sort(v, PivotStrategy::$strategy);
                    }
                }
            )*
        }
    };
}

strategy_sort_impl!(First, Last, MedianOfThree);

/// Sorts all of `v` in place, returns the comparison count.
pub fn sort(v: &mut [i32], strategy: PivotStrategy) -> ComparisonCount {
    if v.is_empty() {
        return 0;
    }

    quicksort(v, 0, v.len() - 1, strategy)
}

/// Sorts the inclusive range `v[left..=right]` in place, returns the comparison count.
///
/// An empty range is written as `left == right + 1`.
///
/// # Panics
///
/// Panics if `right` is out of bounds for a non-empty range, or if `left > right + 1`.
pub fn quicksort(
    v: &mut [i32],
    left: usize,
    right: usize,
    strategy: PivotStrategy,
) -> ComparisonCount {
    let mut comparisons = 0;

    if left > right {
        assert!(
            left - right == 1,
            "invalid quicksort range: left {left} > right {right} + 1"
        );
        return comparisons;
    }

    assert!(
        right < v.len(),
        "quicksort range [{left}, {right}] out of bounds for len {}",
        v.len()
    );

    debug!(len = right - left + 1, %strategy, "quicksort");
    recurse(v, left, right, strategy, &mut comparisons);
    debug!(comparisons, "quicksort done");

    comparisons
}

// Both bounds inclusive, left <= right.
fn recurse(
    v: &mut [i32],
    left: usize,
    right: usize,
    strategy: PivotStrategy,
    comparisons: &mut ComparisonCount,
) {
    let len = right - left + 1;
    *comparisons += (len - 1) as ComparisonCount;

    if len <= 1 {
        return;
    }

    let pivot = strategy.choose(v, left, right);
    let mid = partition(v, left, right, pivot);

    // Empty sides add zero comparisons, skipping them keeps the indices unsigned.
    if mid > left {
        recurse(v, left, mid - 1, strategy, comparisons);
    }
    if mid < right {
        recurse(v, mid + 1, right, strategy, comparisons);
    }
}

/// Partitions `v[left..=right]` around the value at `pivot` and returns the pivot's final
/// position.
///
/// Afterwards everything left of the returned position is `<=` the pivot and everything right of
/// it is `>`. Elements equal to the pivot end up on the low side.
///
/// # Panics
///
/// Panics if `pivot` is not in `[left, right]` or `right` is out of bounds.
pub fn partition(v: &mut [i32], left: usize, right: usize, pivot: usize) -> usize {
    assert!(
        left <= pivot && pivot <= right && right < v.len(),
        "pivot index {pivot} outside [{left}, {right}] (len {})",
        v.len()
    );

    if pivot != left {
        v.swap(pivot, left);
    }
    let pivot_val = v[left];

    // First position not yet known to be <= pivot.
    let mut i = left + 1;
    for j in (left + 1)..=right {
        if v[j] <= pivot_val {
            v.swap(j, i);
            i += 1;
        }
    }

    v.swap(left, i - 1);

    i - 1
}
