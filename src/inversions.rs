//! Inversion counting on top of a top-down merge sort.
//!
//! An inversion is a pair `(i, j)` with `i < j` and `v[i] > v[j]`. Every inversion either lives
//! entirely in one half of the input, or crosses the split point. The recursive calls count the
//! former, the merge counts the latter while it interleaves the two sorted halves.

use tracing::debug;

sort_impl!("merge_count_stable");

/// Number of inversions, n(n-1)/2 in the worst case. 64 bits cover inputs far beyond 100_000
/// elements.
pub type InversionCount = u64;

/// Sorts `v` with the same merge sort used for counting, discarding the count.
pub fn sort(v: &mut [i32]) {
    let mut inversions = 0;
    let sorted = merge_sort(v, &mut inversions);
    v.copy_from_slice(&sorted);
}

/// Returns the number of inversions in `v`.
pub fn count_inversions(v: &[i32]) -> InversionCount {
    sort_and_count(v).1
}

/// Returns a sorted copy of `v` together with its inversion count.
pub fn sort_and_count(v: &[i32]) -> (Vec<i32>, InversionCount) {
    debug!(len = v.len(), "counting inversions");

    let mut inversions = 0;
    let sorted = merge_sort(v, &mut inversions);

    debug!(inversions, "counted inversions");
    (sorted, inversions)
}

/// Sorts `v` into a new buffer, adding every inversion found along the way to `inversions`.
///
/// The counter is shared by the whole call tree and never reset.
pub fn merge_sort(v: &[i32], inversions: &mut InversionCount) -> Vec<i32> {
    if v.len() <= 1 {
        return v.to_vec();
    }

    // Odd lengths put the extra element on the right.
    let (left, right) = v.split_at(v.len() / 2);

    let left = merge_sort(left, inversions);
    let right = merge_sort(right, inversions);

    merge(&left, &right, inversions)
}

/// Merges the sorted slices `a` and `b` into a new sorted buffer.
///
/// `a` is assumed to precede `b` in the original input. Whenever the front of `b` is taken while
/// `a` still has untaken elements, each of those is strictly greater and forms an inversion with
/// it. Equal fronts take from `a`, so equal pairs are never counted and the merge stays stable.
pub fn merge(a: &[i32], b: &[i32], inversions: &mut InversionCount) -> Vec<i32> {
    let mut merged = Vec::with_capacity(a.len() + b.len());

    let mut i = 0;
    let mut j = 0;

    while i < a.len() && j < b.len() {
        if a[i] <= b[j] {
            merged.push(a[i]);
            i += 1;
        } else {
            merged.push(b[j]);
            j += 1;
            *inversions += (a.len() - i) as InversionCount;
        }
    }

    // At most one of these is non-empty.
    merged.extend_from_slice(&a[i..]);
    merged.extend_from_slice(&b[j..]);

    merged
}
