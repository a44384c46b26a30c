/// Counts the pairs `(i, j)` with `i < j` and `v[i] > v[j]` by looking at every pair.
///
/// *O*(*n*^2), only meant as reference for small inputs.
pub fn brute_force_inversions(v: &[i32]) -> u64 {
    let mut count = 0;

    for (i, a) in v.iter().enumerate() {
        count += v[i + 1..].iter().filter(|b| a > *b).count() as u64;
    }

    count
}

/// n(n-1)/2, the inversion count of a strictly descending input of length `len`.
pub fn max_inversions(len: usize) -> u64 {
    let len = len as u64;
    len * len.saturating_sub(1) / 2
}

/// Inversion count of [`descending_runs`](crate::patterns::descending_runs)`(len, run_len)`.
///
/// Every pair across two runs is inverted, pairs inside one run are equal and don't count.
pub fn descending_runs_inversions(len: usize, run_len: usize) -> u64 {
    let run_len = run_len.max(1);
    let full_runs = (len / run_len) as u64;

    max_inversions(len) - full_runs * max_inversions(run_len) - max_inversions(len % run_len)
}
