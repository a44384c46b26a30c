//! Input generators for the oracle tests and benches.
//!
//! All random patterns draw from one `StdRng` per thread, seeded from the process-wide seed. The
//! seed is taken from `OVERRIDE_SEED` if set, otherwise picked once at random, so a failing test
//! can be replayed with the seed it printed.

use std::cell::RefCell;
use std::env;

use once_cell::sync::Lazy;
use rand::distributions::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

static SEED: Lazy<u64> = Lazy::new(|| match env::var("OVERRIDE_SEED") {
    Ok(seed) => seed
        .parse()
        .unwrap_or_else(|_| panic!("OVERRIDE_SEED '{seed}' is not a u64")),
    Err(_) => rand::thread_rng().gen(),
});

thread_local! {
    static RNG: RefCell<StdRng> = RefCell::new(StdRng::seed_from_u64(*SEED));
}

fn with_rng<T>(f: impl FnOnce(&mut StdRng) -> T) -> T {
    RNG.with(|rng| f(&mut rng.borrow_mut()))
}

pub fn random_init_seed() -> u64 {
    *SEED
}

// --- Random ---

/// Values from the whole `i32` range, duplicates are rare.
pub fn random(len: usize) -> Vec<i32> {
    with_rng(|rng| (0..len).map(|_| rng.gen()).collect())
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    let dist: Uniform<i32> = range.into();

    with_rng(|rng| dist.sample_iter(rng).take(len).collect())
}

/// `len` values drawn from only `distinct` different, widely spread values.
///
/// Equal values end up in both halves of every merge and on both sides of every pivot.
pub fn few_distinct(len: usize, distinct: usize) -> Vec<i32> {
    let values = random(distinct.max(1));

    with_rng(|rng| (0..len).map(|_| *values.choose(rng).unwrap()).collect())
}

/// Roughly `equal_percent` of the elements share one value, the rest are random.
pub fn mostly_equal(len: usize, equal_percent: f64) -> Vec<i32> {
    let common = with_rng(|rng| rng.gen::<i32>());
    let p = (equal_percent / 100.0).clamp(0.0, 1.0);

    with_rng(|rng| {
        (0..len)
            .map(|_| if rng.gen_bool(p) { common } else { rng.gen() })
            .collect()
    })
}

/// Random input whose first `sorted_percent` are sorted.
pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    let mut v = random(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;

    v[..sorted_len.min(len)].sort_unstable();

    v
}

// --- Structured ---

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// Descending, with each value repeated `run_len` times. The run holding the largest value is
/// shorter when `run_len` doesn't divide `len`.
///
/// The inversion count is known in closed form, see
/// [`descending_runs_inversions`](crate::inversion_oracle::descending_runs_inversions).
pub fn descending_runs(len: usize, run_len: usize) -> Vec<i32> {
    let run_len = run_len.max(1);

    (0..len).rev().map(|k| (k / run_len) as i32).collect()
}

/// Random input cut into about `saw_count` chunks, each sorted up or down at random.
pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    let mut v = random(len);
    let chunk_len = (len / saw_count.max(1)).max(1);

    with_rng(|rng| {
        for chunk in v.chunks_mut(chunk_len) {
            chunk.sort_unstable();
            if rng.gen_bool(0.5) {
                chunk.reverse();
            }
        }
    });

    v
}

/// Ascending first half followed by a descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut v = random(len);
    let (up, down) = v.split_at_mut(len / 2);

    up.sort_unstable();
    down.sort_unstable_by(|a, b| b.cmp(a));

    v
}

/// Every value of `0..len / 2` twice, shuffled. Odd lengths get one extra `-1`.
pub fn shuffled_pairs(len: usize) -> Vec<i32> {
    let mut v: Vec<i32> = (0..len).map(|i| (i / 2) as i32).collect();
    if len % 2 != 0 {
        v[len - 1] = -1;
    }

    with_rng(|rng| v.shuffle(rng));

    v
}
