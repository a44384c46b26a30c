//! Test case driver around the two algorithms: picks an input, times a run and collects the
//! results for reporting.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use once_cell::sync::OnceCell;
use thiserror::Error;
use tracing::info;

use crate::input::{self, InputError};
use crate::inversions::{self, InversionCount};
use crate::quicksort::{self, pivot::PivotStrategy, ComparisonCount};

pub const SMALL_CASE: [i32; 6] = [6, 5, 4, 3, 2, 1];
pub const MEDIUM_CASE: [i32; 15] = [6, 1, 9, 2, 12, 156, 22, 66, 11, 6, 5, 4, 3, 2, 1];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Inversions,
    Quicksort,
}

impl Algorithm {
    pub fn default_file(self) -> &'static Path {
        match self {
            Algorithm::Inversions => Path::new("IntegerArray.txt"),
            Algorithm::Quicksort => Path::new("QuickSort.txt"),
        }
    }

    pub fn default_max_len(self) -> usize {
        match self {
            Algorithm::Inversions => 100_000,
            Algorithm::Quicksort => 10_000,
        }
    }
}

/// Selects the input of a run, numbered as on the command line.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TestCase {
    /// 0: integers read from a file.
    #[default]
    File,
    /// 1: [`SMALL_CASE`].
    Small,
    /// 2: [`MEDIUM_CASE`].
    Medium,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown test case {0}, expected 0 (file), 1 (small) or 2 (medium)")]
pub struct UnknownTestCase(pub u8);

impl TryFrom<u8> for TestCase {
    type Error = UnknownTestCase;

    fn try_from(val: u8) -> Result<Self, Self::Error> {
        match val {
            0 => Ok(TestCase::File),
            1 => Ok(TestCase::Small),
            2 => Ok(TestCase::Medium),
            _ => Err(UnknownTestCase(val)),
        }
    }
}

/// Where the integers of a [`TestCase::File`] run come from. `None` falls back to the
/// algorithm's defaults.
#[derive(Clone, Debug, Default)]
pub struct FileSource {
    pub path: Option<PathBuf>,
    pub max_len: Option<usize>,
}

pub fn load_input(
    algorithm: Algorithm,
    test_case: TestCase,
    source: &FileSource,
) -> Result<Vec<i32>, InputError> {
    match test_case {
        TestCase::Small => Ok(SMALL_CASE.to_vec()),
        TestCase::Medium => Ok(MEDIUM_CASE.to_vec()),
        TestCase::File => {
            let path = source
                .path
                .as_deref()
                .unwrap_or_else(|| algorithm.default_file());
            let max_len = source
                .max_len
                .unwrap_or_else(|| algorithm.default_max_len());

            input::read_sequence(path, max_len)
        }
    }
}

/// Seconds since the first call in this process.
pub fn seconds() -> f64 {
    static EPOCH: OnceCell<Instant> = OnceCell::new();

    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64()
}

fn timed<R>(run: impl FnOnce() -> R) -> (R, Duration) {
    let start = seconds();
    let result = run();
    let stop = seconds();

    (result, Duration::from_secs_f64((stop - start).max(0.0)))
}

#[derive(Clone, Debug)]
pub struct InversionsReport {
    pub sorted: Vec<i32>,
    pub inversions: InversionCount,
    pub elapsed: Duration,
}

pub fn run_inversions(v: &[i32]) -> InversionsReport {
    let ((sorted, inversions), elapsed) = timed(|| inversions::sort_and_count(v));
    info!(len = v.len(), inversions, ?elapsed, "inversions run finished");

    InversionsReport {
        sorted,
        inversions,
        elapsed,
    }
}

#[derive(Clone, Debug)]
pub struct QuicksortReport {
    pub strategy: PivotStrategy,
    pub sorted: Vec<i32>,
    pub comparisons: ComparisonCount,
    pub elapsed: Duration,
}

/// Sorts a copy of `v`, so every strategy can run on the same input.
pub fn run_quicksort(v: &[i32], strategy: PivotStrategy) -> QuicksortReport {
    let mut sorted = v.to_vec();
    let (comparisons, elapsed) = timed(|| quicksort::sort(&mut sorted, strategy));
    info!(len = v.len(), %strategy, comparisons, ?elapsed, "quicksort run finished");

    QuicksortReport {
        strategy,
        sorted,
        comparisons,
        elapsed,
    }
}

/// Runs every strategy in `strategies` in order, or all of them if it is empty.
pub fn run_quicksort_strategies(v: &[i32], strategies: &[PivotStrategy]) -> Vec<QuicksortReport> {
    let strategies = if strategies.is_empty() {
        &PivotStrategy::ALL[..]
    } else {
        strategies
    };

    strategies
        .iter()
        .map(|&strategy| run_quicksort(v, strategy))
        .collect()
}
