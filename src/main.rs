mod tracing_setup;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use sort_count::harness::{self, Algorithm, FileSource, TestCase};
use sort_count::PivotStrategy;

use tracing_setup::Verbosity;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum AlgorithmArg {
    /// Count inversions with merge sort.
    Inversions,
    /// Sort with quicksort and report comparison counts.
    Quicksort,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Inversions => Algorithm::Inversions,
            AlgorithmArg::Quicksort => Algorithm::Quicksort,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Which algorithm to run
    #[arg(value_enum)]
    algorithm: AlgorithmArg,

    /// 0 reads integers from a file, 1 runs the small fixed case, 2 the medium fixed case
    #[arg(default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=2))]
    test_case: u8,

    /// Input file for test case 0 [default: IntegerArray.txt or QuickSort.txt]
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Maximum number of integers accepted from the file [default: 100000 or 10000]
    #[arg(long)]
    max_len: Option<usize>,

    /// Pivot strategy for quicksort (first, last, median_of_three; aliases median, median-of-three), repeatable [default: all]
    #[arg(short, long)]
    strategy: Vec<PivotStrategy>,

    /// Debug level logging
    #[arg(short, long)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,

    /// Never color log output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_setup::init_subscriber(Verbosity::from_flags(args.verbose, args.quiet), args.no_color);

    let algorithm = Algorithm::from(args.algorithm);
    let test_case = TestCase::try_from(args.test_case)?;
    let source = FileSource {
        path: args.file,
        max_len: args.max_len,
    };

    match test_case {
        TestCase::File => println!("Running Test Case from File"),
        TestCase::Small => println!("Running Small Case"),
        TestCase::Medium => println!("Running Medium Case"),
    }

    let v = harness::load_input(algorithm, test_case, &source)
        .with_context(|| format!("failed to load input for {test_case:?} case"))?;
    let print_sorted = test_case != TestCase::File;

    match algorithm {
        Algorithm::Inversions => {
            let report = harness::run_inversions(&v);

            if print_sorted {
                println!("Sorted: {:?}", report.sorted);
            }
            println!("Computation Time: {:.3} ms", millis(report.elapsed));
            println!("Total number of inversions: {}", report.inversions);
        }
        Algorithm::Quicksort => {
            for report in harness::run_quicksort_strategies(&v, &args.strategy) {
                println!("\n***************************");
                println!("pivot: {}", report.strategy);

                if print_sorted {
                    println!("Sorted: {:?}", report.sorted);
                }
                println!("Computation Time: {:.3} ms", millis(report.elapsed));
                println!("Comparison count: {}", report.comparisons);
            }
        }
    }

    Ok(())
}

fn millis(elapsed: std::time::Duration) -> f64 {
    elapsed.as_secs_f64() * 1000.0
}
