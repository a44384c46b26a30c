use std::env;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use sort_count::{inversions, quicksort, PivotStrategy};
use sort_test_tools::{patterns, Sort};

// Quicksort recursion depth is linear in the input length for degenerate pivots, the main thread
// stack caps how far these can go.
const QUICKSORT_MAX_SIZE: usize = 10_000;

#[inline(never)]
fn bench_sort<S: Sort>(
    c: &mut Criterion,
    test_size: usize,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    let bench_name = S::name();

    let batch_size = if test_size > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(&format!("{bench_name}-{pattern_name}-{test_size}"), |b| {
        b.iter_batched(
            || pattern_provider(test_size),
            |mut test_data| S::sort(black_box(test_data.as_mut_slice())),
            batch_size,
        )
    });
}

#[inline(never)]
fn bench_count_inversions(
    c: &mut Criterion,
    test_size: usize,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    c.bench_function(&format!("count_inversions-{pattern_name}-{test_size}"), |b| {
        b.iter_batched(
            || pattern_provider(test_size),
            |test_data| inversions::count_inversions(black_box(test_data.as_slice())),
            BatchSize::LargeInput,
        )
    });
}

fn measure_comp_count(
    test_size: usize,
    pattern_name: &str,
    pattern_provider: &fn(usize) -> Vec<i32>,
) {
    // Mean of the coarse n - 1 per call estimate, per strategy.
    let run_count: usize = if test_size <= 20 {
        10_000
    } else if test_size < 10_000 {
        300
    } else {
        30
    };

    for strategy in PivotStrategy::ALL {
        let mut total = 0;
        for _ in 0..run_count {
            let mut test_data = pattern_provider(test_size);
            total += quicksort::sort(&mut test_data, strategy);
        }

        let mean = total / (run_count as u64);
        println!("quicksort_{strategy}-comp-{pattern_name}-{test_size}: mean comparisons: {mean}");
    }
}

fn bench_patterns(c: &mut Criterion, test_size: usize) {
    let pattern_providers: Vec<(&'static str, fn(usize) -> Vec<i32>)> = vec![
        ("random", patterns::random),
        ("random_dense", |size| {
            patterns::random_uniform(size, 0..=(((size as f64).log2().round()) as i32))
        }),
        ("random_binary", |size| patterns::random_uniform(size, 0..=1)),
        ("few_distinct", |size| patterns::few_distinct(size, 8)),
        ("mostly_equal", |size| patterns::mostly_equal(size, 90.0)),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("descending_runs", |size| patterns::descending_runs(size, 4)),
        ("saws_long", |size| {
            patterns::saw_mixed(size, ((size as f64).log2().round()) as usize)
        }),
        ("saws_short", |size| {
            patterns::saw_mixed(size, (size as f64 / 22.0).round() as usize)
        }),
        ("pipe_organ", patterns::pipe_organ),
    ];

    for (pattern_name, pattern_provider) in pattern_providers.iter() {
        if test_size < 3 && *pattern_name != "random" {
            continue;
        }

        if env::var("MEASURE_COMP").is_ok() {
            if test_size <= QUICKSORT_MAX_SIZE {
                measure_comp_count(test_size, pattern_name, pattern_provider);
            }
            continue;
        }

        bench_count_inversions(c, test_size, pattern_name, pattern_provider);

        if test_size > QUICKSORT_MAX_SIZE {
            continue;
        }

        bench_sort::<inversions::SortImpl>(c, test_size, pattern_name, pattern_provider);
        bench_sort::<quicksort::FirstSortImpl>(c, test_size, pattern_name, pattern_provider);
        bench_sort::<quicksort::LastSortImpl>(c, test_size, pattern_name, pattern_provider);
        bench_sort::<quicksort::MedianOfThreeSortImpl>(
            c,
            test_size,
            pattern_name,
            pattern_provider,
        );
    }
}

fn ensure_true_random() {
    // Successive calls continue the same generator, so each batch sees fresh values.
    let random_vec_a = patterns::random(5);
    let random_vec_b = patterns::random(5);

    assert_ne!(random_vec_a, random_vec_b);
}

fn criterion_benchmark(c: &mut Criterion) {
    let test_sizes = [
        0, 1, 2, 3, 6, 15, 16, 20, 50, 101, 200, 500, 1_000, 2_048, 10_000, 100_000,
    ];

    ensure_true_random();

    for test_size in test_sizes {
        bench_patterns(c, test_size);
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
