#![no_main]

use libfuzzer_sys::fuzz_target;

use sort_count::quicksort;
use sort_count_fuzz::{split_strategy, u8_as_i32};

fuzz_target!(|data: &[u8]| {
    let Some((strategy, rest)) = split_strategy(data) else {
        return;
    };

    let mut v = u8_as_i32(rest);
    let mut expected = v.clone();
    expected.sort();

    let comparisons = quicksort::sort(&mut v, strategy);

    assert_eq!(v, expected);
    let len = v.len() as u64;
    assert!(comparisons <= len * len.saturating_sub(1) / 2);
});
