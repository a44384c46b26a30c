#![no_main]

use libfuzzer_sys::fuzz_target;

use sort_count::inversions::sort_and_count;
use sort_count_fuzz::u8_as_i32;
use sort_test_tools::inversion_oracle::brute_force_inversions;

fuzz_target!(|data: &[u8]| {
    let v = u8_as_i32(data);
    let (sorted, inversions) = sort_and_count(&v);

    let mut expected = v.clone();
    expected.sort();
    assert_eq!(sorted, expected);

    // The oracle is quadratic.
    if v.len() <= 2_000 {
        assert_eq!(inversions, brute_force_inversions(&v));
    }
});
