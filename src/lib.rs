macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort(v: &mut [i32]) {
                sort(v);
            }
        }
    };
}

pub mod harness;
pub mod input;
pub mod inversions;
pub mod quicksort;

pub use inversions::{count_inversions, sort_and_count, InversionCount};
pub use quicksort::pivot::PivotStrategy;
pub use quicksort::{partition, quicksort, ComparisonCount};
