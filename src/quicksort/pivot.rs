//! Pivot selection for quicksort.

use std::fmt;
use std::str::FromStr;

/// Pivot selection policy for [`quicksort`](super::quicksort).
///
/// Every policy is a pure function of the values in `v[left..=right]` and returns an index inside
/// that range.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PivotStrategy {
    First,
    Last,
    MedianOfThree,
}

impl PivotStrategy {
    pub const ALL: [PivotStrategy; 3] = [
        PivotStrategy::First,
        PivotStrategy::Last,
        PivotStrategy::MedianOfThree,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PivotStrategy::First => "first",
            PivotStrategy::Last => "last",
            PivotStrategy::MedianOfThree => "median_of_three",
        }
    }

    #[inline]
    pub fn choose(self, v: &[i32], left: usize, right: usize) -> usize {
        match self {
            PivotStrategy::First => choose_first(v, left, right),
            PivotStrategy::Last => choose_last(v, left, right),
            PivotStrategy::MedianOfThree => choose_median_of_three(v, left, right),
        }
    }
}

impl fmt::Display for PivotStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "unknown pivot strategy '{0}', expected one of: first, last, median_of_three (or median, median-of-three)"
)]
pub struct UnknownStrategy(pub String);

impl FromStr for PivotStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(PivotStrategy::First),
            "last" => Ok(PivotStrategy::Last),
            "median_of_three" | "median-of-three" | "median" => Ok(PivotStrategy::MedianOfThree),
            _ => Err(UnknownStrategy(s.to_owned())),
        }
    }
}

pub fn choose_first(_v: &[i32], left: usize, right: usize) -> usize {
    debug_assert!(left <= right);
    left
}

pub fn choose_last(_v: &[i32], left: usize, right: usize) -> usize {
    debug_assert!(left <= right);
    right
}

/// Picks the index of the median of the first, middle and last value.
///
/// For even lengths the middle is the lower of the two central positions. When two of the three
/// values are equal none of them lies strictly between the others and `right` is returned, even
/// if that is not the median value.
pub fn choose_median_of_three(v: &[i32], left: usize, right: usize) -> usize {
    debug_assert!(left <= right);
    let len = right - left + 1;
    let mid = left + if len % 2 != 0 { len / 2 } else { len / 2 - 1 };

    let first = v[left];
    let middle = v[mid];
    let last = v[right];

    if (first > middle && first < last) || (first < middle && first > last) {
        left
    } else if (middle > first && middle < last) || (middle < first && middle > last) {
        mid
    } else {
        right
    }
}
