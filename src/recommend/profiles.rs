//! Static algorithm characteristics
//!
//! [`PROFILES`] is the scoring table used by the recommender. Its order is
//! significant: ties are broken in favour of the entry listed first.
//! [`complexity`] adds the best/average/worst breakdown shown in the
//! complexity table, with a short derivation for each cell.

use crate::sorting::AlgorithmKey;

/// Workload tags an algorithm is known to handle well
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoodFor {
    SmallArrays,
    LargeArrays,
    NearlySorted,
    OnlineSorting,
    GuaranteedPerformance,
    AverageCasePerformance,
    IntegerData,
    UniformDistribution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmProfile {
    pub key: AlgorithmKey,
    pub name: &'static str,
    pub good_for: &'static [GoodFor],
    pub stable: bool,
    pub in_place: bool,
    pub space_complexity: &'static str,
    pub time_complexity_best: &'static str,
    pub time_complexity_worst: &'static str,
    /// `None` means no upper bound
    pub max_recommended_size: Option<usize>,
}

impl AlgorithmProfile {
    pub fn is_good_for(&self, tag: GoodFor) -> bool {
        self.good_for.contains(&tag)
    }

    pub fn suits_size(&self, size: usize) -> bool {
        self.max_recommended_size.map_or(true, |max| size <= max)
    }
}

pub const PROFILES: [AlgorithmProfile; 8] = [
    AlgorithmProfile {
        key: AlgorithmKey::BubbleSort,
        name: "Bubble Sort",
        good_for: &[GoodFor::SmallArrays, GoodFor::NearlySorted],
        stable: true,
        in_place: true,
        space_complexity: "O(1)",
        time_complexity_best: "O(n)",
        time_complexity_worst: "O(n²)",
        max_recommended_size: Some(100),
    },
    AlgorithmProfile {
        key: AlgorithmKey::InsertionSort,
        name: "Insertion Sort",
        good_for: &[
            GoodFor::SmallArrays,
            GoodFor::NearlySorted,
            GoodFor::OnlineSorting,
        ],
        stable: true,
        in_place: true,
        space_complexity: "O(1)",
        time_complexity_best: "O(n)",
        time_complexity_worst: "O(n²)",
        max_recommended_size: Some(100),
    },
    AlgorithmProfile {
        key: AlgorithmKey::SelectionSort,
        name: "Selection Sort",
        good_for: &[GoodFor::SmallArrays],
        stable: false,
        in_place: true,
        space_complexity: "O(1)",
        time_complexity_best: "O(n²)",
        time_complexity_worst: "O(n²)",
        max_recommended_size: Some(100),
    },
    AlgorithmProfile {
        key: AlgorithmKey::MergeSort,
        name: "Merge Sort",
        good_for: &[GoodFor::LargeArrays, GoodFor::GuaranteedPerformance],
        stable: true,
        in_place: false,
        space_complexity: "O(n)",
        time_complexity_best: "O(n log n)",
        time_complexity_worst: "O(n log n)",
        max_recommended_size: None,
    },
    AlgorithmProfile {
        key: AlgorithmKey::QuickSort,
        name: "Quick Sort",
        good_for: &[GoodFor::LargeArrays, GoodFor::AverageCasePerformance],
        stable: false,
        in_place: true,
        space_complexity: "O(log n)",
        time_complexity_best: "O(n log n)",
        time_complexity_worst: "O(n²)",
        max_recommended_size: None,
    },
    AlgorithmProfile {
        key: AlgorithmKey::HeapSort,
        name: "Heap Sort",
        good_for: &[GoodFor::LargeArrays, GoodFor::GuaranteedPerformance],
        stable: false,
        in_place: true,
        space_complexity: "O(1)",
        time_complexity_best: "O(n log n)",
        time_complexity_worst: "O(n log n)",
        max_recommended_size: None,
    },
    AlgorithmProfile {
        key: AlgorithmKey::RadixSort,
        name: "Radix Sort",
        good_for: &[GoodFor::LargeArrays, GoodFor::IntegerData],
        stable: true,
        in_place: false,
        space_complexity: "O(n + k)",
        time_complexity_best: "O(nk)",
        time_complexity_worst: "O(nk)",
        max_recommended_size: None,
    },
    AlgorithmProfile {
        key: AlgorithmKey::BucketSort,
        name: "Bucket Sort",
        good_for: &[GoodFor::LargeArrays, GoodFor::UniformDistribution],
        stable: true,
        in_place: false,
        space_complexity: "O(n + k)",
        time_complexity_best: "O(n + k)",
        time_complexity_worst: "O(n²)",
        max_recommended_size: None,
    },
];

/// Profile for `key`
pub fn profile(key: AlgorithmKey) -> &'static AlgorithmProfile {
    // PROFILES lists every key exactly once, in AlgorithmKey::ALL order
    &PROFILES[key as usize]
}

/// One cell of the complexity table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplexityCell {
    pub bound: &'static str,
    pub note: &'static str,
}

/// Best/average/worst time complexity for one algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplexityInfo {
    pub best: ComplexityCell,
    pub average: ComplexityCell,
    pub worst: ComplexityCell,
}

const fn cell(bound: &'static str, note: &'static str) -> ComplexityCell {
    ComplexityCell { bound, note }
}

pub fn complexity(key: AlgorithmKey) -> ComplexityInfo {
    match key {
        AlgorithmKey::BubbleSort => ComplexityInfo {
            best: cell("O(n)", "Already sorted: one pass finds no inversions"),
            average: cell("O(n²)", "T(n) = T(n-1) + O(n)"),
            worst: cell("O(n²)", "Reversed input: every pair is swapped"),
        },
        AlgorithmKey::InsertionSort => ComplexityInfo {
            best: cell("O(n)", "Already sorted: no shifts are needed"),
            average: cell("O(n²)", "T(n) = T(n-1) + O(n/2)"),
            worst: cell("O(n²)", "Reversed input: each element shifts to the front"),
        },
        AlgorithmKey::SelectionSort => ComplexityInfo {
            best: cell("O(n²)", "The suffix is always scanned in full"),
            average: cell("O(n²)", "T(n) = T(n-1) + O(n)"),
            worst: cell("O(n²)", "T(n) = T(n-1) + O(n)"),
        },
        AlgorithmKey::MergeSort => ComplexityInfo {
            best: cell("O(n log n)", "T(n) = 2T(n/2) + O(n)"),
            average: cell("O(n log n)", "T(n) = 2T(n/2) + O(n)"),
            worst: cell("O(n log n)", "T(n) = 2T(n/2) + O(n)"),
        },
        AlgorithmKey::QuickSort => ComplexityInfo {
            best: cell("O(n log n)", "Balanced partitions: T(n) = 2T(n/2) + O(n)"),
            average: cell("O(n log n)", "Expected partition split is constant-fraction"),
            worst: cell("O(n²)", "Degenerate partitions: T(n) = T(n-1) + O(n)"),
        },
        AlgorithmKey::HeapSort => ComplexityInfo {
            best: cell("O(n log n)", "O(n) heap build + n sift-downs of O(log n)"),
            average: cell("O(n log n)", "O(n) heap build + n sift-downs of O(log n)"),
            worst: cell("O(n log n)", "O(n) heap build + n sift-downs of O(log n)"),
        },
        AlgorithmKey::RadixSort => ComplexityInfo {
            best: cell("O(nk)", "k digit passes of O(n) each"),
            average: cell("O(nk)", "k digit passes of O(n) each"),
            worst: cell("O(nk)", "k digit passes of O(n) each"),
        },
        AlgorithmKey::BucketSort => ComplexityInfo {
            best: cell("O(n + k)", "Values spread evenly: O(1) per bucket"),
            average: cell("O(n + k)", "Uniform input: T(n) = O(n) + Σ O(bucket²)"),
            worst: cell("O(n²)", "All values in one bucket: insertion sort on n"),
        },
    }
}
