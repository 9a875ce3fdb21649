//! Timing of the plain sorting routines
//!
//! For every data order and size, one dataset is generated and each routine
//! is timed over fresh copies of it; the fastest of `repeat` runs is kept.
//! Sort results are checked to be sorted permutations of the input before a
//! timing is reported.

pub mod baselines;

use crate::config::{BenchArgs, BENCH_MAX_VALUE};
use crate::dataset::{self, DataOrder};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt::Write as _;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// A timed routine
#[derive(Clone, Copy)]
pub struct Routine {
    pub name: &'static str,
    run: fn(&[i64]) -> Vec<i64>,
    /// Search routines return no array to verify
    verifies: bool,
}

fn run_bubble(data: &[i64]) -> Vec<i64> {
    let mut data = data.to_vec();
    baselines::bubble_sort(&mut data);
    data
}

fn run_radix(data: &[i64]) -> Vec<i64> {
    let mut data = data.to_vec();
    baselines::radix_sort(&mut data);
    data
}

fn run_linear(data: &[i64]) -> Vec<i64> {
    // Worst case: the target is never present
    black_box(baselines::linear_search(data, -1));
    Vec::new()
}

pub const ROUTINES: [Routine; 5] = [
    Routine {
        name: "Bubble",
        run: run_bubble,
        verifies: true,
    },
    Routine {
        name: "Merge",
        run: baselines::merge_sort,
        verifies: true,
    },
    Routine {
        name: "Quick",
        run: baselines::quick_sort,
        verifies: true,
    },
    Routine {
        name: "Radix",
        run: run_radix,
        verifies: true,
    },
    Routine {
        name: "Linear",
        run: run_linear,
        verifies: false,
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct BenchRow {
    pub order: DataOrder,
    pub size: usize,
    pub routine: &'static str,
    pub seconds: f64,
    pub verified: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub rows: Vec<BenchRow>,
    pub all_verified: bool,
}

pub fn is_sorted(data: &[i64]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Whether `a` and `b` hold the same values with the same multiplicities
pub fn is_permutation(a: &[i64], b: &[i64]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut counts: FxHashMap<i64, isize> = FxHashMap::default();
    for &x in a {
        *counts.entry(x).or_insert(0) += 1;
    }
    for &x in b {
        *counts.entry(x).or_insert(0) -= 1;
    }
    counts.values().all(|&c| c == 0)
}

/// Fastest of `repeat` runs (at least one) over fresh copies of `data`
fn time_routine(routine: &Routine, data: &[i64], repeat: usize) -> (Duration, bool) {
    let mut best = Duration::MAX;
    let mut verified = true;
    for _ in 0..repeat.max(1) {
        let start = Instant::now();
        let result = black_box((routine.run)(black_box(data)));
        best = best.min(start.elapsed());
        if routine.verifies {
            verified &= is_sorted(&result) && is_permutation(data, &result);
        }
    }
    (best, verified)
}

pub fn run(args: &BenchArgs) -> BenchReport {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut rows = Vec::new();
    for order in DataOrder::ALL {
        for &size in &args.sizes {
            info!("bench: order={} n={}", order, size);
            let data = dataset::generate(size, BENCH_MAX_VALUE, order, &mut rng);
            for routine in &ROUTINES {
                let (best, verified) = time_routine(routine, &data, args.repeat);
                rows.push(BenchRow {
                    order,
                    size,
                    routine: routine.name,
                    seconds: best.as_secs_f64(),
                    verified,
                });
            }
        }
    }

    let all_verified = rows.iter().all(|row| row.verified);
    BenchReport { rows, all_verified }
}

impl BenchReport {
    /// Plain-text report grouped by order, then size
    pub fn to_table(&self) -> String {
        let mut out = String::new();
        let mut current: Option<(DataOrder, usize)> = None;
        for row in &self.rows {
            if current.map(|(order, _)| order) != Some(row.order) {
                let _ = writeln!(out, "\n=== mode: {} ===", row.order);
            }
            if current != Some((row.order, row.size)) {
                let _ = writeln!(out, "\n n={}", row.size);
                current = Some((row.order, row.size));
            }
            let flag = if row.verified { "" } else { "  (INCORRECT)" };
            let _ = writeln!(out, "  {:6}: {:.6} sec{}", row.routine, row.seconds, flag);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&[3, 1, 2, 1], &[1, 1, 2, 3]));
        assert!(!is_permutation(&[3, 1, 2, 1], &[1, 2, 2, 3]));
        assert!(!is_permutation(&[1], &[1, 1]));
    }

    #[test]
    fn test_small_run_verifies() {
        let args = BenchArgs {
            sizes: vec![10, 25],
            repeat: 1,
            seed: Some(8),
            json: false,
        };
        let report = run(&args);
        assert_eq!(report.rows.len(), DataOrder::ALL.len() * 2 * ROUTINES.len());
        assert!(report.all_verified);

        let table = report.to_table();
        assert!(table.contains("=== mode: random ==="));
        assert!(table.contains(" n=25"));
        assert!(table.contains("Linear"));
    }

    #[test]
    fn test_report_serializes() {
        let report = BenchReport {
            rows: vec![BenchRow {
                order: DataOrder::Sorted,
                size: 100,
                routine: "Radix",
                seconds: 0.5,
                verified: true,
            }],
            all_verified: true,
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"order\":\"sorted\""));
        assert!(json.contains("\"routine\":\"Radix\""));
    }
}
