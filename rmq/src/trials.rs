use crate::input::random_range;
use rand::Rng;
use range_max_tree::{brute_force_max, RangeMaxTree};
use serde::Serialize;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub l: usize,
    pub r: usize,
    pub tree: i64,
    pub brute_force: i64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CorrectnessReport {
    pub trials: usize,
    pub passed: usize,
    pub mismatches: Vec<Mismatch>,
}

impl CorrectnessReport {
    pub fn failed(&self) -> usize {
        self.mismatches.len()
    }

    pub fn all_passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PerformanceReport {
    pub size: usize,
    pub queries: usize,
    pub tree_secs: f64,
    pub brute_force_secs: f64,
}

impl PerformanceReport {
    /// `None` when the tree timing is too small to divide by.
    pub fn speedup(&self) -> Option<f64> {
        if self.tree_secs > 0.0 {
            Some(self.brute_force_secs / self.tree_secs)
        } else {
            None
        }
    }
}

pub fn run_correctness_trials<R: Rng>(
    tree: &RangeMaxTree<i64>,
    trials: usize,
    rng: &mut R,
) -> anyhow::Result<CorrectnessReport> {
    let source = tree.source();
    let mut report = CorrectnessReport {
        trials,
        ..Default::default()
    };
    for _ in 0..trials {
        let (l, r) = random_range(rng, source.len());
        let tree_max = tree.query_max(l, r)?;
        let brute_force = brute_force_max(source, l, r)?;
        if tree_max == brute_force {
            report.passed += 1;
        } else {
            log::warn!(
                "mismatch on [{l},{r}]: tree={tree_max}, brute force={brute_force}"
            );
            report.mismatches.push(Mismatch {
                l,
                r,
                tree: tree_max,
                brute_force,
            });
        }
    }
    Ok(report)
}

pub fn run_performance_comparison<R: Rng>(
    tree: &RangeMaxTree<i64>,
    queries: usize,
    rng: &mut R,
) -> anyhow::Result<PerformanceReport> {
    let source = tree.source();
    let ranges: Vec<_> = (0..queries)
        .map(|_| random_range(rng, source.len()))
        .collect();

    let start = Instant::now();
    for &(l, r) in &ranges {
        std::hint::black_box(tree.query_max(l, r)?);
    }
    let tree_secs = start.elapsed().as_secs_f64();

    let start = Instant::now();
    for &(l, r) in &ranges {
        std::hint::black_box(brute_force_max(source, l, r)?);
    }
    let brute_force_secs = start.elapsed().as_secs_f64();

    log::debug!(
        "timed {queries} queries: tree {tree_secs:.6}s, brute force {brute_force_secs:.6}s"
    );
    Ok(PerformanceReport {
        size: source.len(),
        queries,
        tree_secs,
        brute_force_secs,
    })
}
