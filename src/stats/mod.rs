//! Per-package occurrence counting.

mod top;

pub use top::{PackageCount, top_n};

use crate::contents::ContentsEntry;
use std::collections::HashMap;

/// Accumulates how many files each package owns.
///
/// Counts only ever grow and entries are never removed; the table lives for
/// a single run.
#[derive(Debug, Default)]
pub struct PackageCounts {
    counts: HashMap<String, u64>,
    associations: u64,
}

impl PackageCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records every package on a parsed entry, once per occurrence.
    /// A package repeated on one line is counted once per repetition.
    pub fn observe(&mut self, entry: &ContentsEntry) {
        for package in &entry.packages {
            self.add(package);
        }
    }

    /// Increments the count of a single package.
    pub fn add(&mut self, package: &str) {
        *self.counts.entry(package.to_string()).or_default() += 1;
        self.associations += 1;
    }

    /// Folds another table into this one.
    pub fn merge(&mut self, other: PackageCounts) {
        for (package, count) in other.counts {
            *self.counts.entry(package).or_default() += count;
        }
        self.associations += other.associations;
    }

    /// Count for a single package, zero if never seen.
    pub fn get(&self, package: &str) -> u64 {
        self.counts.get(package).copied().unwrap_or(0)
    }

    /// Number of distinct packages seen.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of (file, package) associations observed. Always equals
    /// the sum of all per-package counts.
    pub fn total_associations(&self) -> u64 {
        self.associations
    }

    /// The `limit` packages with the highest counts, best first.
    pub fn top(&self, limit: usize) -> Vec<PackageCount> {
        top_n(
            self.counts.iter().map(|(name, count)| (name.as_str(), *count)),
            limit,
        )
    }
}
