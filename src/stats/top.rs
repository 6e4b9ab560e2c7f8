//! Partial selection of the highest package counts.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A package and the number of files it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageCount {
    pub name: String,
    pub files: u64,
}

impl Ord for PackageCount {
    /// Orders by file count; among equal counts the lexicographically
    /// smaller name ranks higher. This makes the selection deterministic
    /// regardless of the order entries are fed in.
    fn cmp(&self, other: &Self) -> Ordering {
        self.files
            .cmp(&other.files)
            .then_with(|| other.name.cmp(&self.name))
    }
}

impl PartialOrd for PackageCount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Selects the `limit` highest-ranked entries, best first.
///
/// Keeps a min-heap bounded at `limit` entries and replaces its minimum only
/// when a candidate outranks it, so the cost is O(M log N) for M entries
/// rather than a full sort. A `limit` of zero yields an empty Vec.
pub fn top_n<'a, I>(entries: I, limit: usize) -> Vec<PackageCount>
where
    I: IntoIterator<Item = (&'a str, u64)>,
{
    if limit == 0 {
        return Vec::new();
    }

    let mut heap: BinaryHeap<Reverse<PackageCount>> = BinaryHeap::with_capacity(limit + 1);

    for (name, files) in entries {
        if heap.len() < limit {
            heap.push(Reverse(PackageCount {
                name: name.to_string(),
                files,
            }));
            continue;
        }

        let Some(Reverse(lowest)) = heap.peek() else {
            continue;
        };
        // Compare before allocating; most candidates lose to the current
        // minimum once the heap is full.
        let outranks = files > lowest.files || (files == lowest.files && name < lowest.name.as_str());
        if outranks {
            heap.pop();
            heap.push(Reverse(PackageCount {
                name: name.to_string(),
                files,
            }));
        }
    }

    // Ascending over Reverse<_> is descending over the rank order.
    heap.into_sorted_vec()
        .into_iter()
        .map(|Reverse(entry)| entry)
        .collect()
}
