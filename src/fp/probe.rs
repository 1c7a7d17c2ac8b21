use std::cmp::Ordering;

use rayon::prelude::*;
use tracing::trace;

use crate::fp::encode::{Counter, ItemId, KeyConv};
use crate::fp::tree::FPTree;

impl<C> FPTree<C> {
    /// Number of transactions containing every queried item.
    ///
    /// Returns `0` for an empty query or when any item is unknown (an item
    /// below the support threshold cannot be part of a supported
    /// combination). Work is bounded by the occurrences of the least
    /// frequent queried item times the tree depth.
    pub fn probe_frequency<'a, T, I>(&self, items: I) -> Counter
    where
        T: 'a + ?Sized,
        I: IntoIterator<Item = &'a T>,
        C: KeyConv<T>,
    {
        let mut target: Vec<ItemId> = Vec::new();
        for item in items {
            match self.dict.entry(&self.keyconv.canonical_key(item)) {
                Some((id, _)) => target.push(id),
                None => return 0,
            }
        }
        if target.is_empty() {
            return 0;
        }
        target.sort_unstable();

        // Largest identifier = least frequent item = fewest tree nodes.
        let rarest = target[target.len() - 1];
        let mut frequency = 0;
        for &node in &self.item_nodelist[rarest] {
            let path = self.root_path_ids(node);
            if multiset_intersection_len(&target, &path) == target.len() {
                frequency += self.nodes[node].count;
            }
        }
        trace!(?target, rarest, frequency, "probe");
        frequency
    }

    /// Probes many queries at once across a rayon thread pool. The tree is
    /// immutable after construction, so the scans share it freely.
    pub fn probe_frequencies<'a, T, Q>(&self, queries: &'a [Q]) -> Vec<Counter>
    where
        T: 'a + ?Sized + Sync,
        Q: Sync,
        &'a Q: IntoIterator<Item = &'a T>,
        C: KeyConv<T> + Sync,
    {
        queries
            .par_iter()
            .map(|query| self.probe_frequency(query))
            .collect()
    }
}

/// Size of the multiset intersection of two ascending-sorted id sequences.
/// Duplicates count once per pairing, matching the multiset semantics of
/// paths built from transactions with repeated items.
pub(crate) fn multiset_intersection_len(a: &[ItemId], b: &[ItemId]) -> usize {
    let (mut i, mut j, mut len) = (0, 0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                len += 1;
                i += 1;
                j += 1;
            }
        }
    }
    len
}
