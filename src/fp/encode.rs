use std::collections::HashMap;

/// Canonical string form of an item.
pub type ItemKey = String;
/// Dense item identifier; `0` is the most frequent surviving item.
pub type ItemId = usize;
/// Occurrence / traversal count.
pub type Counter = u64;
/// One projected transaction: surviving identifiers, sorted ascending.
pub type IdItemset = Vec<ItemId>;

/// Converts an item to its canonical string key.
///
/// Bound once at construction time and reused by every query, so it must be
/// pure: equal items must always yield equal keys.
pub trait KeyConv<T: ?Sized> {
    fn canonical_key(&self, item: &T) -> ItemKey;
}

/// Default conversion: identity on string-like items.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrKey;

impl<T: AsRef<str> + ?Sized> KeyConv<T> for StrKey {
    fn canonical_key(&self, item: &T) -> ItemKey {
        item.as_ref().to_owned()
    }
}

/// Bidirectional mapping between canonical keys and dense identifiers.
///
/// Identifiers are assigned in order of descending total count; equal counts
/// break ties by ascending key. Invariant: `count(id) >= count(id + 1)`.
#[derive(Debug, Clone, Default)]
pub struct ItemDict {
    pub(crate) map: HashMap<ItemKey, (ItemId, Counter)>,
    pub(crate) inv: Vec<ItemKey>,
}

impl ItemDict {
    /// Tallies keyed transactions and assigns identifiers to every item
    /// occurring at least `min_support` times.
    pub(crate) fn encode(keyed: &[Vec<ItemKey>], min_support: Counter) -> Self {
        let mut counts: HashMap<&str, Counter> = HashMap::new();
        for transaction in keyed {
            for key in transaction {
                *counts.entry(key.as_str()).or_insert(0) += 1;
            }
        }

        // Count ascending, key descending within a count tier. The reversal
        // below flips both, leaving keys ascending inside each tier.
        let mut items: Vec<(&str, Counter)> = counts.into_iter().collect();
        items.sort_unstable_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)));

        // Unsupported items form a contiguous prefix of the ascending sort.
        let cut = items.partition_point(|&(_, count)| count < min_support);
        items.drain(..cut);
        items.reverse();

        let mut map = HashMap::with_capacity(items.len());
        let mut inv = Vec::with_capacity(items.len());
        for (id, (key, count)) in items.into_iter().enumerate() {
            map.insert(key.to_owned(), (id, count));
            inv.push(key.to_owned());
        }
        Self { map, inv }
    }

    /// Rewrites keyed transactions into ascending identifier rows, silently
    /// dropping keys that fell below the support threshold. Row order and
    /// count are preserved; rows may come out empty.
    pub(crate) fn project(&self, keyed: &[Vec<ItemKey>]) -> Vec<IdItemset> {
        keyed
            .iter()
            .map(|transaction| {
                let mut ids: IdItemset = transaction
                    .iter()
                    .filter_map(|key| self.map.get(key).map(|&(id, _)| id))
                    .collect();
                ids.sort_unstable();
                ids
            })
            .collect()
    }

    pub(crate) fn entry(&self, key: &str) -> Option<(ItemId, Counter)> {
        self.map.get(key).copied()
    }

    pub(crate) fn len(&self) -> usize {
        self.inv.len()
    }
}
