use tracing::debug;

use crate::fp::encode::{Counter, ItemDict, ItemKey, KeyConv, StrKey};
use crate::fp::tree::{FPNode, FPTree};

impl FPTree<StrKey> {
    /// Builds a tree from string-like items with the default key conversion.
    ///
    /// Never fails for well-formed input: when no item meets `min_support`
    /// the result is a root-only tree whose probes all return `0`.
    pub fn new<'a, T, D, S>(min_support: Counter, transactions: D) -> Self
    where
        T: 'a + ?Sized,
        D: IntoIterator<Item = S>,
        S: IntoIterator<Item = &'a T>,
        StrKey: KeyConv<T>,
    {
        Self::with_keyconv(min_support, transactions, StrKey)
    }
}

impl<C> FPTree<C> {
    /// Builds a tree with an explicit key conversion, which stays bound to
    /// the tree and is reused by every probe.
    pub fn with_keyconv<'a, T, D, S>(min_support: Counter, transactions: D, keyconv: C) -> Self
    where
        T: 'a + ?Sized,
        D: IntoIterator<Item = S>,
        S: IntoIterator<Item = &'a T>,
        C: KeyConv<T>,
    {
        // Single keying pass; counting and projection both read the keyed
        // buffer so the input iterator is only consumed once.
        let keyed: Vec<Vec<ItemKey>> = transactions
            .into_iter()
            .map(|transaction| {
                transaction
                    .into_iter()
                    .map(|item| keyconv.canonical_key(item))
                    .collect()
            })
            .collect();

        let dict = ItemDict::encode(&keyed, min_support);
        let id_dataset = dict.project(&keyed);

        let num_records = id_dataset.len();
        let num_items = dict.len();
        debug!(num_records, num_items, min_support, "item dictionary encoded");

        let mut tree = Self {
            min_support,
            keyconv,
            dict,
            id_dataset: Vec::new(),
            nodes: vec![FPNode::new_root()],
            item_nodelist: vec![Vec::new(); num_items],
        };
        for itemset in &id_dataset {
            tree.insert_itemset(itemset);
        }
        tree.id_dataset = id_dataset;

        debug!(num_nodes = tree.nodes.len() - 1, "prefix tree built");
        tree
    }
}
