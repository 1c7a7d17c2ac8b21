use std::collections::BTreeMap;

use crate::fp::encode::{Counter, IdItemset, ItemDict, ItemId, KeyConv, StrKey};

pub(crate) type NodeId = usize;

/// One (path-prefix, item) pair in the tree.
///
/// Nodes live in the arena owned by [`FPTree`]; `parent` and the `children`
/// values are arena indices, so upward traversal needs no owning back
/// reference. The root sentinel is the only node with `item == None`.
#[derive(Debug, Clone)]
pub struct FPNode {
    pub(crate) item: Option<ItemId>,
    pub(crate) count: Counter,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: BTreeMap<ItemId, NodeId>,
}

impl FPNode {
    pub(crate) fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: BTreeMap::new(),
        }
    }

    pub(crate) fn new_item(item: ItemId, parent: NodeId) -> Self {
        Self {
            item: Some(item),
            count: 0,
            parent: Some(parent),
            children: BTreeMap::new(),
        }
    }
}

/// Frequency-ordered prefix tree over a fixed transaction batch.
///
/// Built once via [`FPTree::new`] or [`FPTree::with_keyconv`] and read-only
/// afterwards, so it can be probed from multiple threads concurrently.
#[derive(Debug, Clone)]
pub struct FPTree<C = StrKey> {
    pub(crate) min_support: Counter,
    pub(crate) keyconv: C,
    pub(crate) dict: ItemDict,
    pub(crate) id_dataset: Vec<IdItemset>,
    pub(crate) nodes: Vec<FPNode>,
    pub(crate) item_nodelist: Vec<Vec<NodeId>>,
}

impl<C> FPTree<C> {
    pub(crate) const ROOT: NodeId = 0;

    /// Inserts one projected transaction, sharing existing prefixes and
    /// incrementing the traversal counter of every node on the path. New
    /// nodes register in their item's index bucket in creation order.
    pub(crate) fn insert_itemset(&mut self, itemset: &[ItemId]) {
        let mut cursor = Self::ROOT;
        for &id in itemset {
            let next = if let Some(&child) = self.nodes[cursor].children.get(&id) {
                child
            } else {
                let child = self.nodes.len();
                self.nodes.push(FPNode::new_item(id, cursor));
                self.nodes[cursor].children.insert(id, child);
                self.item_nodelist[id].push(child);
                child
            };
            self.nodes[next].count += 1;
            cursor = next;
        }
    }

    /// Identifiers on the root-to-node path, ascending (root side first).
    /// The root sentinel contributes nothing.
    pub(crate) fn root_path_ids(&self, node: NodeId) -> Vec<ItemId> {
        let mut ids = Vec::new();
        if let Some(item) = self.nodes[node].item {
            ids.push(item);
        }
        let mut current = self.nodes[node].parent;
        while let Some(up) = current {
            if let Some(item) = self.nodes[up].item {
                ids.push(item);
            }
            current = self.nodes[up].parent;
        }
        ids.reverse();
        ids
    }

    /// Number of transactions the tree was built from.
    pub fn num_records(&self) -> usize {
        self.id_dataset.len()
    }

    /// Number of items that met the support threshold.
    pub fn num_items(&self) -> usize {
        self.dict.len()
    }

    /// The minimum-support threshold the tree was built with.
    pub fn min_support(&self) -> Counter {
        self.min_support
    }

    /// The projected dataset: one ascending identifier row per input
    /// transaction, unsupported items removed.
    pub fn id_dataset(&self) -> &[IdItemset] {
        &self.id_dataset
    }

    /// Surviving items as `(key, id, count)` in identifier order, most
    /// frequent first.
    pub fn items(&self) -> impl Iterator<Item = (&str, ItemId, Counter)> + '_ {
        self.dict
            .inv
            .iter()
            .filter_map(|key| self.dict.entry(key).map(|(id, count)| (key.as_str(), id, count)))
    }

    /// Looks up an item's identifier and total count through the bound key
    /// conversion. `None` when the item never met the support threshold.
    pub fn item_entry<T: ?Sized>(&self, item: &T) -> Option<(ItemId, Counter)>
    where
        C: KeyConv<T>,
    {
        self.dict.entry(&self.keyconv.canonical_key(item))
    }
}
