//! Frequency-ordered prefix tree (FP-tree) with support-count probing.
//!
//! An [`FPTree`] is built once from a batch of transactions (each an
//! iterable of items) and afterwards answers "how many transactions contain
//! at least this set of items" without rescanning the input. Items are
//! identified by a canonical string key produced by a pluggable
//! [`KeyConv`] capability; the default [`StrKey`] is the identity on
//! string-like items.
//!
//! ```
//! use fpprobe::FPTree;
//!
//! let transactions = vec![
//!     vec!["a", "d", "f"],
//!     vec!["a", "c", "d", "e"],
//!     vec!["b", "d"],
//! ];
//! let tree = FPTree::new(2, &transactions);
//! assert_eq!(tree.probe_frequency(["a", "d"]), 2);
//! assert_eq!(tree.probe_frequency(["f"]), 0); // below min_support
//! ```
//!
//! The tree is immutable after construction, so probes may run from many
//! threads at once; see [`FPTree::probe_frequencies`] for a batch variant.

pub mod fp;

pub use fp::{Counter, FPTree, IdItemset, ItemId, ItemKey, KeyConv, StrKey};
