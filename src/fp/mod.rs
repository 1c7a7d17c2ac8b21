pub mod builder;
pub mod dump;
pub mod encode;
pub mod probe;
pub mod tree;


pub use encode::{Counter, IdItemset, ItemDict, ItemId, ItemKey, KeyConv, StrKey};
pub use tree::{FPNode, FPTree};
