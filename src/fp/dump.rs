use std::fmt;

use crate::fp::tree::FPTree;

/// Diagnostic dump consumed verbatim by external verification tooling.
///
/// Field order and the trailing comma inside every list are part of the
/// contract; the closing brace has no trailing newline.
impl<C> fmt::Display for FPTree<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        writeln!(f, "min_support: {},", self.min_support)?;

        write!(f, "itemdict: [")?;
        for key in &self.dict.inv {
            if let Some((id, count)) = self.dict.entry(key) {
                write!(f, "[{},{},{}],", key, id, count)?;
            }
        }
        writeln!(f, "],")?;

        write!(f, "itemdict_inv: [")?;
        for key in &self.dict.inv {
            write!(f, "{},", key)?;
        }
        writeln!(f, "],")?;

        write!(f, "id_dataset: [")?;
        for itemset in &self.id_dataset {
            write!(f, "[")?;
            for id in itemset {
                write!(f, "{},", id)?;
            }
            write!(f, "],")?;
        }
        writeln!(f, "],")?;

        write!(f, "}}")
    }
}

impl<C> FPTree<C> {
    /// Renders encoder state and the projected dataset as one text block.
    pub fn dump_meta(&self) -> String {
        self.to_string()
    }
}
