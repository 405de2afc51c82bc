//! Index compaction shared by the normalizers.

#![allow(clippy::cast_possible_truncation)]

/// Old-to-new index map produced by dropping entries from a list.
pub(crate) struct Compaction {
    /// New index of each old entry, `None` if dropped.
    pub(crate) sparse: Vec<Option<u32>>,
    /// Whether each old entry survives in the compacted list.
    keep: Vec<bool>,
    /// Number of entries kept.
    pub(crate) kept: usize,
}

impl Compaction {
    /// Keep the flagged entries in their original order.
    pub(crate) fn from_keep(keep: &[bool]) -> Self {
        let mut next = 0u32;
        let sparse = keep
            .iter()
            .map(|&k| {
                k.then(|| {
                    next += 1;
                    next - 1
                })
            })
            .collect();
        Self {
            sparse,
            keep: keep.to_vec(),
            kept: next as usize,
        }
    }

    /// Collapse every entry onto its group representative, keeping
    /// representatives in their original order. Merged entries map to their
    /// representative's new index but are not themselves kept.
    ///
    /// `rep[i] <= i` and `rep[rep[i]] == rep[i]` for every entry.
    pub(crate) fn from_representatives(rep: &[u32]) -> Self {
        let keep: Vec<bool> = rep
            .iter()
            .enumerate()
            .map(|(i, &r)| r as usize == i)
            .collect();
        let mut out = Self::from_keep(&keep);
        for i in 0..rep.len() {
            out.sparse[i] = out.sparse[rep[i] as usize];
        }
        out
    }

    /// Dense map for facet remapping.
    ///
    /// Dropped entries map to `u32::MAX`; facets never reference them.
    pub(crate) fn dense(&self) -> Vec<u32> {
        self.sparse.iter().map(|m| m.unwrap_or(u32::MAX)).collect()
    }

    /// Whether nothing was dropped.
    pub(crate) fn is_identity(&self) -> bool {
        self.kept == self.sparse.len()
    }

    /// Copy the kept entries of `items`.
    pub(crate) fn apply<T: Clone>(&self, items: &[T]) -> Vec<T> {
        let mut out = Vec::with_capacity(self.kept);
        out.extend(
            items
                .iter()
                .zip(&self.keep)
                .filter(|&(_, &k)| k)
                .map(|(item, _)| item.clone()),
        );
        out
    }
}

/// Identity map over `n` entries.
pub(crate) fn identity(n: usize) -> Vec<u32> {
    (0..n as u32).collect()
}
