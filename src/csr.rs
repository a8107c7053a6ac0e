//! A generic compressed index/item pair, reused for element connectivity,
//! node/element/surface groups, MPC rows, and import/export/shared tables.
//!
//! The source builds these with intrusive singly-linked lists (one bucket
//! per owner, walked and flattened at the end). That scaffolding is a
//! performance accident of C's standard toolbox rather than a design
//! decision (Design Note), so here we use the equivalent two-pass
//! count-then-fill discipline over plain `Vec`s.

use serde::{Deserialize, Serialize};

/// `index[0..=n]` delimits `item` into `n` runs: entity `i` owns
/// `item[index[i]..index[i+1]]`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Csr<T> {
    pub index: Vec<usize>,
    pub item: Vec<T>,
}

impl<T> Csr<T> {
    pub fn empty() -> Self {
        Self {
            index: vec![0],
            item: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.index.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn row(&self, i: usize) -> &[T] {
        &self.item[self.index[i]..self.index[i + 1]]
    }

    pub fn iter(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.len()).map(move |i| self.row(i))
    }
}

/// Two-pass builder: count how many items each of `n` owners will receive,
/// convert counts to offsets, then fill. Mirrors the allocate-once pattern
/// that replaces the source's per-node linked-list accumulation.
pub struct CsrBuilder {
    counts: Vec<usize>,
}

impl CsrBuilder {
    pub fn new(n_owners: usize) -> Self {
        Self {
            counts: vec![0; n_owners],
        }
    }

    pub fn count(&mut self, owner: usize) {
        self.counts[owner] += 1;
    }

    /// Converts counts to a CSR `index` array and returns a [`CsrFiller`]
    /// ready to receive exactly that many items per owner.
    pub fn into_filler<T: Clone + Default>(self) -> CsrFiller<T> {
        let mut index = Vec::with_capacity(self.counts.len() + 1);
        index.push(0);
        let mut running = 0usize;
        for &c in &self.counts {
            running += c;
            index.push(running);
        }
        let item = vec![T::default(); running];
        let cursor = index[..index.len() - 1].to_vec();
        CsrFiller {
            index,
            item,
            cursor,
        }
    }
}

pub struct CsrFiller<T> {
    index: Vec<usize>,
    item: Vec<T>,
    cursor: Vec<usize>,
}

impl<T> CsrFiller<T> {
    /// Appends `value` to `owner`'s run, in call order.
    pub fn push(&mut self, owner: usize, value: T) {
        let pos = self.cursor[owner];
        self.item[pos] = value;
        self.cursor[owner] += 1;
    }

    pub fn finish(self) -> Csr<T> {
        debug_assert!(
            self.cursor
                .iter()
                .zip(self.index.iter().skip(1))
                .all(|(c, end)| c == end),
            "CsrFiller::finish called before every owner's run was fully filled"
        );
        Csr {
            index: self.index,
            item: self.item,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_pass_build_matches_expected_rows() {
        let owners = [0usize, 2, 0, 1, 2, 2];
        let mut builder = CsrBuilder::new(3);
        for &o in &owners {
            builder.count(o);
        }
        let mut filler = builder.into_filler::<usize>();
        for (item_idx, &o) in owners.iter().enumerate() {
            filler.push(o, item_idx);
        }
        let csr = filler.finish();
        assert_eq!(csr.len(), 3);
        assert_eq!(csr.row(0), &[0, 2]);
        assert_eq!(csr.row(1), &[3]);
        assert_eq!(csr.row(2), &[1, 4, 5]);
    }

    #[test]
    fn empty_csr_has_zero_rows() {
        let csr: Csr<usize> = Csr::empty();
        assert_eq!(csr.len(), 0);
        assert!(csr.is_empty());
    }
}
