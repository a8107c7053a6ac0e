//! Node, element, and surface groups: named subsets of the mesh, stored
//! as one [`Csr`] keyed by group index plus a parallel name table.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::csr::Csr;

/// A `(element, local-surface-index)` pair, the item type for surface
/// groups. The surface index is opaque here; its meaning depends on an
/// element-topology table this crate doesn't carry (out of scope).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SurfItem {
    pub elem: usize,
    pub surf: usize,
}

/// A named collection of groups sharing one CSR, e.g. all node groups in
/// a mesh. Group `i`'s members are `csr.row(i)`, its name is `names[i]`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GroupTable<T> {
    pub names: Vec<Arc<str>>,
    pub csr: Csr<T>,
}

impl<T> GroupTable<T> {
    pub fn empty() -> Self {
        Self {
            names: Vec::new(),
            csr: Csr::empty(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n.as_ref() == name)
    }

    pub fn members(&self, group: usize) -> &[T] {
        self.csr.row(group)
    }
}

impl<T> Default for GroupTable<T> {
    fn default() -> Self {
        Self::empty()
    }
}
