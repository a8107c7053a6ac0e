//! Canonical edge extraction from element connectivity.
//!
//! The source gets its edge list from a full element-topology table
//! (true geometric edges per element type). That table is out of scope
//! here (`SPEC_FULL.md` §1), so the nodal graph instead treats every
//! unordered pair of nodes co-occurring in an element as an edge, a
//! standard fallback when per-type topology isn't available, and
//! sufficient for partitioning-quality adjacency (it only ever
//! over-connects relative to true edges, never under-connects).

use itertools::Itertools;
use rustc_hash::FxHashSet;

use crate::csr::Csr;

/// A canonical `(min, max)` node-pair edge.
pub type Edge = (usize, usize);

/// Every distinct node pair that co-occurs in some element, deduplicated
/// and sorted ascending by `(lo, hi)`.
pub fn canonical_edges(elem_node: &Csr<usize>) -> Vec<Edge> {
    let mut seen: FxHashSet<Edge> = FxHashSet::default();
    for row in elem_node.iter() {
        for (a, b) in row.iter().copied().tuple_combinations() {
            let edge = if a < b { (a, b) } else { (b, a) };
            seen.insert(edge);
        }
    }
    let mut edges: Vec<Edge> = seen.into_iter().collect();
    edges.sort_unstable();
    edges
}
