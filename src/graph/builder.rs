//! Nodal and element adjacency graphs (component C2 of `SPEC_FULL.md`):
//! the inputs both RCB (via `node_coord`) and pMETIS/kMETIS (via
//! `xadj`/`adjncy`) partition over.

use petgraph::prelude::UnGraphMap;
use rustc_hash::FxHashSet;

use crate::csr::{Csr, CsrBuilder};
use crate::graph::edges::Edge;
use crate::mesh::GlobalMesh;

/// Builds the node-to-node adjacency graph: `a` and `b` are adjacent iff
/// `canonical_edges` produced the pair `(a, b)`.
///
/// Grounded in the teacher's `petgraph::UnGraphMap`-based adjacency
/// construction (`src/topology/symmetry.rs`): edges are inserted into an
/// undirected graph map first (which self-dedupes), then flattened into
/// the CSR every downstream consumer expects.
pub fn nodal_graph(n_node: usize, edges: &[Edge]) -> Csr<usize> {
    let mut graph: UnGraphMap<usize, ()> = UnGraphMap::with_capacity(n_node, edges.len());
    for i in 0..n_node {
        graph.add_node(i);
    }
    for &(a, b) in edges {
        graph.add_edge(a, b, ());
    }
    let mut builder = CsrBuilder::new(n_node);
    for i in 0..n_node {
        for _ in graph.neighbors(i) {
            builder.count(i);
        }
    }
    let mut filler = builder.into_filler::<usize>();
    for i in 0..n_node {
        let mut neighbors: Vec<usize> = graph.neighbors(i).collect();
        neighbors.sort_unstable();
        for n in neighbors {
            filler.push(i, n);
        }
    }
    filler.finish()
}

/// Builds the element-to-element adjacency graph: two elements are
/// adjacent iff they share at least one node.
///
/// Built via the node -> element inverse CSR plus a per-element scratch
/// marker set, matching the source's `O(sum deg^2)` approach rather than
/// the naive `O(n_elem^2)` pairwise scan.
pub fn element_graph(mesh: &GlobalMesh) -> Csr<usize> {
    let n_node = mesh.n_node();
    let n_elem = mesh.n_elem();
    let elem_node = mesh.elem_node();

    let mut inv_builder = CsrBuilder::new(n_node);
    for row in elem_node.iter() {
        for &n in row {
            inv_builder.count(n);
        }
    }
    let mut inv_filler = inv_builder.into_filler::<usize>();
    for (e, row) in elem_node.iter().enumerate() {
        for &n in row {
            inv_filler.push(n, e);
        }
    }
    let node_to_elem = inv_filler.finish();

    let mut adjacency: Vec<FxHashSet<usize>> = vec![FxHashSet::default(); n_elem];
    for e in 0..n_elem {
        for &n in elem_node.row(e) {
            for &other in node_to_elem.row(n) {
                if other != e {
                    adjacency[e].insert(other);
                }
            }
        }
    }

    let mut builder = CsrBuilder::new(n_elem);
    for e in 0..n_elem {
        for _ in &adjacency[e] {
            builder.count(e);
        }
    }
    let mut filler = builder.into_filler::<usize>();
    for e in 0..n_elem {
        let mut neighbors: Vec<usize> = adjacency[e].iter().copied().collect();
        neighbors.sort_unstable();
        for n in neighbors {
            filler.push(e, n);
        }
    }
    filler.finish()
}
