//! Graph construction over mesh connectivity (component C2).

pub mod builder;
pub mod edges;

pub use builder::{element_graph, nodal_graph};
pub use edges::{Edge, canonical_edges};

/// Number of edges whose endpoints fall in different domains, the
/// standard partition-quality metric reported by `ProfileSink`.
pub fn edge_cut(edges: &[Edge], owner: &[usize]) -> usize {
    edges
        .iter()
        .filter(|&&(a, b)| owner[a] != owner[b])
        .count()
}
