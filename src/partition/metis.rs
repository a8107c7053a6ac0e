//! A narrow seam for pMETIS/kMETIS: this crate never links the real
//! numerical backend (out of scope), only the interface a real one would
//! satisfy and a [`MissingBackend`] that makes that absence explicit
//! rather than silently routing everything to domain 0.

use crate::csr::Csr;

/// A graph-partitioning backend taking a node/element adjacency graph
/// (CSR form) and returning a domain assignment plus the resulting
/// edge-cut.
///
/// Grounded in the source's `HECMW_METIS_*` wrapper functions, which
/// present exactly this `(xadj, adjncy, n_parts) -> (part, edgecut)`
/// shape to the rest of the partitioner.
pub trait GraphPartitioner {
    fn partition(&self, graph: &Csr<usize>, n_parts: usize) -> (Vec<usize>, usize);
}

/// Stands in for a pMETIS/kMETIS build that wasn't compiled in.
///
/// Matches the source's documented fallback contract: every entity is
/// assigned domain 0 and the edge-cut is reported as 0. Callers must
/// treat that sentinel pattern (`n_parts > 1` with all-zero assignment
/// and zero edge-cut) as a configuration error, see
/// [`crate::partition::assign::run_graph_partitioner`].
pub struct MissingBackend;

impl GraphPartitioner for MissingBackend {
    fn partition(&self, graph: &Csr<usize>, _n_parts: usize) -> (Vec<usize>, usize) {
        (vec![0; graph.len()], 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_backend_reports_the_documented_sentinel() {
        let graph = Csr {
            index: vec![0, 1, 2],
            item: vec![1usize, 0],
        };
        let (part, edgecut) = MissingBackend.partition(&graph, 3);
        assert_eq!(part, vec![0, 0]);
        assert_eq!(edgecut, 0);
    }
}
