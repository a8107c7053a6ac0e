//! Owner assignment and global double-numbering (`SPEC_FULL.md` §4.2).
//!
//! Produces, once per `decompose()` call: which domain owns each node
//! and element, and each entity's 1-based local id *within its owner*
//! (the `(local_id, domain)` pair published at the `LocalMesh` boundary).
//! This differs from the per-subdomain local numbering built later for
//! each `LocalMesh`'s own connectivity (see [`crate::local_mesh`]),
//! which additionally numbers halo entities; see that module's doc
//! comment for why the two tables must agree on every entity this
//! global pass marks internal.

use crate::error::{Error, Result};
use crate::graph::{element_graph, nodal_graph};
use crate::mesh::{GlobalMesh, PartType};
use crate::partition::control::{PartMethod, PartitioningControl};
use crate::partition::metis::GraphPartitioner;
use crate::partition::rcb::{rcb_partition_eb, rcb_partition_nb};

/// Global ownership and local-id assignment for every node and element.
#[derive(Clone, Debug, PartialEq)]
pub struct Numbering {
    pub node_owner: Vec<usize>,
    pub node_local: Vec<usize>,
    pub elem_owner: Vec<usize>,
    pub elem_local: Vec<usize>,
}

/// Runs `backend` and turns its documented "nothing compiled in" sentinel
/// (all-zero assignment, zero edge-cut, `n_parts > 1`) into
/// [`Error::BackendMissing`] instead of silently decomposing into a
/// single domain.
pub fn run_graph_partitioner(
    backend: &dyn GraphPartitioner,
    graph: &crate::csr::Csr<usize>,
    n_parts: usize,
    method_name: &'static str,
) -> Result<Vec<usize>> {
    let (part, edgecut) = backend.partition(graph, n_parts);
    if n_parts > 1 && edgecut == 0 && part.iter().all(|&d| d == 0) {
        return Err(Error::BackendMissing {
            method: method_name,
        });
    }
    Ok(part)
}

fn method_name(method: PartMethod) -> &'static str {
    match method {
        PartMethod::Rcb => "rcb",
        PartMethod::PMetis => "pmetis",
        PartMethod::KMetis => "kmetis",
    }
}

/// Assigns node owners directly (node-based mode, §4.2.1/4.2.2).
pub fn assign_nodes(
    mesh: &GlobalMesh,
    control: &PartitioningControl,
    backend: &dyn GraphPartitioner,
) -> Result<Vec<usize>> {
    match control.method {
        PartMethod::Rcb => rcb_partition_nb(mesh, control),
        PartMethod::PMetis | PartMethod::KMetis => {
            let edges = crate::graph::canonical_edges(mesh.elem_node());
            let graph = nodal_graph(mesh.n_node(), &edges);
            run_graph_partitioner(backend, &graph, control.n_domain, method_name(control.method))
        }
    }
}

/// Assigns element owners directly (element-based mode, §4.2.1/4.2.2).
pub fn assign_elems(
    mesh: &GlobalMesh,
    control: &PartitioningControl,
    backend: &dyn GraphPartitioner,
) -> Result<Vec<usize>> {
    match control.method {
        PartMethod::Rcb => rcb_partition_eb(mesh, control),
        PartMethod::PMetis | PartMethod::KMetis => {
            let graph = element_graph(mesh);
            run_graph_partitioner(backend, &graph, control.n_domain, method_name(control.method))
        }
    }
}

/// Derives element ownership from node ownership (§4.2.3, node-based
/// mode): an element is owned by the lowest domain among its nodes'
/// owners.
pub fn derive_elem_owner_from_nodes(mesh: &GlobalMesh, node_owner: &[usize]) -> Vec<usize> {
    mesh.elem_node()
        .iter()
        .map(|nodes| {
            nodes
                .iter()
                .map(|&n| node_owner[n])
                .min()
                .expect("GlobalMesh::new rejects zero-node elements")
        })
        .collect()
}

/// Derives node ownership from element ownership (§4.2.3, element-based
/// mode): a node is owned by the lowest domain among the elements that
/// reference it. A node referenced by no element has no derivable owner.
pub fn derive_node_owner_from_elems(mesh: &GlobalMesh, elem_owner: &[usize]) -> Result<Vec<usize>> {
    let mut owner: Vec<Option<usize>> = vec![None; mesh.n_node()];
    for (e, nodes) in mesh.elem_node().iter().enumerate() {
        let d = elem_owner[e];
        for &n in nodes {
            owner[n] = Some(match owner[n] {
                Some(existing) => existing.min(d),
                None => d,
            });
        }
    }
    owner
        .into_iter()
        .enumerate()
        .map(|(n, o)| o.ok_or(Error::OrphanNode { node: n }))
        .collect()
}

/// Assigns 1-based local ids within each owning domain, in ascending
/// `(domain, original index)` order (§4.2.4, "double numbering").
pub fn number_entities(owner: &[usize], n_domain: usize) -> Vec<usize> {
    let mut next = vec![1usize; n_domain];
    let mut local = vec![0usize; owner.len()];
    for (i, &d) in owner.iter().enumerate() {
        local[i] = next[d];
        next[d] += 1;
    }
    local
}

/// Runs the full §4.2 pipeline: assigns owners per `control.part_type`,
/// derives the orthogonal entity's owners, then numbers everything.
pub fn compute_numbering(
    mesh: &GlobalMesh,
    control: &PartitioningControl,
    backend: &dyn GraphPartitioner,
) -> Result<Numbering> {
    let (node_owner, elem_owner) = match control.part_type {
        PartType::NodeBased => {
            let node_owner = assign_nodes(mesh, control, backend)?;
            let elem_owner = derive_elem_owner_from_nodes(mesh, &node_owner);
            (node_owner, elem_owner)
        }
        PartType::ElemBased => {
            let elem_owner = assign_elems(mesh, control, backend)?;
            let node_owner = derive_node_owner_from_elems(mesh, &elem_owner)?;
            (node_owner, elem_owner)
        }
    };
    let node_local = number_entities(&node_owner, control.n_domain);
    let elem_local = number_entities(&elem_owner, control.n_domain);
    Ok(Numbering {
        node_owner,
        node_local,
        elem_owner,
        elem_local,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::examples::{beam_3seg, orphan_node_mesh};
    use crate::partition::control::RcbAxis;

    fn nb_control(n_domain: usize, rcb_axis: Vec<RcbAxis>) -> PartitioningControl {
        PartitioningControl {
            n_domain,
            part_type: PartType::NodeBased,
            method: PartMethod::Rcb,
            depth: 1,
            rcb_axis,
        }
    }

    #[test]
    fn elem_owner_derived_as_min_of_node_owners() {
        let mesh = beam_3seg();
        let node_owner = vec![0, 0, 1, 1];
        let elem_owner = derive_elem_owner_from_nodes(&mesh, &node_owner);
        // e0=[0,1]->0, e1=[1,2]->min(0,1)=0, e2=[2,3]->1
        assert_eq!(elem_owner, vec![0, 0, 1]);
    }

    #[test]
    fn orphan_node_is_reported() {
        let mesh = orphan_node_mesh();
        let elem_owner = vec![0usize];
        let result = derive_node_owner_from_elems(&mesh, &elem_owner);
        assert!(matches!(result, Err(Error::OrphanNode { node: 1 })));
    }

    #[test]
    fn double_numbering_is_one_based_ascending_per_domain() {
        let owner = vec![1, 0, 1, 0, 0];
        let local = number_entities(&owner, 2);
        // domain 0 owns indices 1,3,4 -> locals 1,2,3; domain 1 owns 0,2 -> locals 1,2
        assert_eq!(local, vec![1, 1, 2, 2, 3]);
    }

    #[test]
    fn compute_numbering_end_to_end_for_node_based_rcb() {
        let mesh = beam_3seg();
        let control = nb_control(2, vec![RcbAxis::X]);
        let numbering = compute_numbering(&mesh, &control, &crate::partition::metis::MissingBackend).unwrap();
        assert_eq!(numbering.node_owner, vec![0, 0, 1, 1]);
        assert_eq!(numbering.node_local, vec![1, 2, 1, 2]);
    }

    #[test]
    fn missing_backend_surfaces_as_backend_missing_for_metis_methods() {
        let mesh = beam_3seg();
        let control = PartitioningControl {
            n_domain: 2,
            part_type: PartType::NodeBased,
            method: PartMethod::KMetis,
            depth: 1,
            rcb_axis: vec![],
        };
        let result = assign_nodes(&mesh, &control, &crate::partition::metis::MissingBackend);
        assert!(matches!(result, Err(Error::BackendMissing { method: "kmetis" })));
    }
}
