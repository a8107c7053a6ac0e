//! Per-domain node/element flagging (`SPEC_FULL.md` §4.1–4.6, "halo
//! mask"). Recomputed fresh for every `(current_domain)` the driver
//! visits, cheap enough (two `O(n_node + n_elem)` passes per depth
//! level) that caching across domains isn't worth the complexity.

use crate::flags::{EntityFlags, FlagWorkspace};
use crate::mesh::GlobalMesh;
use crate::partition::{Numbering, PartitioningControl};
use crate::mesh::PartType;

/// Node and element flags for one domain's view of the mesh.
pub struct Mask {
    pub node: FlagWorkspace,
    pub elem: FlagWorkspace,
}

pub fn mask_mesh_status(
    mesh: &GlobalMesh,
    numbering: &Numbering,
    control: &PartitioningControl,
    current_domain: usize,
) -> Mask {
    match control.part_type {
        PartType::NodeBased => mask_mesh_status_nb(mesh, numbering, control, current_domain),
        PartType::ElemBased => mask_mesh_status_eb(mesh, numbering, current_domain),
    }
}

fn mask_by_domain(owner: &[usize], current_domain: usize) -> FlagWorkspace {
    let mut ws = FlagWorkspace::new(owner.len());
    for (i, &d) in owner.iter().enumerate() {
        if d == current_domain {
            ws.set(i, EntityFlags::INTERNAL);
        } else {
            ws.set(i, EntityFlags::EXTERNAL);
        }
    }
    ws
}

/// Node-based mask (§4.1): boundary elements are those touching both an
/// internal and an external node; boundary nodes are every node of a
/// boundary element. `depth` extends this by `depth - 1` further passes
/// (Open Question 1 is fully honored here: unlike the element-based
/// path, this loop is live in the source).
fn mask_mesh_status_nb(
    mesh: &GlobalMesh,
    numbering: &Numbering,
    control: &PartitioningControl,
    current_domain: usize,
) -> Mask {
    let mut node = mask_by_domain(&numbering.node_owner, current_domain);
    let mut elem = mask_by_domain(&numbering.elem_owner, current_domain);

    mask_overlap_elem(mesh, &node, &mut elem);
    mask_boundary_node(mesh, &mut node, &elem);

    for _ in 1..control.depth {
        mask_additional_overlap_elem(mesh, &node, &mut elem);
        mask_boundary_node(mesh, &mut node, &elem);
    }

    Mask { node, elem }
}

fn mask_overlap_elem(mesh: &GlobalMesh, node: &FlagWorkspace, elem: &mut FlagWorkspace) {
    for (e, nodes) in mesh.elem_node().iter().enumerate() {
        let mut touches_internal = false;
        let mut touches_external = false;
        for &n in nodes {
            if node.test(n, EntityFlags::INTERNAL) {
                touches_internal = true;
            }
            if node.test(n, EntityFlags::EXTERNAL) {
                touches_external = true;
            }
        }
        if touches_internal && touches_external {
            elem.set(e, EntityFlags::OVERLAP);
            elem.set(e, EntityFlags::BOUNDARY);
        }
    }
}

fn mask_boundary_node(mesh: &GlobalMesh, node: &mut FlagWorkspace, elem: &FlagWorkspace) {
    for (e, nodes) in mesh.elem_node().iter().enumerate() {
        if elem.test(e, EntityFlags::BOUNDARY) {
            for &n in nodes {
                node.set(n, EntityFlags::OVERLAP);
                node.set(n, EntityFlags::BOUNDARY);
            }
        }
    }
}

fn mask_additional_overlap_elem(mesh: &GlobalMesh, node: &FlagWorkspace, elem: &mut FlagWorkspace) {
    for (e, nodes) in mesh.elem_node().iter().enumerate() {
        if nodes.iter().any(|&n| node.test(n, EntityFlags::BOUNDARY)) {
            elem.set(e, EntityFlags::OVERLAP);
            elem.set(e, EntityFlags::BOUNDARY);
        }
    }
}

/// Element-based mask (§4.1): a node is boundary iff it's touched by at
/// least one internal element and at least one external element; a
/// boundary element is any element touching a boundary node. Open
/// Question 1: the source's depth-extension loop for this path is
/// `#if 0`'d out, so `depth` is a no-op here beyond the initial pass
/// regardless of its value.
fn mask_mesh_status_eb(mesh: &GlobalMesh, numbering: &Numbering, current_domain: usize) -> Mask {
    let mut node = mask_by_domain(&numbering.node_owner, current_domain);
    let mut elem = mask_by_domain(&numbering.elem_owner, current_domain);

    mask_overlap_node(mesh, &mut node, &elem);
    mask_boundary_elem(mesh, &node, &mut elem);

    Mask { node, elem }
}

fn mask_overlap_node(mesh: &GlobalMesh, node: &mut FlagWorkspace, elem: &FlagWorkspace) {
    for (e, nodes) in mesh.elem_node().iter().enumerate() {
        let bit = if elem.test(e, EntityFlags::INTERNAL) {
            EntityFlags::MARK
        } else {
            EntityFlags::MASK
        };
        for &n in nodes {
            node.set(n, bit);
        }
    }
    for i in 0..node.len() {
        if node.test(i, EntityFlags::MARK) && node.test(i, EntityFlags::MASK) {
            node.set(i, EntityFlags::OVERLAP);
            node.set(i, EntityFlags::BOUNDARY);
        }
    }
    node.reset(EntityFlags::MASK | EntityFlags::MARK);
}

fn mask_boundary_elem(mesh: &GlobalMesh, node: &FlagWorkspace, elem: &mut FlagWorkspace) {
    for (e, nodes) in mesh.elem_node().iter().enumerate() {
        if nodes.iter().any(|&n| node.test(n, EntityFlags::BOUNDARY)) {
            elem.set(e, EntityFlags::OVERLAP);
            elem.set(e, EntityFlags::BOUNDARY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::examples::beam_3seg;
    use crate::partition::{PartMethod, RcbAxis};

    fn nb_control(depth: usize) -> PartitioningControl {
        PartitioningControl {
            n_domain: 2,
            part_type: PartType::NodeBased,
            method: PartMethod::Rcb,
            depth,
            rcb_axis: vec![RcbAxis::X],
        }
    }

    #[test]
    fn node_based_mask_flags_the_single_boundary_element() {
        let mesh = beam_3seg();
        // n0,n1 -> domain0; n2,n3 -> domain1 (as if assigned directly).
        let numbering = Numbering {
            node_owner: vec![0, 0, 1, 1],
            node_local: vec![1, 2, 1, 2],
            elem_owner: vec![0, 0, 1],
            elem_local: vec![1, 2, 1],
        };
        let control = nb_control(1);
        let mask = mask_mesh_status(&mesh, &numbering, &control, 0);

        assert!(mask.node.test(0, EntityFlags::INTERNAL));
        assert!(mask.node.test(1, EntityFlags::INTERNAL));
        assert!(mask.node.test(1, EntityFlags::BOUNDARY));
        assert!(mask.node.test(2, EntityFlags::EXTERNAL));
        assert!(mask.node.test(2, EntityFlags::BOUNDARY));
        assert!(!mask.node.test(3, EntityFlags::BOUNDARY));

        // e1=[n1,n2] straddles the cut -> boundary, owned by domain0.
        assert!(mask.elem.test(1, EntityFlags::BOUNDARY));
        assert!(mask.elem.test(1, EntityFlags::INTERNAL));
        assert!(!mask.elem.test(0, EntityFlags::BOUNDARY));
        assert!(!mask.elem.test(2, EntityFlags::BOUNDARY));
    }

    #[test]
    fn node_based_mask_for_the_other_domain_sees_the_same_element_as_halo() {
        let mesh = beam_3seg();
        let numbering = Numbering {
            node_owner: vec![0, 0, 1, 1],
            node_local: vec![1, 2, 1, 2],
            elem_owner: vec![0, 0, 1],
            elem_local: vec![1, 2, 1],
        };
        let control = nb_control(1);
        let mask = mask_mesh_status(&mesh, &numbering, &control, 1);

        // e1 is boundary under domain1's mask too, but EXTERNAL (owned by domain0).
        assert!(mask.elem.test(1, EntityFlags::BOUNDARY));
        assert!(mask.elem.test(1, EntityFlags::EXTERNAL));
        assert!(mask.elem.test(2, EntityFlags::INTERNAL));
        assert!(!mask.elem.test(2, EntityFlags::BOUNDARY));
    }
}
