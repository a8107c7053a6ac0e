//! Neighbor-domain discovery (`SPEC_FULL.md` §4.3): which other domains
//! a given domain must exchange halo data with.

use crate::halo::mask::Mask;
use crate::mesh::PartType;
use crate::partition::{Numbering, PartitioningControl};

/// Sorted, deduplicated list of domains that own at least one boundary
/// entity of `current_domain`'s primary axis (nodes in node-based mode,
/// elements in element-based mode).
///
/// Grounded on the source's `count_neighbor_pe`/`set_neighbor_pe`, which
/// walk exactly this boundary set rather than every domain pair.
pub fn discover_neighbors(
    mask: &Mask,
    numbering: &Numbering,
    control: &PartitioningControl,
    current_domain: usize,
) -> Vec<usize> {
    let owner: &[usize] = match control.part_type {
        PartType::NodeBased => &numbering.node_owner,
        PartType::ElemBased => &numbering.elem_owner,
    };
    let flags = match control.part_type {
        PartType::NodeBased => &mask.node,
        PartType::ElemBased => &mask.elem,
    };

    let mut neighbors: Vec<usize> = (0..owner.len())
        .filter(|&i| {
            flags.test(i, crate::flags::EntityFlags::EXTERNAL)
                && flags.test(i, crate::flags::EntityFlags::BOUNDARY)
        })
        .map(|i| owner[i])
        .filter(|&d| d != current_domain)
        .collect();
    neighbors.sort_unstable();
    neighbors.dedup();
    neighbors
}
