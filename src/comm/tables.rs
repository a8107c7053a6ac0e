//! Per-neighbor import/export/shared table synthesis (`SPEC_FULL.md`
//! §4.4).
//!
//! All three item lists are expressed in the *current* domain's own
//! local numbering, never the neighbor's, confirmed against the
//! source's `const_import_item`/`const_export_item`/`const_shared_item`,
//! which index through `node_global2local`/`elem_global2local` built for
//! the subdomain currently being emitted, not for the neighbor on the
//! other side of the item.

use crate::csr::Csr;
use crate::flags::{EntityFlags, FlagWorkspace};
use crate::halo::{Mask, discover_neighbors, mask_mesh_status};
use crate::local_mesh::numbering::LocalNumbering;
use crate::mesh::{GlobalMesh, PartType};
use crate::partition::{Numbering, PartitioningControl};

/// Neighbor list plus the three comm CSRs for one domain, items given as
/// this domain's own local ids.
#[derive(Clone, Debug)]
pub struct CommTables {
    pub neighbor_pe: Vec<usize>,
    pub import: Csr<usize>,
    pub export: Csr<usize>,
    pub shared: Csr<usize>,
}

struct Axis<'a> {
    mask: &'a FlagWorkspace,
    owner: &'a [usize],
    local: &'a LocalNumbering,
}

fn primary_axis<'a>(
    part_type: PartType,
    mask: &'a Mask,
    numbering: &'a Numbering,
    node_local: &'a LocalNumbering,
    elem_local: &'a LocalNumbering,
) -> Axis<'a> {
    match part_type {
        PartType::NodeBased => Axis { mask: &mask.node, owner: &numbering.node_owner, local: node_local },
        PartType::ElemBased => Axis { mask: &mask.elem, owner: &numbering.elem_owner, local: elem_local },
    }
}

fn orthogonal_axis<'a>(
    part_type: PartType,
    mask: &'a Mask,
    numbering: &'a Numbering,
    node_local: &'a LocalNumbering,
    elem_local: &'a LocalNumbering,
) -> Axis<'a> {
    match part_type {
        PartType::NodeBased => Axis { mask: &mask.elem, owner: &numbering.elem_owner, local: elem_local },
        PartType::ElemBased => Axis { mask: &mask.node, owner: &numbering.node_owner, local: node_local },
    }
}

fn local_of(local: &LocalNumbering, global: usize) -> usize {
    local.global_to_local[global].expect("a boundary entity must have a local id under its own mask")
}

fn flatten(rows: Vec<Vec<usize>>) -> Csr<usize> {
    let mut index = Vec::with_capacity(rows.len() + 1);
    index.push(0usize);
    let mut item = Vec::new();
    for row in rows {
        item.extend(row);
        index.push(item.len());
    }
    Csr { index, item }
}

/// Builds `current_domain`'s neighbor list and import/export/shared
/// tables (§4.4). `node_local`/`elem_local` must be `current_domain`'s
/// own [`LocalNumbering`] for each axis (see [`crate::local_mesh`]).
pub fn synth_comm_tables(
    mesh: &GlobalMesh,
    numbering: &Numbering,
    control: &PartitioningControl,
    current_domain: usize,
    mask_d: &Mask,
    node_local: &LocalNumbering,
    elem_local: &LocalNumbering,
) -> CommTables {
    let neighbor_pe = discover_neighbors(mask_d, numbering, control, current_domain);

    let primary_d = primary_axis(control.part_type, mask_d, numbering, node_local, elem_local);
    let orth_d = orthogonal_axis(control.part_type, mask_d, numbering, node_local, elem_local);

    let mut import_rows = Vec::with_capacity(neighbor_pe.len());
    let mut export_rows = Vec::with_capacity(neighbor_pe.len());
    let mut shared_rows = Vec::with_capacity(neighbor_pe.len());

    for &neighbor in &neighbor_pe {
        let mask_dp = mask_mesh_status(mesh, numbering, control, neighbor);
        let primary_dp = primary_axis(control.part_type, &mask_dp, numbering, node_local, elem_local);
        let orth_dp = orthogonal_axis(control.part_type, &mask_dp, numbering, node_local, elem_local);

        let mut import = Vec::new();
        let mut export = Vec::new();
        for i in 0..primary_d.mask.len() {
            if !primary_d.mask.test(i, EntityFlags::BOUNDARY) || !primary_dp.mask.test(i, EntityFlags::BOUNDARY) {
                continue;
            }
            if primary_d.owner[i] == neighbor {
                import.push(local_of(primary_d.local, i));
            } else if primary_d.owner[i] == current_domain {
                export.push(local_of(primary_d.local, i));
            }
        }

        let mut shared = Vec::new();
        for i in 0..orth_d.mask.len() {
            if orth_d.mask.test(i, EntityFlags::BOUNDARY) && orth_dp.mask.test(i, EntityFlags::BOUNDARY) {
                shared.push(local_of(orth_d.local, i));
            }
        }

        import_rows.push(import);
        export_rows.push(export);
        shared_rows.push(shared);
    }

    CommTables {
        neighbor_pe,
        import: flatten(import_rows),
        export: flatten(export_rows),
        shared: flatten(shared_rows),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local_mesh::numbering::NumberingMode;
    use crate::mesh::examples::beam_3seg;
    use crate::partition::{PartMethod, RcbAxis};

    #[test]
    fn beam_node_based_comm_tables_have_one_item_each_way() {
        let mesh = beam_3seg();
        let numbering = Numbering {
            node_owner: vec![0, 0, 1, 1],
            node_local: vec![1, 2, 1, 2],
            elem_owner: vec![0, 0, 1],
            elem_local: vec![1, 2, 1],
        };
        let control = PartitioningControl {
            n_domain: 2,
            part_type: PartType::NodeBased,
            method: PartMethod::Rcb,
            depth: 1,
            rcb_axis: vec![RcbAxis::X],
        };

        let mask0 = mask_mesh_status(&mesh, &numbering, &control, 0);
        let node0 = LocalNumbering::build(&mask0.node, NumberingMode::InternalFirstBlock);
        let elem0 = LocalNumbering::build(&mask0.elem, NumberingMode::DenseGlobalOrder);
        let comm0 = synth_comm_tables(&mesh, &numbering, &control, 0, &mask0, &node0, &elem0);

        assert_eq!(comm0.neighbor_pe, vec![1]);
        assert_eq!(comm0.import.row(0).len(), 1);
        assert_eq!(comm0.export.row(0).len(), 1);
        assert_eq!(comm0.shared.row(0).len(), 1);

        let mask1 = mask_mesh_status(&mesh, &numbering, &control, 1);
        let node1 = LocalNumbering::build(&mask1.node, NumberingMode::InternalFirstBlock);
        let elem1 = LocalNumbering::build(&mask1.elem, NumberingMode::DenseGlobalOrder);
        let comm1 = synth_comm_tables(&mesh, &numbering, &control, 1, &mask1, &node1, &elem1);

        assert_eq!(comm1.neighbor_pe, vec![0]);
        assert_eq!(comm1.import.row(0).len(), 1);
        assert_eq!(comm1.export.row(0).len(), 1);
        assert_eq!(comm1.shared.row(0).len(), 1);
    }
}
