//! Per-subdomain local numbering (`SPEC_FULL.md` §4.5, "local-mesh
//! projection").
//!
//! This is distinct from [`crate::partition::Numbering`], which is
//! computed once for the whole mesh and only ever feeds the external
//! `node_ID`/`elem_ID` `(local_id, domain)` pairs every `LocalMesh`
//! publishes. A `LocalNumbering` is rebuilt per domain, includes halo
//! entities the global numbering never counts, and is what every one of
//! that domain's own arrays (connectivity, groups, MPCs, comm items) is
//! actually translated through.
//!
//! Two layouts are used, chosen by which axis a given entity kind is on
//! for the active [`crate::mesh::PartType`] (§4.5):
//! - [`NumberingMode::InternalFirstBlock`]: internal entities numbered
//!   first (`0..n_internal`), halo appended after. This is the *primary*
//!   axis (nodes in node-based mode, elements in element-based mode); its
//!   internal block is already `0..n_internal` so no separate list is
//!   needed.
//! - [`NumberingMode::DenseGlobalOrder`]: every reached entity (internal
//!   or boundary) numbered in ascending global-id order, with a separate
//!   `internal_list` recording which locals are owned. This is the
//!   *orthogonal* axis.

use crate::flags::{EntityFlags, FlagWorkspace};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumberingMode {
    InternalFirstBlock,
    DenseGlobalOrder,
}

/// A domain's own local numbering over one entity kind (nodes or
/// elements), including halo entities.
#[derive(Clone, Debug)]
pub struct LocalNumbering {
    /// `global_to_local[g]` is this domain's local id for global entity
    /// `g`, or `None` if `g` isn't present in this domain's local mesh.
    pub global_to_local: Vec<Option<usize>>,
    /// `local_to_global[i]` is the global entity at local id `i`.
    pub local_to_global: Vec<usize>,
    pub n_internal: usize,
    /// Local ids of owned entities. Empty under
    /// [`NumberingMode::InternalFirstBlock`], where ownership is implied
    /// by `0..n_internal`.
    pub internal_list: Vec<usize>,
}

impl LocalNumbering {
    pub fn n_local(&self) -> usize {
        self.local_to_global.len()
    }

    pub fn build(mask: &FlagWorkspace, mode: NumberingMode) -> Self {
        match mode {
            NumberingMode::InternalFirstBlock => Self::build_internal_first(mask),
            NumberingMode::DenseGlobalOrder => Self::build_dense_global(mask),
        }
    }

    fn build_internal_first(mask: &FlagWorkspace) -> Self {
        let n = mask.len();
        let mut local_to_global: Vec<usize> =
            (0..n).filter(|&g| mask.test(g, EntityFlags::INTERNAL)).collect();
        let n_internal = local_to_global.len();
        local_to_global.extend(
            (0..n).filter(|&g| mask.test(g, EntityFlags::EXTERNAL) && mask.test(g, EntityFlags::BOUNDARY)),
        );

        let mut global_to_local = vec![None; n];
        for (local, &g) in local_to_global.iter().enumerate() {
            global_to_local[g] = Some(local);
        }

        LocalNumbering {
            global_to_local,
            local_to_global,
            n_internal,
            internal_list: Vec::new(),
        }
    }

    fn build_dense_global(mask: &FlagWorkspace) -> Self {
        let n = mask.len();
        let local_to_global: Vec<usize> = (0..n)
            .filter(|&g| mask.test(g, EntityFlags::INTERNAL) || mask.test(g, EntityFlags::BOUNDARY))
            .collect();

        let mut global_to_local = vec![None; n];
        let mut internal_list = Vec::new();
        for (local, &g) in local_to_global.iter().enumerate() {
            global_to_local[g] = Some(local);
            if mask.test(g, EntityFlags::INTERNAL) {
                internal_list.push(local);
            }
        }
        let n_internal = internal_list.len();

        LocalNumbering {
            global_to_local,
            local_to_global,
            n_internal,
            internal_list,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_from(internal: &[usize], external_boundary: &[usize], n: usize) -> FlagWorkspace {
        let mut ws = FlagWorkspace::new(n);
        for &i in internal {
            ws.set(i, EntityFlags::INTERNAL);
        }
        for &i in external_boundary {
            ws.set(i, EntityFlags::EXTERNAL);
            ws.set(i, EntityFlags::BOUNDARY);
        }
        ws
    }

    #[test]
    fn internal_first_block_puts_halo_after_internal_in_ascending_order() {
        let mask = mask_from(&[0, 1], &[2], 4);
        let numbering = LocalNumbering::build(&mask, NumberingMode::InternalFirstBlock);
        assert_eq!(numbering.n_internal, 2);
        assert_eq!(numbering.local_to_global, vec![0, 1, 2]);
        assert_eq!(numbering.global_to_local, vec![Some(0), Some(1), Some(2), None]);
        assert!(numbering.internal_list.is_empty());
    }

    #[test]
    fn dense_global_order_numbers_boundary_entities_regardless_of_owner() {
        let mut mask = FlagWorkspace::new(4);
        mask.set(0, EntityFlags::INTERNAL);
        mask.set(1, EntityFlags::INTERNAL);
        mask.set(1, EntityFlags::BOUNDARY);
        mask.set(2, EntityFlags::EXTERNAL);
        mask.set(2, EntityFlags::BOUNDARY);
        // entity 3: EXTERNAL, not boundary -> not reached.

        let numbering = LocalNumbering::build(&mask, NumberingMode::DenseGlobalOrder);
        assert_eq!(numbering.local_to_global, vec![0, 1, 2]);
        assert_eq!(numbering.internal_list, vec![0, 1]);
        assert_eq!(numbering.n_internal, 2);
        assert_eq!(numbering.global_to_local[3], None);
    }
}
