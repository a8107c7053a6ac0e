//! [`LocalMesh`]: the self-contained per-subdomain output of §4.5.
//!
//! Unlike [`crate::mesh::GlobalMesh`], which guards invariants that must
//! hold for the whole pipeline to even start, `LocalMesh` is a plain
//! output record assembled once by [`crate::local_mesh::build_local_mesh`]
//! from already-validated data, so, like [`crate::csr::Csr`], its
//! fields are public rather than hidden behind accessors.

use ndarray::Array2;

use crate::comm::CommTables;
use crate::csr::Csr;
use crate::mesh::groups::{GroupTable, SurfItem};
use crate::mesh::mpc::Mpc;
use crate::mesh::pass_through::{ContactPairs, PassThroughTable};

/// A local `(local_id_on_owner, owning_domain)` pair, kept for both
/// internal and halo entities (§3, `node_ID`/`elem_ID`).
pub type EntityId = (usize, usize);

pub struct LocalMesh {
    pub n_node: usize,
    pub nn_internal: usize,
    pub node_internal_list: Vec<usize>,
    pub n_elem: usize,
    pub ne_internal: usize,
    pub elem_internal_list: Vec<usize>,

    pub node_id: Vec<EntityId>,
    pub elem_id: Vec<EntityId>,
    pub global_node_id: Vec<usize>,
    pub global_elem_id: Vec<usize>,

    pub node_coord: Array2<f64>,
    pub elem_node: Csr<usize>,

    pub node_group: GroupTable<usize>,
    pub elem_group: GroupTable<usize>,
    pub surf_group: GroupTable<SurfItem>,

    pub mpc: Mpc,

    pub section: PassThroughTable,
    pub material: PassThroughTable,
    pub amplitude: PassThroughTable,
    pub contact_pair: ContactPairs,

    pub comm: CommTables,
}
