//! [`GlobalMesh`]: the whole, unpartitioned mesh. Read-only once built;
//! every partitioning/halo/comm pass only ever reads from it.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::csr::Csr;
use crate::error::{Error, Result};
use crate::mesh::groups::{GroupTable, SurfItem};
use crate::mesh::mpc::Mpc;
use crate::mesh::pass_through::{ContactPairs, PassThroughTable};

/// Whether a subdomain is defined by the nodes it owns or the elements
/// it owns; see `SPEC_FULL.md` §4.2 for how ownership propagates across
/// the two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartType {
    NodeBased,
    ElemBased,
}

/// The full, global finite-element mesh handed to
/// [`crate::driver::decompose`].
///
/// Node and element ids are 0-based internally; `SPEC_FULL.md` §3
/// documents the 1-based external numbering as a `LocalMesh`-boundary
/// presentation detail only.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GlobalMesh {
    n_node: usize,
    n_elem: usize,
    node_coord: Array2<f64>,
    elem_node: Csr<usize>,
    node_group: GroupTable<usize>,
    elem_group: GroupTable<usize>,
    surf_group: GroupTable<SurfItem>,
    mpc: Mpc,
    section: PassThroughTable,
    material: PassThroughTable,
    amplitude: PassThroughTable,
    contact_pair: ContactPairs,
}

impl GlobalMesh {
    /// Builds a `GlobalMesh`, validating the invariants every downstream
    /// pass relies on:
    ///
    /// - `node_coord` has exactly `n_node` rows and 3 columns.
    /// - every element has at least one node (Open Question 3: the
    ///   source's RCB element-based centroid divides by element arity
    ///   with no zero-guard; this crate refuses to construct a
    ///   `GlobalMesh` that could trigger it).
    /// - every node id referenced by `elem_node` is `< n_node`.
    pub fn new(
        node_coord: Array2<f64>,
        elem_node: Csr<usize>,
        node_group: GroupTable<usize>,
        elem_group: GroupTable<usize>,
        surf_group: GroupTable<SurfItem>,
        mpc: Mpc,
        section: PassThroughTable,
        material: PassThroughTable,
        amplitude: PassThroughTable,
        contact_pair: ContactPairs,
    ) -> Result<Self> {
        let n_node = node_coord.nrows();
        if node_coord.ncols() != 3 {
            return Err(Error::InvalidArg {
                field: "node_coord",
                reason: format!("expected 3 columns, got {}", node_coord.ncols()),
            });
        }
        let n_elem = elem_node.len();
        for e in 0..n_elem {
            let nodes = elem_node.row(e);
            if nodes.is_empty() {
                return Err(Error::InvalidArg {
                    field: "elem_node",
                    reason: format!("element {e} has zero nodes"),
                });
            }
            for &n in nodes {
                if n >= n_node {
                    return Err(Error::InvalidArg {
                        field: "elem_node",
                        reason: format!("element {e} references node {n}, but n_node={n_node}"),
                    });
                }
            }
        }
        Ok(Self {
            n_node,
            n_elem,
            node_coord,
            elem_node,
            node_group,
            elem_group,
            surf_group,
            mpc,
            section,
            material,
            amplitude,
            contact_pair,
        })
    }

    pub fn n_node(&self) -> usize {
        self.n_node
    }

    pub fn n_elem(&self) -> usize {
        self.n_elem
    }

    pub fn node_coord(&self) -> &Array2<f64> {
        &self.node_coord
    }

    pub fn elem_node(&self) -> &Csr<usize> {
        &self.elem_node
    }

    pub fn node_group(&self) -> &GroupTable<usize> {
        &self.node_group
    }

    pub fn elem_group(&self) -> &GroupTable<usize> {
        &self.elem_group
    }

    pub fn surf_group(&self) -> &GroupTable<SurfItem> {
        &self.surf_group
    }

    pub fn mpc(&self) -> &Mpc {
        &self.mpc
    }

    pub fn section(&self) -> &PassThroughTable {
        &self.section
    }

    pub fn material(&self) -> &PassThroughTable {
        &self.material
    }

    pub fn amplitude(&self) -> &PassThroughTable {
        &self.amplitude
    }

    pub fn contact_pair(&self) -> &ContactPairs {
        &self.contact_pair
    }
}
