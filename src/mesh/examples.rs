//! Small, hand-verifiable meshes used across this crate's test suite.
//!
//! Grounded in the teacher's `mesh_examples` module (plain functions
//! building a `GlobalMesh`-equivalent by hand, one per scenario) rather
//! than a generic mesh-generator DSL.

use ndarray::Array2;

use crate::csr::Csr;
use crate::mesh::global::GlobalMesh;
use crate::mesh::groups::GroupTable;
use crate::mesh::mpc::{Mpc, MpcTerm};
use crate::mesh::pass_through::{ContactPairs, PassThroughTable};

fn coords_1d(xs: &[f64]) -> Array2<f64> {
    let mut c = Array2::zeros((xs.len(), 3));
    for (i, &x) in xs.iter().enumerate() {
        c[[i, 0]] = x;
    }
    c
}

fn seg_csr(elems: &[[usize; 2]]) -> Csr<usize> {
    let mut index = vec![0usize];
    let mut item = Vec::new();
    for e in elems {
        item.extend_from_slice(e);
        index.push(item.len());
    }
    Csr { index, item }
}

/// A 4-node, 3-element beam: `n0-n1`, `n1-n2`, `n2-n3` at `x = 0,1,2,3`.
///
/// Used as the basis of the node-based, 2-domain, depth-1 halo/comm
/// scenario (`SPEC_FULL.md` / `spec.md` §8 scenario 1, adapted; see
/// `DESIGN.md` for why the exact element/owner assignment differs from
/// the scenario's prose while reproducing every stated count).
pub fn beam_3seg() -> GlobalMesh {
    let coords = coords_1d(&[0.0, 1.0, 2.0, 3.0]);
    let elem_node = seg_csr(&[[0, 1], [1, 2], [2, 3]]);
    GlobalMesh::new(
        coords,
        elem_node,
        GroupTable::empty(),
        GroupTable::empty(),
        GroupTable::empty(),
        Mpc::empty(),
        PassThroughTable::empty(),
        PassThroughTable::empty(),
        PassThroughTable::empty(),
        ContactPairs::empty(),
    )
    .expect("fixture mesh is well-formed")
}

/// `beam_3seg` plus one MPC tying its two end nodes together
/// (`n0 - n3 = 0`). Under a 2-domain, node-based, X-axis RCB split the
/// two terms land in different domains, so both domains must carry the
/// full constraint with the far endpoint addressable as a halo id
/// (`spec.md` §8 scenario 4).
pub fn beam_with_mpc() -> GlobalMesh {
    let coords = coords_1d(&[0.0, 1.0, 2.0, 3.0]);
    let elem_node = seg_csr(&[[0, 1], [1, 2], [2, 3]]);
    let mpc = Mpc {
        terms: Csr {
            index: vec![0, 2],
            item: vec![
                MpcTerm { node: 0, dof: 0, coef: 1.0 },
                MpcTerm { node: 3, dof: 0, coef: -1.0 },
            ],
        },
        constant: vec![0.0],
    };
    GlobalMesh::new(
        coords,
        elem_node,
        GroupTable::empty(),
        GroupTable::empty(),
        GroupTable::empty(),
        mpc,
        PassThroughTable::empty(),
        PassThroughTable::empty(),
        PassThroughTable::empty(),
        ContactPairs::empty(),
    )
    .expect("fixture mesh is well-formed")
}

/// A single, isolated node with no elements, used to exercise the
/// `OrphanNode` error path for element-based-derived node ownership.
pub fn orphan_node_mesh() -> GlobalMesh {
    let coords = coords_1d(&[0.0, 1.0]);
    // node 1 is never referenced by any element.
    let elem_node = Csr {
        index: vec![0, 1],
        item: vec![0usize],
    };
    GlobalMesh::new(
        coords,
        elem_node,
        GroupTable::empty(),
        GroupTable::empty(),
        GroupTable::empty(),
        Mpc::empty(),
        PassThroughTable::empty(),
        PassThroughTable::empty(),
        PassThroughTable::empty(),
        ContactPairs::empty(),
    )
    .expect("fixture mesh is well-formed")
}

/// A 4x4 grid of QUAD4-equivalent elements (25 nodes, 16 elements),
/// generic 4-node elements stored without a dedicated element-type tag
/// (out of scope; see `SPEC_FULL.md` §3). Used for the element-based,
/// KMETIS-style (stub-backed) 2-domain scenario.
pub fn quad_grid_4x4() -> GlobalMesh {
    let n_side = 5; // 5x5 nodes -> 4x4 elements
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for j in 0..n_side {
        for i in 0..n_side {
            xs.push(i as f64);
            ys.push(j as f64);
        }
    }
    let n_node = xs.len();
    let mut coords = Array2::zeros((n_node, 3));
    for i in 0..n_node {
        coords[[i, 0]] = xs[i];
        coords[[i, 1]] = ys[i];
    }
    let mut index = vec![0usize];
    let mut item = Vec::new();
    for j in 0..4 {
        for i in 0..4 {
            let n0 = j * n_side + i;
            let n1 = n0 + 1;
            let n2 = n0 + n_side + 1;
            let n3 = n0 + n_side;
            item.extend_from_slice(&[n0, n1, n2, n3]);
            index.push(item.len());
        }
    }
    GlobalMesh::new(
        coords,
        Csr { index, item },
        GroupTable::empty(),
        GroupTable::empty(),
        GroupTable::empty(),
        Mpc::empty(),
        PassThroughTable::empty(),
        PassThroughTable::empty(),
        PassThroughTable::empty(),
        ContactPairs::empty(),
    )
    .expect("fixture mesh is well-formed")
}
