//! `build_local_mesh`: the §4.5 driver that turns a [`GlobalMesh`] plus
//! the global [`Numbering`] into one subdomain's [`LocalMesh`].

use ndarray::Array2;

use crate::comm::synth_comm_tables;
use crate::csr::Csr;
use crate::halo::mask_mesh_status;
use crate::local_mesh::mesh::{EntityId, LocalMesh};
use crate::local_mesh::numbering::{LocalNumbering, NumberingMode};
use crate::mesh::groups::{GroupTable, SurfItem};
use crate::mesh::mpc::{Mpc, MpcTerm};
use crate::mesh::{GlobalMesh, PartType};
use crate::partition::{Numbering, PartitioningControl};

/// Adds any of `extra` not already locally numbered, as trailing entries
/// that count toward neither `n_internal` nor `internal_list`.
///
/// Grounded on two gaps the mask-only numbering in §4.5 leaves open:
/// an element-based halo element can reference a node that is neither
/// `INTERNAL` nor `BOUNDARY` to this domain (touched only by elements on
/// the far side of a single shared node: `mask_overlap_node` marks just
/// that shared node, not the whole element, unlike the node-based path's
/// `mask_boundary_node`), and a kept MPC (Open Question 2) can likewise
/// reference a node no element-adjacency pass ever reaches. Both cases
/// would otherwise violate §8's "every translated item lies in `1..n_node`"
/// invariant, so any such node is folded into this domain's local
/// numbering rather than left untranslatable.
fn extend_numbering(local: &mut LocalNumbering, extra: impl Iterator<Item = usize>) {
    for g in extra {
        if local.global_to_local[g].is_none() {
            let id = local.local_to_global.len();
            local.local_to_global.push(g);
            local.global_to_local[g] = Some(id);
        }
    }
}

fn flatten_generic<T>(rows: Vec<Vec<T>>) -> Csr<T> {
    let mut index = Vec::with_capacity(rows.len() + 1);
    index.push(0usize);
    let mut item = Vec::new();
    for row in rows {
        item.extend(row);
        index.push(item.len());
    }
    Csr { index, item }
}

fn project_group<T>(global: &GroupTable<T>, translate: impl Fn(&T) -> Option<T>) -> GroupTable<T> {
    let names = global.names.clone();
    let rows: Vec<Vec<T>> = (0..global.len())
        .map(|g| global.members(g).iter().filter_map(&translate).collect())
        .collect();
    GroupTable { names, csr: flatten_generic(rows) }
}

fn gather_coords(mesh: &GlobalMesh, node_local: &LocalNumbering) -> Array2<f64> {
    let mut coord = Array2::zeros((node_local.n_local(), 3));
    for (local, &g) in node_local.local_to_global.iter().enumerate() {
        for c in 0..3 {
            coord[[local, c]] = mesh.node_coord()[[g, c]];
        }
    }
    coord
}

fn translate_elem_node(mesh: &GlobalMesh, node_local: &LocalNumbering, elem_local: &LocalNumbering) -> Csr<usize> {
    let mut index = vec![0usize];
    let mut item = Vec::new();
    for &ge in &elem_local.local_to_global {
        for &gn in mesh.elem_node().row(ge) {
            item.push(
                node_local.global_to_local[gn]
                    .expect("connectivity-node extension guarantees every referenced node resolves"),
            );
        }
        index.push(item.len());
    }
    Csr { index, item }
}

fn entity_ids(local: &LocalNumbering, local_ids: &[usize], owners: &[usize]) -> Vec<EntityId> {
    local
        .local_to_global
        .iter()
        .map(|&g| (local_ids[g], owners[g]))
        .collect()
}

/// MPCs are placed in `current_domain`'s `LocalMesh` iff at least one
/// term's node is owned by `current_domain` (Open Question 2); every
/// term's node is translated through `node_local`, which by this point
/// has already been extended to cover both endpoints (§4.5 scenario 4).
fn project_mpc(mesh: &GlobalMesh, numbering: &Numbering, current_domain: usize, node_local: &LocalNumbering) -> Mpc {
    let mpc = mesh.mpc();
    let mut terms_rows = Vec::new();
    let mut constant = Vec::new();
    for i in 0..mpc.len() {
        let terms = mpc.terms.row(i);
        if !terms.iter().any(|t| numbering.node_owner[t.node] == current_domain) {
            continue;
        }
        let translated: Vec<MpcTerm> = terms
            .iter()
            .map(|t| MpcTerm {
                node: node_local.global_to_local[t.node]
                    .expect("mpc-node extension guarantees every kept constraint's nodes resolve"),
                dof: t.dof,
                coef: t.coef,
            })
            .collect();
        terms_rows.push(translated);
        constant.push(mpc.constant[i]);
    }
    Mpc { terms: flatten_generic(terms_rows), constant }
}

/// Runs the full §4.5 pipeline for one subdomain.
pub fn build_local_mesh(
    mesh: &GlobalMesh,
    numbering: &Numbering,
    control: &PartitioningControl,
    current_domain: usize,
) -> LocalMesh {
    let mask_d = mask_mesh_status(mesh, numbering, control, current_domain);

    let (node_mode, elem_mode) = match control.part_type {
        PartType::NodeBased => (NumberingMode::InternalFirstBlock, NumberingMode::DenseGlobalOrder),
        PartType::ElemBased => (NumberingMode::DenseGlobalOrder, NumberingMode::InternalFirstBlock),
    };
    let mut node_local = LocalNumbering::build(&mask_d.node, node_mode);
    let mut elem_local = LocalNumbering::build(&mask_d.elem, elem_mode);

    let connectivity_nodes: Vec<usize> = elem_local
        .local_to_global
        .iter()
        .flat_map(|&ge| mesh.elem_node().row(ge).iter().copied())
        .collect();
    extend_numbering(&mut node_local, connectivity_nodes.into_iter());

    let kept_mpc_nodes: Vec<usize> = (0..mesh.mpc().len())
        .filter(|&i| {
            mesh.mpc()
                .terms
                .row(i)
                .iter()
                .any(|t| numbering.node_owner[t.node] == current_domain)
        })
        .flat_map(|i| mesh.mpc().terms.row(i).iter().map(|t| t.node).collect::<Vec<_>>())
        .collect();
    extend_numbering(&mut node_local, kept_mpc_nodes.into_iter());

    let node_coord = gather_coords(mesh, &node_local);
    let elem_node = translate_elem_node(mesh, &node_local, &elem_local);

    let node_id = entity_ids(&node_local, &numbering.node_local, &numbering.node_owner);
    let elem_id = entity_ids(&elem_local, &numbering.elem_local, &numbering.elem_owner);

    let node_group = project_group(mesh.node_group(), |n: &usize| node_local.global_to_local[*n]);
    let elem_group = project_group(mesh.elem_group(), |e: &usize| elem_local.global_to_local[*e]);
    let surf_group = project_group(mesh.surf_group(), |s: &SurfItem| {
        elem_local.global_to_local[s.elem].map(|local| SurfItem { elem: local, surf: s.surf })
    });

    let mpc = project_mpc(mesh, numbering, current_domain, &node_local);
    let comm = synth_comm_tables(mesh, numbering, control, current_domain, &mask_d, &node_local, &elem_local);

    LocalMesh {
        n_node: node_local.n_local(),
        nn_internal: node_local.n_internal,
        node_internal_list: node_local.internal_list.clone(),
        n_elem: elem_local.n_local(),
        ne_internal: elem_local.n_internal,
        elem_internal_list: elem_local.internal_list.clone(),
        node_id,
        elem_id,
        global_node_id: node_local.local_to_global.clone(),
        global_elem_id: elem_local.local_to_global.clone(),
        node_coord,
        elem_node,
        node_group,
        elem_group,
        surf_group,
        mpc,
        section: mesh.section().clone(),
        material: mesh.material().clone(),
        amplitude: mesh.amplitude().clone(),
        contact_pair: mesh.contact_pair().clone(),
        comm,
    }
}
