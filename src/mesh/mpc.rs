//! Multi-point constraints: linear relations between node/dof pairs.
//!
//! Open Question 2 (`SPEC_FULL.md` §9): the source's MPC diffusion
//! repartitioner (`eqn_block` and friends) is `#if 0`'d out, including the
//! assert that would catch a constraint split across domains. This crate
//! reproduces the shipped behavior: an `Mpc` is placed in every domain that
//! owns at least one of its nodes, and can legally appear in full in more
//! than one `LocalMesh`.

use serde::{Deserialize, Serialize};

use crate::csr::Csr;

/// One term of an MPC row: `coef * dof(node, dof_id)`.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct MpcTerm {
    pub node: usize,
    pub dof: usize,
    pub coef: f64,
}

/// All multi-point constraints in a mesh, one row per constraint.
///
/// Row `i`'s terms are `terms.row(i)`, its right-hand side is
/// `constant[i]`. An MPC with one term and coefficient `1.0` is a
/// boundary condition in disguise; this crate doesn't special-case it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Mpc {
    pub terms: Csr<MpcTerm>,
    pub constant: Vec<f64>,
}

impl Mpc {
    pub fn empty() -> Self {
        Self {
            terms: Csr::empty(),
            constant: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
