//! Whole-mesh tables that every `LocalMesh` needs but never mutates:
//! sections, materials, amplitudes, contact pairs, group-name lists.
//!
//! Open Question 4 (`SPEC_FULL.md` §9) resolves these toward shared
//! ownership: one copy lives on [`crate::mesh::GlobalMesh`] behind an
//! `Arc`, and every `LocalMesh` clones the `Arc` rather than the data.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// An opaque, whole-mesh record table (sections, materials, amplitudes).
///
/// The source carries these as untouched arrays of analysis-specific
/// records; this crate doesn't model their internal structure (out of
/// scope), only that they exist, have a length, and pass through
/// unmodified to every `LocalMesh`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct PassThroughTable(pub Arc<Vec<serde_json::Value>>);

impl PassThroughTable {
    pub fn empty() -> Self {
        Self(Arc::new(Vec::new()))
    }

    pub fn new(records: Vec<serde_json::Value>) -> Self {
        Self(Arc::new(records))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Contact-pair definitions, referencing surface groups by name.
///
/// Contact pairs name groups rather than individual entities, so unlike
/// sections/materials they need no per-entity filtering when projected
/// into a `LocalMesh`: they pass through whole, same as the name tables.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct ContactPairs {
    pub pair_type: Arc<[i32]>,
    pub slave_grp_id: Arc<[usize]>,
    pub master_grp_id: Arc<[usize]>,
    pub name: Arc<[Arc<str>]>,
}

impl ContactPairs {
    pub fn empty() -> Self {
        Self {
            pair_type: Arc::from([]),
            slave_grp_id: Arc::from([]),
            master_grp_id: Arc::from([]),
            name: Arc::from([]),
        }
    }

    pub fn n_pair(&self) -> usize {
        self.pair_type.len()
    }
}
