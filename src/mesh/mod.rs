//! The global, unpartitioned mesh data model (component C3 of
//! `SPEC_FULL.md`).

pub mod global;
pub mod groups;
pub mod mpc;
pub mod pass_through;

/// Hand-built meshes small enough to verify by inspection. Not
/// `cfg(test)`-gated (the teacher's `mesh_examples` module isn't either)
/// so integration tests under `tests/` can use them too.
pub mod examples;

pub use global::{GlobalMesh, PartType};
pub use groups::{GroupTable, SurfItem};
pub use mpc::{Mpc, MpcTerm};
pub use pass_through::{ContactPairs, PassThroughTable};
