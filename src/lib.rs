//! `mefipart`: a finite-element mesh domain decomposer.
//!
//! Given a single global unstructured mesh, [`driver::decompose`] assigns
//! every node and element to a subdomain, extends each subdomain with an
//! overlap (halo) layer, synthesizes the import/export/shared tables an
//! SPMD solver needs, and projects the result into one self-contained
//! [`local_mesh::LocalMesh`] per subdomain, for both node-based and
//! element-based partitioning.
//!
//! Mesh file I/O, control-file/CLI parsing beyond [`partition::control`],
//! the visualization writer, and the pMETIS/kMETIS numerical backend
//! itself stay out of this crate, reachable only through the narrow
//! [`partition::GraphPartitioner`] seam.

pub mod comm;
pub mod csr;
pub mod driver;
pub mod error;
pub mod flags;
pub mod graph;
pub mod halo;
pub mod local_mesh;
pub mod mesh;
pub mod partition;
pub mod profile;

/// The types most callers need for a single `decompose()` call.
pub mod prelude {
    pub use crate::driver::decompose;
    pub use crate::error::{Error, Result, Warning};
    pub use crate::local_mesh::LocalMesh;
    pub use crate::mesh::{GlobalMesh, PartType};
    pub use crate::partition::{GraphPartitioner, MissingBackend, PartMethod, PartitioningControl, RcbAxis};
    pub use crate::profile::{ProfileSink, TracingProfileSink};
}
