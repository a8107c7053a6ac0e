//! Partitioning policy: control-file model, RCB, the METIS seam, owner
//! assignment, and double numbering (components C3/C4/C9).

pub mod assign;
pub mod control;
pub mod metis;
pub mod quicksort;
pub mod rcb;

pub use assign::{Numbering, compute_numbering};
pub use control::{PartMethod, PartitioningControl, RcbAxis};
pub use metis::{GraphPartitioner, MissingBackend};
