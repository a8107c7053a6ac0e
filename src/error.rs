use thiserror::Error;

/// Every failure mode the partitioner can surface.
///
/// Each internal routine returns `Result<T, Error>`; an `Err` unwinds
/// immediately and releases whatever scratch state it owns (ordinary Rust
/// drop semantics stand in for the source's `goto error` cleanup blocks).
/// The one exception is [`Warning`], which is never returned as an `Err`;
/// see [`Status`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument `{field}`: {reason}")]
    InvalidArg { field: &'static str, reason: String },

    #[error("invalid partition type: {0}")]
    InvalidPartType(String),

    #[error("invalid partition method: {0}")]
    InvalidPartMethod(String),

    #[error("invalid RCB axis at position {0}")]
    InvalidRcbDir(usize),

    #[error("allocation failed while sizing `{what}` for {count} entries")]
    AllocError { what: &'static str, count: usize },

    #[error("quicksort explicit stack overflowed (size {size})")]
    StackOverflow { size: usize },

    #[error("node {node} belongs to no element and has no derivable owner")]
    OrphanNode { node: usize },

    #[error("graph-partitioning backend `{method}` requested but not compiled in")]
    BackendMissing { method: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;

/// A warning that is logged and does not abort the computation.
///
/// The only warning kind in this crate is `NoEquationBlock`: MPCs are
/// present but no `HECMW_PART_EQUATION_BLOCK_NAME`-style node group was
/// found, so MPC-aware re-balancing is skipped and placement falls back to
/// per-constraint, per-node ownership (see [`crate::mesh::mpc`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    NoEquationBlock,
}

impl Warning {
    pub fn log(self) {
        match self {
            Warning::NoEquationBlock => {
                tracing::warn!(
                    "MPCs present but no equation-block node group found; \
                     continuing with best-effort per-node MPC placement"
                );
            }
        }
    }
}

/// Tri-valued status used internally by routines that may want to warn
/// without aborting (§7: "`Warn` is logged and the computation proceeds").
///
/// Most routines just return [`Result`]; this exists for call sites that
/// legitimately have a warning outcome. The current `NoEquationBlock` case
/// is mesh-global rather than tied to one call site, so it's raised once,
/// directly through [`crate::profile::ProfileSink::warning`], instead of
/// threaded through a `Status` return value.
#[must_use]
pub enum Status<T> {
    Ok(T),
    Warn(T, Warning),
}

impl<T> Status<T> {
    /// Logs any warning and unwraps to the value either way.
    pub fn into_value(self) -> T {
        match self {
            Status::Ok(v) => v,
            Status::Warn(v, w) => {
                w.log();
                v
            }
        }
    }
}
