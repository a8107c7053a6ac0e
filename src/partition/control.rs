//! Partitioning configuration (component C9 of `SPEC_FULL.md`), loaded
//! from a control file and validated once, before partitioning starts.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::mesh::PartType;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartMethod {
    Rcb,
    PMetis,
    KMetis,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RcbAxis {
    X,
    Y,
    Z,
}

impl RcbAxis {
    pub fn column(self) -> usize {
        match self {
            RcbAxis::X => 0,
            RcbAxis::Y => 1,
            RcbAxis::Z => 2,
        }
    }
}

/// Everything `decompose()` needs to know about how to split the mesh.
///
/// Mirrors the source's `hecmw_part_cont_data`, minus the file-path and
/// grid-file fields (out of scope: mesh I/O stays behind a narrow
/// caller-supplied `GlobalMesh`, not a control-file path).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PartitioningControl {
    pub n_domain: usize,
    pub part_type: PartType,
    pub method: PartMethod,
    /// Halo depth; honored in node-based mode only (Open Question 1).
    pub depth: usize,
    /// RCB bisection axes, one per halving level. Ignored unless
    /// `method == Rcb`.
    #[serde(default)]
    pub rcb_axis: Vec<RcbAxis>,
}

impl PartitioningControl {
    /// Checks the invariants in `spec.md` §6/§7: `n_domain > 0`,
    /// `depth >= 1`, and for RCB, `n_domain == 2^rcb_axis.len()`
    /// (scenario 6 in §8).
    pub fn validate(&self) -> Result<()> {
        if self.n_domain == 0 {
            return Err(Error::InvalidArg {
                field: "n_domain",
                reason: "must be at least 1".into(),
            });
        }
        if self.depth == 0 {
            return Err(Error::InvalidArg {
                field: "depth",
                reason: "must be at least 1".into(),
            });
        }
        if self.method == PartMethod::Rcb {
            let expected = 2usize
                .checked_pow(self.rcb_axis.len() as u32)
                .ok_or(Error::InvalidArg {
                    field: "rcb_axis",
                    reason: "too many axes".into(),
                })?;
            if expected != self.n_domain {
                return Err(Error::InvalidArg {
                    field: "n_domain",
                    reason: format!(
                        "RCB requires n_domain == 2^len(rcb_axis); got n_domain={}, \
                         rcb_axis has {} entries (2^{} = {})",
                        self.n_domain,
                        self.rcb_axis.len(),
                        self.rcb_axis.len(),
                        expected
                    ),
                });
            }
        }
        Ok(())
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let control: Self = serde_yaml::from_str(s).map_err(|e| Error::InvalidArg {
            field: "control",
            reason: e.to_string(),
        })?;
        control.validate()?;
        Ok(control)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let control: Self = serde_json::from_str(s).map_err(|e| Error::InvalidArg {
            field: "control",
            reason: e.to_string(),
        })?;
        control.validate()?;
        Ok(control)
    }
}
