//! Profiling/log sink (component C8).
//!
//! Grounded in the source's free-standing counters (part type, method,
//! depth, global node/elem counts, per-subdomain node/elem/internal
//! counts, edge-cut) and in the crate's `tracing` dependency: a
//! [`ProfileSink`] trait decouples `decompose()` from any particular
//! sink, and [`TracingProfileSink`] is the default, emitting one span
//! per subdomain plus a closing summary line. Libraries never install a
//! global subscriber; wiring one up is the caller's responsibility.

use crate::error::Warning;
use crate::local_mesh::LocalMesh;
use crate::mesh::{GlobalMesh, PartType};
use crate::partition::{PartMethod, PartitioningControl};

/// One method per counter family named in §6.
pub trait ProfileSink {
    fn global_mesh(&mut self, mesh: &GlobalMesh, control: &PartitioningControl);
    /// A non-aborting warning (§7: "`Warn` is logged and the computation
    /// proceeds"), e.g. `NoEquationBlock` when MPCs are present.
    fn warning(&mut self, warning: Warning);
    fn edge_cut(&mut self, count: usize);
    fn subdomain(&mut self, domain: usize, local: &LocalMesh);
    fn finish(&mut self);
}

#[derive(Default)]
pub struct TracingProfileSink {
    n_domain: usize,
    subdomains_seen: usize,
}

fn part_type_label(part_type: PartType) -> &'static str {
    match part_type {
        PartType::NodeBased => "node_based",
        PartType::ElemBased => "elem_based",
    }
}

fn method_label(method: PartMethod) -> &'static str {
    match method {
        PartMethod::Rcb => "rcb",
        PartMethod::PMetis => "pmetis",
        PartMethod::KMetis => "kmetis",
    }
}

impl ProfileSink for TracingProfileSink {
    fn global_mesh(&mut self, mesh: &GlobalMesh, control: &PartitioningControl) {
        self.n_domain = control.n_domain;
        tracing::info!(
            n_domain = control.n_domain,
            part_type = part_type_label(control.part_type),
            method = method_label(control.method),
            depth = control.depth,
            n_node = mesh.n_node(),
            n_elem = mesh.n_elem(),
            "starting decomposition"
        );
    }

    fn warning(&mut self, warning: Warning) {
        warning.log();
    }

    fn edge_cut(&mut self, count: usize) {
        tracing::info!(edge_cut = count, "computed edge cut");
    }

    fn subdomain(&mut self, domain: usize, local: &LocalMesh) {
        let _span = tracing::info_span!(
            "subdomain",
            id = domain,
            n_node = local.n_node,
            nn_internal = local.nn_internal,
            n_elem = local.n_elem,
            ne_internal = local.ne_internal,
            n_neighbor_pe = local.comm.neighbor_pe.len(),
        )
        .entered();
        tracing::debug!("subdomain complete");
        self.subdomains_seen += 1;
    }

    fn finish(&mut self) {
        tracing::info!(
            n_domain = self.n_domain,
            subdomains_emitted = self.subdomains_seen,
            "decomposition finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local_mesh::build_local_mesh;
    use crate::mesh::examples::beam_3seg;
    use crate::partition::compute_numbering;
    use crate::partition::metis::MissingBackend;
    use crate::partition::RcbAxis;

    #[test]
    fn tracing_sink_runs_without_a_subscriber_installed() {
        let mesh = beam_3seg();
        let control = PartitioningControl {
            n_domain: 2,
            part_type: PartType::NodeBased,
            method: PartMethod::Rcb,
            depth: 1,
            rcb_axis: vec![RcbAxis::X],
        };
        let numbering = compute_numbering(&mesh, &control, &MissingBackend).unwrap();

        let mut sink = TracingProfileSink::default();
        sink.global_mesh(&mesh, &control);
        sink.edge_cut(0);
        for d in 0..control.n_domain {
            let local = build_local_mesh(&mesh, &numbering, &control, d);
            sink.subdomain(d, &local);
        }
        sink.finish();
        assert_eq!(sink.subdomains_seen, 2);
    }
}
