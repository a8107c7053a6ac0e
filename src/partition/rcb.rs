//! Recursive coordinate bisection (component C3, `PartMethod::Rcb`).
//!
//! Ported in shape from the source's `rcb_partition`/`rcb_partition_eb`:
//! at level `i`, every existing bucket `j` is split by sorting its
//! members along `rcb_axis[i]` and sending the lower half to bucket `j`
//! and the upper half to bucket `j + 2^i`. `PartitioningControl::validate`
//! already guarantees `n_domain == 2^rcb_axis.len()`, so after all levels
//! every entity sits in a bucket `0..n_domain`.

use ndarray::{Array2, ArrayView2};

use crate::error::Result;
use crate::mesh::GlobalMesh;
use crate::partition::control::PartitioningControl;
use crate::partition::quicksort::sort_with_payload;

/// Bisects `n` entities (rows of `coord`) into `2^rcb_axis.len()`
/// buckets, returning the bucket (domain) index per entity.
pub fn rcb_bisect(coord: ArrayView2<f64>, control: &PartitioningControl) -> Result<Vec<usize>> {
    let n = coord.nrows();
    let mut owner = vec![0usize; n];
    let n_rcb_div = control.rcb_axis.len();

    for i in 0..n_rcb_div {
        let axis_col = control.rcb_axis[i].column();
        let buckets = 1usize << i;
        for j in 0..buckets {
            let ids: Vec<usize> = (0..n).filter(|&k| owner[k] == j).collect();
            if ids.is_empty() {
                continue;
            }
            let mut keys: Vec<f64> = ids.iter().map(|&k| coord[[k, axis_col]]).collect();
            let mut payload = ids.clone();
            let capacity = payload.len();
            sort_with_payload(&mut keys, &mut payload, capacity)?;

            let half = payload.len() / 2;
            for &k in &payload[half..] {
                owner[k] = j + buckets;
            }
        }
    }

    Ok(owner)
}

/// Node-based RCB: bisects directly on `mesh.node_coord`.
pub fn rcb_partition_nb(mesh: &GlobalMesh, control: &PartitioningControl) -> Result<Vec<usize>> {
    rcb_bisect(mesh.node_coord().view(), control)
}

/// Element-based RCB: bisects on each element's centroid.
///
/// Open Question 3 (`SPEC_FULL.md` §9): `GlobalMesh::new` already rejects
/// zero-node elements, so the division below never sees a zero divisor.
pub fn rcb_partition_eb(mesh: &GlobalMesh, control: &PartitioningControl) -> Result<Vec<usize>> {
    let centroids = element_centroids(mesh);
    rcb_bisect(centroids.view(), control)
}

fn element_centroids(mesh: &GlobalMesh) -> Array2<f64> {
    let coord = mesh.node_coord();
    let elem_node = mesh.elem_node();
    let mut centroids = Array2::zeros((mesh.n_elem(), 3));
    for (e, nodes) in elem_node.iter().enumerate() {
        let arity = nodes.len() as f64;
        for &n in nodes {
            for c in 0..3 {
                centroids[[e, c]] += coord[[n, c]];
            }
        }
        for c in 0..3 {
            centroids[[e, c]] /= arity;
        }
    }
    centroids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::PartType;
    use crate::mesh::examples::beam_3seg;
    use crate::partition::control::{PartMethod, RcbAxis};
    use ndarray::array;

    fn control(n_domain: usize, rcb_axis: Vec<RcbAxis>) -> PartitioningControl {
        PartitioningControl {
            n_domain,
            part_type: PartType::NodeBased,
            method: PartMethod::Rcb,
            depth: 1,
            rcb_axis,
        }
    }

    #[test]
    fn bisects_evenly_spaced_points_into_balanced_halves() {
        let coord = array![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0], [3.0, 0.0, 0.0]];
        let c = control(2, vec![RcbAxis::X]);
        let owner = rcb_bisect(coord.view(), &c).unwrap();
        assert_eq!(owner, vec![0, 0, 1, 1]);
    }

    #[test]
    fn two_level_bisection_yields_four_buckets() {
        let coord = array![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [2.0, 0.0, 0.0],
            [3.0, 0.0, 0.0],
        ];
        let c = control(4, vec![RcbAxis::X, RcbAxis::X]);
        let owner = rcb_bisect(coord.view(), &c).unwrap();
        let mut sorted = owner.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3]);
    }

    #[test]
    fn odd_count_gives_smaller_lower_bucket() {
        let coord = array![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]];
        let c = control(2, vec![RcbAxis::X]);
        let owner = rcb_bisect(coord.view(), &c).unwrap();
        // floor(3/2) = 1 entity stays in bucket 0, the other 2 move to bucket 1.
        assert_eq!(owner.iter().filter(|&&d| d == 0).count(), 1);
        assert_eq!(owner.iter().filter(|&&d| d == 1).count(), 2);
    }

    #[test]
    fn node_based_rcb_matches_manual_bisect() {
        let mesh = beam_3seg();
        let c = control(2, vec![RcbAxis::X]);
        let owner = rcb_partition_nb(&mesh, &c).unwrap();
        assert_eq!(owner, vec![0, 0, 1, 1]);
    }

    #[test]
    fn element_centroid_is_the_mean_of_its_node_coordinates() {
        use approx::assert_relative_eq;
        let mesh = beam_3seg();
        let centroids = element_centroids(&mesh);
        // e0 = [n0=0.0, n1=1.0] -> centroid x = 0.5
        assert_relative_eq!(centroids[[0, 0]], 0.5, epsilon = 1e-12);
        // e1 = [n1=1.0, n2=2.0] -> centroid x = 1.5
        assert_relative_eq!(centroids[[1, 0]], 1.5, epsilon = 1e-12);
    }
}
