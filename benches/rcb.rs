use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use mefipart::mesh::PartType;
use mefipart::partition::rcb::rcb_bisect;
use mefipart::partition::{PartMethod, PartitioningControl, RcbAxis};
use ndarray::Array2;

fn beam_coords(n: usize) -> Array2<f64> {
    Array2::from_shape_fn((n, 3), |(i, c)| if c == 0 { i as f64 } else { 0.0 })
}

fn rcb_bisect_beam(c: &mut Criterion) {
    let mut group = c.benchmark_group("rcb_bisect");

    for n in [64, 1024, 16384] {
        let coord = beam_coords(n);
        let control = PartitioningControl {
            n_domain: 8,
            part_type: PartType::NodeBased,
            method: PartMethod::Rcb,
            depth: 1,
            rcb_axis: vec![RcbAxis::X, RcbAxis::X, RcbAxis::X],
        };
        group.bench_with_input(BenchmarkId::new("n_node", n), &n, |b, _| {
            b.iter(|| {
                std::hint::black_box(rcb_bisect(coord.view(), &control).unwrap());
            })
        });
    }
}

criterion_group!(bench, rcb_bisect_beam);
criterion_main!(bench);
