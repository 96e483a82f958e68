use criterion::{black_box, criterion_group, Criterion};
use gradtrace_tensor::Tensor;

const DEPTHS: [(usize, &str); 3] = [(10, "shallow"), (1000, "deep"), (10000, "very_deep")];

fn chain(x: &Tensor, w: &Tensor, depth: usize) -> Tensor {
    let mut y = x.clone();
    for _ in 0..depth {
        y = &(&y * w) + x;
    }
    y
}

pub fn backward(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("autograd/backward");
    group.warm_up_time(core::time::Duration::from_millis(500));
    group.measurement_time(core::time::Duration::from_secs(3));
    group.sample_size(30);

    for &(depth, depth_name) in &DEPTHS {
        let x = Tensor::new((0..64).map(|i| i as f32 / 64.0).collect::<Vec<_>>());
        let w = Tensor::fill(&[64], 0.5f32);

        group.bench_function(format!("chain/{}", depth_name), |b| {
            b.iter(|| {
                let y = chain(&x, &w, depth);
                black_box(y.backward()).unwrap();
            })
        });

        let y = chain(&x, &w, depth);
        group.bench_function(format!("topological_order/{}", depth_name), |b| {
            b.iter(|| black_box(y.topological_order().len()))
        });
    }

    group.finish();
}

criterion_group!(benches, backward);
