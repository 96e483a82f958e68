use criterion::{black_box, Criterion};
use gradtrace_core::{dtype::DType, error::Result};
use gradtrace_tensor::Tensor;

// Constants for benchmark data sizes
const SIZES: [(usize, &str); 3] = [(100, "small"), (5000, "medium"), (10000, "large")];
const DTYPES: [DType; 2] = [DType::F32, DType::F64];

type BinaryFn = Box<dyn Fn(&Tensor, &Tensor) -> Result<Tensor>>;

fn bench_binary_op<F>(b: &mut criterion::Bencher, x: &Tensor, y: &Tensor, op_fn: F)
where
    F: Fn(&Tensor, &Tensor) -> Result<Tensor>,
{
    b.iter(|| black_box(op_fn(x, y)).unwrap())
}

fn operations() -> Vec<(&'static str, BinaryFn)> {
    vec![
        ("add", Box::new(|x, y| x.try_add(y))),
        ("mul", Box::new(|x, y| x.try_mul(y))),
    ]
}

pub fn basic(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("binary/basic");
    group.warm_up_time(core::time::Duration::from_millis(500));
    group.measurement_time(core::time::Duration::from_secs(3));
    group.sample_size(50);

    for (op_name, op_fn) in &operations() {
        for dtype in DTYPES {
            for &(size, size_name) in &SIZES {
                let base_data: Vec<f32> = (0..size).map(|i| i as f32).collect();
                let x = Tensor::new_with_dtype(base_data.clone(), dtype);
                let y = Tensor::new_with_dtype(base_data.iter().map(|v| v + 1.0).collect::<Vec<_>>(), dtype);

                let bench_name = format!("{}/{}/{}", op_name, dtype, size_name);
                group.bench_function(&bench_name, |b| bench_binary_op(b, &x, &y, op_fn));
            }
        }
    }

    group.finish();
}

pub fn broadcast(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("binary/broadcast");
    group.warm_up_time(core::time::Duration::from_millis(500));
    group.measurement_time(core::time::Duration::from_secs(3));
    group.sample_size(50);

    for (op_name, op_fn) in &operations() {
        for &(size, size_name) in &SIZES {
            let rows: Vec<Vec<f32>> = (0..size / 100).map(|r| (0..100).map(|c| (r * 100 + c) as f32).collect()).collect();
            let x = Tensor::new(rows);
            let y = Tensor::new((0..100).map(|c| c as f32).collect::<Vec<_>>());

            let bench_name = format!("{}/row/{}", op_name, size_name);
            group.bench_function(&bench_name, |b| bench_binary_op(b, &x, &y, op_fn));
        }
    }

    group.finish();
}
