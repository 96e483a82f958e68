use gradtrace::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let a = Tensor::new(vec![vec![1.0f32, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    let b = Tensor::new(vec![0.5f32, -1.0, 2.0]);

    let e = &a * &b;
    let d = &e + &a;
    d.backward()?;

    println!("d      = {}", d);
    println!("grad a = {}", a.grad());
    println!("grad b = {}", b.grad());
    println!("{:?}", e);

    for node in d.topological_order() {
        println!("{} {:?}", node.id(), node.op());
    }

    Ok(())
}
