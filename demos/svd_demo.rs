//! Decompose a small dense matrix and print the factors next to the
//! reconstruction: `cargo run --example svd_demo`.

use svdkit::{compute_svd, Matrix};

fn main() {
    let mat = Matrix::from([[7.0_f32, 2.0, -5.0], [-9.0, 8.0, -5.0], [24.0, -6.0, 8.0]]);
    let svd = compute_svd(&mat, 3, 1e-6).unwrap();

    println!("{}", svd.u);
    println!("{}*", " ".repeat(16));
    println!("{}", svd.sigma);
    println!("{}*", " ".repeat(16));
    println!("{}", svd.v.transpose());
    println!("{}=", " ".repeat(16));

    let rebuilt = &svd.u * &svd.sigma * svd.v.transpose();
    println!("{}", rebuilt);
}
