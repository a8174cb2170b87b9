use softmax_classifier::{numerical_gradient, Matrix, SoftmaxLoss};

fn main() {
    // Two noisy clusters in the plane, one per class, 8 examples each.
    let per_class = 8;
    let centers = [(-1.5, -1.0), (1.5, 1.0)];

    let mut rows = Vec::new();
    let mut labels = Vec::new();
    for (class, &(cx, cy)) in centers.iter().enumerate() {
        let noise = Matrix::random(per_class, 2);
        for i in 0..per_class {
            rows.push(vec![cx + 0.5 * noise.data[i][0], cy + 0.5 * noise.data[i][1]]);
            labels.push(class);
        }
    }
    let inputs = Matrix::from_data(rows);
    let weights = Matrix::random(2, 2);
    let reg = 0.05;

    let (loss_naive, grad_naive) = SoftmaxLoss::naive(&weights, &inputs, &labels, reg);
    let (loss_vec, grad_vec) = SoftmaxLoss::vectorized(&weights, &inputs, &labels, reg);

    println!("naive loss:        {loss_naive:.6}");
    println!("vectorized loss:   {loss_vec:.6}");
    println!("loss difference:   {:.3e}", (loss_naive - loss_vec).abs());
    println!(
        "gradient difference (max abs): {:.3e}",
        max_abs(&(grad_naive.clone() - grad_vec))
    );

    let numeric = numerical_gradient(
        |w| SoftmaxLoss::vectorized(w, &inputs, &labels, reg).0,
        &weights,
        1e-5,
    );
    println!(
        "finite-difference check (max abs): {:.3e}",
        max_abs(&(grad_naive - numeric))
    );
}

fn max_abs(m: &Matrix) -> f64 {
    m.data.iter().flatten().fold(0.0, |acc, x| acc.max(x.abs()))
}
