use crate::math::matrix::Matrix;

/// Softmax classification loss for a linear classifier.
///
/// Scores are `inputs · weights` (one row of class scores per example); the
/// loss is the mean negative log-probability of each example's true class
/// plus an L2 penalty `reg · Σ(W²)`. The penalty carries no 1/2 factor, so
/// its gradient term is `2·reg·W`.
///
/// Two implementations share one contract: `naive` walks examples and
/// classes with explicit loops, `vectorized` stays in whole-matrix
/// operations. Their results agree to floating-point tolerance.
pub struct SoftmaxLoss;

impl SoftmaxLoss {
    /// Loop-based reference implementation.
    ///
    /// `weights` - D×C, one column of scores per class
    /// `inputs`  - N×D, one example per row
    /// `labels`  - true class index for each example, each in [0, C)
    /// `reg`     - L2 regularization strength, >= 0
    ///
    /// Returns the scalar loss and a freshly allocated D×C gradient; the
    /// inputs are left untouched. Panics on a shape mismatch or an
    /// out-of-range label.
    pub fn naive(weights: &Matrix, inputs: &Matrix, labels: &[usize], reg: f64) -> (f64, Matrix) {
        let num_train = inputs.rows;
        let num_classes = weights.cols;

        let mut scores = inputs.clone() * weights.clone();

        // Shift every row so its maximum is 0 before exponentiating. Softmax
        // is invariant under the shift and exp() can no longer overflow.
        for i in 0..scores.rows {
            let max = scores.data[i].iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            for s in scores.data[i].iter_mut() {
                *s -= max;
            }
        }

        let mut loss = 0.0;
        let mut grad = Matrix::zeros(weights.rows, weights.cols);

        for i in 0..num_train {
            let row = &scores.data[i];

            // -ln(p[y]) written as ln(Σ exp) - score[y]
            loss += row.iter().map(|s| s.exp()).sum::<f64>().ln() - row[labels[i]];

            for j in 0..num_classes {
                let denom: f64 = row.iter().map(|s| s.exp()).sum();
                let mut p = row[j].exp() / denom;
                if j == labels[i] {
                    p -= 1.0;
                }
                for d in 0..weights.rows {
                    grad.data[d][j] += p * inputs.data[i][d];
                }
            }
        }

        loss /= num_train as f64;
        loss += reg * weights.sum_of_squares();

        let inv_n = 1.0 / num_train as f64;
        let grad = grad.map(|g| g * inv_n) + weights.map(|w| 2.0 * reg * w);

        (loss, grad)
    }

    /// Batched implementation; same contract and results as `naive`, with
    /// every step a whole-matrix or whole-vector operation.
    pub fn vectorized(weights: &Matrix, inputs: &Matrix, labels: &[usize], reg: f64) -> (f64, Matrix) {
        let num_train = inputs.rows as f64;

        let scores = inputs.clone() * weights.clone();
        let scores = scores.sub_per_row(&scores.row_max());
        let exp_scores = scores.map(f64::exp);
        let mut probs = exp_scores.div_per_row(&exp_scores.row_sum());

        let data_loss = probs.gather(labels).iter().map(|p| -p.ln()).sum::<f64>() / num_train;
        let loss = data_loss + reg * weights.sum_of_squares();

        // The score gradient is p - 1 at each example's true class, p elsewhere.
        probs.scatter_add(labels, -1.0);
        let grad = (inputs.transpose() * probs).map(|g| g / num_train)
            + weights.map(|w| 2.0 * reg * w);

        (loss, grad)
    }
}
