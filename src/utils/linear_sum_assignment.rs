use nalgebra::DMatrix;
use pathfinding::kuhn_munkres::kuhn_munkres;
use pathfinding::matrix::Matrix;

/// Weights are converted to fixed point before being passed to the solver
const F32_I64_MULT: f32 = 1_000_000.0;

/// Maximum weight bipartite matching (Hungarian algorithm)
///
/// Every row is paired with at most one column and vice versa, so that the sum of the
/// selected weights is maximal. When the matrix is not square the smaller side is fully
/// assigned. Non-finite weights are treated as `0.0`.
///
/// Returns `(row, col)` pairs sorted by row.
///
pub fn linear_sum_assignment(weights: &DMatrix<f32>) -> Vec<(usize, usize)> {
    let (rows, cols) = weights.shape();
    if rows == 0 || cols == 0 {
        return Vec::new();
    }

    // the solver requires rows <= columns
    let transposed = rows > cols;
    let (n, m) = if transposed { (cols, rows) } else { (rows, cols) };

    let mut matrix = Matrix::new(n, m, 0i64);
    for i in 0..n {
        for j in 0..m {
            let w = if transposed {
                weights[(j, i)]
            } else {
                weights[(i, j)]
            };
            matrix[(i, j)] = to_fixed(w);
        }
    }

    let (_, solution) = kuhn_munkres(&matrix);

    let mut pairs = solution
        .into_iter()
        .enumerate()
        .map(|(i, j)| if transposed { (j, i) } else { (i, j) })
        .collect::<Vec<_>>();
    pairs.sort_unstable();
    pairs
}

fn to_fixed(w: f32) -> i64 {
    if w.is_finite() {
        (w * F32_I64_MULT).round() as i64
    } else {
        0
    }
}
