use ndarray::Array2;
use rayon::prelude::*;

use crate::consts::PARALLEL_CELL_THRESHOLD;

/// Isotropic Gaussian smoothing with mirrored edges.
///
/// The kernel spans `truncate * sigma` cells each side. Edges reflect about
/// the boundary (`d c b a | a b c d`), so a constant field stays constant.
/// A non-positive sigma returns the input unchanged.
pub fn gaussian_smooth(data: &Array2<f64>, sigma: f64, truncate: f64) -> Array2<f64> {
    if !(sigma > 0.0) || data.is_empty() {
        return data.clone();
    }
    let kernel = make_gaussian_kernel(sigma, truncate);
    let col_pass = convolve_cols(data, &kernel);
    convolve_rows(&col_pass, &kernel)
}

fn make_gaussian_kernel(sigma: f64, truncate: f64) -> Vec<f64> {
    let radius = (truncate * sigma + 0.5) as usize;
    let size = 2 * radius + 1;
    let mut kernel = vec![0.0f64; size];
    let s2 = 2.0 * sigma * sigma;
    let mut sum = 0.0f64;

    for (i, k) in kernel.iter_mut().enumerate() {
        let x = i as f64 - radius as f64;
        *k = (-x * x / s2).exp();
        sum += *k;
    }

    for v in &mut kernel {
        *v /= sum;
    }

    kernel
}

/// Map an out-of-range index back into `0..len` by mirroring.
fn reflect(index: isize, len: usize) -> usize {
    let n = len as isize;
    let period = 2 * n;
    let m = index.rem_euclid(period);
    if m < n {
        m as usize
    } else {
        (period - m - 1) as usize
    }
}

fn convolve_rows(data: &Array2<f64>, kernel: &[f64]) -> Array2<f64> {
    let (h, w) = data.dim();
    let radius = kernel.len() / 2;

    let row_values = |row: usize| -> Vec<f64> {
        (0..w)
            .map(|col| {
                kernel
                    .iter()
                    .enumerate()
                    .map(|(ki, &kv)| {
                        let src = reflect(col as isize + ki as isize - radius as isize, w);
                        data[[row, src]] * kv
                    })
                    .sum()
            })
            .collect()
    };

    collect_rows(h, w, row_values)
}

fn convolve_cols(data: &Array2<f64>, kernel: &[f64]) -> Array2<f64> {
    let (h, w) = data.dim();
    let radius = kernel.len() / 2;

    let row_values = |row: usize| -> Vec<f64> {
        (0..w)
            .map(|col| {
                kernel
                    .iter()
                    .enumerate()
                    .map(|(ki, &kv)| {
                        let src = reflect(row as isize + ki as isize - radius as isize, h);
                        data[[src, col]] * kv
                    })
                    .sum()
            })
            .collect()
    };

    collect_rows(h, w, row_values)
}

fn collect_rows<F>(h: usize, w: usize, row_values: F) -> Array2<f64>
where
    F: Fn(usize) -> Vec<f64> + Sync,
{
    let flat: Vec<f64> = if h * w >= PARALLEL_CELL_THRESHOLD {
        let rows: Vec<Vec<f64>> = (0..h).into_par_iter().map(&row_values).collect();
        rows.into_iter().flatten().collect()
    } else {
        (0..h).flat_map(&row_values).collect()
    };
    Array2::from_shape_vec((h, w), flat).expect("shape mismatch in smoothing pass")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect_indices() {
        assert_eq!(reflect(-1, 4), 0);
        assert_eq!(reflect(-2, 4), 1);
        assert_eq!(reflect(4, 4), 3);
        assert_eq!(reflect(5, 4), 2);
        assert_eq!(reflect(2, 4), 2);
        // Wider than the array: keeps bouncing.
        assert_eq!(reflect(-5, 2), 0);
        assert_eq!(reflect(9, 2), 1);
    }

    #[test]
    fn test_kernel_radius_and_sum() {
        let k = make_gaussian_kernel(3.0, 4.0);
        assert_eq!(k.len(), 25);
        let sum: f64 = k.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert!(k[12] > k[11] && (k[11] - k[13]).abs() < 1e-15);
    }
}
