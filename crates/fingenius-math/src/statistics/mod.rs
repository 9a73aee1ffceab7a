//! Descriptive statistics over daily price and return series.
//!
//! Series are aligned by row and may contain gaps (`None`). Covariance uses
//! pairwise-complete observations: for each pair of columns only the rows
//! where both values are present contribute.

use crate::error::{MathError, MathResult};
use nalgebra::DMatrix;

/// Computes simple period-over-period returns from a close series.
///
/// The output has one entry per consecutive pair of input rows, so its
/// length is `closes.len() - 1` (empty for fewer than two rows). A return is
/// `None` when either close is missing or the earlier close is zero.
pub fn simple_returns(closes: &[Option<f64>]) -> Vec<Option<f64>> {
    closes
        .windows(2)
        .map(|pair| match (pair[0], pair[1]) {
            (Some(prev), Some(curr)) if prev != 0.0 => Some(curr / prev - 1.0),
            _ => None,
        })
        .collect()
}

/// Arithmetic mean. `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample variance (`n - 1` denominator).
///
/// # Errors
///
/// Returns [`MathError::InsufficientData`] for fewer than two values.
pub fn sample_variance(values: &[f64]) -> MathResult<f64> {
    if values.len() < 2 {
        return Err(MathError::insufficient_data(2, values.len()));
    }
    let m = mean(values).unwrap_or(0.0);
    let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    Ok(ss / (values.len() - 1) as f64)
}

/// Sample covariance of two aligned series using pairwise-complete rows.
///
/// Returns `None` when fewer than two rows have both values present.
///
/// # Errors
///
/// Returns [`MathError::DimensionMismatch`] if the series differ in length.
pub fn pairwise_sample_covariance(x: &[Option<f64>], y: &[Option<f64>]) -> MathResult<Option<f64>> {
    if x.len() != y.len() {
        return Err(MathError::DimensionMismatch {
            rows1: x.len(),
            cols1: 1,
            rows2: y.len(),
            cols2: 1,
        });
    }

    let (xs, ys): (Vec<f64>, Vec<f64>) = x
        .iter()
        .zip(y)
        .filter_map(|(a, b)| Some(((*a)?, (*b)?)))
        .unzip();

    if xs.len() < 2 {
        return Ok(None);
    }

    let (Some(mean_x), Some(mean_y)) = (mean(&xs), mean(&ys)) else {
        return Ok(None);
    };
    let cross: f64 = xs
        .iter()
        .zip(&ys)
        .map(|(a, b)| (a - mean_x) * (b - mean_y))
        .sum();

    Ok(Some(cross / (xs.len() - 1) as f64))
}

/// Builds the sample covariance matrix of a set of aligned columns.
///
/// Entry `(i, j)` is the pairwise-complete sample covariance of columns `i`
/// and `j`. Pairs with fewer than two shared observations contribute `0.0`,
/// so a column without usable data drops out of any quadratic form.
///
/// # Errors
///
/// Returns [`MathError::DimensionMismatch`] if the columns differ in length.
pub fn covariance_matrix(columns: &[Vec<Option<f64>>]) -> MathResult<DMatrix<f64>> {
    let n = columns.len();
    let mut cov = DMatrix::zeros(n, n);

    for i in 0..n {
        for j in i..n {
            let value = pairwise_sample_covariance(&columns[i], &columns[j])?.unwrap_or(0.0);
            cov[(i, j)] = value;
            cov[(j, i)] = value;
        }
    }

    Ok(cov)
}
