//! Linear algebra utilities.
//!
//! Dimension-checked products over `nalgebra` dense types. Portfolio
//! variance is the quadratic form `wᵀ Σ w`, computed as `w · (Σ w)`.

use crate::error::{MathError, MathResult};
use nalgebra::{DMatrix, DVector};

/// Multiplies a matrix by a column vector.
pub fn mat_vec(matrix: &DMatrix<f64>, vector: &DVector<f64>) -> MathResult<DVector<f64>> {
    if matrix.ncols() != vector.len() {
        return Err(MathError::DimensionMismatch {
            rows1: matrix.nrows(),
            cols1: matrix.ncols(),
            rows2: vector.len(),
            cols2: 1,
        });
    }

    Ok(matrix * vector)
}

/// Computes the dot product of two vectors of equal length.
pub fn dot(a: &DVector<f64>, b: &DVector<f64>) -> MathResult<f64> {
    if a.len() != b.len() {
        return Err(MathError::DimensionMismatch {
            rows1: a.len(),
            cols1: 1,
            rows2: b.len(),
            cols2: 1,
        });
    }

    Ok(a.dot(b))
}

/// Evaluates the quadratic form `vᵀ M v` for a square matrix.
///
/// An empty matrix with an empty vector evaluates to `0.0`.
///
/// # Errors
///
/// Returns [`MathError::InvalidInput`] if the matrix is not square,
/// [`MathError::DimensionMismatch`] if the vector length differs from the
/// matrix order, and [`MathError::NonFinite`] if any entry or the result is
/// NaN or infinite.
pub fn quadratic_form(matrix: &DMatrix<f64>, vector: &DVector<f64>) -> MathResult<f64> {
    if matrix.nrows() != matrix.ncols() {
        return Err(MathError::invalid_input(
            "Matrix must be square for a quadratic form",
        ));
    }
    if matrix.iter().chain(vector.iter()).any(|x| !x.is_finite()) {
        return Err(MathError::non_finite("quadratic form input"));
    }

    let projected = mat_vec(matrix, vector)?;
    let value = dot(vector, &projected)?;

    if !value.is_finite() {
        return Err(MathError::non_finite("quadratic form"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mat_vec() {
        let m = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let v = DVector::from_vec(vec![1.0, 1.0]);

        let r = mat_vec(&m, &v).unwrap();

        assert_relative_eq!(r[0], 3.0);
        assert_relative_eq!(r[1], 7.0);
    }

    #[test]
    fn test_mat_vec_dimension_mismatch() {
        let m = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let v = DVector::from_vec(vec![1.0, 1.0, 1.0]);

        assert!(matches!(
            mat_vec(&m, &v),
            Err(MathError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_dot() {
        let a = DVector::from_vec(vec![1.0, 2.0, 3.0]);
        let b = DVector::from_vec(vec![4.0, -5.0, 6.0]);

        assert_relative_eq!(dot(&a, &b).unwrap(), 12.0);
        assert!(dot(&a, &DVector::from_vec(vec![1.0])).is_err());
    }

    #[test]
    fn test_quadratic_form_two_assets() {
        // Two assets: var 0.04 and 0.09, covariance 0.01, 60/40 weights
        let cov = DMatrix::from_row_slice(2, 2, &[0.04, 0.01, 0.01, 0.09]);
        let w = DVector::from_vec(vec![0.6, 0.4]);

        let var = quadratic_form(&cov, &w).unwrap();

        // 0.36*0.04 + 0.16*0.09 + 2*0.24*0.01
        assert_relative_eq!(var, 0.0336, epsilon = 1e-12);
    }

    #[test]
    fn test_quadratic_form_scalar() {
        let cov = DMatrix::from_row_slice(1, 1, &[0.25]);
        let w = DVector::from_vec(vec![1.0]);

        assert_relative_eq!(quadratic_form(&cov, &w).unwrap(), 0.25);
    }

    #[test]
    fn test_quadratic_form_empty() {
        let cov = DMatrix::<f64>::zeros(0, 0);
        let w = DVector::<f64>::zeros(0);

        assert_relative_eq!(quadratic_form(&cov, &w).unwrap(), 0.0);
    }

    #[test]
    fn test_quadratic_form_rejects_non_square() {
        let m = DMatrix::from_row_slice(1, 2, &[1.0, 2.0]);
        let w = DVector::from_vec(vec![1.0, 1.0]);

        assert!(matches!(
            quadratic_form(&m, &w),
            Err(MathError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_quadratic_form_rejects_nan() {
        let cov = DMatrix::from_row_slice(1, 1, &[f64::NAN]);
        let w = DVector::from_vec(vec![1.0]);

        assert!(matches!(
            quadratic_form(&cov, &w),
            Err(MathError::NonFinite { .. })
        ));
    }
}
