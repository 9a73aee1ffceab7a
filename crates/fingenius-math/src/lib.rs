//! # FinGenius Math
//!
//! Numerical kernels for the FinGenius portfolio analytics engine.
//!
//! This crate provides:
//!
//! - **Statistics**: Simple returns, sample variance and pairwise-complete
//!   sample covariance over gappy daily series
//! - **Linear Algebra**: Matrix-vector products, dot products and the
//!   quadratic form used for portfolio variance
//!
//! ## Design Philosophy
//!
//! - **Explicit kernels**: Portfolio variance is `wᵀ Σ w` built from
//!   separately tested products, not ad hoc loops
//! - **Missing data is data**: Series carry `Option<f64>` so gaps never turn
//!   into silent zeros
//! - **Sample statistics**: Variance and covariance use `n - 1` normalization

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::many_single_char_names)]

pub mod error;
pub mod linear_algebra;
pub mod statistics;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::linear_algebra::{dot, mat_vec, quadratic_form};
    pub use crate::statistics::{
        covariance_matrix, mean, pairwise_sample_covariance, sample_variance, simple_returns,
    };
}

pub use error::{MathError, MathResult};
