//! Portfolio representation.
//!
//! This module provides the [`Portfolio`] type, an ordered collection of
//! [`Holding`](crate::types::Holding)s for a single request.

#[allow(clippy::module_inception)]
mod portfolio;

pub use portfolio::Portfolio;
