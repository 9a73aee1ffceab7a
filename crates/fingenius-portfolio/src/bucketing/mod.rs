//! Portfolio bucketing.
//!
//! Groups holdings into sector buckets weighted by current value.

mod sector;

pub use sector::*;
