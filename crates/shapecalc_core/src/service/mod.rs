//! Aggregation services over figure collections.
//!
//! # Responsibility
//! - Turn figure collections into totals through capability interfaces.
//! - Stay independent of concrete figure variants.

pub mod area_calculator;
pub mod summary;
pub mod volume_calculator;
