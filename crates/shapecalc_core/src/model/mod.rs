//! Geometry domain model.
//!
//! # Responsibility
//! - Define the area/volume capability traits and the figures implementing
//!   them.
//! - Validate figure dimensions at construction and deserialization.
//!
//! # Invariants
//! - Figures are immutable values; every dimension is finite and positive.
//! - Flat and solid capabilities are independent traits.

pub mod figure;
pub mod planar;
pub mod shape;
pub mod solid;
