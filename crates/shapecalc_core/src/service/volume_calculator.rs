//! Total-volume aggregation over mixed figure collections.
//!
//! # Invariants
//! - Only figures whose `as_solid()` query succeeds contribute.
//! - Figures without the volume capability are skipped without error.

use crate::model::figure::Figure;
use log::debug;

/// Sums the volume of the solid members of a figure sequence.
pub struct VolumeCalculator<'a> {
    figures: &'a [Figure],
}

impl<'a> VolumeCalculator<'a> {
    pub fn new(figures: &'a [Figure]) -> Self {
        Self { figures }
    }

    /// Returns the summed volume of every solid figure, in sequence order.
    pub fn calculate_volume(&self) -> f64 {
        let mut total = 0.0;
        let mut solids = 0usize;
        for solid in self.figures.iter().filter_map(Figure::as_solid) {
            total += solid.volume();
            solids += 1;
        }
        debug!(
            "event=total_volume module=service status=ok figures={} solids={} skipped={} total={}",
            self.figures.len(),
            solids,
            self.figures.len() - solids,
            total
        );
        total
    }
}
