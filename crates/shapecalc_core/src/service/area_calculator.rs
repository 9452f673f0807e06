//! Total-area aggregation.
//!
//! # Invariants
//! - Every captured element supports the area capability.
//! - Summation follows the captured order, starting from `0.0`.

use crate::capability::CapabilityError;
use crate::model::figure::Figure;
use crate::model::shape::Shape;
use log::{debug, warn};

/// Sums the area of a fixed sequence of flat figures.
pub struct AreaCalculator<'a> {
    shapes: Vec<&'a dyn Shape>,
}

impl<'a> AreaCalculator<'a> {
    /// Captures `shapes` in iteration order.
    pub fn new<I>(shapes: I) -> Self
    where
        I: IntoIterator<Item = &'a dyn Shape>,
    {
        Self {
            shapes: shapes.into_iter().collect(),
        }
    }

    /// Captures a mixed figure slice, requiring every member to have an area.
    ///
    /// # Errors
    /// - `CapabilityError::Unsupported` for the first figure without the area
    ///   capability. No calculator is produced in that case.
    pub fn try_from_figures(figures: &'a [Figure]) -> Result<Self, CapabilityError> {
        let shapes = figures
            .iter()
            .map(Figure::require_shape)
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|err| {
                warn!(
                    "event=area_capture module=service status=error figures={} error={}",
                    figures.len(),
                    err
                );
            })?;
        Ok(Self { shapes })
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Returns the sum of every captured shape's area.
    pub fn total_area(&self) -> f64 {
        let total = self
            .shapes
            .iter()
            .fold(0.0, |total, shape| total + shape.area());
        debug!(
            "event=total_area module=service status=ok shapes={} total={}",
            self.shapes.len(),
            total
        );
        total
    }
}
