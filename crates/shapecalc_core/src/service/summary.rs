//! Combined area/volume report for one figure collection.
//!
//! # Responsibility
//! - Feed the same collection to both calculators and collect their totals.
//! - Provide the fixed demonstration scenario used by the CLI.

use crate::model::figure::Figure;
use crate::model::planar::{Circle, Rectangle, Square};
use crate::model::shape::ShapeValidationError;
use crate::model::solid::Sphere;
use crate::service::area_calculator::AreaCalculator;
use crate::service::volume_calculator::VolumeCalculator;
use log::info;
use serde::Serialize;

/// Totals computed over one figure collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeometrySummary {
    pub total_area: f64,
    pub total_volume: f64,
}

/// Computes both totals for `figures`.
///
/// Area is summed over the members with the area capability; volume over the
/// members with the volume capability.
pub fn summarize(figures: &[Figure]) -> GeometrySummary {
    let area_calculator = AreaCalculator::new(figures.iter().filter_map(Figure::as_shape));
    let volume_calculator = VolumeCalculator::new(figures);

    let summary = GeometrySummary {
        total_area: area_calculator.total_area(),
        total_volume: volume_calculator.calculate_volume(),
    };
    info!(
        "event=summary module=service status=ok figures={} total_area={} total_volume={}",
        figures.len(),
        summary.total_area,
        summary.total_volume
    );
    summary
}

/// Builds the demonstration collection: a 5x10 rectangle, a circle of
/// radius 7, a square of side 3 and a sphere of radius 2.
pub fn demo_figures() -> Result<Vec<Figure>, ShapeValidationError> {
    Ok(vec![
        Rectangle::new(5.0, 10.0)?.into(),
        Circle::new(7.0)?.into(),
        Square::new(3.0)?.into(),
        Sphere::new(2.0)?.into(),
    ])
}
