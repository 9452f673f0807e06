//! Core geometry logic for shapecalc.
//! Area and volume capabilities, the figures implementing them, and the
//! calculators aggregating over mixed collections.

pub mod capability;
pub mod logging;
pub mod model;
pub mod service;

pub use capability::{Capability, CapabilityError};
pub use logging::{default_log_level, flush_logging, init_logging, logging_status, LogTarget};
pub use model::figure::{Figure, FigureKind};
pub use model::planar::{Circle, Rectangle, Square};
pub use model::shape::{Shape, ShapeValidationError, SolidShape};
pub use model::solid::Sphere;
pub use service::area_calculator::AreaCalculator;
pub use service::summary::{demo_figures, summarize, GeometrySummary};
pub use service::volume_calculator::VolumeCalculator;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
