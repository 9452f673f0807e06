//! Solid figures.

use crate::model::figure::FigureKind;
use crate::model::shape::{positive_dimension, ShapeValidationError, SolidShape};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Sphere given by its radius. Has a volume but no planar area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SphereFields")]
pub struct Sphere {
    radius: f64,
}

impl Sphere {
    /// Creates a sphere.
    ///
    /// # Errors
    /// - `InvalidDimension` when `radius` is not a positive finite number.
    pub fn new(radius: f64) -> Result<Self, ShapeValidationError> {
        Ok(Self {
            radius: positive_dimension(FigureKind::Sphere, "radius", radius)?,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl SolidShape for Sphere {
    fn volume(&self) -> f64 {
        (4.0 / 3.0) * PI * self.radius.powi(3)
    }
}

#[derive(Deserialize)]
struct SphereFields {
    radius: f64,
}

impl TryFrom<SphereFields> for Sphere {
    type Error = ShapeValidationError;

    fn try_from(fields: SphereFields) -> Result<Self, Self::Error> {
        Self::new(fields.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::Sphere;
    use crate::model::shape::SolidShape;
    use std::f64::consts::PI;

    #[test]
    fn sphere_volume_is_four_thirds_pi_r_cubed() {
        let sphere = Sphere::new(2.0).expect("valid sphere");
        assert_eq!(sphere.radius(), 2.0);
        assert_eq!(sphere.volume(), (4.0 / 3.0) * PI * 8.0);
    }

    #[test]
    fn rejects_negative_radius() {
        assert!(Sphere::new(-2.0).is_err());
    }
}
