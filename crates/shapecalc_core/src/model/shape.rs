//! Shape capability contracts and dimension validation.
//!
//! # Invariants
//! - `area()` and `volume()` are pure and never negative for a validly
//!   constructed value.
//! - Every stored dimension is finite and strictly positive.

use crate::model::figure::FigureKind;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Flat figure with a 2D area.
pub trait Shape {
    fn area(&self) -> f64;
}

/// Solid figure with a 3D volume.
///
/// Unrelated to [`Shape`]: a solid does not have to expose an area.
pub trait SolidShape {
    fn volume(&self) -> f64;
}

/// Construction-time validation errors for figure dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeValidationError {
    InvalidDimension {
        figure: FigureKind,
        dimension: &'static str,
        value: f64,
    },
}

impl Display for ShapeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDimension {
                figure,
                dimension,
                value,
            } => write!(
                f,
                "{figure} {dimension} must be a positive finite number, got {value}"
            ),
        }
    }
}

impl Error for ShapeValidationError {}

/// Returns `value` when it is usable as a dimension of `figure`.
pub(crate) fn positive_dimension(
    figure: FigureKind,
    dimension: &'static str,
    value: f64,
) -> Result<f64, ShapeValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ShapeValidationError::InvalidDimension {
            figure,
            dimension,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{positive_dimension, ShapeValidationError};
    use crate::model::figure::FigureKind;

    #[test]
    fn accepts_positive_values() {
        assert_eq!(
            positive_dimension(FigureKind::Circle, "radius", 0.5).expect("positive radius"),
            0.5
        );
    }

    #[test]
    fn rejects_zero_negative_and_non_finite_values() {
        for value in [0.0, -0.0, -3.0, f64::INFINITY, f64::NEG_INFINITY] {
            let err = positive_dimension(FigureKind::Rectangle, "width", value)
                .expect_err("non-positive width must fail");
            assert_eq!(
                err,
                ShapeValidationError::InvalidDimension {
                    figure: FigureKind::Rectangle,
                    dimension: "width",
                    value,
                }
            );
        }

        assert!(positive_dimension(FigureKind::Sphere, "radius", f64::NAN).is_err());
    }

    #[test]
    fn error_message_names_figure_and_dimension() {
        let err = positive_dimension(FigureKind::Rectangle, "width", -1.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "rectangle width must be a positive finite number, got -1"
        );
    }
}
