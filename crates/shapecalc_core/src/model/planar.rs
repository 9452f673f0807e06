//! Flat figures: rectangle, square and circle.
//!
//! # Invariants
//! - Dimensions are validated once at construction and never change.
//! - A `Square` is a `Rectangle` whose width equals its height; its area is
//!   the rectangle formula applied to that rectangle.

use crate::model::figure::FigureKind;
use crate::model::shape::{positive_dimension, Shape, ShapeValidationError};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RectangleFields")]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    /// Creates a rectangle.
    ///
    /// # Errors
    /// - `InvalidDimension` when `width` or `height` is not a positive
    ///   finite number.
    pub fn new(width: f64, height: f64) -> Result<Self, ShapeValidationError> {
        Ok(Self {
            width: positive_dimension(FigureKind::Rectangle, "width", width)?,
            height: positive_dimension(FigureKind::Rectangle, "height", height)?,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[derive(Deserialize)]
struct RectangleFields {
    width: f64,
    height: f64,
}

impl TryFrom<RectangleFields> for Rectangle {
    type Error = ShapeValidationError;

    fn try_from(fields: RectangleFields) -> Result<Self, Self::Error> {
        Self::new(fields.width, fields.height)
    }
}

/// Rectangle constrained to equal sides.
///
/// Usable anywhere a `Rectangle` is expected through [`Square::as_rectangle`]
/// or `Rectangle::from`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SquareFields", into = "SquareFields")]
pub struct Square(Rectangle);

impl Square {
    /// Creates a square with the given side length.
    ///
    /// # Errors
    /// - `InvalidDimension` (reported against `square side`) when `side` is
    ///   not a positive finite number.
    pub fn new(side: f64) -> Result<Self, ShapeValidationError> {
        let side = positive_dimension(FigureKind::Square, "side", side)?;
        Ok(Self(Rectangle {
            width: side,
            height: side,
        }))
    }

    pub fn side(&self) -> f64 {
        self.0.width
    }

    /// Borrows the underlying rectangle.
    pub fn as_rectangle(&self) -> &Rectangle {
        &self.0
    }
}

impl Shape for Square {
    fn area(&self) -> f64 {
        self.0.area()
    }
}

impl From<Square> for Rectangle {
    fn from(square: Square) -> Self {
        square.0
    }
}

#[derive(Serialize, Deserialize)]
struct SquareFields {
    side: f64,
}

impl TryFrom<SquareFields> for Square {
    type Error = ShapeValidationError;

    fn try_from(fields: SquareFields) -> Result<Self, Self::Error> {
        Self::new(fields.side)
    }
}

impl From<Square> for SquareFields {
    fn from(square: Square) -> Self {
        Self {
            side: square.side(),
        }
    }
}

/// Circle given by its radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CircleFields")]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// Creates a circle.
    ///
    /// # Errors
    /// - `InvalidDimension` when `radius` is not a positive finite number.
    pub fn new(radius: f64) -> Result<Self, ShapeValidationError> {
        Ok(Self {
            radius: positive_dimension(FigureKind::Circle, "radius", radius)?,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        PI * self.radius.powi(2)
    }
}

#[derive(Deserialize)]
struct CircleFields {
    radius: f64,
}

impl TryFrom<CircleFields> for Circle {
    type Error = ShapeValidationError;

    fn try_from(fields: CircleFields) -> Result<Self, Self::Error> {
        Self::new(fields.radius)
    }
}
