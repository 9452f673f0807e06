//! Heterogeneous figure collection element.
//!
//! # Responsibility
//! - Hold any supported figure in one closed sum type.
//! - Answer capability queries without inspecting concrete types at call
//!   sites.
//!
//! # Invariants
//! - `as_shape()` is present exactly when `supports(Capability::Area)`.
//! - `as_solid()` is present exactly when `supports(Capability::Volume)`.

use crate::capability::{Capability, CapabilityError};
use crate::model::planar::{Circle, Rectangle, Square};
use crate::model::shape::{Shape, SolidShape};
use crate::model::solid::Sphere;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

const PLANAR_CAPABILITIES: &[Capability] = &[Capability::Area];
const SOLID_CAPABILITIES: &[Capability] = &[Capability::Volume];

/// Variant tag of a [`Figure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FigureKind {
    Rectangle,
    Square,
    Circle,
    Sphere,
}

impl FigureKind {
    /// Stable lowercase name, matching the serialized `kind` tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Square => "square",
            Self::Circle => "circle",
            Self::Sphere => "sphere",
        }
    }

    /// Capabilities every figure of this kind supports.
    pub fn capabilities(self) -> &'static [Capability] {
        match self {
            Self::Rectangle | Self::Square | Self::Circle => PLANAR_CAPABILITIES,
            Self::Sphere => SOLID_CAPABILITIES,
        }
    }
}

impl Display for FigureKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One member of a mixed figure collection.
///
/// Serialized with an internal `kind` tag, e.g.
/// `{"kind":"circle","radius":7.0}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Figure {
    Rectangle(Rectangle),
    Square(Square),
    Circle(Circle),
    Sphere(Sphere),
}

impl Figure {
    pub fn kind(&self) -> FigureKind {
        match self {
            Self::Rectangle(_) => FigureKind::Rectangle,
            Self::Square(_) => FigureKind::Square,
            Self::Circle(_) => FigureKind::Circle,
            Self::Sphere(_) => FigureKind::Sphere,
        }
    }

    pub fn capabilities(&self) -> &'static [Capability] {
        self.kind().capabilities()
    }

    pub fn supports(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }

    /// Returns the area view of this figure, if it has one.
    pub fn as_shape(&self) -> Option<&dyn Shape> {
        match self {
            Self::Rectangle(rectangle) => Some(rectangle),
            Self::Square(square) => Some(square),
            Self::Circle(circle) => Some(circle),
            Self::Sphere(_) => None,
        }
    }

    /// Returns the volume view of this figure, if it has one.
    pub fn as_solid(&self) -> Option<&dyn SolidShape> {
        match self {
            Self::Sphere(sphere) => Some(sphere),
            Self::Rectangle(_) | Self::Square(_) | Self::Circle(_) => None,
        }
    }

    /// Like [`Figure::as_shape`], but reports a missing capability as an error.
    pub fn require_shape(&self) -> Result<&dyn Shape, CapabilityError> {
        self.as_shape().ok_or(CapabilityError::Unsupported {
            figure: self.kind(),
            capability: Capability::Area,
        })
    }

    /// Like [`Figure::as_solid`], but reports a missing capability as an error.
    pub fn require_solid(&self) -> Result<&dyn SolidShape, CapabilityError> {
        self.as_solid().ok_or(CapabilityError::Unsupported {
            figure: self.kind(),
            capability: Capability::Volume,
        })
    }
}

impl From<Rectangle> for Figure {
    fn from(value: Rectangle) -> Self {
        Self::Rectangle(value)
    }
}

impl From<Square> for Figure {
    fn from(value: Square) -> Self {
        Self::Square(value)
    }
}

impl From<Circle> for Figure {
    fn from(value: Circle) -> Self {
        Self::Circle(value)
    }
}

impl From<Sphere> for Figure {
    fn from(value: Sphere) -> Self {
        Self::Sphere(value)
    }
}
