//! Capability declarations for figure dispatch.
//!
//! # Responsibility
//! - Name the operations a figure may support, independent of its variant.
//! - Report capability mismatches as semantic errors.
//!
//! # Invariants
//! - A capability string id is stable and lowercase.

use crate::model::figure::FigureKind;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Operation a figure can be asked to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    /// 2D area via [`crate::Shape`].
    Area,
    /// 3D volume via [`crate::SolidShape`].
    Volume,
}

impl Capability {
    /// Stable string id used in diagnostics and log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Area => CAPABILITY_AREA,
            Self::Volume => CAPABILITY_VOLUME,
        }
    }

    /// User-facing short description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Area => "Compute the planar area enclosed by a flat figure.",
            Self::Volume => "Compute the volume enclosed by a solid figure.",
        }
    }
}

impl Display for Capability {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// String id for the area capability.
pub const CAPABILITY_AREA: &str = "area";
/// String id for the volume capability.
pub const CAPABILITY_VOLUME: &str = "volume";

/// Capability query failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityError {
    Unsupported {
        figure: FigureKind,
        capability: Capability,
    },
}

impl Display for CapabilityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsupported { figure, capability } => {
                write!(f, "{figure} does not support the {capability} capability")
            }
        }
    }
}

impl Error for CapabilityError {}
