//! Aperture inventory records.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::attachment::AttachmentPoint;
use super::element::{Element, ElementKind};
use super::interval::PositionInterval;

/// Cross-section shape of a true aperture element.
///
/// Collimators carry no shape: their geometry lives in the collimation
/// model, so the record's shape is an explicit absent state, never a
/// sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApertureShape {
    /// Circular opening.
    Circle,
    /// Elliptical opening.
    Ellipse,
    /// Rectangular opening.
    Rectangle,
}

impl ApertureShape {
    /// Parse a shape from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "circle" => Some(Self::Circle),
            "ellipse" => Some(Self::Ellipse),
            "rectangle" => Some(Self::Rectangle),
            _ => None,
        }
    }
}

impl fmt::Display for ApertureShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Circle => write!(f, "circle"),
            Self::Ellipse => write!(f, "ellipse"),
            Self::Rectangle => write!(f, "rectangle"),
        }
    }
}

/// One row of the aperture inventory.
///
/// Produced once per classified child during the traversal pass, written to
/// the report, then discarded; rows have no identity beyond the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApertureRecord {
    /// Position of the owning top-level element in the lattice sequence.
    pub index: usize,
    /// Child element name.
    pub name: String,
    /// Child element kind.
    pub kind: ElementKind,
    /// Attachment point the child is registered at.
    pub attachment: AttachmentPoint,
    /// Position of the child among all siblings at that attachment point,
    /// classified or not.
    pub subindex: usize,
    /// Start of the owning element's interval, inherited verbatim.
    pub start: f64,
    /// Stop of the owning element's interval, inherited verbatim.
    pub stop: f64,
    /// Cross-section shape; `None` for collimators.
    pub shape: Option<ApertureShape>,
    /// Horizontal half-extent; `None` exactly when `shape` is `None`.
    pub size_x: Option<f64>,
    /// Vertical half-extent; `None` exactly when `shape` is `None`.
    pub size_y: Option<f64>,
}

impl ApertureRecord {
    /// Build a record for `child` at the given traversal coordinates.
    ///
    /// `start`/`stop` come from the owning element's interval — children have
    /// no interval of their own in this model. Returns `None` when the
    /// child's kind is not aperture-defining; agreement with
    /// [`ElementKind::defines_aperture`] is exact.
    pub fn from_child(
        child: &Element,
        index: usize,
        attachment: AttachmentPoint,
        subindex: usize,
        interval: PositionInterval,
    ) -> Option<Self> {
        let (shape, size_x, size_y) = match child.kind() {
            ElementKind::CircleAperture { radius } => {
                (Some(ApertureShape::Circle), Some(radius), Some(radius))
            }
            ElementKind::EllipseAperture { semi_x, semi_y } => {
                (Some(ApertureShape::Ellipse), Some(semi_x), Some(semi_y))
            }
            ElementKind::RectangleAperture {
                half_width,
                half_height,
            } => (
                Some(ApertureShape::Rectangle),
                Some(half_width),
                Some(half_height),
            ),
            ElementKind::CollimatorAperture => (None, None, None),
            ElementKind::Drift
            | ElementKind::Quadrupole
            | ElementKind::Bend
            | ElementKind::Multipole
            | ElementKind::RfCavity
            | ElementKind::Foil
            | ElementKind::Marker => return None,
        };

        Some(Self {
            index,
            name: child.name().to_string(),
            kind: child.kind(),
            attachment,
            subindex,
            start: interval.start,
            stop: interval.stop,
            shape,
            size_x,
            size_y,
        })
    }
}
