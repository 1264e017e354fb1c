//! Beamline element types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::attachment::AttachmentPoint;

/// Kind of a beamline element.
///
/// The set is closed: classification and geometry extraction match on it
/// exhaustively, so a new kind cannot be introduced without deciding both.
/// Aperture-defining kinds carry their envelope half-extents, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ElementKind {
    /// Field-free drift space.
    Drift,
    /// Quadrupole magnet.
    Quadrupole,
    /// Bending dipole.
    Bend,
    /// Thin multipole corrector.
    Multipole,
    /// Accelerating RF cavity.
    RfCavity,
    /// Stripping foil.
    Foil,
    /// Zero-length marker.
    Marker,
    /// Circular restriction of the beam pipe cross-section.
    CircleAperture {
        /// Radius of the opening.
        radius: f64,
    },
    /// Elliptical restriction of the beam pipe cross-section.
    EllipseAperture {
        /// Horizontal semi-axis.
        semi_x: f64,
        /// Vertical semi-axis.
        semi_y: f64,
    },
    /// Rectangular restriction of the beam pipe cross-section.
    RectangleAperture {
        /// Horizontal half-width.
        half_width: f64,
        /// Vertical half-height.
        half_height: f64,
    },
    /// Collimator jaw assembly. Its geometry is governed by the collimation
    /// model, not carried here; only its position is inventoried.
    CollimatorAperture,
}

impl ElementKind {
    /// True iff this kind limits the physical cross-section available to
    /// particles.
    ///
    /// Total over the kind set, with no wildcard arm: an unclassified new
    /// kind is a compile error, never a silent pass-through.
    pub fn defines_aperture(&self) -> bool {
        match self {
            Self::CircleAperture { .. }
            | Self::EllipseAperture { .. }
            | Self::RectangleAperture { .. }
            | Self::CollimatorAperture => true,
            Self::Drift
            | Self::Quadrupole
            | Self::Bend
            | Self::Multipole
            | Self::RfCavity
            | Self::Foil
            | Self::Marker => false,
        }
    }

    /// Stable kind name, as written in reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Drift => "Drift",
            Self::Quadrupole => "Quadrupole",
            Self::Bend => "Bend",
            Self::Multipole => "Multipole",
            Self::RfCavity => "RfCavity",
            Self::Foil => "Foil",
            Self::Marker => "Marker",
            Self::CircleAperture { .. } => "CircleAperture",
            Self::EllipseAperture { .. } => "EllipseAperture",
            Self::RectangleAperture { .. } => "RectangleAperture",
            Self::CollimatorAperture => "CollimatorAperture",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A beamline element.
///
/// Top-level elements own their child elements, partitioned by attachment
/// point. Child order per point is the registration order from model
/// construction and is never reordered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    name: String,
    kind: ElementKind,
    length: f64,
    children: BTreeMap<AttachmentPoint, Vec<Element>>,
}

impl Element {
    /// Create a new element with no children.
    pub fn new(name: impl Into<String>, kind: ElementKind, length: f64) -> Self {
        Self {
            name: name.into(),
            kind,
            length,
            children: BTreeMap::new(),
        }
    }

    /// Element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Element kind.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Physical length in meters.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Attach a child at `point`, after any children already registered there.
    pub fn attach_child(&mut self, point: AttachmentPoint, child: Element) {
        self.children.entry(point).or_default().push(child);
    }

    /// Attach a child at `point`, builder style.
    pub fn with_child(mut self, point: AttachmentPoint, child: Element) -> Self {
        self.attach_child(point, child);
        self
    }

    /// Children attached at `point`, in registration order.
    pub fn children(&self, point: AttachmentPoint) -> &[Element] {
        self.children.get(&point).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of children across all attachment points.
    pub fn child_count(&self) -> usize {
        self.children.values().map(Vec::len).sum()
    }
}
