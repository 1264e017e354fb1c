//! In-memory beamline model.

use crate::types::{Element, PositionInterval};

use super::BeamlineModel;

/// In-memory beamline model.
///
/// The bundled [`BeamlineModel`] implementation. The surrounding application
/// assembles one after lattice construction; tests build small ones directly.
/// Elements keep the order they were appended in.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBeamline {
    elements: Vec<Element>,
    intervals: Vec<PositionInterval>,
}

impl InMemoryBeamline {
    /// Create a new empty beamline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a top-level element with its position interval.
    pub fn add_element(&mut self, element: Element, interval: PositionInterval) {
        self.elements.push(element);
        self.intervals.push(interval);
    }

    /// Number of top-level elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True when the beamline holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl BeamlineModel for InMemoryBeamline {
    fn top_level_elements(&self) -> &[Element] {
        &self.elements
    }

    fn interval(&self, index: usize) -> Option<PositionInterval> {
        self.intervals.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AttachmentPoint, ElementKind};

    #[test]
    fn test_sequence_order_preserved() {
        let mut beamline = InMemoryBeamline::new();
        beamline.add_element(
            Element::new("d01", ElementKind::Drift, 1.0),
            PositionInterval::new(0.0, 1.0),
        );
        beamline.add_element(
            Element::new("qh02", ElementKind::Quadrupole, 0.5),
            PositionInterval::new(1.0, 1.5),
        );

        let elements = beamline.top_level_elements();
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].name(), "d01");
        assert_eq!(elements[1].name(), "qh02");
    }

    #[test]
    fn test_interval_lookup() {
        let mut beamline = InMemoryBeamline::new();
        beamline.add_element(
            Element::new("d01", ElementKind::Drift, 1.0),
            PositionInterval::new(0.0, 1.0),
        );

        assert_eq!(beamline.interval(0), Some(PositionInterval::new(0.0, 1.0)));
        assert_eq!(beamline.interval(1), None);
    }

    #[test]
    fn test_child_elements_delegates_to_element() {
        let element = Element::new("d01", ElementKind::Drift, 1.0).with_child(
            AttachmentPoint::Body,
            Element::new("aprt", ElementKind::CircleAperture { radius: 0.05 }, 0.0),
        );

        let mut beamline = InMemoryBeamline::new();
        beamline.add_element(element, PositionInterval::new(0.0, 1.0));

        let element = &beamline.top_level_elements()[0];
        let body = beamline.child_elements(element, AttachmentPoint::Body);
        assert_eq!(body.len(), 1);
        assert_eq!(body[0].name(), "aprt");
        assert!(beamline
            .child_elements(element, AttachmentPoint::Entrance)
            .is_empty());
    }

    #[test]
    fn test_empty_beamline() {
        let beamline = InMemoryBeamline::new();
        assert!(beamline.is_empty());
        assert_eq!(beamline.len(), 0);
        assert_eq!(beamline.interval(0), None);
    }
}
