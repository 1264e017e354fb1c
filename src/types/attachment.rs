//! Attachment points for child elements.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Location at which a child element is attached to a top-level element.
///
/// The three points are visited in the fixed order
/// `Entrance → Body → Exit`; `Ord` follows the same order, so sorting by
/// attachment point reproduces the traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AttachmentPoint {
    /// Upstream face of the owning element.
    Entrance,
    /// Interior of the owning element.
    Body,
    /// Downstream face of the owning element.
    Exit,
}

impl AttachmentPoint {
    /// All attachment points, in traversal order.
    pub const ALL: [AttachmentPoint; 3] = [Self::Entrance, Self::Body, Self::Exit];

    /// Parse an attachment point from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "entrance" => Some(Self::Entrance),
            "body" => Some(Self::Body),
            "exit" => Some(Self::Exit),
            _ => None,
        }
    }
}

impl fmt::Display for AttachmentPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entrance => write!(f, "entrance"),
            Self::Body => write!(f, "body"),
            Self::Exit => write!(f, "exit"),
        }
    }
}
