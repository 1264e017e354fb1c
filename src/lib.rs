//! # aperture-inventory
//!
//! Position-ordered aperture and collimator inventory for beamline lattices.
//!
//! The inventory builder answers one question:
//!
//! > Which elements of an assembled beamline limit the physical
//! > cross-section available to particles, and where do they sit?
//!
//! ## Core Contract
//!
//! 1. Walk the ordered top-level element sequence exactly once
//! 2. Enumerate children at each attachment point in `Entrance → Body → Exit`
//!    order, counting every sibling — classified or not — into `subindex`
//! 3. Emit one [`ApertureRecord`] per aperture-defining child, inheriting the
//!    owning element's `[start, stop)` interval verbatim
//! 4. Serialize the ordered records to a comma-space-delimited report
//!
//! ## Architecture
//!
//! ```text
//! BeamlineModel → InventoryBuilder → Vec<ApertureRecord> → ReportWriter
//!                        ↓
//!            ElementKind::defines_aperture
//! ```
//!
//! ## Determinism Guarantees
//!
//! - Same model → identical record sequence and identical report bytes
//! - Row order is ascending `index`, then attachment point, then `subindex`
//! - `subindex` counts all siblings at an attachment point, not only the
//!   classified ones
//!
//! Model construction (lattice parsing, aperture placement, duplicate-name
//! resolution, displacement injection) and particle physics are external
//! collaborators; this crate only reads the assembled model.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod canonical;
pub mod inventory;
pub mod model;
pub mod report;
pub mod types;

// Re-exports
pub use types::{
    ApertureRecord, ApertureShape, AttachmentPoint, Element, ElementKind, PositionInterval,
};
pub use model::{BeamlineModel, InMemoryBeamline};
pub use inventory::{write_inventory_report, InventoryBuilder, InventoryError, InventoryStats};
pub use report::{
    format_record, ReportError, ReportWriter, Verbosity, DEFAULT_REPORT_PATH, NULL_LITERAL,
    REPORT_COLUMNS, REPORT_DELIMITER,
};
pub use canonical::{canonical_hash, canonical_hash_hex, inventory_fingerprint, to_canonical_bytes};

/// Schema version for the report layout.
/// Increment on breaking changes to the column set or value rendering.
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";
