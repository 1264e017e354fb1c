//! Single-pass aperture inventory traversal.
//!
//! The builder walks the ordered top-level sequence once, enumerating the
//! children at each attachment point, and collects one record per
//! aperture-defining child.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::canonical::inventory_fingerprint;
use crate::model::BeamlineModel;
use crate::report::{ReportError, ReportWriter, Verbosity};
use crate::types::{ApertureRecord, AttachmentPoint};

/// Error type for inventory operations.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    /// A top-level element has no position interval.
    #[error("no position interval for element '{name}' at index {index}")]
    MissingInterval {
        /// Name of the offending element.
        name: String,
        /// Its position in the top-level sequence.
        index: usize,
    },
    /// Report I/O failure.
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Single-pass builder of the aperture inventory.
///
/// ## Algorithm
///
/// 1. For each top-level element, in sequence order, fetch its interval
/// 2. For each attachment point, in `Entrance → Body → Exit` order,
///    enumerate the children registered there
/// 3. `subindex` counts every sibling, classified or not
/// 4. Each child whose kind defines an aperture becomes one record,
///    inheriting the owning element's interval verbatim
///
/// One pass, no re-visiting; the record order is fully determined by the
/// model, so the same model always yields the same sequence.
pub struct InventoryBuilder<'a, M: BeamlineModel> {
    model: &'a M,
}

impl<'a, M: BeamlineModel> InventoryBuilder<'a, M> {
    /// Create a builder over `model`.
    pub fn new(model: &'a M) -> Self {
        Self { model }
    }

    /// Run the traversal pass and collect the ordered record sequence.
    pub fn build(&self) -> Result<Vec<ApertureRecord>, InventoryError> {
        let elements = self.model.top_level_elements();
        let mut records = Vec::new();

        for (index, element) in elements.iter().enumerate() {
            let interval =
                self.model
                    .interval(index)
                    .ok_or_else(|| InventoryError::MissingInterval {
                        name: element.name().to_string(),
                        index,
                    })?;

            for point in AttachmentPoint::ALL {
                let children = self.model.child_elements(element, point);
                for (subindex, child) in children.iter().enumerate() {
                    if !child.kind().defines_aperture() {
                        continue;
                    }
                    if let Some(record) =
                        ApertureRecord::from_child(child, index, point, subindex, interval)
                    {
                        tracing::trace!(
                            index,
                            subindex,
                            name = %record.name,
                            kind = record.kind.name(),
                            "classified aperture child"
                        );
                        records.push(record);
                    }
                }
            }
        }

        tracing::debug!(
            elements = elements.len(),
            records = records.len(),
            "inventory pass complete"
        );
        Ok(records)
    }
}

/// Summary statistics for an inventory pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryStats {
    /// Number of records emitted.
    pub record_count: usize,
    /// Records per kind name, deterministically ordered.
    pub counts_by_kind: BTreeMap<String, usize>,
}

impl InventoryStats {
    /// Tally the emitted records.
    pub fn from_records(records: &[ApertureRecord]) -> Self {
        let mut counts_by_kind: BTreeMap<String, usize> = BTreeMap::new();
        for record in records {
            *counts_by_kind.entry(record.kind.name().to_string()).or_default() += 1;
        }
        Self {
            record_count: records.len(),
            counts_by_kind,
        }
    }
}

/// Build the inventory for `model` and write the report to `path`.
///
/// The single entry point for a full inventory run: one traversal pass, one
/// report file created or overwritten at `path`. No process-wide state is
/// read or written; bunch and physics setup belong to the surrounding
/// application. Returns the records in the order they were written.
pub fn write_inventory_report<M: BeamlineModel>(
    model: &M,
    path: impl AsRef<Path>,
    verbosity: Verbosity,
) -> Result<Vec<ApertureRecord>, InventoryError> {
    let records = InventoryBuilder::new(model).build()?;

    let mut writer = ReportWriter::create(path.as_ref(), verbosity)?;
    for record in &records {
        writer.write_record(record)?;
    }
    writer.finish()?;

    tracing::info!(
        records = records.len(),
        fingerprint = %inventory_fingerprint(&records),
        path = %path.as_ref().display(),
        "aperture inventory written"
    );
    Ok(records)
}
