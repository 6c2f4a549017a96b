//! ABI reconciliation: detect drift between the hand-maintained interface
//! description and the one emitted by the contract build.
//!
//! Both descriptions are reduced to the same canonical rendering before
//! comparison, so formatting and key-order differences never count as
//! drift while entry order and field values do.

pub mod canonical;
pub mod diff;
pub mod extract;
pub mod render;

use std::{fs, path::Path};

use crate::{artifact::ContractArtifact, errors::ScriptError};

use self::diff::DiffSegment;

/// Outcome of reconciling the two interface descriptions
#[derive(Debug)]
pub struct ComparisonResult {
    /// Whether the canonical renderings match exactly
    pub identical: bool,
    /// Tagged diff segments; empty when `identical`
    pub segments: Vec<DiffSegment>,
}

/// Compare the manual ABI source against the compiled build artifact
pub fn reconcile(
    manual_source: &str,
    artifact_source: &str,
) -> Result<ComparisonResult, ScriptError> {
    let manual_entries = extract::extract_abi_entries(manual_source)?;
    let compiled_entries = ContractArtifact::from_json(artifact_source)?.abi_entries()?;

    let manual = canonical::canonicalize_entries(&manual_entries)?;
    let compiled = canonical::canonicalize_entries(&compiled_entries)?;

    if manual == compiled {
        return Ok(ComparisonResult {
            identical: true,
            segments: Vec::new(),
        });
    }
    Ok(ComparisonResult {
        identical: false,
        segments: diff::diff_lines(&manual, &compiled),
    })
}

/// Read both inputs fresh and reconcile them
pub fn reconcile_files(
    manual_path: &Path,
    artifact_path: &Path,
) -> Result<ComparisonResult, ScriptError> {
    let manual_source = fs::read_to_string(manual_path)
        .map_err(|e| ScriptError::Io(format!("cannot read {}: {}", manual_path.display(), e)))?;
    let artifact_source = fs::read_to_string(artifact_path)
        .map_err(|e| ScriptError::Io(format!("cannot read {}: {}", artifact_path.display(), e)))?;
    reconcile(&manual_source, &artifact_source)
}
