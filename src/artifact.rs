//! Compiler build artifact consumed by the toolkit.
//!
//! The artifact is the framework-emitted JSON document bundling the
//! compiled interface description with the creation bytecode (Hardhat
//! layout: `artifacts/contracts/<Name>.sol/<Name>.json`). Fields the
//! toolkit does not use are ignored on parse.

use std::{fs, path::{Path, PathBuf}};

use alloy::hex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{constants::ARTIFACTS_DIR, errors::ScriptError};

/// The slice of a build artifact the toolkit reads
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    /// Name of the compiled contract
    #[serde(default)]
    pub contract_name: Option<String>,
    /// The compiled interface description
    #[serde(default)]
    pub abi: Option<Value>,
    /// Hex-encoded creation bytecode
    #[serde(default)]
    pub bytecode: Option<String>,
}

impl ContractArtifact {
    /// Parse an artifact from its JSON source
    pub fn from_json(source: &str) -> Result<ContractArtifact, ScriptError> {
        serde_json::from_str(source)
            .map_err(|e| ScriptError::Parse(format!("invalid build artifact: {}", e)))
    }

    /// Read and parse the artifact at `path`
    pub fn load(path: &Path) -> Result<ContractArtifact, ScriptError> {
        let source = fs::read_to_string(path)
            .map_err(|e| ScriptError::Io(format!("cannot read {}: {}", path.display(), e)))?;
        ContractArtifact::from_json(&source)
    }

    /// The compiled ABI entry array
    pub fn abi_entries(&self) -> Result<Vec<Value>, ScriptError> {
        match &self.abi {
            Some(Value::Array(entries)) => Ok(entries.clone()),
            Some(_) => Err(ScriptError::Parse(String::from(
                "artifact abi field is not an array",
            ))),
            None => Err(ScriptError::Parse(String::from(
                "artifact has no abi field",
            ))),
        }
    }

    /// The creation bytecode, hex-decoded
    pub fn creation_bytecode(&self) -> Result<Vec<u8>, ScriptError> {
        let raw = self.bytecode.as_deref().ok_or_else(|| {
            ScriptError::Parse(String::from("artifact has no bytecode field"))
        })?;
        hex::decode(raw)
            .map_err(|e| ScriptError::Parse(format!("artifact bytecode is not valid hex: {}", e)))
    }
}

/// Conventional artifact path for `contract_name`, relative to the project root
pub fn artifact_path(contract_name: &str) -> PathBuf {
    PathBuf::from(ARTIFACTS_DIR)
        .join(format!("{}.sol", contract_name))
        .join(format!("{}.json", contract_name))
}
