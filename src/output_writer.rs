//! Bookkeeping of deployed contract addresses.
//!
//! The frontend needs the address of the last deployment; it is kept in a
//! small JSON file next to the project, one entry per contract name.

use std::{fmt::LowerHex, fs, fs::File, io::Read, path::PathBuf};

use json::JsonValue;

use crate::errors::ScriptError;

/// Read the recorded address for `contract_key`
pub fn read_deployed_address(file_path: &str, contract_key: &str) -> Result<String, ScriptError> {
    if !PathBuf::from(file_path).exists() {
        return Err(ScriptError::JsonOutput(String::from(
            "Deployed addresses file not found",
        )));
    }

    let parsed_json = get_json_from_file(file_path)?;
    let address = &parsed_json[contract_key]["address"];

    address
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| {
            ScriptError::JsonOutput(format!("no address recorded for '{}'", contract_key))
        })
}

/// Record the address of a fresh deployment of `contract_key`
pub fn write_deployed_address<T: LowerHex>(
    file_path: &str,
    contract_key: &str,
    address: T,
) -> Result<(), ScriptError> {
    // If the file doesn't exist, create it
    if !PathBuf::from(file_path).exists() {
        fs::write(file_path, "{}").map_err(|e| ScriptError::JsonOutput(e.to_string()))?;
    }

    // Parse its json content into objects
    let mut parsed_json = get_json_from_file(file_path)?;

    // Update the entry for this contract
    parsed_json[contract_key]["address"] = JsonValue::String(format!("{address:#x}"));
    parsed_json[contract_key]["deployed_at"] =
        JsonValue::String(chrono::Utc::now().to_rfc3339());

    // Write the updated json back to the file
    fs::write(file_path, json::stringify_pretty(parsed_json, 4))
        .map_err(|e| ScriptError::JsonOutput(e.to_string()))?;

    Ok(())
}

/// Parses the JSON file at the given path
fn get_json_from_file(file_path: &str) -> Result<JsonValue, ScriptError> {
    let mut file_contents = String::new();
    File::open(file_path)
        .map_err(|e| ScriptError::JsonOutput(e.to_string()))?
        .read_to_string(&mut file_contents)
        .map_err(|e| ScriptError::JsonOutput(e.to_string()))?;

    json::parse(&file_contents).map_err(|e| ScriptError::JsonOutput(e.to_string()))
}
