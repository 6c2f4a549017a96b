//! Extraction of the ABI entry array from the hand-maintained source.
//!
//! The source is either pure JSON or a wrapper like
//! `const contractABI = [ { ... } ];`. Extraction is two-staged: strict
//! parsing of the whole input first, then a string-aware balanced-bracket
//! scan that isolates the first `[ { ... } ]` literal and strict-parses it.

use serde_json::Value;

use crate::errors::ScriptError;

/// Pull the ABI entry array out of the manual source text
pub fn extract_abi_entries(source: &str) -> Result<Vec<Value>, ScriptError> {
    // Stage one: the whole input is already a JSON array
    if let Ok(Value::Array(entries)) = serde_json::from_str::<Value>(source) {
        return Ok(entries);
    }

    // Stage two: isolate the first embedded array literal
    let literal = find_array_literal(source).ok_or_else(|| {
        ScriptError::Parse(String::from(
            "no ABI array literal found in the manual source",
        ))
    })?;
    match serde_json::from_str::<Value>(literal) {
        Ok(Value::Array(entries)) => Ok(entries),
        Ok(_) => Err(ScriptError::Parse(String::from(
            "embedded literal is not an ABI array",
        ))),
        Err(e) => Err(ScriptError::Parse(format!(
            "embedded ABI array literal is not valid JSON: {}",
            e
        ))),
    }
}

/// Locate the first balanced `[ { ... } ]` region of `source`.
///
/// Candidates are `[` characters directly followed (after whitespace) by
/// `{`; a candidate is accepted when its brackets close back to depth zero
/// on a `]`. Bracket characters inside JSON strings are ignored.
fn find_array_literal(source: &str) -> Option<&str> {
    let mut search_from = 0;
    while let Some(rel) = source[search_from..].find('[') {
        let open = search_from + rel;
        if source[open + 1..].trim_start().starts_with('{') {
            if let Some(end) = balanced_end(source.as_bytes(), open) {
                return Some(&source[open..=end]);
            }
        }
        search_from = open + 1;
    }
    None
}

/// Index of the closing bracket matching the `[` at `open`, if balanced
fn balanced_end(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (idx, &byte) in bytes.iter().enumerate().skip(open) {
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'[' | b'{' => depth += 1,
            b']' | b'}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    // a region closed by `}` has mangled brackets
                    return (byte == b']').then_some(idx);
                }
            }
            _ => {}
        }
    }
    None
}
