//! Canonical textual rendering of an ABI entry array.
//!
//! Both sides of a comparison go through this exact serialization so that
//! cosmetic differences (whitespace, key order inside an entry) disappear
//! while the order of the entries themselves stays significant.

use serde_json::Value;

use crate::errors::ScriptError;

/// Render the entries as stable, 2-space indented JSON.
///
/// Key ordering inside objects is alphabetical: `serde_json` maps are
/// B-tree backed here (the `preserve_order` feature must stay off).
pub fn canonicalize_entries(entries: &[Value]) -> Result<String, ScriptError> {
    serde_json::to_string_pretty(entries).map_err(|e| ScriptError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn key_order_inside_an_entry_is_normalized() {
        let a = vec![json!({"type": "function", "name": "mint", "inputs": []})];
        let b = vec![json!({"inputs": [], "name": "mint", "type": "function"})];
        assert_eq!(
            canonicalize_entries(&a).unwrap(),
            canonicalize_entries(&b).unwrap()
        );
    }

    #[test]
    fn entry_order_is_preserved() {
        let ab = vec![json!({"name": "a"}), json!({"name": "b"})];
        let ba = vec![json!({"name": "b"}), json!({"name": "a"})];
        assert_ne!(
            canonicalize_entries(&ab).unwrap(),
            canonicalize_entries(&ba).unwrap()
        );
    }

    #[test]
    fn rendering_is_two_space_indented() {
        let entries = vec![json!({"name": "mint"})];
        let rendered = canonicalize_entries(&entries).unwrap();
        assert_eq!(rendered, "[\n  {\n    \"name\": \"mint\"\n  }\n]");
    }

    #[test]
    fn empty_array_renders_as_brackets() {
        assert_eq!(canonicalize_entries(&[]).unwrap(), "[]");
    }
}
