//! Field access for sorting and cursor construction.

/// Typed lookup of a sortable text field by name.
///
/// Order restoration after a "previous page" fetch sorts by the field the
/// list was requested with. Implementors map the supported names to their
/// typed fields and return `None` for unknown names or absent values; both
/// sort as the empty string.
pub trait SortField {
    /// Returns the value of the field named `key`, if present.
    fn sort_value(&self, key: &str) -> Option<&str>;
}

/// Records that carry a stable identifier usable as a pagination marker.
pub trait Identified {
    /// Returns the record's identifier.
    fn id(&self) -> &str;
}

impl SortField for serde_json::Value {
    fn sort_value(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(serde_json::Value::as_str)
    }
}

impl Identified for serde_json::Value {
    fn id(&self) -> &str {
        self.get("id").and_then(serde_json::Value::as_str).unwrap_or_default()
    }
}

/// Lowercased sort key, with a missing value treated as empty.
pub(crate) fn sort_key_of(value: Option<&str>) -> String {
    value.unwrap_or_default().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_sort_value() {
        let entity = json!({"id": "pln_1", "name": "Nightly", "size": 3});
        assert_eq!(entity.sort_value("name"), Some("Nightly"));
        assert_eq!(entity.sort_value("size"), None);
        assert_eq!(entity.sort_value("missing"), None);
        assert_eq!(entity.id(), "pln_1");
    }

    #[test]
    fn test_json_null_field() {
        let entity = json!({"name": null});
        assert_eq!(entity.sort_value("name"), None);
        assert_eq!(entity.id(), "");
    }

    #[test]
    fn test_sort_key_of() {
        assert_eq!(sort_key_of(Some("MiXeD")), "mixed");
        assert_eq!(sort_key_of(None), "");
    }
}
