//! Typed view of a pack's `manifest.json`.
//!
//! The manifest is read leniently: every field is optional so that the
//! validator can report each missing piece instead of failing on the first.
//! A field counts as present whenever its key exists, even with a `null`
//! value.

use serde_json::{Map, Value};

/// Header fields every manifest must declare, in reporting order.
pub const REQUIRED_HEADER_FIELDS: [&str; 5] =
    ["name", "description", "uuid", "version", "min_engine_version"];

/// The parsed manifest document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackManifest {
    pub format_version: Option<Value>,
    pub header: Option<Header>,
    pub modules: Option<ModulesSection>,
}

/// The `header` section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Header {
    pub name: Option<Value>,
    pub description: Option<Value>,
    pub uuid: Option<Value>,
    pub version: Option<Value>,
    pub min_engine_version: Option<Value>,
}

/// The `modules` section.
#[derive(Debug, Clone, PartialEq)]
pub enum ModulesSection {
    Array(Vec<Module>),
    /// Present but not a JSON array.
    NotAnArray(Value),
}

/// One entry of the `modules` array.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Module {
    pub uuid: Option<Value>,
    pub module_type: Option<Value>,
    pub version: Option<Value>,
}

impl PackManifest {
    /// Build the typed view from any JSON document. Non-object documents
    /// have no fields.
    pub fn from_value(value: &Value) -> Self {
        let Some(root) = value.as_object() else {
            return Self::default();
        };

        Self {
            format_version: root.get("format_version").cloned(),
            header: root.get("header").map(Header::from_value),
            modules: root.get("modules").map(ModulesSection::from_value),
        }
    }

    /// Every UUID-bearing value in document order: the header first, then
    /// each module that declares one.
    pub fn declared_uuids(&self) -> Vec<&Value> {
        let mut uuids = Vec::new();
        if let Some(uuid) = self.header.as_ref().and_then(|h| h.uuid.as_ref()) {
            uuids.push(uuid);
        }
        if let Some(ModulesSection::Array(modules)) = &self.modules {
            uuids.extend(modules.iter().filter_map(|m| m.uuid.as_ref()));
        }
        uuids
    }
}

impl Header {
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        Self {
            name: field(obj, "name"),
            description: field(obj, "description"),
            uuid: field(obj, "uuid"),
            version: field(obj, "version"),
            min_engine_version: field(obj, "min_engine_version"),
        }
    }

    /// Look up a header field by its JSON key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match key {
            "name" => self.name.as_ref(),
            "description" => self.description.as_ref(),
            "uuid" => self.uuid.as_ref(),
            "version" => self.version.as_ref(),
            "min_engine_version" => self.min_engine_version.as_ref(),
            _ => None,
        }
    }

    /// Required fields absent from this header, in reporting order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        REQUIRED_HEADER_FIELDS
            .iter()
            .copied()
            .filter(|key| self.get(key).is_none())
            .collect()
    }
}

impl ModulesSection {
    pub fn from_value(value: &Value) -> Self {
        match value.as_array() {
            Some(items) => ModulesSection::Array(items.iter().map(Module::from_value).collect()),
            None => ModulesSection::NotAnArray(value.clone()),
        }
    }
}

impl Module {
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        Self {
            uuid: field(obj, "uuid"),
            module_type: field(obj, "type"),
            version: field(obj, "version"),
        }
    }
}

fn field(obj: &Map<String, Value>, key: &str) -> Option<Value> {
    obj.get(key).cloned()
}

/// Render a JSON value for a finding message: strings bare, anything else
/// as JSON text.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_field_counts_as_present() {
        let manifest = PackManifest::from_value(&json!({
            "header": {"uuid": null}
        }));
        let header = manifest.header.unwrap();
        assert_eq!(header.uuid, Some(Value::Null));
        assert!(!header.missing_fields().contains(&"uuid"));
    }

    #[test]
    fn test_missing_fields_in_declared_order() {
        let header = Header::from_value(&json!({"uuid": "x", "version": [1, 0, 0]}));
        assert_eq!(
            header.missing_fields(),
            vec!["name", "description", "min_engine_version"]
        );
    }

    #[test]
    fn test_non_object_documents_have_no_fields() {
        assert_eq!(PackManifest::from_value(&json!([1, 2])), PackManifest::default());

        let manifest = PackManifest::from_value(&json!({"header": "oops"}));
        assert_eq!(manifest.header.unwrap().missing_fields().len(), 5);
    }

    #[test]
    fn test_modules_must_be_an_array() {
        let manifest = PackManifest::from_value(&json!({"modules": {"uuid": "a"}}));
        assert!(matches!(manifest.modules, Some(ModulesSection::NotAnArray(_))));
    }

    #[test]
    fn test_declared_uuids_header_first() {
        let manifest = PackManifest::from_value(&json!({
            "header": {"uuid": "h"},
            "modules": [{"uuid": "m1"}, {"type": "data"}, {"uuid": 7}]
        }));
        assert_eq!(
            manifest.declared_uuids(),
            vec![&json!("h"), &json!("m1"), &json!(7)]
        );
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&json!("abc")), "abc");
        assert_eq!(display_value(&json!(12)), "12");
        assert_eq!(display_value(&Value::Null), "null");
    }
}
