//! Content module loading.
//!
//! A module is the source-level grouping of related records. The original
//! corpus grew three export idioms for this — a single record constant, an
//! object literal keyed by export name, and a pre-built array — and all three
//! are accepted here as input shapes. Whatever the shape, loading normalizes
//! to a flat ordered sequence in declaration order.

use serde_json::Value;

use crate::error::CoreError;
use crate::model::{ContentId, ContentRecord};
use crate::schema::coerce_record;

/// The export surface of one content module, before normalization.
#[derive(Debug, Clone)]
pub enum ModuleSource {
    /// One record exported as the module's only content.
    Single(Value),
    /// Named exports, in declaration order.
    Named(Vec<(String, Value)>),
    /// A pre-built aggregate array.
    Array(Vec<Value>),
}

impl ModuleSource {
    /// Interpret a raw JSON value as a module export surface: arrays load as
    /// aggregates, objects with an `id` field as single records, and any
    /// other object as a named-export map.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Array(items) => ModuleSource::Array(items),
            Value::Object(map) => {
                if map.contains_key("id") {
                    ModuleSource::Single(Value::Object(map))
                } else {
                    ModuleSource::Named(map.into_iter().collect())
                }
            }
            other => ModuleSource::Single(other),
        }
    }
}

/// A loaded module: validated records in declaration order.
#[derive(Debug, Clone)]
pub struct ContentModule {
    pub name: String,
    pub records: Vec<ContentRecord>,
}

impl ContentModule {
    pub fn new(name: impl Into<String>, records: Vec<ContentRecord>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }

    /// The IDs exported by this module, mirroring the original corpus's
    /// per-category `_IDS` arrays.
    pub fn ids(&self) -> Vec<ContentId> {
        self.records.iter().map(|r| r.id.clone()).collect()
    }
}

/// Normalize a module's exports into validated records.
///
/// Declaration order is preserved, never sorted. Fails with `EmptyModule` if
/// nothing recognizable is exported, and `MalformedExport` if an export is
/// present but cannot be coerced to the record shape.
pub fn load_module(name: &str, source: ModuleSource) -> Result<ContentModule, CoreError> {
    let entries: Vec<(String, Value)> = match source {
        ModuleSource::Single(value) => vec![(name.to_string(), value)],
        ModuleSource::Named(entries) => entries,
        ModuleSource::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, v)| (format!("{name}[{i}]"), v))
            .collect(),
    };

    if entries.is_empty() {
        return Err(CoreError::EmptyModule {
            module: name.to_string(),
        });
    }

    let mut records = Vec::with_capacity(entries.len());
    for (export, value) in entries {
        let record = coerce_record(&value).map_err(|issues| CoreError::MalformedExport {
            export: export.clone(),
            issues,
        })?;
        tracing::debug!(module = name, export = %export, id = %record.id, "loaded record");
        records.push(record);
    }

    Ok(ContentModule::new(name, records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::tests::sample_record;

    fn as_value(id: &str) -> Value {
        serde_json::to_value(sample_record(id)).unwrap()
    }

    #[test]
    fn test_single_record_normalizes_to_one_element() {
        let module =
            load_module("nephrology", ModuleSource::Single(as_value("condition-ckd"))).unwrap();
        assert_eq!(module.records.len(), 1);
        assert_eq!(module.records[0].id.as_str(), "condition-ckd");
    }

    #[test]
    fn test_named_exports_preserve_declaration_order() {
        let source = ModuleSource::Named(vec![
            ("dialysis".into(), as_value("condition-dialysis")),
            ("aki".into(), as_value("condition-aki")),
            ("ckd".into(), as_value("condition-ckd")),
        ]);
        let module = load_module("nephrology", source).unwrap();
        let ids: Vec<_> = module.ids().iter().map(|i| i.to_string()).collect();
        assert_eq!(ids, ["condition-dialysis", "condition-aki", "condition-ckd"]);
    }

    #[test]
    fn test_array_exports_preserve_order() {
        let source = ModuleSource::Array(vec![as_value("a-second"), as_value("a-first")]);
        let module = load_module("cards", source).unwrap();
        assert_eq!(module.records[0].id.as_str(), "a-second");
    }

    #[test]
    fn test_empty_module_is_an_error() {
        let err = load_module("empty", ModuleSource::Array(vec![])).unwrap_err();
        assert!(matches!(err, CoreError::EmptyModule { module } if module == "empty"));
    }

    #[test]
    fn test_malformed_export_reports_issues() {
        let source = ModuleSource::Named(vec![(
            "broken".into(),
            serde_json::json!({ "id": "x", "name": "No levels" }),
        )]);
        let err = load_module("m", source).unwrap_err();
        match err {
            CoreError::MalformedExport { export, issues } => {
                assert_eq!(export, "broken");
                assert!(!issues.is_empty());
            }
            other => panic!("expected MalformedExport, got {other:?}"),
        }
    }

    #[test]
    fn test_from_value_dispatch() {
        assert!(matches!(
            ModuleSource::from_value(serde_json::json!([])),
            ModuleSource::Array(_)
        ));
        assert!(matches!(
            ModuleSource::from_value(as_value("condition-x")),
            ModuleSource::Single(_)
        ));
        assert!(matches!(
            ModuleSource::from_value(serde_json::json!({ "ckd": {} })),
            ModuleSource::Named(_)
        ));
    }
}
