//! Generation requests and the checks run on them before anything touches disk.
//!
//! A request arrives as a JSON object with the keys `entity`, `fields`,
//! `project_name` and `base_path`. [`GenerationRequest::from_slice`] applies the
//! boundary checks in the same order the HTTP endpoint reports them:
//!
//! 1. every required key is present (all missing keys are named at once),
//! 2. `fields` contains the mandatory `id` key,
//! 3. the values have the expected types,
//! 4. [`GenerationRequest::validate`] accepts the typed request.
//!
//! Steps 1, 2 and 4 produce [`Error::Validation`]; a body that is not a JSON
//! object or has values of the wrong type produces a non-validation error.

// Internal imports (std, crate)
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::utils::is_java_identifier;

// External imports (alphabetized)
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// Keys every request body must carry, in reporting order
pub const REQUIRED_FIELDS: [&str; 4] = ["entity", "fields", "project_name", "base_path"];

/// Name of the field that becomes the primary key
pub const ID_FIELD: &str = "id";

/// Field name to Java type name, in the order the caller listed them
pub type FieldMap = IndexMap<String, String>;

/// Description of one entity to generate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Entity (class) name, e.g. `User`
    pub entity: String,

    /// Ordered field map; must contain `id`
    pub fields: FieldMap,

    /// Directory name of the project root under `base_path`
    pub project_name: String,

    /// Directory the project root is created in (absolute or relative)
    pub base_path: PathBuf,
}

impl GenerationRequest {
    /// Create a new request
    pub fn new(
        entity: impl Into<String>,
        fields: FieldMap,
        project_name: impl Into<String>,
        base_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            entity: entity.into(),
            fields,
            project_name: project_name.into(),
            base_path: base_path.into(),
        }
    }

    /// Parse and validate a raw JSON request body
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let value: JsonValue = serde_json::from_slice(body)?;
        Self::from_json(value)
    }

    /// Validate and convert an already parsed JSON value
    pub fn from_json(value: JsonValue) -> Result<Self> {
        let object = value
            .as_object()
            .ok_or_else(|| Error::malformed("request body must be a JSON object"))?;

        let missing = missing_fields(object);
        if !missing.is_empty() {
            return Err(Error::validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        if let Some(fields) = object.get("fields").and_then(JsonValue::as_object) {
            if !fields.contains_key(ID_FIELD) {
                return Err(missing_id());
            }
        }

        let request: Self = serde_json::from_value(value)?;
        request.validate()?;
        Ok(request)
    }

    /// Check the invariants generation relies on
    pub fn validate(&self) -> Result<()> {
        if !self.fields.contains_key(ID_FIELD) {
            return Err(missing_id());
        }

        if !is_java_identifier(&self.entity) {
            return Err(Error::validation(format!(
                "'entity' must be a valid Java identifier, got '{}'",
                self.entity
            )));
        }

        let project = self.project_name.as_str();
        if project.is_empty()
            || project == "."
            || project == ".."
            || project.contains(&['/', '\\'][..])
        {
            return Err(Error::validation(format!(
                "'project_name' must be a single directory name, got '{}'",
                self.project_name
            )));
        }

        Ok(())
    }

    /// `base_path/project_name`
    pub fn project_root(&self) -> PathBuf {
        self.base_path.join(&self.project_name)
    }
}

/// Required keys absent from `body`, in [`REQUIRED_FIELDS`] order
pub fn missing_fields(body: &Map<String, JsonValue>) -> Vec<&'static str> {
    REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|key| !body.contains_key(*key))
        .collect()
}

fn missing_id() -> Error {
    Error::validation("'id' is a mandatory field and must be included in 'fields'")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user_body() -> JsonValue {
        json!({
            "entity": "User",
            "fields": {"id": "Long", "name": "String", "email": "String"},
            "project_name": "demo",
            "base_path": "/tmp"
        })
    }

    #[test]
    fn test_from_json_keeps_field_order() -> Result<()> {
        let request = GenerationRequest::from_json(user_body())?;
        let names: Vec<_> = request.fields.keys().map(String::as_str).collect();
        assert_eq!(names, ["id", "name", "email"]);
        assert_eq!(request.project_root(), PathBuf::from("/tmp/demo"));
        Ok(())
    }

    #[test]
    fn test_from_slice_keeps_non_alphabetical_order() -> Result<()> {
        let body = br#"{"entity":"Order","fields":{"total":"Double","id":"Long","buyer":"String"},"project_name":"shop","base_path":"."}"#;
        let request = GenerationRequest::from_slice(body)?;
        let names: Vec<_> = request.fields.keys().map(String::as_str).collect();
        assert_eq!(names, ["total", "id", "buyer"]);
        Ok(())
    }

    #[test]
    fn test_missing_fields_are_all_named() {
        let err = GenerationRequest::from_json(json!({"fields": {"id": "Long"}})).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Missing required fields: entity, project_name, base_path"
        );
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let mut body = user_body();
        body["fields"] = json!({"name": "String"});
        let err = GenerationRequest::from_json(body).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "'id' is a mandatory field and must be included in 'fields'"
        );
    }

    #[test]
    fn test_id_check_is_case_sensitive() {
        let mut body = user_body();
        body["fields"] = json!({"ID": "Long", "name": "String"});
        assert!(GenerationRequest::from_json(body).unwrap_err().is_validation());
    }

    #[test]
    fn test_malformed_shapes_are_not_validation_errors() {
        let mut body = user_body();
        body["fields"] = json!(["id", "name"]);
        let err = GenerationRequest::from_json(body).unwrap_err();
        assert!(!err.is_validation());

        let err = GenerationRequest::from_json(json!(["entity"])).unwrap_err();
        assert!(matches!(err, Error::Malformed(_)));

        let err = GenerationRequest::from_slice(b"not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_validate_rejects_bad_names() {
        let mut fields = FieldMap::new();
        fields.insert("id".into(), "Long".into());

        let bad_entity = GenerationRequest::new("1User", fields.clone(), "demo", "/tmp");
        assert!(bad_entity.validate().unwrap_err().is_validation());

        let bad_project = GenerationRequest::new("User", fields.clone(), "../escape", "/tmp");
        assert!(bad_project.validate().unwrap_err().is_validation());

        let empty_project = GenerationRequest::new("User", fields.clone(), "", "/tmp");
        assert!(empty_project.validate().is_err());

        let ok = GenerationRequest::new("User", fields, "demo", "relative/dir");
        assert!(ok.validate().is_ok());
    }
}
