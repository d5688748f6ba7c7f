//! Request payload helpers.
//!
//! The create/update endpoints accept a handful of required fields plus a
//! long tail of optional ones. Callers pass the optional tail as a JSON
//! object which gets merged over the required base.

use serde_json::{json, Map, Value};

use crate::errors::{CoolifyError, Result};

/// Merge caller-supplied extra options into a base JSON object.
///
/// `extra` must be a JSON object (or `None`); its entries override entries of
/// the same name in `base`.
pub fn merge_payload(base: Value, extra: Option<Value>) -> Result<Value> {
    let mut out = match base {
        Value::Object(map) => map,
        other => {
            return Err(CoolifyError::InvalidInput(format!(
                "payload base must be a JSON object, got {other}"
            )))
        }
    };
    match extra {
        None | Some(Value::Null) => {}
        Some(Value::Object(map)) => {
            for (key, value) in map {
                out.insert(key, value);
            }
        }
        Some(other) => {
            return Err(CoolifyError::InvalidInput(format!(
                "extra options must be a JSON object, got {other}"
            )))
        }
    }
    Ok(Value::Object(out))
}

/// Selector for the target environment of a created resource.
///
/// The API requires exactly one of the environment's name or UUID.
#[derive(Debug, Clone)]
pub enum EnvSelector {
    Name(String),
    Uuid(String),
}

impl EnvSelector {
    pub fn name(name: impl Into<String>) -> Self {
        EnvSelector::Name(name.into())
    }

    pub fn uuid(uuid: impl Into<String>) -> Self {
        EnvSelector::Uuid(uuid.into())
    }

    /// The field the selector fills in a creation payload.
    pub fn field(&self) -> (&'static str, &str) {
        match self {
            EnvSelector::Name(name) => ("environment_name", name),
            EnvSelector::Uuid(uuid) => ("environment_uuid", uuid),
        }
    }

    /// Insert the selector into a payload object.
    pub fn apply(&self, payload: &mut Map<String, Value>) {
        let (key, value) = self.field();
        payload.insert(key.to_string(), json!(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_adds_extra_fields() {
        let base = json!({"name": "app1"});
        let merged = merge_payload(base, Some(json!({"port": 8080}))).unwrap();
        assert_eq!(merged["name"], "app1");
        assert_eq!(merged["port"], 8080);
    }

    #[test]
    fn merge_extra_overrides_base() {
        let base = json!({"name": "app1", "port": 80});
        let merged = merge_payload(base, Some(json!({"port": 8080}))).unwrap();
        assert_eq!(merged["port"], 8080);
    }

    #[test]
    fn merge_without_extra_is_identity() {
        let base = json!({"name": "app1"});
        let merged = merge_payload(base.clone(), None).unwrap();
        assert_eq!(merged, base);
    }

    #[test]
    fn merge_rejects_non_object_extra() {
        let err = merge_payload(json!({}), Some(json!([1, 2]))).unwrap_err();
        assert!(matches!(err, CoolifyError::InvalidInput(_)));
    }

    #[test]
    fn selector_fills_the_right_field() {
        let mut payload = Map::new();
        EnvSelector::name("production").apply(&mut payload);
        assert_eq!(payload["environment_name"], "production");

        let mut payload = Map::new();
        EnvSelector::uuid("env-1").apply(&mut payload);
        assert_eq!(payload["environment_uuid"], "env-1");
    }
}
