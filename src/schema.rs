use std::fmt;

use jsonschema::{Draft, ValidationError, Validator};
use serde_json::Value;

/// Location label used for violations on the document itself.
const ROOT_FIELD: &str = "(root)";

/// Draft every schema is compiled under, whatever its `$schema` says.
///
/// Draft 6 onwards counts `1.0` as an integer; draft 4 does not.
const COMPILE_DRAFT: Draft = Draft::Draft7;

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Schema parse error: {0}")]
    SchemaParse(#[source] serde_json::Error),
    #[error("Schema compile error: {0}")]
    SchemaCompile(String),
    #[error("Instance parse error: {0}")]
    InstanceParse(#[source] serde_json::Error),
}

/// A JSON Schema compiled once and reused for every request.
///
/// Holds no interior mutability, so a single instance can be shared across
/// request tasks behind an `Arc` without locking.
pub struct CompiledSchema {
    validator: Validator,
}

impl fmt::Debug for CompiledSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledSchema").finish_non_exhaustive()
    }
}

impl CompiledSchema {
    /// Parse and compile a schema definition.
    ///
    /// Always compiled as draft 7 so integral floats such as `1.0` satisfy
    /// `"type": "integer"`. The definition is checked against the meta-schema,
    /// so constraint syntax errors surface here rather than on the first request.
    pub fn load(definition: &str) -> Result<Self, SchemaError> {
        let schema_json: Value =
            serde_json::from_str(definition).map_err(SchemaError::SchemaParse)?;

        let validator = jsonschema::options()
            .with_draft(COMPILE_DRAFT)
            .build(&schema_json)
            .map_err(|e| SchemaError::SchemaCompile(e.to_string()))?;

        Ok(Self { validator })
    }

    /// Check an already-parsed instance, collecting every violation.
    pub fn validate(&self, instance: &Value) -> ValidationReport {
        let violations = self
            .validator
            .iter_errors(instance)
            .map(|e| describe_violation(&e))
            .collect();

        ValidationReport { violations }
    }

    /// Parse raw bytes as JSON and check them.
    ///
    /// Bytes that are not JSON at all are an error, not a failed report.
    pub fn validate_slice(&self, body: &[u8]) -> Result<ValidationReport, SchemaError> {
        let instance: Value = serde_json::from_slice(body).map_err(SchemaError::InstanceParse)?;
        Ok(self.validate(&instance))
    }
}

/// Outcome of validating one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violation messages in the order the validator reported them.
    pub fn violations(&self) -> &[String] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<String> {
        self.violations
    }
}

/// Validate a JSON instance against a JSON Schema in one shot.
///
/// Compiles the schema on every call; servers should hold a [`CompiledSchema`].
pub fn validate_json(schema_str: &str, instance_str: &str) -> Result<ValidationReport, SchemaError> {
    let schema = CompiledSchema::load(schema_str)?;
    schema.validate_slice(instance_str.as_bytes())
}

/// Render a violation as `<field>: <description>`.
fn describe_violation(error: &ValidationError<'_>) -> String {
    let location = error.instance_path().to_string();
    format!("{}: {}", field_label(&location), error)
}

/// Turn a JSON pointer such as `/tags/1` into `tags.1`.
fn field_label(pointer: &str) -> String {
    let trimmed = pointer.trim_start_matches('/');
    if trimmed.is_empty() {
        return ROOT_FIELD.to_string();
    }

    trimmed
        .split('/')
        .map(|segment| segment.replace("~1", "/").replace("~0", "~"))
        .collect::<Vec<_>>()
        .join(".")
}
