//! JSON Schema check for raw draft input.
//!
//! This is the form-level gate: required text fields present and non-blank,
//! enum values legal, no stray keys. The store still validates on its own, so
//! library callers that skip this step cannot insert blank records either.

use crate::catalog::WorkshopDraft;
use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;

const DRAFT_SCHEMA: &str = include_str!("../schema/workshop_draft.schema.json");

/// Compiled draft schema plus the raw document it was built from.
pub struct DraftSchema {
    compiled: JSONSchema,
    raw: Value,
}

impl DraftSchema {
    /// Compile the schema bundled with the crate.
    pub fn bundled() -> Result<Self> {
        let raw: Value =
            serde_json::from_str(DRAFT_SCHEMA).context("parsing bundled draft schema")?;
        Self::from_value(raw)
    }

    pub fn from_value(raw: Value) -> Result<Self> {
        let compiled =
            JSONSchema::compile(&raw).map_err(|err| anyhow!("compiling draft schema: {err}"))?;
        Ok(Self { compiled, raw })
    }

    /// The schema's `title`, used in error messages.
    pub fn name(&self) -> &str {
        self.raw
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or("workshop_draft")
    }

    /// Validate `value`, reporting every violation at once.
    pub fn validate(&self, value: &Value) -> Result<()> {
        if let Err(errors) = self.compiled.validate(value) {
            let details = errors
                .map(|err| {
                    let path = err.instance_path.to_string();
                    if path.is_empty() {
                        err.to_string()
                    } else {
                        format!("{path}: {err}")
                    }
                })
                .collect::<Vec<_>>()
                .join("\n");
            bail!("draft failed {} validation:\n{}", self.name(), details);
        }
        Ok(())
    }

    /// Parse, validate, and deserialize a draft from JSON text.
    pub fn parse_draft(&self, input: &str) -> Result<WorkshopDraft> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            bail!("empty draft input");
        }
        let value: Value = serde_json::from_str(trimmed).context("draft is not valid JSON")?;
        self.validate(&value)?;
        serde_json::from_value(value).context("unable to read validated draft")
    }
}
