use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::utils::error::{LabelError, Result};

/// Column headers of the upstream spreadsheet export. These are a fixed wire
/// contract (note the space in "production date") and must not be renamed.
pub const FIELD_MODEL: &str = "model";
pub const FIELD_GTIN: &str = "gtin";
pub const FIELD_PRODUCTION_DATE: &str = "production date";
pub const FIELD_SERIAL: &str = "serial";

/// One raw input row: cells keyed by column header, exactly as the upstream
/// parser hands them over.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRecord {
    pub data: HashMap<String, serde_json::Value>,
}

/// A shape-checked product record. `serial` is already coerced to its
/// canonical string form; that is the only normalization applied to input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRecord {
    pub model: String,
    pub gtin: String,
    pub production_date: String,
    pub serial: String,
}

impl LabelRecord {
    /// Extracts a record from a raw row. `row` is the 1-based position of the
    /// row in the input, used in error messages. A missing field is an error;
    /// blank text is never substituted.
    pub fn from_raw(raw: &RawRecord, row: usize) -> Result<Self> {
        Ok(Self {
            model: cell_as_string(raw, FIELD_MODEL, row)?,
            gtin: cell_as_string(raw, FIELD_GTIN, row)?,
            production_date: cell_as_string(raw, FIELD_PRODUCTION_DATE, row)?,
            serial: cell_as_string(raw, FIELD_SERIAL, row)?,
        })
    }
}

fn cell_as_string(raw: &RawRecord, field: &'static str, row: usize) -> Result<String> {
    match raw.data.get(field) {
        Some(serde_json::Value::String(s)) => Ok(s.clone()),
        // Spreadsheet cells may arrive as numbers; serials in particular.
        Some(serde_json::Value::Number(n)) => Ok(n.to_string()),
        _ => Err(LabelError::InputShapeMismatch { field, row }),
    }
}

/// Records sharing one model value, in their original input order.
#[derive(Debug, Clone)]
pub struct LabelGroup {
    pub key: String,
    pub items: Vec<LabelRecord>,
}

/// A serial number split for differentiated rendering: the last two
/// characters are printed oversized so operators can tell neighbouring
/// units apart at a glance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSerial {
    pub prefix: String,
    pub suffix: String,
}

/// Fully-resolved content of one physical label, renderer-agnostic. Built
/// once by the plan builder and consumed by exactly one renderer call.
#[derive(Debug, Clone, PartialEq)]
pub enum LabelPlan {
    /// Leading label of a group: model name plus item count.
    Summary { model_name: String, item_count: usize },
    /// Per-record label with the scannable payload.
    Detail {
        model_name: String,
        gtin: String,
        production_date: String,
        serial: SplitSerial,
        payload: String,
    },
}

/// Output of the transform phase: grouped, shape-checked records ready for
/// plan building.
#[derive(Debug, Clone)]
pub struct GroupedRecords {
    pub groups: Vec<LabelGroup>,
    pub record_count: usize,
}

impl GroupedRecords {
    /// One summary label per group plus one detail label per record.
    pub fn label_count(&self) -> usize {
        self.record_count + self.groups.len()
    }
}
