use std::collections::HashMap;

use chrono::{DateTime, Local};

use crate::core::{grouper, payload, plan};
use crate::domain::model::{GroupedRecords, LabelRecord, RawRecord};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::render::profile::{DotProfile, PageProfile};
use crate::render::{self, pdf, zpl};
use crate::utils::error::Result;

/// The label generation pipeline: a CSV spreadsheet export in, one artifact
/// per requested output format out.
pub struct LabelPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> LabelPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for LabelPipeline<S, C> {
    /// Reads the input CSV into raw header-keyed rows. Header names are used
    /// verbatim; "production date" keeps its space.
    async fn extract(&self) -> Result<Vec<RawRecord>> {
        tracing::debug!("Reading input from: {}", self.config.input_path());
        let bytes = tokio::fs::read(self.config.input_path()).await?;

        let mut reader = csv::ReaderBuilder::new().from_reader(bytes.as_slice());
        let headers = reader.headers()?.clone();

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            let mut data = HashMap::new();
            for (header, cell) in headers.iter().zip(row.iter()) {
                data.insert(
                    header.to_string(),
                    serde_json::Value::String(cell.to_string()),
                );
            }
            records.push(RawRecord { data });
        }

        Ok(records)
    }

    /// Shape-checks every row and groups the records by model.
    async fn transform(&self, records: Vec<RawRecord>) -> Result<GroupedRecords> {
        let mut checked = Vec::with_capacity(records.len());
        for (i, raw) in records.iter().enumerate() {
            let record = LabelRecord::from_raw(raw, i + 1)?;
            payload::check_fields(&record, i + 1)?;
            checked.push(record);
        }

        let record_count = checked.len();
        let groups = grouper::group(checked);
        tracing::debug!("Grouped {} records into {} groups", record_count, groups.len());

        Ok(GroupedRecords {
            groups,
            record_count,
        })
    }

    /// Builds plans per requested format and writes the rendered artifacts.
    /// Plans are rebuilt per renderer because each deployment points its
    /// payloads at a different distribution base; every plan sequence is
    /// consumed by exactly one renderer call.
    async fn load(&self, batch: GroupedRecords, now: DateTime<Local>) -> Result<Vec<String>> {
        let format = self.config.format();
        let size = self.config.label_size();
        let mut written = Vec::new();

        if format.wants_pdf() {
            let plans = plan::build(&batch.groups, self.config.document_base());
            let profile = PageProfile::for_size(size);
            let bytes = pdf::render(plans, &profile).await?;

            let name = render::document_name(&now);
            self.storage.write_file(&name, &bytes).await?;
            written.push(format!("{}/{}", self.config.output_path(), name));
        }

        if format.wants_zpl() {
            let plans = plan::build(&batch.groups, self.config.printer_base());
            let profile = DotProfile::for_size(size);
            let markup = zpl::render(&plans, &profile)?;

            let name = render::printer_name(&now);
            self.storage.write_file(&name, markup.as_bytes()).await?;
            written.push(format!("{}/{}", self.config.output_path(), name));
        }

        Ok(written)
    }
}
