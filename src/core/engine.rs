use crate::domain::ports::Pipeline;
use crate::utils::error::Result;
use chrono::{DateTime, Local};

/// Drives one generation request through the pipeline phases. The clock is
/// passed in by the caller; nothing below this point reads wall time.
pub struct LabelEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> LabelEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self, now: DateTime<Local>) -> Result<Vec<String>> {
        tracing::info!("Starting label generation");

        let raw = self.pipeline.extract().await?;
        tracing::info!("Extracted {} records", raw.len());

        let batch = self.pipeline.transform(raw).await?;
        tracing::info!(
            "Planned {} labels across {} groups",
            batch.label_count(),
            batch.groups.len()
        );

        let written = self.pipeline.load(batch, now).await?;
        for path in &written {
            tracing::info!("Output saved to: {}", path);
        }

        Ok(written)
    }
}
