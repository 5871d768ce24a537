use crate::domain::model::{GroupedRecords, RawRecord};
use crate::render::{LabelSize, OutputFormat};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Local};

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn format(&self) -> OutputFormat;
    fn label_size(&self) -> LabelSize;
    fn document_base(&self) -> &str;
    fn printer_base(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<RawRecord>>;
    async fn transform(&self, records: Vec<RawRecord>) -> Result<GroupedRecords>;
    async fn load(&self, batch: GroupedRecords, now: DateTime<Local>) -> Result<Vec<String>>;
}
