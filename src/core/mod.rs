pub mod engine;
pub mod grouper;
pub mod payload;
pub mod pipeline;
pub mod plan;
pub mod serial;

pub use crate::domain::model::{GroupedRecords, LabelPlan, LabelRecord, RawRecord};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
