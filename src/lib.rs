pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use config::{storage::LocalStorage, CliConfig};

pub use crate::core::{engine::LabelEngine, pipeline::LabelPipeline};
pub use domain::model::{LabelPlan, LabelRecord, RawRecord};
pub use render::{LabelSize, OutputFormat};
pub use utils::error::{LabelError, Result};
