use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabelError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Malformed canvas profile: {field} = {value}")]
    MalformedProfile { field: &'static str, value: String },

    #[error("Record {row}: required field '{field}' is missing or not a scalar value")]
    InputShapeMismatch { field: &'static str, row: usize },

    #[error("Asset generation failed for payload '{payload}': {reason}")]
    AssetGenerationFailure { payload: String, reason: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

pub type Result<T> = std::result::Result<T, LabelError>;
