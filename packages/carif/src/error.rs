//! Error types for the CARIF parser.
//!
//! Optional values that are missing or ambiguous are not errors; they resolve
//! to `None` in the document model. Only structurally required elements and
//! malformed coordinates surface as `CarifError`.

use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the CARIF parser library.
#[derive(Debug, Error)]
pub enum CarifError {
    /// Missing required XML element.
    #[error("Missing required XML element: {element} in {context}")]
    MissingElement { element: String, context: String },

    /// Coordinate token that is not a finite number.
    ///
    /// `source` is `None` when the token parsed but is NaN or infinite.
    #[error("Invalid {field} value '{value}' in {context}")]
    NumericFormat {
        field: &'static str,
        value: String,
        context: String,
        #[source]
        source: Option<ParseFloatError>,
    },

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Input file exceeds the configured size limit.
    #[error("Input file {} is {size} bytes, exceeding the limit of {max} bytes", .path.display())]
    InputTooLarge { path: PathBuf, size: u64, max: u64 },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

/// Result type alias for CARIF operations.
pub type Result<T> = std::result::Result<T, CarifError>;
