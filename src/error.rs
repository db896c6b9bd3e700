use std::path::PathBuf;
use thiserror::Error;

/// Failure reported by a recognition engine.
///
/// This is the only error kind that crosses the core boundary: shape
/// building and projection are total and cannot fail. The session
/// surfaces it unchanged to the caller of `recognize`, which decides
/// whether to retry.
#[derive(Debug, Error)]
pub enum RecognitionError {
    /// The engine could not interpret the supplied image bytes.
    #[error("unsupported image data: {0}")]
    UnsupportedImage(String),

    /// The engine itself failed while processing a readable image.
    #[error("recognition engine failed: {0}")]
    Engine(String),
}

/// The main error type for textquad operations.
#[derive(Debug, Error)]
pub enum TextquadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse observations JSON from {path}: {source}")]
    ObservationsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write overlay JSON to {path}: {source}")]
    OverlayWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode overlay JSON: {0}")]
    OverlayEncode(#[source] serde_json::Error),

    #[error("Recognition failed: {0}")]
    Recognition(#[from] RecognitionError),

    #[error("Unsupported shape: {0}")]
    UnsupportedShape(String),
}
