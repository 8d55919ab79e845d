use thiserror::Error;

/// Errors that can occur while analyzing a stroke.
///
/// Degenerate geometry (empty strokes, coincident points, zero spans) is
/// defined behavior and never errors; only structurally invalid
/// configuration and stroke-file I/O surface here.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AnalyzeError {
    /// A negative sample count is a caller bug; clamping it up to the
    /// floor of 2 would hide it.
    #[error("invalid sample count: {0}")]
    InvalidSampleCount(i64),

    #[error("failed to read stroke file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed stroke file: {0}")]
    Json(#[from] serde_json::Error),
}
