//! Stroke points and stroke-file I/O.

use std::path::Path;

use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::error::AnalyzeError;

/// A captured pointer sample in canvas pixel space.
///
/// `t` is the capture timestamp. It rides along through simplification and
/// smoothing for diagnostics but never enters the numeric pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokePoint {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub t: f64,
}

impl StrokePoint {
    pub fn new(x: f64, y: f64, t: f64) -> Self {
        StrokePoint { x, y, t }
    }

    /// Spatial position, dropping the timestamp.
    pub fn pos(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Load a stroke from a JSON array of `{x, y, t}` objects.
///
/// The `t` field may be omitted per point; it defaults to zero.
pub fn load_stroke(path: &Path) -> Result<Vec<StrokePoint>, AnalyzeError> {
    let data = std::fs::read_to_string(path)?;
    let points: Vec<StrokePoint> = serde_json::from_str(&data)?;
    Ok(points)
}

/// Write a stroke as pretty-printed JSON.
pub fn save_stroke(path: &Path, points: &[StrokePoint]) -> Result<(), AnalyzeError> {
    let data = serde_json::to_string_pretty(points)?;
    std::fs::write(path, data)?;
    Ok(())
}
