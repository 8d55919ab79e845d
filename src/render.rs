//! SVG rendering of a pipeline run for visual inspection.
//!
//! Writes the smoothed stroke and the series reconstruction as overlaid
//! polylines at canvas scale, so a run can be eyeballed without the
//! embedding UI.

use std::io;
use std::path::Path;

use crate::config::AnalysisConfig;
use crate::resample::value_to_canvas_y;
use crate::Analysis;

/// Build an SVG path data string (`M x y L x y ...`) from canvas points.
pub fn path_data(points: impl IntoIterator<Item = (f64, f64)>) -> String {
    let mut data = String::new();
    for (i, (x, y)) in points.into_iter().enumerate() {
        let command = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            data.push(' ');
        }
        data.push_str(&format!("{} {:.2} {:.2}", command, x, y));
    }
    data
}

/// Write an SVG overlaying the smoothed stroke (ink) and the reconstruction
/// (accent) at canvas scale.
pub fn render_overlay(
    analysis: &Analysis,
    config: &AnalysisConfig,
    output_path: &Path,
) -> io::Result<()> {
    let config = config.normalized();
    let (w, h) = (config.width, config.height);

    let stroke = path_data(analysis.smoothed.iter().map(|p| (p.x, p.y)));
    let reconstruction = path_data(
        analysis
            .resampled
            .x
            .iter()
            .zip(&analysis.reconstruction)
            .map(|(&x, &v)| (x, value_to_canvas_y(v, h))),
    );

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\">\n",
        w, h,
    ));
    svg.push_str(&format!(
        "  <rect width=\"{}\" height=\"{}\" fill=\"#ffffff\"/>\n",
        w, h,
    ));
    if !stroke.is_empty() {
        svg.push_str(&format!(
            "  <path d=\"{}\" fill=\"none\" stroke=\"#222222\" stroke-width=\"2\"/>\n",
            stroke,
        ));
    }
    if !reconstruction.is_empty() {
        svg.push_str(&format!(
            "  <path d=\"{}\" fill=\"none\" stroke=\"#e0452b\" stroke-width=\"1.5\" opacity=\"0.8\"/>\n",
            reconstruction,
        ));
    }
    svg.push_str("</svg>\n");

    std::fs::write(output_path, svg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_data_emits_move_then_lines() {
        let data = path_data([(0.0, 1.0), (2.5, 3.25)]);
        assert_eq!(data, "M 0.00 1.00 L 2.50 3.25");
    }

    #[test]
    fn empty_input_yields_an_empty_path() {
        assert_eq!(path_data(std::iter::empty::<(f64, f64)>()), "");
    }
}
