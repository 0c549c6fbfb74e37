//! Line symbolizer resolution.

use sld_model::LineSymbolizer;

use crate::polygon::resolve_stroke;
use crate::style::VisualStyle;

/// Build the stroke-only style for one line symbolizer.
///
/// Stroke resolution is identical to the polygon case; lines never fill.
pub fn build_line_style(symbolizer: &LineSymbolizer) -> VisualStyle {
    VisualStyle::Shape {
        fill: None,
        stroke: Some(resolve_stroke(symbolizer.stroke.as_ref())),
    }
}
