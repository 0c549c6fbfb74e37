//! Polygon symbolizer resolution.

use sld_model::{FillParams, PolygonSymbolizer, StrokeParams};
use tracing::warn;

use crate::color::resolve_color;
use crate::style::{Fill, Stroke, VisualStyle, DEFAULT_STROKE_COLOR, DEFAULT_STROKE_WIDTH};

/// Build the area style for one polygon symbolizer.
///
/// Always emits a shape style: a missing fill resolves to a no-op fill, a
/// missing stroke resolves to the default stroke color and width.
pub fn build_polygon_style(symbolizer: &PolygonSymbolizer) -> VisualStyle {
    VisualStyle::Shape {
        fill: Some(resolve_fill(symbolizer.fill.as_ref())),
        stroke: Some(resolve_stroke(symbolizer.stroke.as_ref())),
    }
}

/// Resolve a fill parameter group. Absent color means "no fill".
pub(crate) fn resolve_fill(params: Option<&FillParams>) -> Fill {
    let params = match params {
        Some(params) => params,
        None => return Fill::default(),
    };
    Fill {
        color: resolve_color(params.color.as_deref(), params.opacity),
    }
}

/// Resolve a stroke parameter group against the documented defaults.
pub(crate) fn resolve_stroke(params: Option<&StrokeParams>) -> Stroke {
    let params = match params {
        Some(params) => params,
        None => return Stroke::solid(DEFAULT_STROKE_COLOR, DEFAULT_STROKE_WIDTH),
    };
    Stroke {
        color: Some(
            resolve_color(params.color.as_deref(), params.opacity)
                .unwrap_or_else(|| DEFAULT_STROKE_COLOR.to_string()),
        ),
        width: params.width.unwrap_or(DEFAULT_STROKE_WIDTH),
        line_cap: params.linecap.clone(),
        line_dash: params.dasharray.as_deref().and_then(parse_dasharray),
        line_dash_offset: params.dashoffset,
        line_join: params.linejoin.clone(),
    }
}

/// Parse a space-separated dash pattern. Tokens that fail to parse are
/// skipped; a pattern with no usable tokens yields no dash at all.
fn parse_dasharray(dasharray: &str) -> Option<Vec<f64>> {
    let dashes: Vec<f64> = dasharray
        .split_ascii_whitespace()
        .filter_map(|token| match token.parse::<f64>() {
            Ok(length) => Some(length),
            Err(_) => {
                warn!(token, "skipping unparseable dash segment length");
                None
            }
        })
        .collect();
    if dashes.is_empty() {
        None
    } else {
        Some(dashes)
    }
}
