//! Text symbolizer resolution.
//!
//! Labels are templates of literal and property-reference parts, reduced
//! against the feature's properties in sequence order. This realizes mixed
//! templates such as `"Pop: " + properties["population"]`.

use std::collections::HashMap;

use sld_model::{TextPart, TextSymbolizer};

use crate::color::resolve_color;
use crate::polygon::resolve_fill;
use crate::style::{
    LabelPlacementMode, LabelStyle, Stroke, VisualStyle, DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE,
    HALO_WIDTH,
};

/// Geometry context a text symbolizer is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextContext {
    Polygon,
    Line,
    Point,
}

/// Build the label style for one text symbolizer.
///
/// A symbolizer without a label emits a structurally empty label style,
/// which renders as a no-op.
pub fn build_text_style(
    symbolizer: &TextSymbolizer,
    context: TextContext,
    properties: Option<&HashMap<String, String>>,
) -> VisualStyle {
    let label = match &symbolizer.label {
        Some(label) => label,
        None => return VisualStyle::Text(LabelStyle::default()),
    };

    let text: String = label
        .parts()
        .iter()
        .map(|part| match part {
            TextPart::Text(literal) => literal.as_str(),
            TextPart::PropertyName(key) => properties
                .and_then(|props| props.get(key))
                .map(String::as_str)
                .unwrap_or(""),
        })
        .collect();

    let halo_color = symbolizer
        .halo
        .as_ref()
        .and_then(|halo| halo.fill.as_ref())
        .and_then(|fill| resolve_color(fill.color.as_deref(), fill.opacity));

    let (offset_x, offset_y, rotation) = placement_params(symbolizer);

    // Point geometries always anchor at a point; line and polygon labels
    // follow the path only when the vendor option asks for it.
    let placement = match context {
        TextContext::Point => LabelPlacementMode::Point,
        TextContext::Line | TextContext::Polygon => {
            let follow_line = symbolizer
                .vendor_option
                .as_ref()
                .and_then(|v| v.follow_line.as_deref());
            if follow_line == Some("true") {
                LabelPlacementMode::Line
            } else {
                LabelPlacementMode::Point
            }
        }
    };

    VisualStyle::Text(LabelStyle {
        text,
        font: font_string(symbolizer),
        offset_x,
        offset_y,
        rotation,
        placement,
        fill: resolve_fill(symbolizer.fill.as_ref()),
        halo: Stroke {
            color: halo_color,
            width: HALO_WIDTH,
            line_cap: None,
            line_dash: None,
            line_dash_offset: None,
            line_join: None,
        },
        ..LabelStyle::default()
    })
}

/// Assemble the CSS font shorthand: "<style> <weight> <size>px <family>",
/// with absent style/weight dropped rather than left as empty tokens.
fn font_string(symbolizer: &TextSymbolizer) -> String {
    let css = symbolizer.font.as_ref().and_then(|font| font.css.as_ref());

    let family = css
        .and_then(|c| c.font_family.as_deref())
        .unwrap_or(DEFAULT_FONT_FAMILY);
    let size = css.and_then(|c| c.font_size).unwrap_or(DEFAULT_FONT_SIZE);
    let style = css.and_then(|c| c.font_style.as_deref()).unwrap_or("");
    let weight = css.and_then(|c| c.font_weight.as_deref()).unwrap_or("");

    let size_px = format!("{}px", size);
    [style, weight, size_px.as_str(), family]
        .iter()
        .filter(|token| !token.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

fn placement_params(symbolizer: &TextSymbolizer) -> (f64, f64, f64) {
    let point_placement = symbolizer
        .label_placement
        .as_ref()
        .and_then(|p| p.point_placement.as_ref());

    let displacement = point_placement.and_then(|p| p.displacement.as_ref());
    let offset_x = displacement
        .and_then(|d| d.displacement_x)
        .unwrap_or(0.0);
    let offset_y = displacement
        .and_then(|d| d.displacement_y)
        .unwrap_or(0.0);
    let rotation = point_placement.and_then(|p| p.rotation).unwrap_or(0.0);

    (offset_x, offset_y, rotation)
}
