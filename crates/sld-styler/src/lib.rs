//! Symbolizer-to-style translation for map feature rendering.
//!
//! Converts a parsed SLD/SE styling descriptor ([`GeometryStyles`]) into an
//! ordered list of renderer-ready [`VisualStyle`]s for one feature:
//! - polygon and line symbolizers resolve stroke/fill with defaulting chains
//! - point symbolizers resolve to external icons (sized asynchronously via
//!   the shared [`IconCache`]) or procedural marks
//! - text symbolizers assemble labels from literal/property-reference parts
//!
//! ```
//! use sld_styler::{build_styles, GeometryStyles};
//!
//! let descriptor = GeometryStyles::from_json(r#"{"polygon": [{}]}"#).unwrap();
//! let styles = build_styles(&descriptor, "Polygon", None, None);
//! assert_eq!(styles.len(), 1);
//! ```

pub mod color;
pub mod icon_cache;
pub mod line;
pub mod point;
pub mod polygon;
pub mod style;
pub mod text;

use std::collections::HashMap;

use tracing::debug;

// Re-export the descriptor model for convenience.
pub use sld_model::{GeometryStyles, StyleError, StyleResult};

pub use icon_cache::{IconCache, IconCacheStats, IconEntry};
pub use line::build_line_style;
pub use point::build_point_style;
pub use polygon::build_polygon_style;
pub use style::{
    Fill, ImageStyle, LabelPlacementMode, LabelStyle, Stroke, VisualStyle, FALLBACK_CIRCLE_RADIUS,
};
pub use text::{build_text_style, TextContext};

/// Build the ordered visual styles for one feature.
///
/// Symbolizers of the kind matching `geometry_type` are resolved in input
/// order, followed by the text symbolizers, so labels always draw on top.
/// An unrecognized geometry type yields a single small fallback marker
/// instead of an invisible feature.
///
/// `properties` backs label property references; `icon_cache` backs icon
/// scaling and must be the same caller-owned cache across calls so that
/// re-building after asynchronous sizing picks up the learned dimensions.
pub fn build_styles(
    geometry_styles: &GeometryStyles,
    geometry_type: &str,
    properties: Option<&HashMap<String, String>>,
    icon_cache: Option<&IconCache>,
) -> Vec<VisualStyle> {
    let mut styles = Vec::new();

    match geometry_type {
        "Polygon" | "MultiPolygon" => {
            for symbolizer in &geometry_styles.polygon {
                styles.push(build_polygon_style(symbolizer));
            }
            for symbolizer in &geometry_styles.text {
                styles.push(build_text_style(symbolizer, TextContext::Polygon, properties));
            }
        }
        "LineString" | "MultiLineString" => {
            for symbolizer in &geometry_styles.line {
                styles.push(build_line_style(symbolizer));
            }
            for symbolizer in &geometry_styles.text {
                styles.push(build_text_style(symbolizer, TextContext::Line, properties));
            }
        }
        "Point" | "MultiPoint" => {
            for symbolizer in &geometry_styles.point {
                styles.push(build_point_style(symbolizer, icon_cache));
            }
            for symbolizer in &geometry_styles.text {
                styles.push(build_text_style(symbolizer, TextContext::Point, properties));
            }
        }
        other => {
            debug!(geometry_type = other, "unrecognized geometry type; using fallback marker");
            styles.push(fallback_style());
        }
    }

    styles
}

/// Safe default for unrecognized geometry types: a small blue circle.
fn fallback_style() -> VisualStyle {
    VisualStyle::Image(ImageStyle::Circle {
        radius: FALLBACK_CIRCLE_RADIUS,
        fill: Fill::solid("blue"),
    })
}
