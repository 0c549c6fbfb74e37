//! Point symbolizer resolution.
//!
//! A point graphic is either an external image (scaled via the icon cache)
//! or one of a fixed vocabulary of procedural marks. Unrecognized marks and
//! graphics with neither variant render as the default circle.

use sld_model::{PointSymbolizer, WellKnownName};
use tracing::debug;

use crate::icon_cache::IconCache;
use crate::style::{
    Fill, ImageStyle, Stroke, VisualStyle, DEFAULT_CIRCLE_RADIUS, DEFAULT_MARK_RADIUS,
};

const MARK_STROKE_WIDTH: f64 = 2.0;
const STAR_RADIUS2: f64 = 4.0;

/// Build the marker style for one point symbolizer.
///
/// External graphics trigger size discovery through the cache on first
/// reference. Until the natural size is known the icon is emitted with
/// scale 1.0; callers rebuild styles after sizing completes and get the
/// properly scaled icon then.
pub fn build_point_style(symbolizer: &PointSymbolizer, icon_cache: Option<&IconCache>) -> VisualStyle {
    let graphic = &symbolizer.graphic;

    if let Some(external) = &graphic.external_graphic {
        let src = &external.online_resource;
        let max_side = icon_cache.and_then(|cache| {
            cache.request(src);
            cache.max_side(src)
        });
        return VisualStyle::Image(ImageStyle::Icon {
            src: src.clone(),
            scale: icon_scale(graphic.size, max_side),
        });
    }

    let mark_fill = Fill::solid("black");
    let mark_stroke = Stroke::solid("black", MARK_STROKE_WIDTH);
    let radius = graphic
        .size
        .filter(|size| *size != 0.0)
        .unwrap_or(DEFAULT_MARK_RADIUS);

    let image = match graphic.mark.as_ref().map(|m| m.well_known_name) {
        Some(WellKnownName::Cross) => ImageStyle::Mark {
            points: 4,
            radius,
            radius2: 0.0,
            angle: 0.0,
            fill: mark_fill,
            stroke: mark_stroke,
        },
        Some(WellKnownName::X) => ImageStyle::Mark {
            points: 4,
            radius,
            radius2: 0.0,
            angle: 45.0,
            fill: mark_fill,
            stroke: mark_stroke,
        },
        Some(WellKnownName::Star) => ImageStyle::Mark {
            points: 5,
            radius,
            radius2: STAR_RADIUS2,
            angle: 45.0,
            fill: mark_fill,
            stroke: mark_stroke,
        },
        Some(WellKnownName::Other) => {
            debug!("unrecognized well-known mark name; using default circle");
            default_circle()
        }
        None => default_circle(),
    };

    VisualStyle::Image(image)
}

fn default_circle() -> ImageStyle {
    ImageStyle::Circle {
        radius: DEFAULT_CIRCLE_RADIUS,
        fill: Fill::solid("blue"),
    }
}

/// Scale for an external icon: requested size over natural max side,
/// degrading to 1.0 whenever either side of the division is unusable.
fn icon_scale(size: Option<f64>, max_side: Option<u32>) -> f64 {
    match (size, max_side) {
        (Some(size), Some(max_side)) if max_side > 0 => {
            let scale = size / max_side as f64;
            if scale.is_finite() && scale != 0.0 {
                scale
            } else {
                1.0
            }
        }
        _ => 1.0,
    }
}
