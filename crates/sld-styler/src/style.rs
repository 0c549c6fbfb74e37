//! Renderer-ready visual style model.
//!
//! A [`VisualStyle`] is one normalized drawing instruction for a feature.
//! `build_styles` returns them in z-order: the renderer composites them in
//! array order, so text styles drawing last land on top.

use serde::Serialize;

/// Stroke color applied when a symbolizer supplies none.
pub const DEFAULT_STROKE_COLOR: &str = "#3399CC";

/// Stroke width applied when a symbolizer supplies none.
pub const DEFAULT_STROKE_WIDTH: f64 = 1.25;

/// Primary radius of procedural marks when no size is requested.
pub const DEFAULT_MARK_RADIUS: f64 = 10.0;

/// Radius of the default circle marker.
pub const DEFAULT_CIRCLE_RADIUS: f64 = 4.0;

/// Radius of the fallback marker for unrecognized geometry types.
pub const FALLBACK_CIRCLE_RADIUS: f64 = 2.0;

/// Label font size when the symbolizer supplies none.
pub const DEFAULT_FONT_SIZE: f64 = 10.0;

/// Label font family when the symbolizer supplies none.
pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";

/// Width of the halo outline stroke behind label text.
pub const HALO_WIDTH: f64 = 1.0;

/// One normalized drawing instruction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum VisualStyle {
    /// Area or line paint: fill and/or stroke.
    Shape {
        fill: Option<Fill>,
        stroke: Option<Stroke>,
    },

    /// Point marker: an external icon or a procedural shape.
    Image(ImageStyle),

    /// A feature label.
    Text(LabelStyle),
}

impl VisualStyle {
    /// True when applying this style draws nothing, so renderers can skip
    /// it cheaply. An empty shape or an empty-text label is a valid no-op.
    pub fn is_noop(&self) -> bool {
        match self {
            VisualStyle::Shape { fill, stroke } => {
                fill.as_ref().map_or(true, |f| f.color.is_none()) && stroke.is_none()
            }
            VisualStyle::Image(_) => false,
            VisualStyle::Text(label) => label.text.is_empty(),
        }
    }
}

/// Fill paint. A `None` color is a renderable no-op fill.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Fill {
    /// Resolved color string: named, "#RRGGBB", or "rgba(...)" form.
    pub color: Option<String>,
}

impl Fill {
    pub fn solid(color: &str) -> Self {
        Fill {
            color: Some(color.to_string()),
        }
    }
}

/// Stroke paint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stroke {
    /// Resolved color string. `None` only occurs for halo strokes whose
    /// symbolizer supplied no halo fill.
    pub color: Option<String>,

    pub width: f64,

    pub line_cap: Option<String>,

    /// Dash segment lengths, parsed from the space-separated descriptor.
    pub line_dash: Option<Vec<f64>>,

    pub line_dash_offset: Option<f64>,

    pub line_join: Option<String>,
}

impl Stroke {
    /// Plain stroke with no cap/dash/join options.
    pub fn solid(color: &str, width: f64) -> Self {
        Stroke {
            color: Some(color.to_string()),
            width,
            line_cap: None,
            line_dash: None,
            line_dash_offset: None,
            line_join: None,
        }
    }
}

/// Point marker styles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ImageStyle {
    /// External image, scaled to the requested size once the natural
    /// dimensions are known.
    Icon { src: String, scale: f64 },

    /// Procedural regular shape (cross, x, star).
    Mark {
        points: u32,
        radius: f64,
        radius2: f64,
        /// Rotation in degrees.
        angle: f64,
        fill: Fill,
        stroke: Stroke,
    },

    /// Simple filled circle.
    Circle { radius: f64, fill: Fill },
}

/// How a label is anchored relative to its feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LabelPlacementMode {
    /// Anchored at a single point.
    Point,
    /// Follows the path of a line geometry.
    Line,
}

/// A resolved feature label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelStyle {
    /// Assembled label text. Empty text renders as a no-op.
    pub text: String,

    /// CSS-style font shorthand, e.g. "italic bold 12px Arial".
    pub font: String,

    pub offset_x: f64,

    pub offset_y: f64,

    /// Rotation in degrees.
    pub rotation: f64,

    pub placement: LabelPlacementMode,

    pub text_align: &'static str,

    pub text_baseline: &'static str,

    pub fill: Fill,

    /// Halo outline drawn behind the text, always [`HALO_WIDTH`] wide.
    pub halo: Stroke,
}

impl Default for LabelStyle {
    fn default() -> Self {
        LabelStyle {
            text: String::new(),
            font: format!("{}px {}", DEFAULT_FONT_SIZE, DEFAULT_FONT_FAMILY),
            offset_x: 0.0,
            offset_y: 0.0,
            rotation: 0.0,
            placement: LabelPlacementMode::Point,
            text_align: "center",
            text_baseline: "middle",
            fill: Fill::default(),
            halo: Stroke {
                color: None,
                width: HALO_WIDTH,
                line_cap: None,
                line_dash: None,
                line_dash_offset: None,
                line_join: None,
            },
        }
    }
}
