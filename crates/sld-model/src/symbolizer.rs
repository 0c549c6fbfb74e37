//! Symbolizer descriptor model.
//!
//! These types describe *what* to draw for one feature, as produced by an
//! upstream SLD/SE parser. They carry the per-geometry-kind symbolizers of
//! one style rule set, already normalized: the historical "css"/"svg"
//! alternate encodings of stroke and fill parameter groups are collapsed by
//! the upstream adapter into the single [`StrokeParams`]/[`FillParams`]
//! shapes defined here.

use serde::{Deserialize, Serialize};

use crate::error::StyleResult;

/// Symbolizers of one rule set, grouped by geometry kind.
///
/// All vectors may be empty but are always present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeometryStyles {
    #[serde(default)]
    pub polygon: Vec<PolygonSymbolizer>,

    #[serde(default)]
    pub line: Vec<LineSymbolizer>,

    #[serde(default)]
    pub point: Vec<PointSymbolizer>,

    #[serde(default)]
    pub text: Vec<TextSymbolizer>,
}

impl GeometryStyles {
    /// Parse a descriptor set from JSON.
    ///
    /// Used by callers that bridge from an out-of-process SLD parser.
    pub fn from_json(json: &str) -> StyleResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// True when no symbolizer of any kind is present.
    pub fn is_empty(&self) -> bool {
        self.polygon.is_empty()
            && self.line.is_empty()
            && self.point.is_empty()
            && self.text.is_empty()
    }
}

/// Normalized stroke parameter group.
///
/// Every field is optional; the style builders apply the documented
/// defaults (color `#3399CC`, width 1.25) where it matters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StrokeParams {
    /// Stroke color: named color or "#RRGGBB".
    #[serde(default)]
    pub color: Option<String>,

    /// Stroke opacity in [0, 1]. Only honored for "#RRGGBB" colors.
    #[serde(default)]
    pub opacity: Option<f64>,

    #[serde(default)]
    pub width: Option<f64>,

    #[serde(default)]
    pub linecap: Option<String>,

    /// Space-separated dash segment lengths, e.g. "5 10".
    #[serde(default)]
    pub dasharray: Option<String>,

    #[serde(default)]
    pub dashoffset: Option<f64>,

    #[serde(default)]
    pub linejoin: Option<String>,
}

/// Normalized fill parameter group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FillParams {
    /// Fill color: named color or "#RRGGBB". Absent means "no fill".
    #[serde(default)]
    pub color: Option<String>,

    /// Fill opacity in [0, 1]. Only honored for "#RRGGBB" colors.
    #[serde(default)]
    pub opacity: Option<f64>,
}

/// Area symbolizer: optional stroke and fill.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolygonSymbolizer {
    #[serde(default)]
    pub stroke: Option<StrokeParams>,

    #[serde(default)]
    pub fill: Option<FillParams>,
}

/// Line symbolizer: stroke only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineSymbolizer {
    #[serde(default)]
    pub stroke: Option<StrokeParams>,
}

/// Point symbolizer: one graphic, either an external image or a
/// procedural mark.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PointSymbolizer {
    #[serde(default)]
    pub graphic: Graphic,
}

/// Point graphic description. At most one of `external_graphic` / `mark`
/// is expected populated; absence of both yields the default marker.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Graphic {
    #[serde(default, rename = "externalgraphic")]
    pub external_graphic: Option<ExternalGraphic>,

    #[serde(default)]
    pub mark: Option<Mark>,

    /// Requested marker size in pixels.
    #[serde(default)]
    pub size: Option<f64>,
}

/// External image reference for a point marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalGraphic {
    #[serde(rename = "onlineresource")]
    pub online_resource: String,
}

/// Procedural mark description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mark {
    #[serde(rename = "wellknownname")]
    pub well_known_name: WellKnownName,
}

/// The supported vocabulary of procedural point-marker shapes.
///
/// Anything outside the supported set deserializes to [`WellKnownName::Other`]
/// and renders as the default circle marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum WellKnownName {
    Cross,
    X,
    Star,
    Other,
}

impl From<String> for WellKnownName {
    fn from(name: String) -> Self {
        match name.as_str() {
            "cross" => WellKnownName::Cross,
            "x" => WellKnownName::X,
            "star" => WellKnownName::Star,
            _ => WellKnownName::Other,
        }
    }
}

/// Text (label) symbolizer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TextSymbolizer {
    /// Label template. Absent label renders as a no-op.
    #[serde(default)]
    pub label: Option<Label>,

    #[serde(default)]
    pub fill: Option<FillParams>,

    #[serde(default)]
    pub halo: Option<Halo>,

    #[serde(default)]
    pub font: Option<FontParams>,

    #[serde(default, rename = "labelplacement")]
    pub label_placement: Option<LabelPlacement>,

    #[serde(default, rename = "vendoroption")]
    pub vendor_option: Option<VendorOptions>,
}

/// A label template: one part or an ordered sequence of parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label {
    Single(TextPart),
    Parts(Vec<TextPart>),
}

impl Label {
    /// View the template as an ordered part slice.
    pub fn parts(&self) -> &[TextPart] {
        match self {
            Label::Single(part) => std::slice::from_ref(part),
            Label::Parts(parts) => parts,
        }
    }
}

/// One piece of a label template: a literal or a feature-property
/// reference, concatenated in sequence order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextPart {
    /// Literal text, appended as-is.
    Text(String),

    /// Feature property reference; missing properties contribute "".
    PropertyName(String),
}

/// Halo (outline behind label text).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Halo {
    #[serde(default)]
    pub fill: Option<FillParams>,
}

/// Font description for a label.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FontParams {
    #[serde(default)]
    pub css: Option<FontCss>,
}

/// CSS-style font properties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontCss {
    #[serde(default)]
    pub font_family: Option<String>,

    #[serde(default)]
    pub font_size: Option<f64>,

    #[serde(default)]
    pub font_style: Option<String>,

    #[serde(default)]
    pub font_weight: Option<String>,
}

/// Label placement description.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabelPlacement {
    #[serde(default, rename = "pointplacement")]
    pub point_placement: Option<PointPlacement>,
}

/// Point-anchored placement: displacement and rotation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PointPlacement {
    #[serde(default)]
    pub displacement: Option<Displacement>,

    /// Rotation in degrees, default 0.
    #[serde(default)]
    pub rotation: Option<f64>,
}

/// Label displacement from its anchor, default (0, 0).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Displacement {
    #[serde(default, rename = "displacementx")]
    pub displacement_x: Option<f64>,

    #[serde(default, rename = "displacementy")]
    pub displacement_y: Option<f64>,
}

/// Vendor-specific options carried on a text symbolizer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VendorOptions {
    /// `"true"` makes labels on non-point geometries follow the line path.
    #[serde(default, rename = "followline")]
    pub follow_line: Option<String>,
}
