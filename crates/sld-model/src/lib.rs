//! Shared symbolizer descriptor model for the SLD styling crates.

pub mod error;
pub mod symbolizer;

pub use error::{StyleError, StyleResult};
pub use symbolizer::{
    Displacement, ExternalGraphic, FillParams, FontCss, FontParams, GeometryStyles, Graphic, Halo,
    Label, LabelPlacement, LineSymbolizer, Mark, PointPlacement, PointSymbolizer,
    PolygonSymbolizer, StrokeParams, TextPart, TextSymbolizer, VendorOptions, WellKnownName,
};
