//! Tests for symbolizer-to-style translation.
//!
//! Covers color resolution, the per-kind builders, icon scaling against a
//! shared cache, label assembly, and dispatcher ordering/fallback.

use std::collections::HashMap;

use sld_styler::{
    build_styles, color::hex_to_color, GeometryStyles, IconCache, ImageStyle, LabelPlacementMode,
    VisualStyle,
};

fn styles_from(json: &str) -> GeometryStyles {
    GeometryStyles::from_json(json).unwrap()
}

// ============================================================================
// Color resolution
// ============================================================================

#[test]
fn test_hex_to_color_channels() {
    assert_eq!(hex_to_color("#AA00FF", Some(0.5)), "rgba(170, 0, 255, 0.5)");
    assert_eq!(hex_to_color("#AA00FF", None), "rgb(170, 0, 255)");
}

#[test]
fn test_fill_opacity_produces_rgba() {
    let descriptor = styles_from(
        r##"{"polygon": [{"fill": {"color": "#FF0000", "opacity": 0.25}}]}"##,
    );
    let styles = build_styles(&descriptor, "Polygon", None, None);

    match &styles[0] {
        VisualStyle::Shape { fill, .. } => {
            let fill = fill.as_ref().unwrap();
            assert_eq!(fill.color.as_deref(), Some("rgba(255, 0, 0, 0.25)"));
        }
        other => panic!("Expected shape style, got {:?}", other),
    }
}

#[test]
fn test_named_fill_color_ignores_opacity() {
    let descriptor =
        styles_from(r#"{"polygon": [{"fill": {"color": "red", "opacity": 0.25}}]}"#);
    let styles = build_styles(&descriptor, "Polygon", None, None);

    match &styles[0] {
        VisualStyle::Shape { fill, .. } => {
            assert_eq!(fill.as_ref().unwrap().color.as_deref(), Some("red"));
        }
        other => panic!("Expected shape style, got {:?}", other),
    }
}

// ============================================================================
// Polygon and line builders
// ============================================================================

#[test]
fn test_polygon_stroke_defaults() {
    let descriptor = styles_from(r#"{"polygon": [{}]}"#);
    let styles = build_styles(&descriptor, "Polygon", None, None);
    assert_eq!(styles.len(), 1);

    match &styles[0] {
        VisualStyle::Shape { fill, stroke } => {
            let stroke = stroke.as_ref().unwrap();
            assert_eq!(stroke.color.as_deref(), Some("#3399CC"));
            assert_eq!(stroke.width, 1.25);
            assert!(stroke.line_cap.is_none());
            assert!(stroke.line_dash.is_none());

            // Fill is emitted but structurally empty: a renderable no-op.
            assert!(fill.as_ref().unwrap().color.is_none());
        }
        other => panic!("Expected shape style, got {:?}", other),
    }
}

#[test]
fn test_polygon_stroke_options_pass_through() {
    let descriptor = styles_from(
        r##"{
            "polygon": [
                {
                    "stroke": {
                        "color": "#336699",
                        "width": 3,
                        "linecap": "round",
                        "dasharray": "5 10",
                        "dashoffset": 2,
                        "linejoin": "bevel"
                    }
                }
            ]
        }"##,
    );
    let styles = build_styles(&descriptor, "MultiPolygon", None, None);

    match &styles[0] {
        VisualStyle::Shape { stroke, .. } => {
            let stroke = stroke.as_ref().unwrap();
            assert_eq!(stroke.color.as_deref(), Some("#336699"));
            assert_eq!(stroke.width, 3.0);
            assert_eq!(stroke.line_cap.as_deref(), Some("round"));
            assert_eq!(stroke.line_dash.as_deref(), Some(&[5.0, 10.0][..]));
            assert_eq!(stroke.line_dash_offset, Some(2.0));
            assert_eq!(stroke.line_join.as_deref(), Some("bevel"));
        }
        other => panic!("Expected shape style, got {:?}", other),
    }
}

#[test]
fn test_line_style_has_no_fill() {
    let descriptor =
        styles_from(r##"{"line": [{"stroke": {"color": "#FF0000", "opacity": 0.5}}]}"##);
    let styles = build_styles(&descriptor, "LineString", None, None);
    assert_eq!(styles.len(), 1);

    match &styles[0] {
        VisualStyle::Shape { fill, stroke } => {
            assert!(fill.is_none());
            assert_eq!(
                stroke.as_ref().unwrap().color.as_deref(),
                Some("rgba(255, 0, 0, 0.5)")
            );
        }
        other => panic!("Expected shape style, got {:?}", other),
    }
}

// ============================================================================
// Point marks
// ============================================================================

#[test]
fn test_star_mark() {
    let descriptor = styles_from(
        r#"{"point": [{"graphic": {"mark": {"wellknownname": "star"}, "size": 12}}]}"#,
    );
    let styles = build_styles(&descriptor, "Point", None, None);

    match &styles[0] {
        VisualStyle::Image(ImageStyle::Mark {
            points,
            radius,
            radius2,
            angle,
            fill,
            stroke,
        }) => {
            assert_eq!(*points, 5);
            assert_eq!(*radius, 12.0);
            assert_eq!(*radius2, 4.0);
            assert_eq!(*angle, 45.0);
            assert_eq!(fill.color.as_deref(), Some("black"));
            assert_eq!(stroke.color.as_deref(), Some("black"));
            assert_eq!(stroke.width, 2.0);
        }
        other => panic!("Expected star mark, got {:?}", other),
    }
}

#[test]
fn test_star_mark_default_radius() {
    let descriptor =
        styles_from(r#"{"point": [{"graphic": {"mark": {"wellknownname": "star"}}}]}"#);
    let styles = build_styles(&descriptor, "Point", None, None);

    match &styles[0] {
        VisualStyle::Image(ImageStyle::Mark { radius, .. }) => assert_eq!(*radius, 10.0),
        other => panic!("Expected star mark, got {:?}", other),
    }
}

#[test]
fn test_cross_and_x_marks_differ_only_in_angle() {
    let descriptor = styles_from(
        r#"{
            "point": [
                {"graphic": {"mark": {"wellknownname": "cross"}}},
                {"graphic": {"mark": {"wellknownname": "x"}}}
            ]
        }"#,
    );
    let styles = build_styles(&descriptor, "MultiPoint", None, None);

    let angles: Vec<f64> = styles
        .iter()
        .map(|s| match s {
            VisualStyle::Image(ImageStyle::Mark {
                points,
                radius2,
                angle,
                ..
            }) => {
                assert_eq!(*points, 4);
                assert_eq!(*radius2, 0.0);
                *angle
            }
            other => panic!("Expected mark, got {:?}", other),
        })
        .collect();
    assert_eq!(angles, vec![0.0, 45.0]);
}

#[test]
fn test_unrecognized_mark_is_default_circle() {
    let descriptor =
        styles_from(r#"{"point": [{"graphic": {"mark": {"wellknownname": "triangle"}}}]}"#);
    let styles = build_styles(&descriptor, "Point", None, None);

    match &styles[0] {
        VisualStyle::Image(ImageStyle::Circle { radius, fill }) => {
            assert_eq!(*radius, 4.0);
            assert_eq!(fill.color.as_deref(), Some("blue"));
        }
        other => panic!("Expected default circle, got {:?}", other),
    }
}

#[test]
fn test_graphic_without_mark_or_image_is_default_circle() {
    let descriptor = styles_from(r#"{"point": [{"graphic": {}}]}"#);
    let styles = build_styles(&descriptor, "Point", None, None);

    assert!(matches!(
        &styles[0],
        VisualStyle::Image(ImageStyle::Circle { radius, .. }) if *radius == 4.0
    ));
}

// ============================================================================
// External icons and the icon cache
// ============================================================================

#[test]
fn test_icon_scale_from_sized_cache() {
    let cache = IconCache::new();
    cache.insert_sized("http://example.com/a.png", 40);

    let descriptor = styles_from(
        r#"{
            "point": [
                {
                    "graphic": {
                        "externalgraphic": {"onlineresource": "http://example.com/a.png"},
                        "size": 20
                    }
                }
            ]
        }"#,
    );
    let styles = build_styles(&descriptor, "Point", None, Some(&cache));

    match &styles[0] {
        VisualStyle::Image(ImageStyle::Icon { src, scale }) => {
            assert_eq!(src, "http://example.com/a.png");
            assert_eq!(*scale, 0.5);
        }
        other => panic!("Expected icon style, got {:?}", other),
    }
}

#[test]
fn test_unsized_icon_renders_at_scale_one() {
    let cache = IconCache::new();

    let descriptor = styles_from(
        r#"{
            "point": [
                {
                    "graphic": {
                        "externalgraphic": {"onlineresource": "http://example.com/b.png"},
                        "size": 20
                    }
                }
            ]
        }"#,
    );
    let styles = build_styles(&descriptor, "Point", None, Some(&cache));

    // First build: size unknown, icon stays visible at natural scale.
    match &styles[0] {
        VisualStyle::Image(ImageStyle::Icon { scale, .. }) => assert_eq!(*scale, 1.0),
        other => panic!("Expected icon style, got {:?}", other),
    }

    // The build itself registered the URL for sizing.
    assert_eq!(cache.len(), 1);

    // Once sizing completes, a rebuild picks up the scale.
    cache.insert_sized("http://example.com/b.png", 40);
    let styles = build_styles(&descriptor, "Point", None, Some(&cache));
    match &styles[0] {
        VisualStyle::Image(ImageStyle::Icon { scale, .. }) => assert_eq!(*scale, 0.5),
        other => panic!("Expected icon style, got {:?}", other),
    }
}

// ============================================================================
// Text styles
// ============================================================================

#[test]
fn test_label_template_assembly() {
    let descriptor = styles_from(
        r#"{
            "text": [
                {
                    "label": [
                        {"text": "Pop: "},
                        {"propertyname": "population"}
                    ]
                }
            ]
        }"#,
    );
    let mut properties = HashMap::new();
    properties.insert("population".to_string(), "42".to_string());

    let styles = build_styles(&descriptor, "Polygon", Some(&properties), None);
    assert_eq!(styles.len(), 1);

    match &styles[0] {
        VisualStyle::Text(label) => assert_eq!(label.text, "Pop: 42"),
        other => panic!("Expected text style, got {:?}", other),
    }
}

#[test]
fn test_missing_property_contributes_empty_string() {
    let descriptor = styles_from(
        r#"{"text": [{"label": [{"text": "Name: "}, {"propertyname": "name"}]}]}"#,
    );
    let styles = build_styles(&descriptor, "Polygon", Some(&HashMap::new()), None);

    match &styles[0] {
        VisualStyle::Text(label) => assert_eq!(label.text, "Name: "),
        other => panic!("Expected text style, got {:?}", other),
    }
}

#[test]
fn test_text_without_label_is_noop() {
    let descriptor = styles_from(r#"{"text": [{}]}"#);
    let styles = build_styles(&descriptor, "Polygon", None, None);

    match &styles[0] {
        VisualStyle::Text(label) => {
            assert!(label.text.is_empty());
            assert!(styles[0].is_noop());
        }
        other => panic!("Expected text style, got {:?}", other),
    }
}

#[test]
fn test_font_string_assembly() {
    let descriptor = styles_from(
        r#"{
            "text": [
                {
                    "label": {"text": "hi"},
                    "font": {
                        "css": {
                            "fontFamily": "Arial",
                            "fontSize": 12,
                            "fontStyle": "italic",
                            "fontWeight": "bold"
                        }
                    }
                }
            ]
        }"#,
    );
    let styles = build_styles(&descriptor, "Polygon", None, None);

    match &styles[0] {
        VisualStyle::Text(label) => assert_eq!(label.font, "italic bold 12px Arial"),
        other => panic!("Expected text style, got {:?}", other),
    }
}

#[test]
fn test_font_string_defaults() {
    let descriptor = styles_from(r#"{"text": [{"label": {"text": "hi"}}]}"#);
    let styles = build_styles(&descriptor, "Polygon", None, None);

    match &styles[0] {
        VisualStyle::Text(label) => assert_eq!(label.font, "10px sans-serif"),
        other => panic!("Expected text style, got {:?}", other),
    }
}

#[test]
fn test_label_placement_and_halo() {
    let descriptor = styles_from(
        r##"{
            "text": [
                {
                    "label": {"text": "hi"},
                    "fill": {"color": "#000000"},
                    "halo": {"fill": {"color": "#FFFFFF", "opacity": 0.5}},
                    "labelplacement": {
                        "pointplacement": {
                            "displacement": {"displacementx": 5, "displacementy": -5},
                            "rotation": 90
                        }
                    }
                }
            ]
        }"##,
    );
    let styles = build_styles(&descriptor, "Polygon", None, None);

    match &styles[0] {
        VisualStyle::Text(label) => {
            assert_eq!(label.offset_x, 5.0);
            assert_eq!(label.offset_y, -5.0);
            assert_eq!(label.rotation, 90.0);
            assert_eq!(label.text_align, "center");
            assert_eq!(label.text_baseline, "middle");
            assert_eq!(label.fill.color.as_deref(), Some("#000000"));
            assert_eq!(label.halo.color.as_deref(), Some("rgba(255, 255, 255, 0.5)"));
            assert_eq!(label.halo.width, 1.0);
        }
        other => panic!("Expected text style, got {:?}", other),
    }
}

#[test]
fn test_followline_selects_line_placement_for_lines_only() {
    let json = r#"{
        "line": [{}],
        "point": [{"graphic": {}}],
        "text": [
            {
                "label": {"text": "hi"},
                "vendoroption": {"followline": "true"}
            }
        ]
    }"#;
    let descriptor = styles_from(json);

    let line_styles = build_styles(&descriptor, "LineString", None, None);
    match &line_styles[1] {
        VisualStyle::Text(label) => assert_eq!(label.placement, LabelPlacementMode::Line),
        other => panic!("Expected text style, got {:?}", other),
    }

    // On point geometries the label always anchors at a point.
    let point_styles = build_styles(&descriptor, "Point", None, None);
    match &point_styles[1] {
        VisualStyle::Text(label) => assert_eq!(label.placement, LabelPlacementMode::Point),
        other => panic!("Expected text style, got {:?}", other),
    }
}

#[test]
fn test_followline_absent_keeps_point_placement() {
    let descriptor = styles_from(r#"{"line": [{}], "text": [{"label": {"text": "hi"}}]}"#);
    let styles = build_styles(&descriptor, "LineString", None, None);

    match &styles[1] {
        VisualStyle::Text(label) => assert_eq!(label.placement, LabelPlacementMode::Point),
        other => panic!("Expected text style, got {:?}", other),
    }
}

// ============================================================================
// Dispatcher ordering and fallback
// ============================================================================

#[test]
fn test_point_styles_precede_text_styles() {
    let descriptor = styles_from(
        r#"{
            "point": [{"graphic": {"mark": {"wellknownname": "cross"}}}],
            "text": [{"label": {"text": "hi"}}]
        }"#,
    );
    let styles = build_styles(&descriptor, "Point", None, None);

    assert_eq!(styles.len(), 2);
    assert!(matches!(styles[0], VisualStyle::Image(_)));
    assert!(matches!(styles[1], VisualStyle::Text(_)));
}

#[test]
fn test_symbolizer_input_order_is_preserved() {
    let descriptor = styles_from(
        r##"{
            "polygon": [
                {"fill": {"color": "#111111"}},
                {"fill": {"color": "#222222"}},
                {"fill": {"color": "#333333"}}
            ]
        }"##,
    );
    let styles = build_styles(&descriptor, "Polygon", None, None);

    let colors: Vec<_> = styles
        .iter()
        .map(|s| match s {
            VisualStyle::Shape { fill, .. } => {
                fill.as_ref().unwrap().color.as_deref().unwrap().to_string()
            }
            other => panic!("Expected shape style, got {:?}", other),
        })
        .collect();
    assert_eq!(colors, vec!["#111111", "#222222", "#333333"]);
}

#[test]
fn test_unknown_geometry_type_yields_fallback_marker() {
    let descriptor = styles_from(
        r#"{
            "polygon": [{}],
            "line": [{}],
            "point": [{"graphic": {}}],
            "text": [{"label": {"text": "hi"}}]
        }"#,
    );
    let styles = build_styles(&descriptor, "GeometryCollection", None, None);

    assert_eq!(styles.len(), 1);
    match &styles[0] {
        VisualStyle::Image(ImageStyle::Circle { radius, fill }) => {
            assert_eq!(*radius, 2.0);
            assert_eq!(fill.color.as_deref(), Some("blue"));
        }
        other => panic!("Expected fallback circle, got {:?}", other),
    }
}

#[test]
fn test_empty_descriptor_yields_no_styles_for_known_geometry() {
    let descriptor = styles_from("{}");
    assert!(build_styles(&descriptor, "Polygon", None, None).is_empty());
    assert!(build_styles(&descriptor, "LineString", None, None).is_empty());
    assert!(build_styles(&descriptor, "Point", None, None).is_empty());
}
