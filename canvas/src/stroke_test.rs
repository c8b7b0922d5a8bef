use serde_json::json;

use super::*;

// =============================================================
// Tool
// =============================================================

#[test]
fn tool_default_is_pen() {
    assert_eq!(Tool::default(), Tool::Pen);
}

#[test]
fn tool_parse_known_identifiers() {
    assert_eq!(Tool::parse("pen"), Some(Tool::Pen));
    assert_eq!(Tool::parse("rubber"), Some(Tool::Rubber));
    assert_eq!(Tool::parse("lasso_pen"), Some(Tool::LassoPen));
    assert_eq!(Tool::parse("lasso_rubber"), Some(Tool::LassoRubber));
}

#[test]
fn tool_parse_unknown_is_none() {
    assert_eq!(Tool::parse("brush"), None);
    assert_eq!(Tool::parse("Pen"), None);
    assert_eq!(Tool::parse(""), None);
}

#[test]
fn tool_as_str_matches_parse() {
    for tool in [Tool::Pen, Tool::Rubber, Tool::LassoPen, Tool::LassoRubber] {
        assert_eq!(Tool::parse(tool.as_str()), Some(tool));
    }
}

#[test]
fn tool_classification() {
    assert!(!Tool::Pen.is_lasso());
    assert!(!Tool::Rubber.is_lasso());
    assert!(Tool::LassoPen.is_lasso());
    assert!(Tool::LassoRubber.is_lasso());
    assert!(Tool::Rubber.is_erasing());
    assert!(Tool::LassoRubber.is_erasing());
    assert!(!Tool::Pen.is_erasing());
}

#[test]
fn tool_mode_labels() {
    assert_eq!(Tool::Pen.mode_label(), "Mode: Pen");
    assert_eq!(Tool::Rubber.mode_label(), "Mode: Rubber");
    assert_eq!(Tool::LassoPen.mode_label(), "Mode: Lasso Pen");
}

// =============================================================
// Rgb
// =============================================================

#[test]
fn rgb_default_is_red() {
    assert_eq!(Rgb::default(), Rgb::new(255, 0, 0));
}

#[test]
fn rgb_display_is_css() {
    assert_eq!(Rgb::new(12, 34, 56).to_string(), "rgb(12, 34, 56)");
}

#[test]
fn rgb_out_of_range_channels_pass_through() {
    assert_eq!(Rgb::new(300, -1, 0).to_string(), "rgb(300, -1, 0)");
}

#[test]
fn rgb_parse_css_accepts_spacing_variants() {
    assert_eq!(Rgb::parse_css("rgb(1,2,3)"), Some(Rgb::new(1, 2, 3)));
    assert_eq!(Rgb::parse_css(" rgb( 10 , 20 , 30 ) "), Some(Rgb::new(10, 20, 30)));
}

#[test]
fn rgb_parse_css_rejects_garbage() {
    assert_eq!(Rgb::parse_css("rgba(1, 2, 3, 4)"), None);
    assert_eq!(Rgb::parse_css("rgb(1, 2)"), None);
    assert_eq!(Rgb::parse_css("rgb(1, 2, 3, 4)"), None);
    assert_eq!(Rgb::parse_css("#ff0000"), None);
}

// =============================================================
// Stroke
// =============================================================

#[test]
fn begin_pen_stroke_records_brush() {
    let s = Stroke::begin(Tool::Pen, 7.0, Rgb::default(), ImagePoint::new(1.0, 2.0));
    assert_eq!(s.brush_size, Some(7.0));
    assert_eq!(s.points, vec![ImagePoint::new(1.0, 2.0)]);
}

#[test]
fn begin_lasso_stroke_has_no_brush() {
    let s = Stroke::begin(Tool::LassoRubber, 7.0, Rgb::default(), ImagePoint::new(1.0, 2.0));
    assert_eq!(s.brush_size, None);
}

#[test]
fn stroke_serializes_to_edit_payload_shape() {
    let mut s = Stroke::begin(Tool::Pen, 5.0, Rgb::new(0, 128, 255), ImagePoint::new(10.0, 10.0));
    s.push(ImagePoint::new(20.0, 20.0));
    let value = serde_json::to_value(&s).unwrap();
    assert_eq!(
        value,
        json!({
            "mode": "pen",
            "brushSize": 5.0,
            "color": "rgb(0, 128, 255)",
            "points": [{ "x": 10.0, "y": 10.0 }, { "x": 20.0, "y": 20.0 }],
        })
    );
}

#[test]
fn lasso_stroke_omits_brush_size() {
    let s = Stroke::begin(Tool::LassoPen, 5.0, Rgb::default(), ImagePoint::new(0.0, 0.0));
    let value = serde_json::to_value(&s).unwrap();
    assert_eq!(value["mode"], "lasso_pen");
    assert!(value.get("brushSize").is_none());
}

#[test]
fn stroke_deserializes_from_payload() {
    let s: Stroke = serde_json::from_value(json!({
        "mode": "rubber",
        "brushSize": 3,
        "color": "rgb(1, 2, 3)",
        "points": [{ "x": 4, "y": 5 }],
    }))
    .unwrap();
    assert_eq!(s.tool, Tool::Rubber);
    assert_eq!(s.brush_size, Some(3.0));
    assert_eq!(s.color, Rgb::new(1, 2, 3));
    assert_eq!(s.points, vec![ImagePoint::new(4.0, 5.0)]);
}

#[test]
fn stroke_rejects_unknown_mode() {
    let result = serde_json::from_value::<Stroke>(json!({
        "mode": "spray",
        "color": "rgb(1, 2, 3)",
        "points": [{ "x": 4, "y": 5 }],
    }));
    assert!(result.is_err());
}
