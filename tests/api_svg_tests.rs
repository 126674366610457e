use diagram_rs::api::{SceneContent, render_plane_diagram};
use diagram_rs::core::{LineEquation, PlaneAxisSpec, PlaneSpec};
use diagram_rs::error::DiagramError;

fn basic_spec() -> PlaneSpec {
    PlaneSpec {
        width: 400.0,
        height: 300.0,
        x_axis: PlaneAxisSpec::new("x", -5.0, 5.0, 1.0),
        y_axis: PlaneAxisSpec::new("y", -5.0, 5.0, 1.0),
        show_quadrant_labels: false,
    }
}

#[test]
fn renders_a_complete_svg_document() {
    let svg = render_plane_diagram(&basic_spec(), &SceneContent::default())
        .expect("diagram should render");

    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains("viewBox=\""));
    assert!(svg.contains("font-family=\"KaTeX_Main, 'Times New Roman', serif\""));
    assert!(svg.contains("<clipPath id=\"clip-0\">"));
}

#[test]
fn scene_geometry_is_wrapped_in_the_chart_area_clip() {
    let content = SceneContent {
        lines: vec![diagram_rs::core::PlotLine::new(LineEquation::SlopeIntercept {
            slope: 1.0,
            intercept: 0.0,
        })],
        ..SceneContent::default()
    };
    let svg = render_plane_diagram(&basic_spec(), &content).expect("diagram should render");

    let clip_group = svg
        .find("<g clip-path=\"url(#clip-0)\">")
        .expect("clipped group present");
    let element = svg.find("#1fab54").expect("element color present");
    assert!(element > clip_group);
}

#[test]
fn plane_spec_parses_from_camel_case_json() {
    let json = r#"{
        "width": 400,
        "height": 300,
        "xAxis": {"label": "x", "min": -5, "max": 5, "tickInterval": 1},
        "yAxis": {"label": "y", "min": -5, "max": 5, "tickInterval": 1},
        "showQuadrantLabels": true
    }"#;
    let spec = PlaneSpec::from_json_str(json).expect("valid spec json");
    assert_eq!(spec.width, 400.0);
    assert!(spec.show_quadrant_labels);
    assert!(spec.x_axis.show_grid_lines);
    assert_eq!(spec.y_axis.tick_interval, 1.0);
}

#[test]
fn malformed_plane_json_is_a_typed_error() {
    let err = PlaneSpec::from_json_str("{ not json").expect_err("should reject");
    assert!(matches!(err, DiagramError::InvalidSpec(_)));
}

#[test]
fn scene_content_parses_tagged_line_equations() {
    let json = r#"{
        "points": [{"id": "a", "x": 1, "y": 2, "label": "A"}],
        "lines": [{"equation": {"type": "standard", "a": 2, "b": 0, "c": 8}}]
    }"#;
    let content = SceneContent::from_json_str(json).expect("valid scene json");

    assert_eq!(content.points.len(), 1);
    assert_eq!(content.points[0].color, "#1fab54");
    assert_eq!(
        content.lines[0].equation,
        LineEquation::Standard {
            a: 2.0,
            b: 0.0,
            c: 8.0
        }
    );
    assert!(content.polygons.is_empty());
}

#[test]
fn invalid_axis_domain_surfaces_through_the_api() {
    let mut spec = basic_spec();
    spec.x_axis.min = 5.0;
    spec.x_axis.max = -5.0;
    let err =
        render_plane_diagram(&spec, &SceneContent::default()).expect_err("should reject domain");
    assert!(matches!(
        err,
        DiagramError::InvalidAxisDomain { min, max } if min == 5.0 && max == -5.0
    ));
}

#[test]
fn scene_json_round_trips_through_serde() {
    let content = SceneContent {
        points: vec![diagram_rs::core::PlotPoint::new("p", 1.5, -2.5)],
        ..SceneContent::default()
    };
    let json = serde_json::to_string(&content).expect("serialize");
    let parsed = SceneContent::from_json_str(&json).expect("parse back");
    assert_eq!(parsed, content);
}
