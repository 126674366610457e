use approx::assert_relative_eq;
use diagram_rs::DiagramError;
use diagram_rs::core::{PlaneAxisSpec, PlaneSpec};
use diagram_rs::render::{Canvas, setup_coordinate_plane, theme};

fn plane_spec(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> PlaneSpec {
    PlaneSpec {
        width: 500.0,
        height: 400.0,
        x_axis: PlaneAxisSpec::new("x", x_min, x_max, 1.0),
        y_axis: PlaneAxisSpec::new("y", y_min, y_max, 1.0),
        show_quadrant_labels: false,
    }
}

#[test]
fn projections_span_the_chart_area() {
    let mut canvas = Canvas::new();
    let spec = plane_spec(-5.0, 5.0, -5.0, 5.0);
    let plane = setup_coordinate_plane(&mut canvas, &spec).expect("plane");

    let area = plane.chart_area();
    assert_relative_eq!(plane.to_svg_x(-5.0), area.left, epsilon = 1e-9);
    assert_relative_eq!(plane.to_svg_x(5.0), area.right(), epsilon = 1e-9);
    assert_relative_eq!(plane.to_svg_y(-5.0), area.bottom(), epsilon = 1e-9);
    assert_relative_eq!(plane.to_svg_y(5.0), area.top, epsilon = 1e-9);
}

#[test]
fn asymmetric_domain_shifts_the_origin() {
    let mut canvas = Canvas::new();
    let spec = plane_spec(-2.0, 18.0, -5.0, 5.0);
    let plane = setup_coordinate_plane(&mut canvas, &spec).expect("plane");

    let area = plane.chart_area();
    // Zero sits a tenth of the way across the 20-unit x domain.
    assert_relative_eq!(
        plane.to_svg_x(0.0),
        area.left + area.width / 10.0,
        epsilon = 1e-9
    );
    // And dead center vertically.
    assert_relative_eq!(
        plane.to_svg_y(0.0),
        area.top + area.height / 2.0,
        epsilon = 1e-9
    );
}

#[test]
fn grid_lines_skip_the_zero_tick() {
    let mut canvas = Canvas::new();
    let spec = plane_spec(-3.0, 3.0, -3.0, 3.0);
    let plane = setup_coordinate_plane(&mut canvas, &spec).expect("plane");

    let area = plane.chart_area();
    let origin_x = plane.to_svg_x(0.0);
    let body = canvas.finalize(0.0).svg_body;

    let grid_at_zero = format!(
        "<line x1=\"{origin_x}\" y1=\"{}\" x2=\"{origin_x}\" y2=\"{}\" stroke=\"{}\"",
        area.top,
        area.bottom(),
        theme::GRID_COLOR
    );
    let axis_at_zero = format!(
        "<line x1=\"{origin_x}\" y1=\"{}\" x2=\"{origin_x}\" y2=\"{}\" stroke=\"{}\"",
        area.top,
        area.bottom(),
        theme::AXIS_COLOR
    );
    assert!(!body.contains(&grid_at_zero), "zero grid line double-drawn");
    assert!(body.contains(&axis_at_zero), "y axis line missing");
}

#[test]
fn quadrant_labels_follow_domain_signs() {
    let mut canvas = Canvas::new();
    let mut spec = plane_spec(-5.0, 5.0, -5.0, 5.0);
    spec.show_quadrant_labels = true;
    setup_coordinate_plane(&mut canvas, &spec).expect("plane");
    let body = canvas.finalize(0.0).svg_body;
    for label in [">I<", ">II<", ">III<", ">IV<"] {
        assert!(body.contains(label), "missing quadrant label {label}");
    }

    // Non-negative x domain keeps only quadrants I and IV.
    let mut canvas = Canvas::new();
    let mut spec = plane_spec(0.0, 10.0, -5.0, 5.0);
    spec.show_quadrant_labels = true;
    setup_coordinate_plane(&mut canvas, &spec).expect("plane");
    let body = canvas.finalize(0.0).svg_body;
    assert!(body.contains(">I<"));
    assert!(body.contains(">IV<"));
    assert!(!body.contains(">II<"));
    assert!(!body.contains(">III<"));
}

#[test]
fn origin_tick_labels_are_suppressed() {
    let mut canvas = Canvas::new();
    let spec = plane_spec(-2.0, 2.0, -2.0, 2.0);
    setup_coordinate_plane(&mut canvas, &spec).expect("plane");
    let body = canvas.finalize(0.0).svg_body;
    assert!(!body.contains(">0</text>"));
    assert!(body.contains(">1</text>"));
    assert!(body.contains(">-1</text>"));
}

#[test]
fn chart_area_clip_is_registered() {
    let mut canvas = Canvas::new();
    let spec = plane_spec(-5.0, 5.0, -5.0, 5.0);
    let plane = setup_coordinate_plane(&mut canvas, &spec).expect("plane");
    assert_eq!(plane.clip_id(), "clip-0");
    assert!(
        canvas
            .finalize(0.0)
            .svg_body
            .contains("<clipPath id=\"clip-0\">")
    );
}

#[test]
fn wide_tick_labels_push_the_left_margin_out() {
    let mut canvas = Canvas::new();
    let mut narrow = plane_spec(-5.0, 5.0, -5.0, 5.0);
    narrow.y_axis = PlaneAxisSpec::new("y", -5.0, 5.0, 2.5);
    let narrow_plane = setup_coordinate_plane(&mut canvas, &narrow).expect("plane");

    let mut canvas = Canvas::new();
    let mut wide = plane_spec(-5.0, 5.0, -5.0, 5.0);
    wide.y_axis = PlaneAxisSpec::new("y", -10_000.0, 10_000.0, 2_500.0);
    let wide_plane = setup_coordinate_plane(&mut canvas, &wide).expect("plane");

    assert!(wide_plane.chart_area().left > narrow_plane.chart_area().left);
}

#[test]
fn margins_that_consume_the_canvas_are_rejected() {
    let mut canvas = Canvas::new();
    let mut spec = plane_spec(-5.0, 5.0, -5.0, 5.0);
    spec.width = 40.0;
    spec.height = 40.0;
    let error = setup_coordinate_plane(&mut canvas, &spec).expect_err("must reject");
    assert!(matches!(error, DiagramError::InvalidDimensions { .. }));
}

#[test]
fn invalid_axis_specs_surface_typed_errors() {
    let mut canvas = Canvas::new();
    let mut spec = plane_spec(-5.0, 5.0, -5.0, 5.0);
    spec.x_axis.min = 5.0;
    spec.x_axis.max = 5.0;
    let error = setup_coordinate_plane(&mut canvas, &spec).expect_err("must reject");
    assert!(matches!(error, DiagramError::InvalidAxisDomain { .. }));

    let mut spec = plane_spec(-5.0, 5.0, -5.0, 5.0);
    spec.y_axis.tick_interval = -1.0;
    let error = setup_coordinate_plane(&mut canvas, &spec).expect_err("must reject");
    assert!(matches!(error, DiagramError::InvalidTickInterval { .. }));
}
