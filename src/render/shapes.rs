//! Geometry renderers: pure consumers of a `CoordinatePlane`'s mapping
//! functions and a caller-supplied point map.
//!
//! Point-ID references are resolved leniently. Polygon and distance fixture
//! data is authored independently of point definitions, so an unresolved ID
//! drops that reference instead of aborting the render.

use tracing::trace;

use crate::core::types::{
    DistanceMarker, LineEquation, PlotLine, PlotPoint, PlotPolygon, PlotPolyline, PointMap,
    StrokeKind,
};
use crate::render::canvas::{Canvas, FillStyle, StrokeStyle, TextAnchor, TextStyle};
use crate::render::plane::CoordinatePlane;
use crate::render::theme;

const POINT_LABEL_OFFSET_PX: f64 = 8.0;

fn element_stroke(kind: StrokeKind, color: &str) -> StrokeStyle {
    match kind {
        StrokeKind::Solid => StrokeStyle::solid(color, theme::ELEMENT_STROKE_WIDTH),
        StrokeKind::Dashed => StrokeStyle::dashed(color, theme::ELEMENT_STROKE_WIDTH),
        StrokeKind::Dotted => StrokeStyle::dotted(color, theme::ELEMENT_STROKE_WIDTH),
    }
}

/// Draws each point as a filled circle with its optional label above-right.
pub fn render_points(canvas: &mut Canvas, plane: &CoordinatePlane, points: &[PlotPoint]) {
    for point in points {
        let px = plane.to_svg_x(point.x);
        let py = plane.to_svg_y(point.y);
        canvas.draw_circle(
            px,
            py,
            theme::POINT_RADIUS_PX,
            Some(&FillStyle::solid(&point.color)),
            None,
        );
        if let Some(label) = &point.label {
            let style = TextStyle::new(theme::FONT_SIZE_PX, theme::TEXT_COLOR)
                .with_anchor(TextAnchor::Start);
            canvas.draw_text(
                px + POINT_LABEL_OFFSET_PX,
                py - POINT_LABEL_OFFSET_PX,
                label,
                &style,
            );
        }
    }
}

/// Draws each line evaluated at the two x-domain extremes (or y extremes for
/// verticals), leaving visual truncation to the chart-area clip.
pub fn render_lines(canvas: &mut Canvas, plane: &CoordinatePlane, lines: &[PlotLine]) {
    let x_domain = plane.x_domain();
    let y_domain = plane.y_domain();
    for line in lines {
        let stroke = element_stroke(line.stroke, &line.color);
        match line.equation {
            LineEquation::Standard { a, b, c } if b == 0.0 => {
                if a == 0.0 {
                    // 0 = c is not a line.
                    trace!("skipping degenerate standard-form line");
                    continue;
                }
                let x = c / a;
                canvas.draw_line(
                    plane.to_svg_x(x),
                    plane.to_svg_y(y_domain.min),
                    plane.to_svg_x(x),
                    plane.to_svg_y(y_domain.max),
                    &stroke,
                );
            }
            equation => {
                let y_at = |x: f64| match equation {
                    LineEquation::SlopeIntercept { slope, intercept } => slope * x + intercept,
                    LineEquation::Standard { a, b, c } => (c - a * x) / b,
                    LineEquation::PointSlope { x: px, y: py, slope } => py + slope * (x - px),
                };
                canvas.draw_line(
                    plane.to_svg_x(x_domain.min),
                    plane.to_svg_y(y_at(x_domain.min)),
                    plane.to_svg_x(x_domain.max),
                    plane.to_svg_y(y_at(x_domain.max)),
                    &stroke,
                );
            }
        }
    }
}

fn resolve_vertices(
    plane: &CoordinatePlane,
    vertex_ids: &[String],
    point_map: &PointMap,
) -> Vec<(f64, f64)> {
    vertex_ids
        .iter()
        .filter_map(|id| {
            let point = point_map.get(id);
            if point.is_none() {
                trace!(id = %id, "dropping unresolved vertex id");
            }
            point
        })
        .map(|point| (plane.to_svg_x(point.x), plane.to_svg_y(point.y)))
        .collect()
}

/// Draws polygons through resolvable vertices only; fewer than 2 resolved
/// vertices skips the polygon entirely.
pub fn render_polygons(
    canvas: &mut Canvas,
    plane: &CoordinatePlane,
    polygons: &[PlotPolygon],
    point_map: &PointMap,
) {
    for polygon in polygons {
        let vertices = resolve_vertices(plane, &polygon.vertex_ids, point_map);
        if vertices.len() < 2 {
            continue;
        }
        canvas.draw_polygon(
            &vertices,
            Some(&FillStyle::translucent(&polygon.color, 0.2)),
            Some(&element_stroke(polygon.stroke, &polygon.color)),
        );
    }
}

pub fn render_polylines(
    canvas: &mut Canvas,
    plane: &CoordinatePlane,
    polylines: &[PlotPolyline],
    point_map: &PointMap,
) {
    for polyline in polylines {
        let vertices = resolve_vertices(plane, &polyline.vertex_ids, point_map);
        if vertices.len() < 2 {
            continue;
        }
        canvas.draw_polyline(&vertices, &element_stroke(polyline.stroke, &polyline.color));
    }
}

/// Draws the horizontal and vertical legs plus hypotenuse between two point
/// IDs. Either ID unresolved skips the marker: no draw, no error.
pub fn render_distances(
    canvas: &mut Canvas,
    plane: &CoordinatePlane,
    distances: &[DistanceMarker],
    point_map: &PointMap,
) {
    for distance in distances {
        let (Some(from), Some(to)) = (
            point_map.get(&distance.from_id),
            point_map.get(&distance.to_id),
        ) else {
            trace!(
                from_id = %distance.from_id,
                to_id = %distance.to_id,
                "skipping distance marker with unresolved endpoint"
            );
            continue;
        };

        let (x1, y1) = (plane.to_svg_x(from.x), plane.to_svg_y(from.y));
        let (x2, y2) = (plane.to_svg_x(to.x), plane.to_svg_y(to.y));
        let legs = StrokeStyle::dashed(&distance.color, theme::GRID_STROKE_WIDTH);
        canvas.draw_line(x1, y1, x2, y1, &legs);
        canvas.draw_line(x2, y1, x2, y2, &legs);
        canvas.draw_line(
            x1,
            y1,
            x2,
            y2,
            &StrokeStyle::solid(&distance.color, theme::ELEMENT_STROKE_WIDTH),
        );
    }
}
