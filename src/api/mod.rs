//! High-level widget-generation surface: JSON input contracts and the
//! canonical composition of plane setup, clipped geometry rendering, and
//! final `<svg>` wrapping.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::types::{
    DistanceMarker, PlaneSpec, PlotLine, PlotPoint, PlotPolygon, PlotPolyline, PointMap,
    build_point_map,
};
use crate::error::{DiagramError, DiagramResult};
use crate::render::{
    Canvas, FinalizedSvg, render_distances, render_lines, render_points, render_polygons,
    render_polylines, setup_coordinate_plane, theme,
};

/// Padding applied around the tracked extent when finalizing the viewport.
pub const SVG_PADDING_PX: f64 = 10.0;

/// Geometry drawn inside a plane's clipped chart area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SceneContent {
    pub points: Vec<PlotPoint>,
    pub lines: Vec<PlotLine>,
    pub polygons: Vec<PlotPolygon>,
    pub polylines: Vec<PlotPolyline>,
    pub distances: Vec<DistanceMarker>,
}

impl SceneContent {
    pub fn from_json_str(input: &str) -> DiagramResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            DiagramError::InvalidSpec(format!("failed to parse scene content json: {e}"))
        })
    }

    #[must_use]
    pub fn point_map(&self) -> PointMap {
        build_point_map(&self.points)
    }
}

impl PlaneSpec {
    pub fn from_json_str(input: &str) -> DiagramResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            DiagramError::InvalidSpec(format!("failed to parse plane spec json: {e}"))
        })
    }
}

/// Renders a complete coordinate-plane diagram to an `<svg>` string.
///
/// Geometry is drawn inside the plane's chart-area clip so shapes past the
/// axis bounds are visually truncated, while axis labels and titles outside
/// the plot still grow the final viewport.
pub fn render_plane_diagram(spec: &PlaneSpec, content: &SceneContent) -> DiagramResult<String> {
    let mut canvas = Canvas::new();
    let plane = setup_coordinate_plane(&mut canvas, spec)?;
    let point_map = content.point_map();

    let clip_id = plane.clip_id().to_owned();
    canvas.draw_with_clip(&clip_id, |clipped| {
        render_lines(clipped, &plane, &content.lines);
        render_polygons(clipped, &plane, &content.polygons, &point_map);
        render_polylines(clipped, &plane, &content.polylines, &point_map);
        render_distances(clipped, &plane, &content.distances, &point_map);
        render_points(clipped, &plane, &content.points);
    });

    let finalized = canvas.finalize(SVG_PADDING_PX);
    debug!(
        width = finalized.width,
        height = finalized.height,
        points = content.points.len(),
        lines = content.lines.len(),
        "plane diagram rendered"
    );
    Ok(wrap_svg(&finalized))
}

/// Wraps a finalized canvas body in the outer `<svg>` element. The viewBox
/// numbers come unmodified from the canvas extent computation.
#[must_use]
pub fn wrap_svg(finalized: &FinalizedSvg) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" \
         viewBox=\"{} {} {} {}\" font-family=\"{}\" font-size=\"{}\">{}</svg>",
        finalized.width,
        finalized.height,
        finalized.vb_min_x,
        finalized.vb_min_y,
        finalized.width,
        finalized.height,
        theme::FONT_FAMILY,
        theme::FONT_SIZE_PX,
        finalized.svg_body
    )
}
