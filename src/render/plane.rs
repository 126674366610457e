//! Four-quadrant coordinate-plane setup: centered axes through the origin,
//! dynamic margins sized from estimated label widths, quadrant labels, and a
//! chart-area clip for downstream geometry renderers.

use tracing::debug;

use crate::core::layout::{
    AxisOrientation, estimate_text_width, estimate_wrapped_text_dimensions, select_axis_labels,
};
use crate::core::projection::LinearProjection;
use crate::core::ticks::{TickSet, build_ticks};
use crate::core::types::{AxisDomain, ChartArea, PlaneSpec};
use crate::error::{DiagramError, DiagramResult};
use crate::render::canvas::{Canvas, StrokeStyle, TextAnchor, TextStyle};
use crate::render::theme;

const TOP_MARGIN_PX: f64 = 20.0;
const RIGHT_MARGIN_PX: f64 = 20.0;
const BASE_MARGIN_PX: f64 = 24.0;
const TITLE_GAP_PX: f64 = 10.0;

const QUADRANT_LABELS: [&str; 4] = ["I", "II", "III", "IV"];

/// Mapping functions and chart area produced by `setup_coordinate_plane`.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinatePlane {
    chart_area: ChartArea,
    x: LinearProjection,
    y: LinearProjection,
    clip_id: String,
}

impl CoordinatePlane {
    #[must_use]
    pub fn to_svg_x(&self, x: f64) -> f64 {
        self.x.to_svg(x)
    }

    #[must_use]
    pub fn to_svg_y(&self, y: f64) -> f64 {
        self.y.to_svg(y)
    }

    #[must_use]
    pub fn chart_area(&self) -> ChartArea {
        self.chart_area
    }

    #[must_use]
    pub fn x_domain(&self) -> AxisDomain {
        let (min, max) = self.x.domain();
        AxisDomain::new(min, max)
    }

    #[must_use]
    pub fn y_domain(&self) -> AxisDomain {
        let (min, max) = self.y.domain();
        AxisDomain::new(min, max)
    }

    /// Chart-area clip path registered during setup, for clipped geometry
    /// passes over this plane.
    #[must_use]
    pub fn clip_id(&self) -> &str {
        &self.clip_id
    }
}

/// Builds a centered coordinate plane on `canvas`: grid, axis lines through
/// the origin, zero-relative ticks and labels, titles, and optional quadrant
/// labels. The origin may sit off-center when the domain is asymmetric.
pub fn setup_coordinate_plane(
    canvas: &mut Canvas,
    spec: &PlaneSpec,
) -> DiagramResult<CoordinatePlane> {
    spec.validate()?;

    let x_ticks = build_ticks(spec.x_axis.min, spec.x_axis.max, spec.x_axis.tick_interval)?;
    let y_ticks = build_ticks(spec.y_axis.min, spec.y_axis.max, spec.y_axis.tick_interval)?;

    // Left margin depends on the widest y tick label, which is unknown until
    // tick generation has run.
    let max_y_label_width = y_ticks
        .labels
        .iter()
        .map(|label| estimate_text_width(label, theme::FONT_SIZE_PX))
        .fold(0.0, f64::max);
    let y_title = estimate_wrapped_text_dimensions(
        &spec.y_axis.label,
        spec.height * 0.8,
        theme::TITLE_FONT_SIZE_PX,
    );
    let left_margin = BASE_MARGIN_PX
        + max_y_label_width
        + if y_title.lines.is_empty() {
            0.0
        } else {
            y_title.height + TITLE_GAP_PX
        };

    let x_title = estimate_wrapped_text_dimensions(
        &spec.x_axis.label,
        spec.width * 0.8,
        theme::TITLE_FONT_SIZE_PX,
    );
    let bottom_margin = BASE_MARGIN_PX
        + theme::FONT_SIZE_PX
        + if x_title.lines.is_empty() {
            0.0
        } else {
            x_title.height + TITLE_GAP_PX
        };

    let chart_area = ChartArea::new(
        TOP_MARGIN_PX,
        left_margin,
        spec.width - left_margin - RIGHT_MARGIN_PX,
        spec.height - TOP_MARGIN_PX - bottom_margin,
    );
    if chart_area.width <= 0.0 || chart_area.height <= 0.0 {
        return Err(DiagramError::InvalidDimensions {
            width: chart_area.width,
            height: chart_area.height,
        });
    }
    debug!(
        left_margin,
        bottom_margin,
        chart_width = chart_area.width,
        chart_height = chart_area.height,
        "resolved plane margins"
    );

    let x = LinearProjection::new(
        spec.x_axis.min,
        spec.x_axis.max,
        chart_area.left,
        chart_area.right(),
    )?;
    let y = LinearProjection::new(
        spec.y_axis.min,
        spec.y_axis.max,
        chart_area.bottom(),
        chart_area.top,
    )?;

    let clip_id = canvas.register_clip_rect(chart_area);

    draw_grid(canvas, chart_area, &x_ticks, &y_ticks, spec, x, y);

    // Axis lines pass through the origin, clamped to the chart edges when
    // zero lies outside the domain.
    let origin_x = x.to_svg(0.0).clamp(chart_area.left, chart_area.right());
    let origin_y = y.to_svg(0.0).clamp(chart_area.top, chart_area.bottom());
    let axis = StrokeStyle::solid(theme::AXIS_COLOR, theme::AXIS_STROKE_WIDTH);
    canvas.draw_line(chart_area.left, origin_y, chart_area.right(), origin_y, &axis);
    canvas.draw_line(origin_x, chart_area.top, origin_x, chart_area.bottom(), &axis);

    draw_x_ticks(canvas, &x_ticks, x, origin_y, spec, &axis);
    draw_y_ticks(canvas, &y_ticks, y, origin_x, spec, &axis);
    draw_titles(canvas, spec, chart_area, &x_title.lines, &y_title.lines);

    if spec.show_quadrant_labels {
        draw_quadrant_labels(canvas, spec, chart_area, origin_x, origin_y);
    }

    Ok(CoordinatePlane {
        chart_area,
        x,
        y,
        clip_id,
    })
}

#[allow(clippy::too_many_arguments)]
fn draw_grid(
    canvas: &mut Canvas,
    chart_area: ChartArea,
    x_ticks: &TickSet,
    y_ticks: &TickSet,
    spec: &PlaneSpec,
    x: LinearProjection,
    y: LinearProjection,
) {
    let grid = StrokeStyle::solid(theme::GRID_COLOR, theme::GRID_STROKE_WIDTH);
    if spec.x_axis.show_grid_lines {
        for &value in &x_ticks.values {
            // The zero grid line would double-draw over the y-axis line.
            if value == 0.0 {
                continue;
            }
            let px = x.to_svg(value);
            canvas.draw_line(px, chart_area.top, px, chart_area.bottom(), &grid);
        }
    }
    if spec.y_axis.show_grid_lines {
        for &value in &y_ticks.values {
            if value == 0.0 {
                continue;
            }
            let py = y.to_svg(value);
            canvas.draw_line(chart_area.left, py, chart_area.right(), py, &grid);
        }
    }
}

fn draw_x_ticks(
    canvas: &mut Canvas,
    ticks: &TickSet,
    x: LinearProjection,
    origin_y: f64,
    spec: &PlaneSpec,
    axis: &StrokeStyle,
) {
    let positions: Vec<f64> = ticks.values.iter().map(|&value| x.to_svg(value)).collect();
    let half = theme::TICK_LENGTH_PX / 2.0;
    for &px in &positions {
        canvas.draw_line(px, origin_y - half, px, origin_y + half, axis);
    }

    if !spec.x_axis.show_tick_labels {
        return;
    }
    let selected = select_axis_labels(
        &ticks.labels,
        &positions,
        AxisOrientation::Horizontal,
        theme::FONT_SIZE_PX,
        theme::MIN_LABEL_GAP_PX,
    );
    let style = TextStyle::new(theme::FONT_SIZE_PX, theme::TEXT_COLOR);
    let label_y = origin_y + half + theme::TICK_LABEL_GAP_PX + theme::FONT_SIZE_PX * 0.8;
    for index in selected {
        // The origin label would collide with the y-axis line.
        if ticks.values[index] == 0.0 {
            continue;
        }
        canvas.draw_text(positions[index], label_y, &ticks.labels[index], &style);
    }
}

fn draw_y_ticks(
    canvas: &mut Canvas,
    ticks: &TickSet,
    y: LinearProjection,
    origin_x: f64,
    spec: &PlaneSpec,
    axis: &StrokeStyle,
) {
    let positions: Vec<f64> = ticks.values.iter().map(|&value| y.to_svg(value)).collect();
    let half = theme::TICK_LENGTH_PX / 2.0;
    for &py in &positions {
        canvas.draw_line(origin_x - half, py, origin_x + half, py, axis);
    }

    if !spec.y_axis.show_tick_labels {
        return;
    }
    let selected = select_axis_labels(
        &ticks.labels,
        &positions,
        AxisOrientation::Vertical,
        theme::FONT_SIZE_PX,
        theme::MIN_LABEL_GAP_PX,
    );
    let style =
        TextStyle::new(theme::FONT_SIZE_PX, theme::TEXT_COLOR).with_anchor(TextAnchor::End);
    let label_x = origin_x - half - theme::TICK_LABEL_GAP_PX;
    for index in selected {
        if ticks.values[index] == 0.0 {
            continue;
        }
        canvas.draw_text(
            label_x,
            positions[index] + theme::FONT_SIZE_PX * 0.35,
            &ticks.labels[index],
            &style,
        );
    }
}

fn draw_titles(
    canvas: &mut Canvas,
    spec: &PlaneSpec,
    chart_area: ChartArea,
    x_title_lines: &[String],
    y_title_lines: &[String],
) {
    if !x_title_lines.is_empty() {
        let style = TextStyle::new(theme::TITLE_FONT_SIZE_PX, theme::TEXT_COLOR);
        canvas.draw_wrapped_text(
            chart_area.left + chart_area.width / 2.0,
            chart_area.bottom() + theme::FONT_SIZE_PX + BASE_MARGIN_PX,
            &spec.x_axis.label,
            spec.width * 0.8,
            &style,
        );
    }
    if !y_title_lines.is_empty() {
        let style =
            TextStyle::new(theme::TITLE_FONT_SIZE_PX, theme::TEXT_COLOR).with_rotation(-90.0);
        canvas.draw_wrapped_text(
            chart_area.left - BASE_MARGIN_PX - TITLE_GAP_PX,
            chart_area.top + chart_area.height / 2.0,
            &spec.y_axis.label,
            spec.height * 0.8,
            &style,
        );
    }
}

/// Roman-numeral quadrant labels at quarter-chart-area offsets from the
/// clamped origin, drawn only for quadrants the domain signs make present.
fn draw_quadrant_labels(
    canvas: &mut Canvas,
    spec: &PlaneSpec,
    chart_area: ChartArea,
    origin_x: f64,
    origin_y: f64,
) {
    let dx = chart_area.width / 4.0;
    let dy = chart_area.height / 4.0;
    let present = [
        spec.x_axis.max > 0.0 && spec.y_axis.max > 0.0,
        spec.x_axis.min < 0.0 && spec.y_axis.max > 0.0,
        spec.x_axis.min < 0.0 && spec.y_axis.min < 0.0,
        spec.x_axis.max > 0.0 && spec.y_axis.min < 0.0,
    ];
    let anchors = [
        (origin_x + dx, origin_y - dy),
        (origin_x - dx, origin_y - dy),
        (origin_x - dx, origin_y + dy),
        (origin_x + dx, origin_y + dy),
    ];
    let style = TextStyle::new(theme::TITLE_FONT_SIZE_PX, theme::MUTED_TEXT_COLOR);
    for ((label, show), (px, py)) in QUADRANT_LABELS.iter().zip(present).zip(anchors) {
        if show {
            canvas.draw_text(px, py, label, &style);
        }
    }
}
