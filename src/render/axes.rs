//! Left/bottom axis rendering for non-centered widgets.
//!
//! The x axis dispatches over the scale discriminated union (numeric, band,
//! point); the y axis is numeric only. Both return the pixel projection the
//! caller threads into geometry renderers.

use tracing::trace;

use crate::core::layout::{AxisOrientation, select_axis_labels};
use crate::core::projection::{LinearProjection, XProjection};
use crate::core::ticks::build_ticks;
use crate::core::types::{CategoricalAxisSpec, ChartArea, NumericAxisSpec, XAxisSpec};
use crate::error::DiagramResult;
use crate::render::canvas::{Canvas, StrokeStyle, TextAnchor, TextStyle};
use crate::render::theme;

/// Vertical distance from the chart bottom to the x-axis title baseline.
const X_TITLE_OFFSET_PX: f64 = 34.0;
/// Horizontal distance from the chart left to the y-axis title anchor.
const Y_TITLE_OFFSET_PX: f64 = 44.0;

/// Projection and metadata returned by the x-axis renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XAxisLayout {
    projection: XProjection,
}

impl XAxisLayout {
    #[must_use]
    pub fn to_svg(&self, value: f64) -> f64 {
        self.projection.to_svg(value)
    }

    #[must_use]
    pub fn band_width(&self) -> Option<f64> {
        self.projection.band_width()
    }

    #[must_use]
    pub fn projection(&self) -> XProjection {
        self.projection
    }
}

/// Projection returned by the y-axis renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YAxisLayout {
    projection: LinearProjection,
}

impl YAxisLayout {
    #[must_use]
    pub fn to_svg(&self, value: f64) -> f64 {
        self.projection.to_svg(value)
    }

    #[must_use]
    pub fn projection(&self) -> LinearProjection {
        self.projection
    }
}

/// Draws the bottom axis (baseline, ticks, packed labels, grid, title) and
/// returns the value-to-pixel projection for the matched scale type.
pub fn compute_and_render_x_axis(
    canvas: &mut Canvas,
    spec: &XAxisSpec,
    area: ChartArea,
) -> DiagramResult<XAxisLayout> {
    area.validate()?;
    match spec {
        XAxisSpec::Numeric(numeric) => render_numeric_x_axis(canvas, numeric, area),
        XAxisSpec::CategoryBand(categorical) => {
            categorical.validate()?;
            let projection = XProjection::band(area.left, area.width, categorical.categories.len())?;
            render_categorical_x_axis(canvas, categorical, area, projection)
        }
        XAxisSpec::CategoryPoint(categorical) => {
            categorical.validate()?;
            let projection =
                XProjection::point(area.left, area.width, categorical.categories.len())?;
            render_categorical_x_axis(canvas, categorical, area, projection)
        }
    }
}

fn render_numeric_x_axis(
    canvas: &mut Canvas,
    spec: &NumericAxisSpec,
    area: ChartArea,
) -> DiagramResult<XAxisLayout> {
    spec.validate()?;
    let ticks = build_ticks(spec.domain.min, spec.domain.max, spec.tick_interval)?;
    let projection =
        LinearProjection::new(spec.domain.min, spec.domain.max, area.left, area.right())?;
    trace!(tick_count = ticks.len(), "numeric x axis ticks");

    let positions: Vec<f64> = ticks.values.iter().map(|&value| projection.to_svg(value)).collect();
    let labels: Vec<String> = match &spec.label_formatter {
        Some(formatter) => ticks.values.iter().map(|&value| formatter(value)).collect(),
        None => ticks.labels.clone(),
    };

    // Vertical grid lines are a numeric-scale feature only.
    if spec.show_grid_lines {
        let grid = StrokeStyle::solid(theme::GRID_COLOR, theme::GRID_STROKE_WIDTH);
        for &x in &positions {
            canvas.draw_line(x, area.top, x, area.bottom(), &grid);
        }
    }

    let baseline = StrokeStyle::solid(theme::AXIS_COLOR, theme::AXIS_STROKE_WIDTH);
    canvas.draw_line(area.left, area.bottom(), area.right(), area.bottom(), &baseline);

    if spec.show_ticks {
        for &x in &positions {
            canvas.draw_line(x, area.bottom(), x, area.bottom() + theme::TICK_LENGTH_PX, &baseline);
        }
    }

    if spec.show_tick_labels {
        draw_x_tick_labels(canvas, &labels, &positions, area);
    }
    draw_x_title(canvas, &spec.label, area);

    Ok(XAxisLayout {
        projection: XProjection::Numeric(projection),
    })
}

fn render_categorical_x_axis(
    canvas: &mut Canvas,
    spec: &CategoricalAxisSpec,
    area: ChartArea,
    projection: XProjection,
) -> DiagramResult<XAxisLayout> {
    let positions: Vec<f64> = (0..spec.categories.len())
        .map(|index| projection.to_svg(index as f64))
        .collect();
    trace!(category_count = spec.categories.len(), "categorical x axis");

    let baseline = StrokeStyle::solid(theme::AXIS_COLOR, theme::AXIS_STROKE_WIDTH);
    canvas.draw_line(area.left, area.bottom(), area.right(), area.bottom(), &baseline);
    for &x in &positions {
        canvas.draw_line(x, area.bottom(), x, area.bottom() + theme::TICK_LENGTH_PX, &baseline);
    }

    if spec.show_tick_labels {
        draw_x_tick_labels(canvas, &spec.categories, &positions, area);
    }
    draw_x_title(canvas, &spec.label, area);

    Ok(XAxisLayout { projection })
}

/// Draws the left axis and returns the (inverted) value-to-pixel projection.
pub fn compute_and_render_y_axis(
    canvas: &mut Canvas,
    spec: &NumericAxisSpec,
    area: ChartArea,
) -> DiagramResult<YAxisLayout> {
    area.validate()?;
    spec.validate()?;
    let ticks = build_ticks(spec.domain.min, spec.domain.max, spec.tick_interval)?;
    // Pixel rows grow downward, so the range is bottom-to-top.
    let projection =
        LinearProjection::new(spec.domain.min, spec.domain.max, area.bottom(), area.top)?;
    trace!(tick_count = ticks.len(), "numeric y axis ticks");

    let positions: Vec<f64> = ticks.values.iter().map(|&value| projection.to_svg(value)).collect();
    let labels: Vec<String> = match &spec.label_formatter {
        Some(formatter) => ticks.values.iter().map(|&value| formatter(value)).collect(),
        None => ticks.labels.clone(),
    };

    if spec.show_grid_lines {
        let grid = StrokeStyle::solid(theme::GRID_COLOR, theme::GRID_STROKE_WIDTH);
        for &y in &positions {
            canvas.draw_line(area.left, y, area.right(), y, &grid);
        }
    }

    let baseline = StrokeStyle::solid(theme::AXIS_COLOR, theme::AXIS_STROKE_WIDTH);
    canvas.draw_line(area.left, area.top, area.left, area.bottom(), &baseline);

    if spec.show_ticks {
        for &y in &positions {
            canvas.draw_line(area.left - theme::TICK_LENGTH_PX, y, area.left, y, &baseline);
        }
    }

    if spec.show_tick_labels {
        let selected = select_axis_labels(
            &labels,
            &positions,
            AxisOrientation::Vertical,
            theme::FONT_SIZE_PX,
            theme::MIN_LABEL_GAP_PX,
        );
        let style = TextStyle::new(theme::FONT_SIZE_PX, theme::TEXT_COLOR)
            .with_anchor(TextAnchor::End);
        let label_x = area.left - theme::TICK_LENGTH_PX - theme::TICK_LABEL_GAP_PX;
        for index in selected {
            canvas.draw_text(
                label_x,
                positions[index] + theme::FONT_SIZE_PX * 0.35,
                &labels[index],
                &style,
            );
        }
    }

    if !spec.label.is_empty() {
        let style = TextStyle::new(theme::TITLE_FONT_SIZE_PX, theme::TEXT_COLOR)
            .with_rotation(-90.0);
        canvas.draw_wrapped_text(
            area.left - Y_TITLE_OFFSET_PX,
            area.top + area.height / 2.0,
            &spec.label,
            area.height,
            &style,
        );
    }

    Ok(YAxisLayout { projection })
}

fn draw_x_tick_labels(canvas: &mut Canvas, labels: &[String], positions: &[f64], area: ChartArea) {
    let selected = select_axis_labels(
        labels,
        positions,
        AxisOrientation::Horizontal,
        theme::FONT_SIZE_PX,
        theme::MIN_LABEL_GAP_PX,
    );
    let style = TextStyle::new(theme::FONT_SIZE_PX, theme::TEXT_COLOR);
    let label_y =
        area.bottom() + theme::TICK_LENGTH_PX + theme::TICK_LABEL_GAP_PX + theme::FONT_SIZE_PX * 0.8;
    for index in selected {
        canvas.draw_text(positions[index], label_y, &labels[index], &style);
    }
}

fn draw_x_title(canvas: &mut Canvas, label: &str, area: ChartArea) {
    if label.is_empty() {
        return;
    }
    let style = TextStyle::new(theme::TITLE_FONT_SIZE_PX, theme::TEXT_COLOR);
    canvas.draw_wrapped_text(
        area.left + area.width / 2.0,
        area.bottom() + X_TITLE_OFFSET_PX,
        label,
        area.width,
        &style,
    );
}
