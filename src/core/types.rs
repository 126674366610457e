use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{DiagramError, DiagramResult};

/// Inclusive numeric axis range. Valid only when `min < max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
}

impl AxisDomain {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn validate(self) -> DiagramResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min >= self.max {
            return Err(DiagramError::InvalidAxisDomain {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn contains_zero(self) -> bool {
        self.min <= 0.0 && self.max >= 0.0
    }
}

/// Caller-supplied override for numeric tick label text.
pub type LabelFormatter = Box<dyn Fn(f64) -> String>;

/// Numeric axis specification for the left/bottom axis renderer.
pub struct NumericAxisSpec {
    pub label: String,
    pub domain: AxisDomain,
    pub tick_interval: f64,
    pub show_grid_lines: bool,
    pub show_tick_labels: bool,
    pub show_ticks: bool,
    pub label_formatter: Option<LabelFormatter>,
}

impl NumericAxisSpec {
    #[must_use]
    pub fn new(label: impl Into<String>, domain: AxisDomain, tick_interval: f64) -> Self {
        Self {
            label: label.into(),
            domain,
            tick_interval,
            show_grid_lines: true,
            show_tick_labels: true,
            show_ticks: true,
            label_formatter: None,
        }
    }

    #[must_use]
    pub fn with_grid_lines(mut self, show: bool) -> Self {
        self.show_grid_lines = show;
        self
    }

    #[must_use]
    pub fn with_tick_labels(mut self, show: bool) -> Self {
        self.show_tick_labels = show;
        self
    }

    #[must_use]
    pub fn with_ticks(mut self, show: bool) -> Self {
        self.show_ticks = show;
        self
    }

    #[must_use]
    pub fn with_label_formatter(mut self, formatter: LabelFormatter) -> Self {
        self.label_formatter = Some(formatter);
        self
    }

    pub fn validate(&self) -> DiagramResult<()> {
        self.domain.validate()?;
        if !self.tick_interval.is_finite() || self.tick_interval <= 0.0 {
            return Err(DiagramError::InvalidTickInterval {
                interval: self.tick_interval,
            });
        }
        Ok(())
    }
}

impl fmt::Debug for NumericAxisSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumericAxisSpec")
            .field("label", &self.label)
            .field("domain", &self.domain)
            .field("tick_interval", &self.tick_interval)
            .field("show_grid_lines", &self.show_grid_lines)
            .field("show_tick_labels", &self.show_tick_labels)
            .field("show_ticks", &self.show_ticks)
            .field("label_formatter", &self.label_formatter.is_some())
            .finish()
    }
}

/// Categorical axis specification; order is rendering order, duplicates allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoricalAxisSpec {
    pub label: String,
    pub categories: Vec<String>,
    pub show_grid_lines: bool,
    pub show_tick_labels: bool,
}

impl CategoricalAxisSpec {
    #[must_use]
    pub fn new(label: impl Into<String>, categories: Vec<String>) -> Self {
        Self {
            label: label.into(),
            categories,
            show_grid_lines: false,
            show_tick_labels: true,
        }
    }

    pub fn validate(&self) -> DiagramResult<()> {
        if self.categories.is_empty() {
            return Err(DiagramError::InvalidCategories);
        }
        Ok(())
    }
}

/// X-axis scale dispatch: linear values, band centers, or evenly spaced points.
#[derive(Debug)]
pub enum XAxisSpec {
    Numeric(NumericAxisSpec),
    CategoryBand(CategoricalAxisSpec),
    CategoryPoint(CategoricalAxisSpec),
}

/// Pixel-space rectangle the plot content lives in. Computed once per render
/// and passed by reference, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartArea {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl ChartArea {
    #[must_use]
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    pub fn validate(self) -> DiagramResult<()> {
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(DiagramError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }
}

/// One axis of a centered coordinate plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaneAxisSpec {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub tick_interval: f64,
    #[serde(default = "default_true")]
    pub show_grid_lines: bool,
    #[serde(default = "default_true")]
    pub show_tick_labels: bool,
}

impl PlaneAxisSpec {
    #[must_use]
    pub fn new(label: impl Into<String>, min: f64, max: f64, tick_interval: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            tick_interval,
            show_grid_lines: true,
            show_tick_labels: true,
        }
    }

    #[must_use]
    pub fn domain(&self) -> AxisDomain {
        AxisDomain::new(self.min, self.max)
    }

    pub fn validate(&self) -> DiagramResult<()> {
        self.domain().validate()?;
        if !self.tick_interval.is_finite() || self.tick_interval <= 0.0 {
            return Err(DiagramError::InvalidTickInterval {
                interval: self.tick_interval,
            });
        }
        Ok(())
    }
}

/// Full parameter object for a four-quadrant coordinate plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaneSpec {
    pub width: f64,
    pub height: f64,
    pub x_axis: PlaneAxisSpec,
    pub y_axis: PlaneAxisSpec,
    #[serde(default)]
    pub show_quadrant_labels: bool,
}

impl PlaneSpec {
    pub fn validate(&self) -> DiagramResult<()> {
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(DiagramError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        self.x_axis.validate()?;
        self.y_axis.validate()
    }
}

fn default_true() -> bool {
    true
}

fn default_element_color() -> String {
    crate::render::theme::ELEMENT_COLOR.to_owned()
}

/// A labelled point in data space, addressable by ID from polygons and
/// distance markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotPoint {
    pub id: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default = "default_element_color")]
    pub color: String,
}

impl PlotPoint {
    #[must_use]
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            label: None,
            color: default_element_color(),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// The three supported line equation forms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum LineEquation {
    SlopeIntercept { slope: f64, intercept: f64 },
    /// `a*x + b*y = c`; `b == 0` is a vertical line, not a division by zero.
    Standard { a: f64, b: f64, c: f64 },
    PointSlope { x: f64, y: f64, slope: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum StrokeKind {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotLine {
    pub equation: LineEquation,
    #[serde(default = "default_element_color")]
    pub color: String,
    #[serde(default)]
    pub stroke: StrokeKind,
}

impl PlotLine {
    #[must_use]
    pub fn new(equation: LineEquation) -> Self {
        Self {
            equation,
            color: default_element_color(),
            stroke: StrokeKind::Solid,
        }
    }
}

/// Closed shape referencing `PlotPoint`s by ID. Unresolved IDs are dropped at
/// render time rather than failing the diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotPolygon {
    pub vertex_ids: Vec<String>,
    #[serde(default = "default_element_color")]
    pub color: String,
    #[serde(default)]
    pub stroke: StrokeKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotPolyline {
    pub vertex_ids: Vec<String>,
    #[serde(default = "default_element_color")]
    pub color: String,
    #[serde(default)]
    pub stroke: StrokeKind,
}

/// Right-triangle distance visualization between two point IDs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistanceMarker {
    pub from_id: String,
    pub to_id: String,
    #[serde(default = "default_element_color")]
    pub color: String,
}

/// Lookup-only ID-to-point map; insertion order drives emitted markup order.
pub type PointMap = IndexMap<String, PlotPoint>;

#[must_use]
pub fn build_point_map(points: &[PlotPoint]) -> PointMap {
    points
        .iter()
        .map(|point| (point.id.clone(), point.clone()))
        .collect()
}
