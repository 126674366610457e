use std::fmt::Write as _;

use tracing::debug;

use crate::core::layout::{WrappedText, estimate_text_width, estimate_wrapped_text_dimensions};
use crate::core::types::ChartArea;
use crate::render::path::PathBuilder;
use crate::render::theme;

/// Horizontal text alignment relative to the anchor x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

impl TextAnchor {
    fn as_svg(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Stroke paint for line-bearing primitives.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub color: String,
    pub width: f64,
    pub dash: Option<String>,
}

impl StrokeStyle {
    #[must_use]
    pub fn solid(color: &str, width: f64) -> Self {
        Self {
            color: color.to_owned(),
            width,
            dash: None,
        }
    }

    #[must_use]
    pub fn dashed(color: &str, width: f64) -> Self {
        Self {
            color: color.to_owned(),
            width,
            dash: Some("6 4".to_owned()),
        }
    }

    #[must_use]
    pub fn dotted(color: &str, width: f64) -> Self {
        Self {
            color: color.to_owned(),
            width,
            dash: Some("2 3".to_owned()),
        }
    }
}

/// Fill paint for closed primitives.
#[derive(Debug, Clone, PartialEq)]
pub struct FillStyle {
    pub color: String,
    pub opacity: f64,
}

impl FillStyle {
    #[must_use]
    pub fn solid(color: &str) -> Self {
        Self {
            color: color.to_owned(),
            opacity: 1.0,
        }
    }

    #[must_use]
    pub fn translucent(color: &str, opacity: f64) -> Self {
        Self {
            color: color.to_owned(),
            opacity,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font_size_px: f64,
    pub color: String,
    pub anchor: TextAnchor,
    pub rotate_degrees: Option<f64>,
}

impl TextStyle {
    #[must_use]
    pub fn new(font_size_px: f64, color: &str) -> Self {
        Self {
            font_size_px,
            color: color.to_owned(),
            anchor: TextAnchor::Middle,
            rotate_degrees: None,
        }
    }

    #[must_use]
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotate_degrees = Some(degrees);
        self
    }
}

/// One row of a legend block: a color swatch plus its label.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

/// Running bounding box over everything drawn so far.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct Extent {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
    seen: bool,
}

impl Extent {
    fn include_point(&mut self, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        if self.seen {
            self.min_x = self.min_x.min(x);
            self.min_y = self.min_y.min(y);
            self.max_x = self.max_x.max(x);
            self.max_y = self.max_y.max(y);
        } else {
            (self.min_x, self.min_y, self.max_x, self.max_y) = (x, y, x, y);
            self.seen = true;
        }
    }

    fn include_rect(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) {
        self.include_point(x0, y0);
        self.include_point(x1, y1);
    }
}

/// Final viewport values produced by `Canvas::finalize`.
///
/// The calling widget owns the outer `<svg>` wrapping; the viewBox numbers
/// must be used unmodified.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalizedSvg {
    pub svg_body: String,
    pub vb_min_x: f64,
    pub vb_min_y: f64,
    pub width: f64,
    pub height: f64,
}

/// Retained-mode SVG drawing surface.
///
/// Draw calls append markup and grow a running extent (text via the shared
/// font-metric estimates), deferring viewport sizing until `finalize`.
/// Append-only: nothing drawn is ever removed or reordered. One canvas per
/// widget-generation call; clip-path IDs are call-scoped and never reused
/// across canvases.
#[derive(Debug, Default)]
pub struct Canvas {
    body: String,
    defs: Vec<String>,
    extent: Extent,
    next_clip_id: usize,
}

impl Canvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &StrokeStyle) {
        self.extent.include_rect(x1.min(x2), y1.min(y2), x1.max(x2), y1.max(y2));
        let paint = stroke_attrs(stroke);
        let _ = write!(
            self.body,
            "<line x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\"{paint}/>"
        );
    }

    pub fn draw_circle(
        &mut self,
        cx: f64,
        cy: f64,
        r: f64,
        fill: Option<&FillStyle>,
        stroke: Option<&StrokeStyle>,
    ) {
        self.extent.include_rect(cx - r, cy - r, cx + r, cy + r);
        let paint = paint_attrs(fill, stroke);
        let _ = write!(self.body, "<circle cx=\"{cx}\" cy=\"{cy}\" r=\"{r}\"{paint}/>");
    }

    pub fn draw_ellipse(
        &mut self,
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        fill: Option<&FillStyle>,
        stroke: Option<&StrokeStyle>,
    ) {
        self.extent
            .include_rect(cx - rx, cy - ry, cx + rx, cy + ry);
        let paint = paint_attrs(fill, stroke);
        let _ = write!(
            self.body,
            "<ellipse cx=\"{cx}\" cy=\"{cy}\" rx=\"{rx}\" ry=\"{ry}\"{paint}/>"
        );
    }

    pub fn draw_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Option<&FillStyle>,
        stroke: Option<&StrokeStyle>,
    ) {
        self.extent.include_rect(x, y, x + width, y + height);
        let paint = paint_attrs(fill, stroke);
        let _ = write!(
            self.body,
            "<rect x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\"{paint}/>"
        );
    }

    pub fn draw_polygon(
        &mut self,
        points: &[(f64, f64)],
        fill: Option<&FillStyle>,
        stroke: Option<&StrokeStyle>,
    ) {
        if points.is_empty() {
            return;
        }
        for &(x, y) in points {
            self.extent.include_point(x, y);
        }
        let paint = paint_attrs(fill, stroke);
        let list = point_list(points);
        let _ = write!(self.body, "<polygon points=\"{list}\"{paint}/>");
    }

    pub fn draw_polyline(&mut self, points: &[(f64, f64)], stroke: &StrokeStyle) {
        if points.is_empty() {
            return;
        }
        for &(x, y) in points {
            self.extent.include_point(x, y);
        }
        let paint = stroke_attrs(stroke);
        let list = point_list(points);
        let _ = write!(self.body, "<polyline points=\"{list}\" fill=\"none\"{paint}/>");
    }

    pub fn draw_path(
        &mut self,
        path: &PathBuilder,
        fill: Option<&FillStyle>,
        stroke: Option<&StrokeStyle>,
    ) {
        if path.is_empty() {
            return;
        }
        for (x, y) in path.points() {
            self.extent.include_point(x, y);
        }
        let paint = paint_attrs(fill, stroke);
        let data = path.to_path_data();
        let _ = write!(self.body, "<path d=\"{data}\"{paint}/>");
    }

    /// Draws one line of text anchored at `(x, y)` (baseline).
    pub fn draw_text(&mut self, x: f64, y: f64, text: &str, style: &TextStyle) {
        if text.is_empty() {
            return;
        }
        let width = estimate_text_width(text, style.font_size_px);
        let (x0, y0, x1, y1) = text_extent(x, y, width, style.font_size_px, style.anchor, style.rotate_degrees);
        self.extent.include_rect(x0, y0, x1, y1);

        let anchor = style.anchor.as_svg();
        let escaped = escape_text(text);
        let transform = match style.rotate_degrees {
            Some(degrees) => format!(" transform=\"rotate({degrees} {x} {y})\""),
            None => String::new(),
        };
        let _ = write!(
            self.body,
            "<text x=\"{x}\" y=\"{y}\" font-size=\"{}\" fill=\"{}\" text-anchor=\"{anchor}\"{transform}>{escaped}</text>",
            style.font_size_px, style.color
        );
    }

    /// Word-wraps `text` to `max_width_px` and draws one `<text>` per line.
    ///
    /// Lines stack downward for unrotated text and rightward for text rotated
    /// -90 degrees (the y-axis title case). Returns the measured block so
    /// callers can size margins from it.
    pub fn draw_wrapped_text(
        &mut self,
        x: f64,
        y: f64,
        text: &str,
        max_width_px: f64,
        style: &TextStyle,
    ) -> WrappedText {
        let wrapped = estimate_wrapped_text_dimensions(text, max_width_px, style.font_size_px);
        let line_advance = style.font_size_px * crate::core::layout::LINE_HEIGHT_RATIO;
        let rotated = style
            .rotate_degrees
            .is_some_and(|degrees| (degrees + 90.0).abs() < 1e-9);
        for (index, line) in wrapped.lines.iter().enumerate() {
            let offset = index as f64 * line_advance;
            if rotated {
                self.draw_text(x + offset, y, line, style);
            } else {
                self.draw_text(x, y + offset, line, style);
            }
        }
        wrapped
    }

    /// Registers raw markup under `<defs>` (markers, gradients, clip paths).
    pub fn add_def(&mut self, def: &str) {
        self.defs.push(def.to_owned());
    }

    /// Registers a rectangular clip path for `area` and returns its ID.
    ///
    /// IDs are assigned monotonically per canvas, so nested or repeated
    /// clipped regions never collide within one render call.
    pub fn register_clip_rect(&mut self, area: ChartArea) -> String {
        let clip_id = format!("clip-{}", self.next_clip_id);
        self.next_clip_id += 1;
        self.add_def(&format!(
            "<clipPath id=\"{clip_id}\"><rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"/></clipPath>",
            area.left, area.top, area.width, area.height
        ));
        clip_id
    }

    /// Runs `draw` with every emitted element wrapped in a reference to an
    /// already-registered clip path.
    ///
    /// Clipping is visual only: draws inside the region still feed the
    /// unclipped extent, so a legend outside the plot is never cut off while
    /// plotted geometry past the axis bounds is truncated.
    pub fn draw_with_clip(&mut self, clip_id: &str, draw: impl FnOnce(&mut Self)) {
        let _ = write!(self.body, "<g clip-path=\"url(#{clip_id})\">");
        draw(self);
        self.body.push_str("</g>");
    }

    /// Registers a clip path for `area` and draws inside it in one step.
    pub fn draw_in_clipped_region(&mut self, area: ChartArea, draw: impl FnOnce(&mut Self)) {
        let clip_id = self.register_clip_rect(area);
        self.draw_with_clip(&clip_id, draw);
    }

    /// Draws legend rows (color swatch plus label) starting at `(x, y)`.
    pub fn draw_legend_block(&mut self, x: f64, y: f64, entries: &[LegendEntry], font_size_px: f64) {
        let swatch = font_size_px * 0.8;
        for (index, entry) in entries.iter().enumerate() {
            let row_y = y + index as f64 * font_size_px * 1.5;
            self.draw_rect(x, row_y, swatch, swatch, Some(&FillStyle::solid(&entry.color)), None);
            self.draw_text(
                x + swatch + 6.0,
                row_y + swatch * 0.85,
                &entry.label,
                &TextStyle::new(font_size_px, theme::TEXT_COLOR).with_anchor(TextAnchor::Start),
            );
        }
    }

    /// Consumes the canvas and computes the final viewport: the tracked
    /// extent expanded by `padding` on all sides.
    #[must_use]
    pub fn finalize(self, padding: f64) -> FinalizedSvg {
        let (min_x, min_y, max_x, max_y) = if self.extent.seen {
            (
                self.extent.min_x,
                self.extent.min_y,
                self.extent.max_x,
                self.extent.max_y,
            )
        } else {
            (0.0, 0.0, 0.0, 0.0)
        };

        let svg_body = if self.defs.is_empty() {
            self.body
        } else {
            format!("<defs>{}</defs>{}", self.defs.concat(), self.body)
        };

        let finalized = FinalizedSvg {
            svg_body,
            vb_min_x: min_x - padding,
            vb_min_y: min_y - padding,
            width: (max_x - min_x) + 2.0 * padding,
            height: (max_y - min_y) + 2.0 * padding,
        };
        debug!(
            vb_min_x = finalized.vb_min_x,
            vb_min_y = finalized.vb_min_y,
            width = finalized.width,
            height = finalized.height,
            "canvas finalized"
        );
        finalized
    }
}

fn stroke_attrs(stroke: &StrokeStyle) -> String {
    let mut attrs = format!(
        " stroke=\"{}\" stroke-width=\"{}\"",
        stroke.color, stroke.width
    );
    if let Some(dash) = &stroke.dash {
        let _ = write!(attrs, " stroke-dasharray=\"{dash}\"");
    }
    attrs
}

fn paint_attrs(fill: Option<&FillStyle>, stroke: Option<&StrokeStyle>) -> String {
    let mut attrs = match fill {
        Some(fill) if fill.opacity < 1.0 => {
            format!(
                " fill=\"{}\" fill-opacity=\"{}\"",
                fill.color, fill.opacity
            )
        }
        Some(fill) => format!(" fill=\"{}\"", fill.color),
        None => " fill=\"none\"".to_owned(),
    };
    if let Some(stroke) = stroke {
        attrs.push_str(&stroke_attrs(stroke));
    }
    attrs
}

fn point_list(points: &[(f64, f64)]) -> String {
    let mut list = String::new();
    for (x, y) in points {
        if !list.is_empty() {
            list.push(' ');
        }
        let _ = write!(list, "{x},{y}");
    }
    list
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for character in text.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Estimated bounding box for a baseline-anchored text run. Ascent and
/// descent are fixed fractions of font size; a -90 degree rotation swaps the
/// box about the anchor.
fn text_extent(
    x: f64,
    y: f64,
    width: f64,
    font_size_px: f64,
    anchor: TextAnchor,
    rotate_degrees: Option<f64>,
) -> (f64, f64, f64, f64) {
    let x0 = match anchor {
        TextAnchor::Start => x,
        TextAnchor::Middle => x - width / 2.0,
        TextAnchor::End => x - width,
    };
    let x1 = x0 + width;
    let y0 = y - font_size_px * 0.8;
    let y1 = y + font_size_px * 0.2;

    match rotate_degrees {
        None => (x0, y0, x1, y1),
        Some(degrees) if (degrees + 90.0).abs() < 1e-9 => {
            // rotate(-90) about (x, y): (dx, dy) -> (dy, -dx)
            (x + (y0 - y), y - (x1 - x), x + (y1 - y), y - (x0 - x))
        }
        Some(_) => {
            // Arbitrary angles are not used by the axis renderers; cover the
            // circumscribing square so the extent never under-reports.
            let half = width.max(font_size_px);
            (x - half, y - half, x + half, y + half)
        }
    }
}
