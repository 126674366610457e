//! Axis label packing and deterministic text-extent estimation.
//!
//! Real glyph metrics are unknown until the SVG is rasterized, so every
//! estimate here is a pure function of character count and font size. The
//! same estimates drive label thinning, dynamic margins, and canvas extent
//! tracking, which keeps all three consistent with each other.

/// Average glyph advance as a fraction of font size, for width estimates.
pub const AVG_GLYPH_WIDTH_RATIO: f64 = 0.6;

/// Vertical advance between wrapped lines as a fraction of font size.
pub const LINE_HEIGHT_RATIO: f64 = 1.2;

/// Which direction labels are laid out along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    Horizontal,
    Vertical,
}

#[must_use]
pub fn estimate_text_width(text: &str, font_size_px: f64) -> f64 {
    text.chars().count() as f64 * font_size_px * AVG_GLYPH_WIDTH_RATIO
}

/// A word-wrapped text block with its estimated bounding size.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WrappedText {
    pub lines: Vec<String>,
    pub width: f64,
    pub height: f64,
}

/// Greedy word wrap over estimated widths.
///
/// A single word wider than `max_width_px` gets its own line rather than
/// being split mid-word.
#[must_use]
pub fn estimate_wrapped_text_dimensions(
    text: &str,
    max_width_px: f64,
    font_size_px: f64,
) -> WrappedText {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_owned();
            continue;
        }
        let candidate = format!("{current} {word}");
        if estimate_text_width(&candidate, font_size_px) > max_width_px {
            lines.push(std::mem::take(&mut current));
            current = word.to_owned();
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    let width = lines
        .iter()
        .map(|line| estimate_text_width(line, font_size_px))
        .fold(0.0, f64::max);
    let height = lines.len() as f64 * font_size_px * LINE_HEIGHT_RATIO;
    WrappedText {
        lines,
        width,
        height,
    }
}

/// Selects the indices of tick labels that fit along an axis without overlap.
///
/// Picks the smallest uniform stride whose every pair of adjacent selected
/// labels keeps at least `min_gap_px` between their estimated extents, so
/// dense axes thin to every Nth label instead of clustering at one end.
/// Index 0 is always selected. Pure and deterministic.
#[must_use]
pub fn select_axis_labels(
    labels: &[String],
    positions_px: &[f64],
    orientation: AxisOrientation,
    font_size_px: f64,
    min_gap_px: f64,
) -> Vec<usize> {
    let count = labels.len().min(positions_px.len());
    if count == 0 {
        return Vec::new();
    }

    let extents: Vec<f64> = labels[..count]
        .iter()
        .map(|label| match orientation {
            AxisOrientation::Horizontal => estimate_text_width(label, font_size_px),
            AxisOrientation::Vertical => font_size_px,
        })
        .collect();

    for stride in 1..=count {
        let selected: Vec<usize> = (0..count).step_by(stride).collect();
        if fits_without_overlap(&selected, positions_px, &extents, min_gap_px) {
            return selected;
        }
    }

    vec![0]
}

fn fits_without_overlap(
    selected: &[usize],
    positions_px: &[f64],
    extents: &[f64],
    min_gap_px: f64,
) -> bool {
    selected.windows(2).all(|pair| {
        let (left, right) = (pair[0], pair[1]);
        let center_gap = (positions_px[right] - positions_px[left]).abs();
        center_gap >= (extents[left] + extents[right]) / 2.0 + min_gap_px
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_label_is_always_selected() {
        let labels = vec!["42".to_owned()];
        let selected =
            select_axis_labels(&labels, &[10.0], AxisOrientation::Horizontal, 12.0, 4.0);
        assert_eq!(selected, vec![0]);
    }

    #[test]
    fn wide_labels_force_larger_stride() {
        let labels: Vec<String> = (0..10).map(|i| format!("{}", i * 1000)).collect();
        let positions: Vec<f64> = (0..10).map(|i| i as f64 * 20.0).collect();
        let selected =
            select_axis_labels(&labels, &positions, AxisOrientation::Horizontal, 12.0, 4.0);
        assert!(selected.len() < labels.len());
        assert_eq!(selected[0], 0);
    }

    #[test]
    fn oversized_word_gets_its_own_line() {
        let wrapped = estimate_wrapped_text_dimensions("tiny incomprehensibilities", 40.0, 12.0);
        assert_eq!(wrapped.lines.len(), 2);
        assert_eq!(wrapped.lines[0], "tiny");
    }
}
