//! Static theme table: named colors, stroke widths, and font sizing shared by
//! every renderer in the crate.

pub const FONT_FAMILY: &str = "KaTeX_Main, 'Times New Roman', serif";
pub const FONT_SIZE_PX: f64 = 12.0;
pub const TITLE_FONT_SIZE_PX: f64 = 14.0;

pub const AXIS_COLOR: &str = "#21242c";
pub const GRID_COLOR: &str = "#d6d8da";
pub const TEXT_COLOR: &str = "#21242c";
pub const MUTED_TEXT_COLOR: &str = "#888d93";
pub const ELEMENT_COLOR: &str = "#1fab54";

pub const AXIS_STROKE_WIDTH: f64 = 1.5;
pub const GRID_STROKE_WIDTH: f64 = 1.0;
pub const ELEMENT_STROKE_WIDTH: f64 = 2.0;

pub const TICK_LENGTH_PX: f64 = 5.0;
pub const TICK_LABEL_GAP_PX: f64 = 4.0;
pub const MIN_LABEL_GAP_PX: f64 = 6.0;
pub const POINT_RADIUS_PX: f64 = 4.0;
