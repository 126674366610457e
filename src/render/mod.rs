mod axes;
mod canvas;
mod path;
mod plane;
mod shapes;
pub mod theme;

pub use axes::{XAxisLayout, YAxisLayout, compute_and_render_x_axis, compute_and_render_y_axis};
pub use canvas::{
    Canvas, FillStyle, FinalizedSvg, LegendEntry, StrokeStyle, TextAnchor, TextStyle,
};
pub use path::PathBuilder;
pub use plane::{CoordinatePlane, setup_coordinate_plane};
pub use shapes::{
    render_distances, render_lines, render_points, render_polygons, render_polylines,
};
