pub mod layout;
pub mod projection;
pub mod ticks;
pub mod types;

pub use layout::{AxisOrientation, WrappedText, select_axis_labels};
pub use projection::{LinearProjection, XProjection};
pub use ticks::{MAX_TICKS, TickSet, build_ticks};
pub use types::{
    AxisDomain, CategoricalAxisSpec, ChartArea, DistanceMarker, LineEquation, NumericAxisSpec,
    PlaneAxisSpec, PlaneSpec, PlotLine, PlotPoint, PlotPolygon, PlotPolyline, PointMap, StrokeKind,
    XAxisSpec, build_point_map,
};
