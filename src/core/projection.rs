use crate::error::{DiagramError, DiagramResult};

/// Linear data-domain to pixel-range mapping.
///
/// `range_start`/`range_end` may be descending, which is how the y axis maps
/// growing data values onto shrinking pixel rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearProjection {
    domain_min: f64,
    domain_max: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearProjection {
    pub fn new(
        domain_min: f64,
        domain_max: f64,
        range_start: f64,
        range_end: f64,
    ) -> DiagramResult<Self> {
        if !domain_min.is_finite() || !domain_max.is_finite() || domain_min >= domain_max {
            return Err(DiagramError::InvalidAxisDomain {
                min: domain_min,
                max: domain_max,
            });
        }
        Ok(Self {
            domain_min,
            domain_max,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_min, self.domain_max)
    }

    #[must_use]
    pub fn to_svg(self, value: f64) -> f64 {
        let normalized = (value - self.domain_min) / (self.domain_max - self.domain_min);
        self.range_start + normalized * (self.range_end - self.range_start)
    }
}

/// Pixel projection for the x axis, one variant per scale type.
///
/// Numeric projects data values; the categorical variants project category
/// indices (passed as `f64` through the shared `to_svg` contract).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum XProjection {
    Numeric(LinearProjection),
    /// Category index maps to the center of the i-th of N equal-width bands.
    Band { left: f64, band_width: f64 },
    /// Category index maps to the i-th of N evenly spaced points.
    Point { left: f64, step: f64 },
}

impl XProjection {
    pub fn band(left: f64, width: f64, category_count: usize) -> DiagramResult<Self> {
        if category_count == 0 {
            return Err(DiagramError::InvalidCategories);
        }
        Ok(Self::Band {
            left,
            band_width: width / category_count as f64,
        })
    }

    /// A single category collapses to the center point of the axis.
    pub fn point(left: f64, width: f64, category_count: usize) -> DiagramResult<Self> {
        if category_count == 0 {
            return Err(DiagramError::InvalidCategories);
        }
        if category_count == 1 {
            return Ok(Self::Point {
                left: left + width / 2.0,
                step: 0.0,
            });
        }
        Ok(Self::Point {
            left,
            step: width / (category_count - 1) as f64,
        })
    }

    #[must_use]
    pub fn to_svg(self, value: f64) -> f64 {
        match self {
            Self::Numeric(projection) => projection.to_svg(value),
            Self::Band { left, band_width } => left + (value + 0.5) * band_width,
            Self::Point { left, step } => left + value * step,
        }
    }

    /// Present only for band scales; bar-style consumers need it for bar width.
    #[must_use]
    pub fn band_width(self) -> Option<f64> {
        match self {
            Self::Band { band_width, .. } => Some(band_width),
            Self::Numeric(_) | Self::Point { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_projection_interpolates_endpoints() {
        let projection = LinearProjection::new(-2.0, 18.0, 40.0, 440.0).expect("valid projection");
        assert_eq!(projection.to_svg(-2.0), 40.0);
        assert_eq!(projection.to_svg(18.0), 440.0);
        assert_eq!(projection.to_svg(8.0), 240.0);
    }

    #[test]
    fn descending_range_inverts_direction() {
        let projection = LinearProjection::new(0.0, 10.0, 400.0, 0.0).expect("valid projection");
        assert_eq!(projection.to_svg(0.0), 400.0);
        assert_eq!(projection.to_svg(10.0), 0.0);
    }

    #[test]
    fn band_projection_centers_each_band() {
        let projection = XProjection::band(0.0, 300.0, 3).expect("valid band");
        assert_eq!(projection.to_svg(0.0), 50.0);
        assert_eq!(projection.to_svg(1.0), 150.0);
        assert_eq!(projection.to_svg(2.0), 250.0);
        assert_eq!(projection.band_width(), Some(100.0));
    }

    #[test]
    fn lone_point_category_sits_at_center() {
        let projection = XProjection::point(100.0, 200.0, 1).expect("valid point");
        assert_eq!(projection.to_svg(0.0), 200.0);
        assert_eq!(projection.band_width(), None);
    }
}
