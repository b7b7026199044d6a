// Chart-ready dataset domain models
use std::fmt;

/// RGBA display color; alpha is in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// CSS form without the alpha channel, used for stroke colors.
    pub fn to_css_rgb(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// One plotted marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub title: String,
}

impl Point {
    pub fn new(x: f64, y: f64, title: String) -> Self {
        Self { x, y, title }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// All points sharing one category label.
///
/// `color` is `None` for categories outside the fixed palette.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub color: Option<Rgba>,
    pub points: Vec<Point>,
}

impl Series {
    pub fn new(label: String, color: Option<Rgba>) -> Self {
        Self {
            label,
            color,
            points: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    pub series: Vec<Series>,
}

impl Dataset {
    pub fn new(series: Vec<Series>) -> Self {
        Self { series }
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    /// Bounds of all finite points as `(x_max, y_max)`.
    pub fn max_extent(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .flat_map(|s| s.points.iter())
            .filter(|p| p.is_finite())
            .fold(None, |acc, p| match acc {
                None => Some((p.x, p.y)),
                Some((x, y)) => Some((x.max(p.x), y.max(p.y))),
            })
    }

    /// Lower bounds of all finite points as `(x_min, y_min)`.
    pub fn min_extent(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .flat_map(|s| s.points.iter())
            .filter(|p| p.is_finite())
            .fold(None, |acc, p| match acc {
                None => Some((p.x, p.y)),
                Some((x, y)) => Some((x.min(p.x), y.min(p.y))),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_display() {
        assert_eq!(Rgba::new(255, 99, 132, 0.7).to_string(), "rgba(255, 99, 132, 0.7)");
        assert_eq!(Rgba::new(1, 2, 3, 1.0).to_css_rgb(), "rgb(1, 2, 3)");
    }

    #[test]
    fn test_extent_ignores_non_finite_points() {
        let mut series = Series::new("Gaming".to_string(), None);
        series.points.push(Point::new(3.0, 40.0, "a".to_string()));
        series.points.push(Point::new(f64::NAN, 900.0, "b".to_string()));
        series.points.push(Point::new(10.0, -5.0, "c".to_string()));
        let dataset = Dataset::new(vec![series]);

        assert_eq!(dataset.point_count(), 3);
        assert_eq!(dataset.max_extent(), Some((10.0, 40.0)));
        assert_eq!(dataset.min_extent(), Some((3.0, -5.0)));
        assert_eq!(Dataset::default().max_extent(), None);
    }
}
