// Chart presentation options (axes, legend, canvas size)
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
}

#[derive(Debug, Clone)]
pub struct AxisOptions {
    pub title: String,
    pub begin_at_zero: bool,
}

#[derive(Debug, Clone)]
pub struct ChartOptions {
    pub x_axis: AxisOptions,
    pub y_axis: AxisOptions,
    pub legend_position: LegendPosition,
    pub width: f64,
    pub height: f64,
    pub point_radius: f64,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            x_axis: AxisOptions {
                title: "Video Length (Minutes)".to_string(),
                begin_at_zero: true,
            },
            y_axis: AxisOptions {
                title: "Engineered Virality Score (Engagement-Adjusted)".to_string(),
                begin_at_zero: true,
            },
            legend_position: LegendPosition::Top,
            width: 1140.0,
            height: 570.0,
            point_radius: 5.0,
        }
    }
}
