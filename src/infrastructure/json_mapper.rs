// Mapper to convert the domain dataset to the Chart.js-style JSON shape
use crate::domain::dataset::{Dataset, Point, Series};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ChartDataDto {
    pub datasets: Vec<SeriesDto>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesDto {
    pub label: String,
    pub data: Vec<PointDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

/// `x`/`y` are `None` for non-finite values, which serialize as `null`.
#[derive(Debug, Serialize)]
pub struct PointDto {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub title: String,
}

pub fn dataset_to_dto(dataset: &Dataset) -> ChartDataDto {
    ChartDataDto {
        datasets: dataset.series.iter().map(series_to_dto).collect(),
    }
}

fn series_to_dto(series: &Series) -> SeriesDto {
    SeriesDto {
        label: series.label.clone(),
        data: series.points.iter().map(point_to_dto).collect(),
        background_color: series.color.map(|c| c.to_string()),
    }
}

fn point_to_dto(point: &Point) -> PointDto {
    let finite = |v: f64| if v.is_finite() { Some(v) } else { None };
    PointDto {
        x: finite(point.x),
        y: finite(point.y),
        title: point.title.clone(),
    }
}
