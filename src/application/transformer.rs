// Group records by category and project them into plotting space
use crate::domain::dataset::{Dataset, Point, Series};
use crate::domain::palette::Palette;
use crate::domain::record::VideoRecord;
use std::collections::HashMap;

/// Build the chart dataset in a single pass.
///
/// Series appear in the order their category is first seen and points keep
/// the relative order of their source records.
pub fn build_dataset(records: &[VideoRecord], palette: &Palette) -> Dataset {
    let mut series: Vec<Series> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let label = record.content_type.as_str();
        let slot = *index.entry(label).or_insert_with(|| {
            series.push(Series::new(label.to_string(), palette.color_for(label)));
            series.len() - 1
        });

        series[slot].points.push(Point::new(
            record.video_length_min,
            record.virality_score,
            record.title.clone(),
        ));
    }

    tracing::debug!(
        "Grouped {} records into {} series",
        records.len(),
        series.len()
    );

    Dataset::new(series)
}
