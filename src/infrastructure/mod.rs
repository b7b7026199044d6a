// Infrastructure layer - External dependencies and adapters
pub mod config;
pub mod file_dataset_source;
pub mod http_dataset_source;
pub mod http_response;
pub mod json_mapper;

use crate::application::dataset_source::DatasetSource;
use crate::infrastructure::file_dataset_source::FileDatasetSource;
use crate::infrastructure::http_dataset_source::HttpDatasetSource;
use std::sync::Arc;

/// Pick a source implementation from the configured location.
pub fn source_for_location(location: &str) -> Arc<dyn DatasetSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Arc::new(HttpDatasetSource::new(location.to_string()))
    } else {
        Arc::new(FileDatasetSource::new(location))
    }
}
