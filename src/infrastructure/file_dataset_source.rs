// Local file dataset source (the dataset shipped next to the page)
use crate::application::dataset_source::DatasetSource;
use crate::domain::error::LoadFailure;
use crate::domain::record::{parse_records, VideoRecord};
use async_trait::async_trait;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileDatasetSource {
    path: PathBuf,
    display: String,
}

impl FileDatasetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let display = path.display().to_string();
        Self { path, display }
    }
}

#[async_trait]
impl DatasetSource for FileDatasetSource {
    fn location(&self) -> &str {
        &self.display
    }

    async fn fetch_records(&self) -> Result<Vec<VideoRecord>, LoadFailure> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| LoadFailure::Io {
                location: self.display.clone(),
                message: e.to_string(),
            })?;

        parse_records(&bytes).map_err(|e| LoadFailure::Parse {
            location: self.display.clone(),
            message: e.to_string(),
        })
    }
}
