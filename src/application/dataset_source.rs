// Source trait for the trends dataset
use crate::domain::error::LoadFailure;
use crate::domain::record::VideoRecord;
use async_trait::async_trait;

#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Human-readable location, used in logs and failure messages
    fn location(&self) -> &str;

    /// Fetch and parse every record. All or nothing: no partial results.
    async fn fetch_records(&self) -> Result<Vec<VideoRecord>, LoadFailure>;
}
