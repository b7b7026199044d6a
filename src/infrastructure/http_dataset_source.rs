// HTTP dataset source
use crate::application::dataset_source::DatasetSource;
use crate::domain::error::LoadFailure;
use crate::domain::record::{parse_records, VideoRecord};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct HttpDatasetSource {
    url: String,
    client: reqwest::Client,
}

impl HttpDatasetSource {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    fn transport(&self, e: reqwest::Error) -> LoadFailure {
        LoadFailure::Transport {
            location: self.url.clone(),
            message: e.to_string(),
        }
    }
}

#[async_trait]
impl DatasetSource for HttpDatasetSource {
    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch_records(&self) -> Result<Vec<VideoRecord>, LoadFailure> {
        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| self.transport(e))?;

        if !response.status().is_success() {
            return Err(LoadFailure::Status {
                location: self.url.clone(),
                status: response.status().as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| self.transport(e))?;
        tracing::debug!("Fetched {} bytes from {}", body.len(), self.url);

        parse_records(&body).map_err(|e| LoadFailure::Parse {
            location: self.url.clone(),
            message: e.to_string(),
        })
    }
}
