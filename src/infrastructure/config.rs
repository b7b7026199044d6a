use anyhow::Context;
use crate::presentation::chart_options::LegendPosition;
use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub dataset: DatasetSettings,
    pub page: PageSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetSettings {
    /// `http(s)://` URL or a filesystem path
    pub location: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PageSettings {
    pub title: String,
    /// Auto-refresh interval of the loading view
    pub refresh_secs: u32,
    pub legend: LegendPosition,
}

impl AppConfig {
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        self.server
            .bind
            .parse()
            .with_context(|| format!("invalid server.bind address {:?}", self.server.bind))
    }
}

/// Layer `source` on top of the built-in defaults
fn load_with<S>(source: S) -> anyhow::Result<AppConfig>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = config::Config::builder()
        .set_default("server.bind", "0.0.0.0:8080")?
        .set_default("dataset.location", "data/youtube_trends.json")?
        .set_default("page.title", "Personal Project: YouTube Content Genome")?
        .set_default("page.refresh_secs", 2)?
        .set_default("page.legend", "top")?
        .add_source(source)
        .build()
        .context("failed to read configuration")?;

    Ok(settings.try_deserialize()?)
}

/// Load `config/genome.{toml,json,...}`. The file is optional.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    load_with(config::File::with_name("config/genome").required(false))
}
