// View controller - Owns the one-shot load lifecycle of the chart view
use crate::application::dataset_source::DatasetSource;
use crate::application::transformer::build_dataset;
use crate::domain::dataset::Dataset;
use crate::domain::error::LoadFailure;
use crate::domain::palette::Palette;
use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

#[derive(Debug, Clone)]
pub enum LoadState {
    Uninitialized,
    Loading,
    Loaded {
        dataset: Arc<Dataset>,
        loaded_at: DateTime<Utc>,
    },
    Failed(LoadFailure),
}

impl LoadState {
    pub fn name(&self) -> &'static str {
        match self {
            LoadState::Uninitialized => "uninitialized",
            LoadState::Loading => "loading",
            LoadState::Loaded { .. } => "loaded",
            LoadState::Failed(_) => "failed",
        }
    }

    pub fn dataset(&self) -> Option<&Arc<Dataset>> {
        match self {
            LoadState::Loaded { dataset, .. } => Some(dataset),
            _ => None,
        }
    }
}

/// What became of the background load task at shutdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadTaskExit {
    Completed,
    Panicked,
    StillRunning,
}

/// Collect the load task. A panic is logged here instead of being lost with
/// the handle; a task still running is left detached.
pub async fn reap_load_task(handle: JoinHandle<()>) -> LoadTaskExit {
    if !handle.is_finished() {
        tracing::debug!("Dataset load still in flight at shutdown, result will be discarded");
        return LoadTaskExit::StillRunning;
    }
    match handle.await {
        Ok(()) => LoadTaskExit::Completed,
        Err(e) => {
            tracing::error!("Dataset load task failed: {}", e);
            LoadTaskExit::Panicked
        }
    }
}

/// Holds the process-wide "current dataset" state.
///
/// The state is settled at most once per session. Once
/// [`ViewController::dispose`] has been called no load starts and no result
/// is applied, whichever side of the fetch the call lands on.
#[derive(Clone)]
pub struct ViewController {
    source: Arc<dyn DatasetSource>,
    palette: Palette,
    state: Arc<RwLock<LoadState>>,
    disposed: Arc<AtomicBool>,
}

impl ViewController {
    pub fn new(source: Arc<dyn DatasetSource>, palette: Palette) -> Self {
        Self {
            source,
            palette,
            state: Arc::new(RwLock::new(LoadState::Uninitialized)),
            disposed: Arc::new(AtomicBool::new(false)),
        }
    }

    pub async fn state(&self) -> LoadState {
        self.state.read().await.clone()
    }

    /// Run the load in the background.
    pub fn spawn_load(&self) -> JoinHandle<()> {
        let controller = self.clone();
        tokio::spawn(async move { controller.start().await })
    }

    /// Fetch, transform and settle the state. Failures are logged and stored,
    /// never returned.
    pub async fn start(&self) {
        {
            let mut state = self.state.write().await;
            if self.is_disposed() {
                tracing::debug!("View was disposed before the load started");
                return;
            }
            if !matches!(*state, LoadState::Uninitialized) {
                tracing::warn!(
                    "Ignoring load request, view state is already {}",
                    state.name()
                );
                return;
            }
            *state = LoadState::Loading;
        }

        tracing::info!("Loading dataset from {}", self.source.location());

        let outcome = self
            .source
            .fetch_records()
            .await
            .map(|records| build_dataset(&records, &self.palette));

        self.settle(outcome).await;
    }

    /// Tear down the view; any in-flight load will be discarded.
    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::SeqCst);
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }

    async fn settle(&self, outcome: Result<Dataset, LoadFailure>) {
        let mut state = self.state.write().await;

        if self.is_disposed() {
            tracing::debug!("View was disposed, discarding late load result");
            return;
        }

        match outcome {
            Ok(dataset) => {
                tracing::info!(
                    "Dataset loaded: {} series, {} points",
                    dataset.series.len(),
                    dataset.point_count()
                );
                *state = LoadState::Loaded {
                    dataset: Arc::new(dataset),
                    loaded_at: Utc::now(),
                };
            }
            Err(failure) => {
                tracing::error!(
                    kind = failure.kind(),
                    "Error loading data. Was the dataset generated? {}",
                    failure
                );
                *state = LoadState::Failed(failure);
            }
        }
    }
}
