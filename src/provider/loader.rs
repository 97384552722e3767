//! Consumer-side handle that keeps only the latest request's result
//!
//! Every load is tagged with a generation number. Changing the identifier or
//! calling [`StatsLoader::refetch`] bumps the generation; results that arrive
//! for an older generation are dropped, so a slow superseded request can
//! never overwrite a newer one. The in-flight network call itself is not
//! cancelled.

use std::sync::Arc;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use super::fallback::{StatsOutcome, StatsProvider};

/// What the consumer should render right now
#[derive(Debug, Clone)]
pub enum LoadState {
    /// Nothing requested yet
    Idle,
    /// Current generation still in flight
    Loading,
    /// Current generation finished (possibly degraded, see [`StatsOutcome::is_degraded`])
    Ready(StatsOutcome),
    /// The identifier was rejected before any network call
    Invalid(String),
    /// The request task ended without producing an outcome
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn outcome(&self) -> Option<&StatsOutcome> {
        match self {
            LoadState::Ready(outcome) => Some(outcome),
            _ => None,
        }
    }
}

/// Stats loader that runs fetches on the tokio runtime
///
/// Must be used from within a tokio runtime, since loads are spawned tasks.
pub struct StatsLoader {
    provider: Arc<StatsProvider>,
    identifier: String,
    generation: u64,
    tx: UnboundedSender<(u64, LoadState)>,
    rx: UnboundedReceiver<(u64, LoadState)>,
    state: LoadState,
}

impl StatsLoader {
    /// Create a loader without starting a request
    pub fn new(provider: Arc<StatsProvider>, identifier: impl Into<String>) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            provider,
            identifier: identifier.into(),
            generation: 0,
            tx,
            rx,
            state: LoadState::Idle,
        }
    }

    /// Create a loader and immediately start the first request
    pub fn start(provider: Arc<StatsProvider>, identifier: impl Into<String>) -> Self {
        let mut loader = Self::new(provider, identifier);
        loader.refetch();
        loader
    }

    /// Re-run the full adapter sequence from the first adapter
    pub fn refetch(&mut self) {
        self.generation += 1;
        self.state = LoadState::Loading;

        let provider = Arc::clone(&self.provider);
        let identifier = self.identifier.clone();
        let generation = self.generation;
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let request = tokio::spawn(async move { provider.fetch(&identifier).await });
            let state = match request.await {
                Ok(Ok(outcome)) => LoadState::Ready(outcome),
                Ok(Err(e)) => LoadState::Invalid(e.to_string()),
                Err(e) => {
                    tracing::error!("Stats request {} aborted: {}", generation, e);
                    LoadState::Failed(format!("Stats request did not complete: {}", e))
                }
            };
            let _ = tx.send((generation, state));
        });
    }

    /// Switch to a new identifier and load it, superseding any pending request
    pub fn set_identifier(&mut self, identifier: impl Into<String>) {
        self.identifier = identifier.into();
        self.refetch();
    }

    /// Apply finished results without blocking
    pub fn poll(&mut self) -> &LoadState {
        while let Ok((generation, state)) = self.rx.try_recv() {
            self.accept(generation, state);
        }
        &self.state
    }

    /// Wait until the current generation has finished
    pub async fn wait(&mut self) -> &LoadState {
        while self.state.is_loading() {
            match self.rx.recv().await {
                Some((generation, state)) => self.accept(generation, state),
                None => break,
            }
        }
        &self.state
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn accept(&mut self, generation: u64, state: LoadState) {
        if generation == self.generation {
            self.state = state;
        } else {
            tracing::debug!(
                "Discarding stale stats result (generation {}, current {})",
                generation,
                self.generation
            );
        }
    }
}
