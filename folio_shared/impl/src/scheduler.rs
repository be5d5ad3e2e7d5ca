use std::time::Duration;

use anyhow::Context;
use folio_shared_contracts::scheduler::{ScheduledCallback, SchedulerService};
use tokio::runtime::Handle;
use tracing::trace;

/// Runs scheduled callbacks as tasks on a tokio runtime.
#[derive(Debug, Clone)]
pub struct TokioSchedulerService {
    handle: Handle,
}

impl TokioSchedulerService {
    /// Creates a scheduler bound to the runtime of the calling context.
    pub fn new() -> anyhow::Result<Self> {
        Handle::try_current()
            .map(Self::with_handle)
            .context("The scheduler must be created from within a tokio runtime")
    }

    pub fn with_handle(handle: Handle) -> Self {
        Self { handle }
    }
}

impl SchedulerService for TokioSchedulerService {
    fn schedule(&self, delay: Duration, callback: ScheduledCallback) {
        trace!(?delay, "schedule callback");
        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            trace!(?delay, "run scheduled callback");
            callback();
        });
    }
}
