use chrono::{DateTime, Utc};
use folio_shared_contracts::time::TimeService;
use tracing::instrument;

#[derive(Debug, Clone, Copy, Default)]
pub struct TimeServiceImpl;

impl TimeService for TimeServiceImpl {
    #[instrument(skip(self), ret(level = "trace"))]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
