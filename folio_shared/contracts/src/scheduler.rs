use std::time::Duration;

pub type ScheduledCallback = Box<dyn FnOnce() + Send + 'static>;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait SchedulerService: Send + Sync + 'static {
    /// Runs `callback` once after `delay` has elapsed.
    ///
    /// Scheduled callbacks cannot be cancelled.
    fn schedule(&self, delay: Duration, callback: ScheduledCallback);
}

#[cfg(feature = "mock")]
impl MockSchedulerService {
    /// Expects a single call with the given delay and runs the callback right
    /// away.
    pub fn with_schedule(mut self, delay: Duration) -> Self {
        self.expect_schedule()
            .once()
            .withf(move |d, _| *d == delay)
            .return_once(|_, callback| callback());
        self
    }

    /// Expects `times` calls with the given delay and parks the callbacks in
    /// `pending` until [`PendingCallbacks::fire`] is called.
    pub fn with_schedule_pending(
        mut self,
        delay: Duration,
        times: usize,
        pending: PendingCallbacks,
    ) -> Self {
        self.expect_schedule()
            .times(times)
            .withf(move |d, _| *d == delay)
            .returning(move |_, callback| pending.push(callback));
        self
    }
}

#[cfg(feature = "mock")]
#[derive(Clone, Default)]
pub struct PendingCallbacks(std::sync::Arc<std::sync::Mutex<Vec<ScheduledCallback>>>);

#[cfg(feature = "mock")]
impl PendingCallbacks {
    fn push(&self, callback: ScheduledCallback) {
        self.0.lock().unwrap().push(callback);
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Runs all parked callbacks in the order they were scheduled and returns
    /// how many ran.
    pub fn fire(&self) -> usize {
        let callbacks = std::mem::take(&mut *self.0.lock().unwrap());
        let count = callbacks.len();
        callbacks.into_iter().for_each(|callback| callback());
        count
    }
}
