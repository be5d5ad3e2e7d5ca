use std::sync::{Mutex, MutexGuard, PoisonError};

pub trait MutexExt<T> {
    /// Locks the mutex, recovering the guard if a previous holder panicked.
    ///
    /// Page state is only ever mutated in small, self-contained steps, so a
    /// poisoned lock never leaves it half-updated.
    fn lock_unpoisoned(&self) -> MutexGuard<'_, T>;
}

impl<T> MutexExt<T> for Mutex<T> {
    fn lock_unpoisoned(&self) -> MutexGuard<'_, T> {
        self.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
