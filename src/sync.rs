use std::sync::{Condvar, MutexGuard};

use crate::error::SyncError;

/// A mutex whose poisoning is reported instead of panicking.
pub struct Mutex<T>(std::sync::Mutex<T>);

impl<T> Mutex<T> {
    pub const fn new(value: T) -> Self {
        Self(std::sync::Mutex::new(value))
    }

    pub fn lock(&self) -> Result<MutexGuard<'_, T>, SyncError> {
        self.0.lock().map_err(|_| SyncError::Poisoned)
    }

    /// Locks even if poisoned. Only for teardown, where the state is
    /// being abandoned anyway.
    pub fn lock_for_teardown(&self) -> MutexGuard<'_, T> {
        self.0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

/// A condition variable paired with [`Mutex`].
pub struct Signal(Condvar);

impl Signal {
    pub const fn new() -> Self {
        Self(Condvar::new())
    }

    /// Blocks while `condition` holds. Spurious wakeups re-check the predicate.
    pub fn wait_while<'a, T, F>(
        &self,
        guard: MutexGuard<'a, T>,
        condition: F,
    ) -> Result<MutexGuard<'a, T>, SyncError>
    where
        F: FnMut(&mut T) -> bool,
    {
        self.0
            .wait_while(guard, condition)
            .map_err(|_| SyncError::Poisoned)
    }

    pub fn notify_all(&self) {
        self.0.notify_all();
    }
}
