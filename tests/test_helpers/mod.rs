//! Scoped environment overrides for configuration tests.

use std::env;
use std::sync::{Mutex, MutexGuard, OnceLock};

static ENV_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

/// Restores the overridden variables and releases the process-wide lock on
/// drop.
pub struct ScopedEnv {
    saved: Vec<(&'static str, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl ScopedEnv {
    /// Applies `overrides`; `None` unsets the variable.
    pub fn apply(overrides: &[(&'static str, Option<&str>)]) -> Self {
        let lock = ENV_MUTEX
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let saved = overrides
            .iter()
            .map(|&(key, value)| {
                let previous = env::var(key).ok();
                // SAFETY: ENV_MUTEX serializes every environment mutation in
                // this test binary.
                unsafe { write_var(key, value) };
                (key, previous)
            })
            .collect();

        Self { saved, _lock: lock }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (key, previous) in self.saved.drain(..) {
            // SAFETY: the guard still holds ENV_MUTEX.
            unsafe { write_var(key, previous.as_deref()) };
        }
    }
}

unsafe fn write_var(key: &str, value: Option<&str>) {
    // SAFETY: callers hold ENV_MUTEX.
    unsafe {
        match value {
            Some(new_value) => env::set_var(key, new_value),
            None => env::remove_var(key),
        }
    }
}
