//! Serialization of environment-variable mutation in tests.

use std::sync::{Mutex, MutexGuard, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Take the process-wide env lock. Tests that call `std::env::set_var` or
/// `remove_var` must hold this guard for their whole body — cargo runs tests
/// on multiple threads and the environment is shared.
pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
