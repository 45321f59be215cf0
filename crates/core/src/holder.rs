//! One-time construction gate for lazily built singletons.
//!
//! A [`LazySingleton`] owns at most one payload for its whole lifetime. The
//! first caller runs the construction routine; callers arriving while it runs
//! block until it finishes; everybody (the constructing caller included) gets a
//! handle to the same `Arc<T>`.
//!
//! The holder is an ordinary value. Put it in a `static` for a process-wide
//! instance, or own one in a struct/test and pass handles around explicitly.
//!
//! ## Failure semantics
//!
//! A failed construction is cached exactly like a successful one: the
//! [`InitError`] is handed to every waiter and every later caller, and the
//! routine is never retried. A panic inside the routine is caught and cached as
//! [`InitError::Panicked`].

use std::any::{Any, type_name};
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, OnceLock};

use tracing::{info, warn};

use crate::error::{InitError, InitResult};

/// Lazily initialized, thread-safe single-instance holder.
pub struct LazySingleton<T> {
    slot: OnceLock<InitResult<Arc<T>>>,
}

impl<T> LazySingleton<T> {
    /// An empty holder. `const` so it can back a `static`.
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    /// Return the instance, running `init` if nobody has yet.
    ///
    /// `init` runs at most once per holder regardless of how many threads
    /// call this concurrently; later callers get a clone of the cached outcome.
    pub fn get_or_try_init<F>(&self, init: F) -> InitResult<Arc<T>>
    where
        F: FnOnce() -> InitResult<T>,
    {
        self.slot.get_or_init(|| construct(init)).clone()
    }

    /// Infallible-factory variant of [`get_or_try_init`](Self::get_or_try_init).
    ///
    /// Still returns a `Result`: a panicking factory is cached as a failure.
    pub fn get_or_init<F>(&self, init: F) -> InitResult<Arc<T>>
    where
        F: FnOnce() -> T,
    {
        self.get_or_try_init(|| Ok(init()))
    }

    /// Peek without initializing. `None` until the gate has completed.
    pub fn get(&self) -> Option<InitResult<Arc<T>>> {
        self.slot.get().cloned()
    }

    /// Whether construction has completed (successfully or not).
    pub fn is_initialized(&self) -> bool {
        self.slot.get().is_some()
    }
}

impl<T> Default for LazySingleton<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::fmt::Debug for LazySingleton<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let state = match self.slot.get() {
            None => "uninitialized",
            Some(Ok(_)) => "initialized",
            Some(Err(_)) => "failed",
        };
        f.debug_struct("LazySingleton")
            .field("payload", &type_name::<T>())
            .field("state", &state)
            .finish()
    }
}

fn construct<T, F>(init: F) -> InitResult<Arc<T>>
where
    F: FnOnce() -> InitResult<T>,
{
    let payload = type_name::<T>();
    info!(payload, "constructing singleton instance");

    let outcome = match panic::catch_unwind(AssertUnwindSafe(init)) {
        Ok(result) => result,
        Err(cause) => Err(InitError::panicked(panic_message(cause.as_ref()))),
    };

    match outcome {
        Ok(value) => {
            info!(payload, "singleton instance constructed");
            Ok(Arc::new(value))
        }
        Err(err) => {
            warn!(payload, error = %err, "singleton construction failed; caching failure");
            Err(err)
        }
    }
}

fn panic_message(cause: &(dyn Any + Send)) -> String {
    if let Some(msg) = cause.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = cause.downcast_ref::<String>() {
        msg.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
