//! Type-keyed registry of lazily constructed singletons.
//!
//! One instance per type per registry. The first caller's factory wins; the
//! factories passed by later callers are dropped without running.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::error::{InitError, InitResult};
use crate::holder::LazySingleton;

type Slot = Arc<dyn Any + Send + Sync>;

/// Registry mapping a payload type to its single instance.
///
/// The map lock only covers slot lookup/insertion. Construction itself runs
/// through the slot's own [`LazySingleton`] gate, so a slow constructor for one
/// type never blocks access to another.
#[derive(Debug, Default)]
pub struct SingletonRegistry {
    slots: Mutex<HashMap<TypeId, Slot>>,
}

impl SingletonRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the `T` instance, constructing it with `init` if this is the first request.
    pub fn get_or_try_init<T, F>(&self, init: F) -> InitResult<Arc<T>>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> InitResult<T>,
    {
        self.slot::<T>()?.get_or_try_init(init)
    }

    pub fn get_or_init<T, F>(&self, init: F) -> InitResult<Arc<T>>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> T,
    {
        self.get_or_try_init(|| Ok(init()))
    }

    /// Whether a `T` instance has been constructed (or has failed to).
    pub fn contains<T>(&self) -> bool
    where
        T: Send + Sync + 'static,
    {
        self.lock_slots()
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.downcast_ref::<LazySingleton<T>>())
            .is_some_and(LazySingleton::is_initialized)
    }

    /// Number of types that have a slot.
    pub fn len(&self) -> usize {
        self.lock_slots().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn slot<T>(&self) -> InitResult<Arc<LazySingleton<T>>>
    where
        T: Send + Sync + 'static,
    {
        let mut slots = self.lock_slots();

        let slot = slots.entry(TypeId::of::<T>()).or_insert_with(|| {
            debug!(payload = type_name::<T>(), "registering singleton slot");
            Arc::new(LazySingleton::<T>::new())
        });

        slot.clone().downcast::<LazySingleton<T>>().map_err(|_| {
            InitError::construction(format!("slot type mismatch for {}", type_name::<T>()))
        })
    }

    // Slots are only ever inserted whole, so a poisoned map is still consistent.
    fn lock_slots(&self) -> MutexGuard<'_, HashMap<TypeId, Slot>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
