//! `singleton-core` — single-instance building blocks.
//!
//! This crate contains the **one-time construction gate** and the pieces built
//! on it (no payload-specific concerns).

pub mod error;
pub mod holder;
pub mod id;
pub mod registry;

pub use error::{InitError, InitResult};
pub use holder::LazySingleton;
pub use id::InstanceId;
pub use registry::SingletonRegistry;
