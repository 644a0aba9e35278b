//! Browser surface for huecheck.
//!
//! This module provides the bridge between the contrast engine and a
//! browser UI: WASM exports, JSON payloads and injected preference storage.

// WASM-only modules
#[cfg(target_arch = "wasm32")]
pub mod bindings;

// Cross-platform modules
pub mod preferences;
pub mod report;
pub mod storage;

pub use preferences::{Preferences, Theme};
pub use report::ReportError;
pub use storage::{KeyValueStore, ScopedStorage, Storage, StorageError, StorageType};
