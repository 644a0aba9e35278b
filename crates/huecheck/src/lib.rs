//! huecheck: WCAG color contrast checking.
//!
//! Re-exports the contrast engine from `huecheck-core` and adds the
//! browser surface used by the web front end.
//!
//! # Browser Usage (WASM)
//!
//! ```javascript
//! import init, { checkContrast, suggest } from './huecheck.js';
//!
//! async function main() {
//!     await init();
//!     const result = JSON.parse(checkContrast('#22c55e', '#0a0a0a'));
//!     console.log(result.ratio, result.aaNormal);
//! }
//! ```

pub use huecheck_core::*;

pub mod browser;

#[cfg(target_arch = "wasm32")]
pub use browser::bindings;

pub use browser::{KeyValueStore, Preferences, ScopedStorage, Storage, StorageError, Theme};
