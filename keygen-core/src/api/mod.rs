// keygen-core/src/api/mod.rs

//! Flat functions for host surfaces (FFI bridge, web page, CLI).
//!
//! Hosts render and copy what these return; they never alter it.

#[allow(clippy::module_inception)]
mod api;

pub use api::*;
