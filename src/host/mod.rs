//! Host Package Record Module
//!
//! Models the host shell's version-record capability: a read-only view
//! of the running application's installed package metadata. The shell
//! injects a concrete source; this crate only ever reads from it.

// Internal modules - all access should go through api module
pub(crate) mod build_info;
pub(crate) mod error;
pub(crate) mod traits;
pub(crate) mod types;

// Public API module - the only public interface for the host record system
pub mod api;
