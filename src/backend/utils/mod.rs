//! Utility modules for the portal backend.
//!
//! Configuration, on-disk storage, path resolution, and display formatting.

/// Portal configuration loading.
pub mod config;
/// Lease value formatting.
pub mod formater;
/// Portal directory resolution.
pub mod paths;
/// JSON-file key-value storage.
pub mod storage;
