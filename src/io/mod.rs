//! Input/output operations and error handling

/// Command-line interface and batch file processing
pub mod cli;
/// Pipeline constants and runtime configuration defaults
pub mod configuration;
/// Error types for pipeline and filesystem operations
pub mod error;
/// JPEG export with share-sheet fallback
pub mod export;
/// Progress display for batch runs
pub mod progress;
