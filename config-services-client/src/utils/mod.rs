//! Utility modules.

/// Keeps response bodies and secrets out of debug logs.
pub mod log_sanitizer;
