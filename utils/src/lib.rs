//! Shared utilities for the CodeChain primitives workspace.

pub mod format;
pub mod logging;

pub use format::{group_digits, is_hex, strip_hex_prefix, to_hex};
pub use logging::{init_logging, init_tracing, LogFormat, LoggingError};
