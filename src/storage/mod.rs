//! Storage layer for finmodel
//!
//! Provides atomic file writes with automatic directory creation.

pub mod file_io;

pub use file_io::{write_bytes_atomic, write_json_atomic, write_yaml_atomic};
