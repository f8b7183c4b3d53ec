//! Reply output formatting

pub mod console;
