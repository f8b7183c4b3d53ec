//! Attempt progress reporters

pub mod reporter;
