//! Shared value objects: candidate model identifiers, domain errors and
//! small string helpers used for log previews and word counting.

pub mod error;
pub mod model;
pub mod string;
