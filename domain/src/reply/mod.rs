//! Reply domain
//!
//! The structural quality filter between raw provider output and the user.

pub mod entities;
pub mod validator;

pub use entities::ValidatedReply;
pub use validator::{Rejection, ResponseValidator};
