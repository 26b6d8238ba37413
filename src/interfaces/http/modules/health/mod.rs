//! Liveness endpoint module

pub mod handlers;

pub use handlers::*;
