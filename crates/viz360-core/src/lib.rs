//! viz360 core: the environment registry of the panoramic viewer and the
//! ambient config/observability it runs with.

pub mod config;
pub mod environment;
pub mod error;
pub mod observability;

pub use error::{Error, Result};
