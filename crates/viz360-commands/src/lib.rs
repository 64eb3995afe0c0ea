//! Console commands over the viz360 environment registry.

pub mod env;
