//! Command handlers, one module per command family.

pub mod keygen;
pub mod query;
pub mod token;
