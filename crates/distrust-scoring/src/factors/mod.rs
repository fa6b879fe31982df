//! Component extractors. Each is a pure function of the normalized sources.

pub mod authority;
pub mod coordination;
pub mod entropy;
pub mod temporal;
