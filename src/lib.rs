//! pricestats — return, position and significance statistics over price tables.
//!
//! Hexagonal layout: pure computations in [`domain`], port traits in [`ports`],
//! concrete implementations in [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
