//! Core domain types and computations.

pub mod table;
pub mod sector;
pub mod returns;
pub mod position;
pub mod top_industries;
pub mod significance;
pub mod error;
