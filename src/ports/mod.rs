//! Port traits decoupling domain logic from infrastructure.

pub mod config_port;
