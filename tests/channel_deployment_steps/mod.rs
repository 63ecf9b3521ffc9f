//! Step definitions for inbound channel deployment scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
