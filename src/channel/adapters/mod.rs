//! Adapter implementations for the event repository port.

pub mod memory;
