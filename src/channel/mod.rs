//! Inbound channel definitions for Inlet.
//!
//! This module implements the staged construction protocol for inbound event
//! channels: channel identity and transport settings are collected, a
//! processing pipeline is assembled stage by stage, and the resulting channel
//! model is serialized and handed to an event repository. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Assembly and deployment services in [`services`]
//! - The fluent construction protocol in [`builder`]

pub mod adapters;
pub mod builder;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
