//! Unit tests for the channel module.
//!
//! Tests are organised by layer: domain values, model assembly, the channel
//! document format, the in-memory repository and the staged builder.
