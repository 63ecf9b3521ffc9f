//! Unit tests for the pipeline module.
//!
//! Tests are organised by representation, plus the composed pipeline.
