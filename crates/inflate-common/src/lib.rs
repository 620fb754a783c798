//! Common utilities for the inflate resizing engine.
//!
//! This crate provides shared infrastructure used by the engine and CLI:
//! - **Warning System** - colored terminal output for unsupported features

pub mod warning;
