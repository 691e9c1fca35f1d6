//! Core types and utilities for tourdesk
//!
//! This crate provides the foundational pieces used by all other tourdesk
//! components: the error type, logging bootstrap, configuration, and the
//! session cache.

pub mod config;
pub mod error;
pub mod logging;
pub mod session;

pub use error::{Error, Result};
