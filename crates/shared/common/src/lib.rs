//! Common utilities shared across Cao-lo services.
//!
//! This crate provides:
//! - Process configuration loaded from the environment
//! - Unified error handling for gRPC services

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult};
