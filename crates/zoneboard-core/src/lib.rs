//! Shared configuration, constants, and error types for Zoneboard.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
