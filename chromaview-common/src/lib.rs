//! # Chromaview Common Library
//!
//! Shared code for the Chromaview modules including:
//! - Database initialization and user credential queries
//! - Password digest scheme
//! - Configuration and root folder resolution
//! - Common error types

pub mod config;
pub mod db;
pub mod error;
pub mod hash;

pub use error::{Error, Result};
