//! Cambly API module.
//!
//! This module provides:
//! - HTTP client for the Cambly REST API
//! - Session login and chat listing
//! - API response types

pub mod client;
pub mod types;

pub use client::CamblyApi;
pub use types::{Chat, Credentials, Lesson, Session};
