// src/services/mod.rs

//! Service layer for the client application.
//!
//! This module contains:
//! - The content API client (`ApiClient`)
//! - The fetch abstraction pages are written against (`ContentFetch`)

mod client;
mod fetch;

pub use client::ApiClient;
pub use fetch::ContentFetch;
