// src/models/mod.rs

//! Domain models for the client application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod lang;
mod locale;
mod resources;

// Re-export all public types
pub use config::{ApiConfig, Config, LoggingConfig, PathsConfig, UiConfig, API_BASE_ENV};
pub use lang::Lang;
pub use locale::{ErrorLocale, LocaleConfig, MessageLocale, TemplateLocale};
pub use resources::{
    from_values, Achievement, DocumentItem, EventItem, LeadershipMember, NewsItem, SocialLink,
    SportsSection, StudentContact,
};
