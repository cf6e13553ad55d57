// src/models/locale.rs

//! Localized UI strings, loaded from per-language TOML files.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::models::Lang;

/// All user-facing strings for one display language.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LocaleConfig {
    #[serde(default)]
    pub messages: MessageLocale,

    #[serde(default)]
    pub errors: ErrorLocale,

    #[serde(default)]
    pub templates: TemplateLocale,
}

/// Page headers and status lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageLocale {
    pub news_header: String,
    pub events_header: String,
    pub leadership_header: String,
    pub sports_header: String,
    pub contacts_header: String,
    pub documents_header: String,
    pub links_header: String,
    pub home_header: String,
    pub watch_header: String,
    pub loading: String,
    pub empty: String,
    pub loaded_items: String,
    pub filter_applied: String,
    pub watch_hint: String,
    pub watch_paused: String,
    pub watch_resumed: String,
    pub watch_stopped: String,
}

/// Localized error strings shown in place of content.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorLocale {
    pub fetch_failed: String,
    pub locale_load_failed: String,
}

/// One-line item templates per resource.
///
/// Placeholders are the DTO field names in braces, substituted by the
/// resource's `format` method.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateLocale {
    pub news_item: String,
    pub event_item: String,
    pub leadership_item: String,
    pub sports_item: String,
    pub achievement_item: String,
    pub contact_item: String,
    pub document_item: String,
    pub link_item: String,
}

impl LocaleConfig {
    /// Path of the locale file for a language inside `dir`.
    pub fn path_for(dir: impl AsRef<Path>, lang: Lang) -> PathBuf {
        dir.as_ref().join(format!("locale.{}.toml", lang.code()))
    }

    /// Load the locale file for a language.
    pub fn load(dir: impl AsRef<Path>, lang: Lang) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(Self::path_for(dir, lang))?;
        Ok(toml::from_str(&content)?)
    }

    /// Load the locale file for a language, falling back to built-in strings.
    pub fn load_or_default(dir: impl AsRef<Path>, lang: Lang) -> Self {
        Self::load(&dir, lang).unwrap_or_else(|e| {
            log::warn!(
                "Locale load failed for '{}' from {:?}: {}. Using built-in strings.",
                lang,
                dir.as_ref(),
                e
            );
            Self::default()
        })
    }
}

impl Default for MessageLocale {
    fn default() -> Self {
        Self {
            news_header: "News".to_string(),
            events_header: "Upcoming events".to_string(),
            leadership_header: "Leadership".to_string(),
            sports_header: "Sports sections".to_string(),
            contacts_header: "Student self-government".to_string(),
            documents_header: "Documents".to_string(),
            links_header: "Find us online".to_string(),
            home_header: "Academy overview".to_string(),
            watch_header: "News reel".to_string(),
            loading: "Loading…".to_string(),
            empty: "Nothing here yet.".to_string(),
            loaded_items: "{count} item(s)".to_string(),
            filter_applied: "{count} of {total} in '{category}'".to_string(),
            watch_hint: "Press Ctrl-C to stop".to_string(),
            watch_paused: "⏸ paused (section off screen)".to_string(),
            watch_resumed: "▶ resumed".to_string(),
            watch_stopped: "Stopped.".to_string(),
        }
    }
}

impl Default for ErrorLocale {
    fn default() -> Self {
        Self {
            fetch_failed: "Could not load content. Please try again later.".to_string(),
            locale_load_failed: "Failed to load locale file: {error}".to_string(),
        }
    }
}

impl Default for TemplateLocale {
    fn default() -> Self {
        Self {
            news_item: "[{date}] {title} — {excerpt}".to_string(),
            event_item: "[{date} {time}] {title} @ {location}".to_string(),
            leadership_item: "{name} — {position}".to_string(),
            sports_item: "{name} (coach: {coach}) {schedule}".to_string(),
            achievement_item: "{year} {medal}: {athlete} — {competition}".to_string(),
            contact_item: "{name} ({role}) {email} {phone}".to_string(),
            document_item: "{title} [{category}] {file}".to_string(),
            link_item: "{platform}: {url}".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_for_uses_internal_code() {
        let path = LocaleConfig::path_for("data", Lang::Ge);
        assert_eq!(path, PathBuf::from("data/locale.ge.toml"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("locale.en.toml"),
            "[messages]\nnews_header = \"Latest news\"\n",
        )
        .unwrap();

        let locale = LocaleConfig::load(dir.path(), Lang::En).unwrap();
        assert_eq!(locale.messages.news_header, "Latest news");
        assert_eq!(locale.messages.empty, "Nothing here yet.");
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let locale = LocaleConfig::load_or_default(dir.path(), Lang::Ru);
        assert_eq!(locale.errors.fetch_failed.is_empty(), false);
    }
}
