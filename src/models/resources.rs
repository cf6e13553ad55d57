// src/models/resources.rs

//! Typed DTOs for each backend resource.
//!
//! Every resource is deserialized exactly once at the API boundary. The
//! backend's historical field spellings are absorbed here as serde aliases
//! (e.g. an achievement's athlete arrives as `athlete`, `athlete_name`,
//! `name` or `title` depending on the record's age), so no caller needs a
//! field-fallback chain of its own.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::{clean_rich_text, strip_tags};

/// A news post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewsItem {
    pub id: i64,

    pub title: String,

    /// Rich-text body; may carry markup from the site editor
    #[serde(default, alias = "body", alias = "description")]
    pub excerpt: String,

    #[serde(default, alias = "published_at", alias = "created_at")]
    pub date: String,

    #[serde(default)]
    pub image: String,

    #[serde(default)]
    pub category: String,
}

impl NewsItem {
    /// Format for display using a template with `{field}` placeholders.
    pub fn format(&self, template: &str, excerpt_graphemes: usize) -> String {
        template
            .replace("{id}", &self.id.to_string())
            .replace("{title}", strip_tags(&self.title).trim())
            .replace("{excerpt}", &clean_rich_text(&self.excerpt, excerpt_graphemes))
            .replace("{date}", &self.date)
            .replace("{image}", &self.image)
            .replace("{category}", &self.category)
    }
}

/// A calendar event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventItem {
    pub id: i64,

    pub title: String,

    #[serde(default, alias = "body")]
    pub description: String,

    #[serde(default, alias = "event_date")]
    pub date: String,

    #[serde(default, alias = "event_time")]
    pub time: String,

    #[serde(default, alias = "place")]
    pub location: String,
}

impl EventItem {
    pub fn format(&self, template: &str, excerpt_graphemes: usize) -> String {
        template
            .replace("{id}", &self.id.to_string())
            .replace("{title}", strip_tags(&self.title).trim())
            .replace(
                "{description}",
                &clean_rich_text(&self.description, excerpt_graphemes),
            )
            .replace("{date}", &self.date)
            .replace("{time}", &self.time)
            .replace("{location}", &self.location)
    }
}

/// A member of the academy's leadership or administration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeadershipMember {
    pub id: i64,

    #[serde(alias = "full_name")]
    pub name: String,

    #[serde(default, alias = "title", alias = "role")]
    pub position: String,

    #[serde(default, alias = "image")]
    pub photo: String,

    #[serde(default)]
    pub bio: String,
}

impl LeadershipMember {
    pub fn format(&self, template: &str) -> String {
        template
            .replace("{id}", &self.id.to_string())
            .replace("{name}", &self.name)
            .replace("{position}", &self.position)
            .replace("{photo}", &self.photo)
    }
}

/// A sports section offered by the academy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SportsSection {
    pub id: i64,

    #[serde(alias = "title")]
    pub name: String,

    #[serde(default, alias = "coach_name", alias = "trainer")]
    pub coach: String,

    #[serde(default)]
    pub schedule: String,

    #[serde(default)]
    pub image: String,
}

impl SportsSection {
    pub fn format(&self, template: &str) -> String {
        template
            .replace("{id}", &self.id.to_string())
            .replace("{name}", &self.name)
            .replace("{coach}", &self.coach)
            .replace("{schedule}", &self.schedule)
    }
}

/// A sporting achievement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Achievement {
    pub id: i64,

    #[serde(alias = "athlete_name", alias = "name", alias = "title")]
    pub athlete: String,

    #[serde(default, alias = "tournament")]
    pub competition: String,

    #[serde(default, alias = "place", alias = "result")]
    pub medal: String,

    #[serde(default)]
    pub year: String,
}

impl Achievement {
    pub fn format(&self, template: &str) -> String {
        template
            .replace("{id}", &self.id.to_string())
            .replace("{athlete}", &self.athlete)
            .replace("{competition}", &self.competition)
            .replace("{medal}", &self.medal)
            .replace("{year}", &self.year)
    }
}

/// A student self-government contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentContact {
    pub id: i64,

    #[serde(alias = "full_name")]
    pub name: String,

    #[serde(default, alias = "position")]
    pub role: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub phone: String,
}

impl StudentContact {
    pub fn format(&self, template: &str) -> String {
        template
            .replace("{id}", &self.id.to_string())
            .replace("{name}", &self.name)
            .replace("{role}", &self.role)
            .replace("{email}", &self.email)
            .replace("{phone}", &self.phone)
    }
}

/// A downloadable public document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentItem {
    pub id: i64,

    #[serde(alias = "name")]
    pub title: String,

    #[serde(default, alias = "url")]
    pub file: String,

    #[serde(default)]
    pub category: String,
}

impl DocumentItem {
    pub fn format(&self, template: &str) -> String {
        template
            .replace("{id}", &self.id.to_string())
            .replace("{title}", &self.title)
            .replace("{file}", &self.file)
            .replace("{category}", &self.category)
    }
}

/// A social media link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SocialLink {
    pub id: i64,

    #[serde(alias = "name")]
    pub platform: String,

    #[serde(default, alias = "link")]
    pub url: String,
}

impl SocialLink {
    pub fn format(&self, template: &str) -> String {
        template
            .replace("{id}", &self.id.to_string())
            .replace("{platform}", &self.platform)
            .replace("{url}", &self.url)
    }
}

/// Deserialize a list of raw records, skipping malformed ones.
///
/// A record missing its `id` or primary display field is logged and
/// dropped rather than failing the whole page.
pub fn from_values<T: DeserializeOwned>(values: Vec<Value>) -> Vec<T> {
    values
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<T>(value) {
            Ok(item) => Some(item),
            Err(e) => {
                log::debug!("Skipping malformed record: {}", e);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_achievement_alias_chain() {
        for key in ["athlete", "athlete_name", "name", "title"] {
            let value = json!({ "id": 7, key: "G. Beridze" });
            let ach: Achievement = serde_json::from_value(value).unwrap();
            assert_eq!(ach.athlete, "G. Beridze");
        }
    }

    #[test]
    fn test_news_item_optional_fields_default() {
        let item: NewsItem = serde_json::from_value(json!({
            "id": 1,
            "title": "A"
        }))
        .unwrap();
        assert_eq!(item.title, "A");
        assert_eq!(item.excerpt, "");
        assert_eq!(item.category, "");
    }

    #[test]
    fn test_news_format_strips_markup() {
        let item: NewsItem = serde_json::from_value(json!({
            "id": 2,
            "title": "Opening",
            "body": "<p>New  sports   hall</p>",
            "date": "2026-08-20"
        }))
        .unwrap();
        let line = item.format("[{date}] {title} — {excerpt}", 120);
        assert_eq!(line, "[2026-08-20] Opening — New sports hall");
    }

    #[test]
    fn test_from_values_skips_malformed() {
        let values = vec![
            json!({"id": 1, "title": "ok"}),
            json!({"title": "no id"}),
            json!("not an object"),
        ];
        let items: Vec<NewsItem> = from_values(values);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 1);
    }
}
