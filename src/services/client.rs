// src/services/client.rs

//! HTTP client for the site's content API.
//!
//! One method per backend resource. Every request is a plain GET with the
//! language and any filters serialized as query parameters; list responses
//! arrive either as `{"results": [...]}` or as a bare array, and anything
//! else coerces to the empty list. No retry, no caching.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{
    from_values, Achievement, ApiConfig, DocumentItem, EventItem, Lang, LeadershipMember,
    NewsItem, SocialLink, SportsSection, StudentContact,
};

/// Client for the academy's public content endpoints.
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new client with the configured user agent and timeout.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        // A trailing slash makes Url::join treat the last segment as a
        // directory instead of replacing it.
        let mut base = config.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;

        Ok(Self { client, base_url })
    }

    /// Base URL the client was built with.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the full URL for a resource path with language and filters.
    fn endpoint_url(&self, path: &str, lang: Lang, filters: &[(&str, &str)]) -> Result<Url> {
        let mut url = self.base_url.join(path)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("lang", lang.backend_code());
            for (key, value) in filters {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Fetch a list endpoint and normalize the response shape.
    pub async fn get_list(
        &self,
        path: &str,
        lang: Lang,
        filters: &[(&str, &str)],
    ) -> Result<Vec<Value>> {
        let url = self.endpoint_url(path, lang, filters)?;
        log::debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::status(status.as_u16(), url.as_str()));
        }

        let body: Value = response.json().await?;
        Ok(Self::normalize_list(body))
    }

    /// Reduce a list response to its bare array.
    ///
    /// Accepts `{"results": [...]}` and bare arrays; any other shape is a
    /// soft mismatch that coerces to an empty list.
    fn normalize_list(body: Value) -> Vec<Value> {
        match body {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove("results") {
                Some(Value::Array(items)) => items,
                other => {
                    log::debug!(
                        "List response without a 'results' array (got {}), treating as empty",
                        other.map_or("nothing".to_string(), |v| v.to_string())
                    );
                    Vec::new()
                }
            },
            other => {
                log::debug!("Non-list response body ({}), treating as empty", other);
                Vec::new()
            }
        }
    }

    /// Fetch and deserialize one resource list.
    async fn fetch_typed<T: DeserializeOwned>(&self, path: &str, lang: Lang) -> Result<Vec<T>> {
        Ok(from_values(self.get_list(path, lang, &[]).await?))
    }

    /// Make a media path absolute against the API host.
    fn absolutize(&self, href: &str) -> String {
        if href.is_empty() {
            String::new()
        } else {
            crate::utils::resolve_url(&self.base_url, href)
        }
    }

    pub async fn get_news(&self, lang: Lang) -> Result<Vec<NewsItem>> {
        let mut items: Vec<NewsItem> = self.fetch_typed("news", lang).await?;
        for item in &mut items {
            item.image = self.absolutize(&item.image);
        }
        Ok(items)
    }

    pub async fn get_events(&self, lang: Lang) -> Result<Vec<EventItem>> {
        self.fetch_typed("events", lang).await
    }

    pub async fn get_leadership(&self, lang: Lang) -> Result<Vec<LeadershipMember>> {
        let mut members: Vec<LeadershipMember> = self.fetch_typed("leadership", lang).await?;
        for member in &mut members {
            member.photo = self.absolutize(&member.photo);
        }
        Ok(members)
    }

    pub async fn get_sports_sections(&self, lang: Lang) -> Result<Vec<SportsSection>> {
        let mut sections: Vec<SportsSection> = self.fetch_typed("sports", lang).await?;
        for section in &mut sections {
            section.image = self.absolutize(&section.image);
        }
        Ok(sections)
    }

    pub async fn get_achievements(&self, lang: Lang) -> Result<Vec<Achievement>> {
        self.fetch_typed("achievements", lang).await
    }

    pub async fn get_contacts(&self, lang: Lang) -> Result<Vec<StudentContact>> {
        self.fetch_typed("contacts", lang).await
    }

    pub async fn get_documents(&self, lang: Lang) -> Result<Vec<DocumentItem>> {
        let mut documents: Vec<DocumentItem> = self.fetch_typed("documents", lang).await?;
        for document in &mut documents {
            document.file = self.absolutize(&document.file);
        }
        Ok(documents)
    }

    pub async fn get_social_links(&self, lang: Lang) -> Result<Vec<SocialLink>> {
        self.fetch_typed("social-links", lang).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> ApiClient {
        ApiClient::new(&ApiConfig::default()).unwrap()
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let client = client();
        assert_eq!(client.base_url().as_str(), "http://localhost:8000/api/");
    }

    #[test]
    fn test_endpoint_url_maps_language() {
        let url = client().endpoint_url("news", Lang::Ge, &[]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/news?lang=ka");
    }

    #[test]
    fn test_endpoint_url_serializes_filters() {
        let url = client()
            .endpoint_url("documents", Lang::En, &[("category", "charter")])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/documents?lang=en&category=charter"
        );
    }

    #[test]
    fn test_absolutize_relative_media_path() {
        let client = client();
        assert_eq!(
            client.absolutize("/media/news/1.jpg"),
            "http://localhost:8000/media/news/1.jpg"
        );
        assert_eq!(
            client.absolutize("https://cdn.example.com/x.jpg"),
            "https://cdn.example.com/x.jpg"
        );
        assert_eq!(client.absolutize(""), "");
    }

    #[test]
    fn test_normalize_paginated_shape() {
        let body = json!({"results": [{"id": 1}, {"id": 2}], "count": 2});
        assert_eq!(ApiClient::normalize_list(body).len(), 2);
    }

    #[test]
    fn test_normalize_bare_array() {
        let body = json!([{"id": 1}]);
        assert_eq!(ApiClient::normalize_list(body).len(), 1);
    }

    #[test]
    fn test_normalize_mismatched_shapes_coerce_to_empty() {
        assert!(ApiClient::normalize_list(json!({"count": 0})).is_empty());
        assert!(ApiClient::normalize_list(json!({"results": "nope"})).is_empty());
        assert!(ApiClient::normalize_list(json!("plain string")).is_empty());
        assert!(ApiClient::normalize_list(json!(null)).is_empty());
    }
}
