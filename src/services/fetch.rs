// src/services/fetch.rs

//! Fetch abstraction over the content API.
//!
//! Pages depend on this trait rather than on [`ApiClient`] directly so the
//! view lifecycle can be exercised against stub backends in tests.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{
    Achievement, DocumentItem, EventItem, Lang, LeadershipMember, NewsItem, SocialLink,
    SportsSection, StudentContact,
};
use crate::services::ApiClient;

/// Locale-scoped access to every content resource.
#[async_trait]
pub trait ContentFetch: Send + Sync {
    async fn news(&self, lang: Lang) -> Result<Vec<NewsItem>>;
    async fn events(&self, lang: Lang) -> Result<Vec<EventItem>>;
    async fn leadership(&self, lang: Lang) -> Result<Vec<LeadershipMember>>;
    async fn sports_sections(&self, lang: Lang) -> Result<Vec<SportsSection>>;
    async fn achievements(&self, lang: Lang) -> Result<Vec<Achievement>>;
    async fn contacts(&self, lang: Lang) -> Result<Vec<StudentContact>>;
    async fn documents(&self, lang: Lang) -> Result<Vec<DocumentItem>>;
    async fn social_links(&self, lang: Lang) -> Result<Vec<SocialLink>>;
}

#[async_trait]
impl ContentFetch for ApiClient {
    async fn news(&self, lang: Lang) -> Result<Vec<NewsItem>> {
        self.get_news(lang).await
    }

    async fn events(&self, lang: Lang) -> Result<Vec<EventItem>> {
        self.get_events(lang).await
    }

    async fn leadership(&self, lang: Lang) -> Result<Vec<LeadershipMember>> {
        self.get_leadership(lang).await
    }

    async fn sports_sections(&self, lang: Lang) -> Result<Vec<SportsSection>> {
        self.get_sports_sections(lang).await
    }

    async fn achievements(&self, lang: Lang) -> Result<Vec<Achievement>> {
        self.get_achievements(lang).await
    }

    async fn contacts(&self, lang: Lang) -> Result<Vec<StudentContact>> {
        self.get_contacts(lang).await
    }

    async fn documents(&self, lang: Lang) -> Result<Vec<DocumentItem>> {
        self.get_documents(lang).await
    }

    async fn social_links(&self, lang: Lang) -> Result<Vec<SocialLink>> {
        self.get_social_links(lang).await
    }
}
