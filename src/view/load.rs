// src/view/load.rs

//! Load-state machine shared by every page.
//!
//! A page's data is always in exactly one of three states: loading, failed,
//! or ready (possibly with an empty list). Rendering goes through
//! [`ViewPhase`], which derives the one view to show in precedence order
//! loading > error > empty > populated, so the four views can never overlap.
//!
//! Fetches are tagged with an epoch so a response that resolves after a
//! language switch (or after the view moved on for any reason) is dropped
//! instead of overwriting newer state.

use crate::error::Result;
use crate::models::Lang;

/// Tri-state of a view's data fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Error(String),
    Ready(Vec<T>),
}

/// The single view a page shows for its current state.
#[derive(Debug, PartialEq)]
pub enum ViewPhase<'a, T> {
    Loading,
    Error(&'a str),
    Empty,
    Populated(&'a [T]),
}

impl<T> LoadState<T> {
    /// Derive the render phase. Exactly one phase per state.
    pub fn phase(&self) -> ViewPhase<'_, T> {
        match self {
            LoadState::Loading => ViewPhase::Loading,
            LoadState::Error(message) => ViewPhase::Error(message),
            LoadState::Ready(items) if items.is_empty() => ViewPhase::Empty,
            LoadState::Ready(items) => ViewPhase::Populated(items),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Token tying an in-flight fetch to the view state it may write to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    epoch: u64,
    lang: Lang,
}

impl FetchTicket {
    /// Language the fetch was issued for.
    pub fn lang(&self) -> Lang {
        self.lang
    }
}

/// Per-page data holder with the fetch lifecycle from the site's views.
#[derive(Debug)]
pub struct DataView<T> {
    lang: Lang,
    epoch: u64,
    state: LoadState<T>,
}

impl<T> DataView<T> {
    /// Create a fresh view in the loading state.
    pub fn new(lang: Lang) -> Self {
        Self {
            lang,
            epoch: 0,
            state: LoadState::Loading,
        }
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn phase(&self) -> ViewPhase<'_, T> {
        self.state.phase()
    }

    /// Start a fetch for the current language.
    ///
    /// Resets the state to loading and invalidates any earlier ticket.
    pub fn begin(&mut self) -> FetchTicket {
        self.epoch += 1;
        self.state = LoadState::Loading;
        FetchTicket {
            epoch: self.epoch,
            lang: self.lang,
        }
    }

    /// Switch language and start a fresh fetch.
    ///
    /// Old data is discarded, not merged; responses still in flight for the
    /// previous language resolve against a stale ticket and are ignored.
    pub fn switch_lang(&mut self, lang: Lang) -> FetchTicket {
        self.lang = lang;
        self.begin()
    }

    /// Apply a fetch outcome.
    ///
    /// Returns false when the ticket is stale and the outcome was dropped.
    /// On failure the underlying error is logged and `error_message` (the
    /// localized fallback) is stored; partial results are never kept.
    pub fn resolve(
        &mut self,
        ticket: FetchTicket,
        outcome: Result<Vec<T>>,
        error_message: &str,
    ) -> bool {
        if ticket.epoch != self.epoch {
            log::debug!("Dropping stale response for lang '{}'", ticket.lang);
            return false;
        }

        self.state = match outcome {
            Ok(items) => LoadState::Ready(items),
            Err(e) => {
                log::warn!("Fetch failed for lang '{}': {}", ticket.lang, e);
                LoadState::Error(error_message.to_string())
            }
        };
        true
    }

    /// Force the error state, discarding any result.
    ///
    /// Used when a sibling request in the same fan-out failed: the whole
    /// page errors, never a partial render. Stale tickets are ignored as
    /// in [`DataView::resolve`].
    pub fn fail(&mut self, ticket: FetchTicket, error_message: &str) -> bool {
        if ticket.epoch != self.epoch {
            return false;
        }
        self.state = LoadState::Error(error_message.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::NewsItem;

    fn item(id: i64, title: &str) -> NewsItem {
        serde_json::from_value(serde_json::json!({ "id": id, "title": title })).unwrap()
    }

    #[test]
    fn test_success_populates() {
        let mut view = DataView::new(Lang::En);
        let ticket = view.begin();
        assert!(view.state().is_loading());

        assert!(view.resolve(ticket, Ok(vec![item(1, "A")]), "err"));
        match view.phase() {
            ViewPhase::Populated(items) => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].title, "A");
            }
            other => panic!("expected populated, got {:?}", other),
        }
        assert!(!view.state().is_loading());
    }

    #[test]
    fn test_failure_is_exactly_error() {
        let mut view = DataView::<NewsItem>::new(Lang::En);
        let ticket = view.begin();

        let failed: Result<Vec<NewsItem>> = Err(AppError::status(500, "http://x/api/news"));
        assert!(view.resolve(ticket, failed, "Could not load content."));

        assert_eq!(view.phase(), ViewPhase::Error("Could not load content."));
        assert!(!view.state().is_loading());
    }

    #[test]
    fn test_empty_list_is_empty_phase() {
        let mut view = DataView::<NewsItem>::new(Lang::En);
        let ticket = view.begin();
        view.resolve(ticket, Ok(vec![]), "err");

        assert_eq!(view.phase(), ViewPhase::Empty);
    }

    #[test]
    fn test_stale_response_after_language_switch_is_ignored() {
        let mut view = DataView::new(Lang::Ge);
        let old_ticket = view.begin();

        // Language switches while the first request is in flight.
        let new_ticket = view.switch_lang(Lang::En);
        assert_eq!(new_ticket.lang(), Lang::En);

        // The old response arrives late and must not land.
        assert!(!view.resolve(old_ticket, Ok(vec![item(1, "ძველი")]), "err"));
        assert!(view.state().is_loading());

        assert!(view.resolve(new_ticket, Ok(vec![item(2, "new")]), "err"));
        match view.phase() {
            ViewPhase::Populated(items) => assert_eq!(items[0].title, "new"),
            other => panic!("expected populated, got {:?}", other),
        }
    }

    #[test]
    fn test_fail_discards_partial_success() {
        let mut view = DataView::<NewsItem>::new(Lang::En);
        let ticket = view.begin();

        // A sibling request in the fan-out failed; this one's result is
        // discarded even though it succeeded.
        assert!(view.fail(ticket, "Could not load content."));
        assert_eq!(view.phase(), ViewPhase::Error("Could not load content."));
    }

    #[test]
    fn test_begin_invalidates_previous_ticket() {
        let mut view = DataView::<NewsItem>::new(Lang::En);
        let first = view.begin();
        let second = view.begin();

        assert!(!view.resolve(first, Ok(vec![item(1, "stale")]), "err"));
        assert!(view.resolve(second, Ok(vec![]), "err"));
    }
}
