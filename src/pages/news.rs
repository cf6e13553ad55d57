// src/pages/news.rs

//! News page.

use crate::error::Result;
use crate::models::NewsItem;
use crate::pages::{render_list, PageContext};
use crate::utils::log;
use crate::view::{DataView, LoadState};

/// Keep only items in the given category, case-insensitively.
///
/// The filter runs over already-loaded data; changing it never refetches.
fn filter_by_category<'a>(items: &'a [NewsItem], category: &str) -> Vec<&'a NewsItem> {
    items
        .iter()
        .filter(|item| item.category.eq_ignore_ascii_case(category))
        .collect()
}

/// Fetch and render the news list, optionally filtered by category.
pub async fn run_news(ctx: &PageContext<'_>, category: Option<&str>) -> Result<()> {
    log::header(&ctx.locale.messages.news_header);

    let mut view = DataView::new(ctx.lang);
    let ticket = view.begin();
    log::info(&ctx.locale.messages.loading);

    let outcome = ctx.fetcher.news(ticket.lang()).await;
    view.resolve(ticket, outcome, &ctx.locale.errors.fetch_failed);

    match (category, view.state()) {
        (Some(category), LoadState::Ready(items)) if !items.is_empty() => {
            let filtered = filter_by_category(items, category);
            log::info(
                &ctx.locale
                    .messages
                    .filter_applied
                    .replace("{count}", &filtered.len().to_string())
                    .replace("{total}", &items.len().to_string())
                    .replace("{category}", category),
            );
            for item in filtered {
                log::sub_item(&item.format(
                    &ctx.locale.templates.news_item,
                    ctx.ui.excerpt_graphemes,
                ));
            }
        }
        _ => render_list(ctx, &view, |item: &NewsItem| {
            item.format(&ctx.locale.templates.news_item, ctx.ui.excerpt_graphemes)
        }),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(id: i64, category: &str) -> NewsItem {
        serde_json::from_value(json!({
            "id": id,
            "title": format!("n{id}"),
            "category": category
        }))
        .unwrap()
    }

    #[test]
    fn test_filter_by_category() {
        let items = vec![item(1, "sport"), item(2, "Sport"), item(3, "culture")];
        let filtered = filter_by_category(&items, "sport");
        assert_eq!(filtered.len(), 2);
        assert!(filter_by_category(&items, "missing").is_empty());
    }
}
