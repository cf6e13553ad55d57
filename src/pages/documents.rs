// src/pages/documents.rs

//! Public documents page.

use crate::error::Result;
use crate::models::DocumentItem;
use crate::pages::{render_list, PageContext};
use crate::utils::log;
use crate::view::{DataView, LoadState};

fn filter_by_category<'a>(items: &'a [DocumentItem], category: &str) -> Vec<&'a DocumentItem> {
    items
        .iter()
        .filter(|item| item.category.eq_ignore_ascii_case(category))
        .collect()
}

/// Fetch and render the document list, optionally filtered by category.
pub async fn run_documents(ctx: &PageContext<'_>, category: Option<&str>) -> Result<()> {
    log::header(&ctx.locale.messages.documents_header);

    let mut view = DataView::new(ctx.lang);
    let ticket = view.begin();
    log::info(&ctx.locale.messages.loading);

    let outcome = ctx.fetcher.documents(ticket.lang()).await;
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
                log::sub_item(&item.format(&ctx.locale.templates.document_item));
            }
        }
        _ => render_list(ctx, &view, |item: &DocumentItem| {
            item.format(&ctx.locale.templates.document_item)
        }),
    }

    Ok(())
}
