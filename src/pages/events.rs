// src/pages/events.rs

//! Events page.

use crate::error::Result;
use crate::models::EventItem;
use crate::pages::{render_list, PageContext};
use crate::utils::log;
use crate::view::DataView;

/// Fetch and render the upcoming events list.
pub async fn run_events(ctx: &PageContext<'_>) -> Result<()> {
    log::header(&ctx.locale.messages.events_header);

    let mut view = DataView::new(ctx.lang);
    let ticket = view.begin();
    log::info(&ctx.locale.messages.loading);

    let outcome = ctx.fetcher.events(ticket.lang()).await;
    view.resolve(ticket, outcome, &ctx.locale.errors.fetch_failed);

    render_list(ctx, &view, |item: &EventItem| {
        item.format(&ctx.locale.templates.event_item, ctx.ui.excerpt_graphemes)
    });

    Ok(())
}
