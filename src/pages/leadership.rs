// src/pages/leadership.rs

//! Leadership page.

use crate::error::Result;
use crate::models::LeadershipMember;
use crate::pages::{render_list, PageContext};
use crate::utils::log;
use crate::view::DataView;

/// Fetch and render the leadership list.
pub async fn run_leadership(ctx: &PageContext<'_>) -> Result<()> {
    log::header(&ctx.locale.messages.leadership_header);

    let mut view = DataView::new(ctx.lang);
    let ticket = view.begin();
    log::info(&ctx.locale.messages.loading);

    let outcome = ctx.fetcher.leadership(ticket.lang()).await;
    view.resolve(ticket, outcome, &ctx.locale.errors.fetch_failed);

    render_list(ctx, &view, |member: &LeadershipMember| {
        member.format(&ctx.locale.templates.leadership_item)
    });

    Ok(())
}
