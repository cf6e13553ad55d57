// src/pages/links.rs

//! Social links page.

use crate::error::Result;
use crate::models::SocialLink;
use crate::pages::{render_list, PageContext};
use crate::utils::log;
use crate::view::DataView;

/// Fetch and render the social links list.
pub async fn run_links(ctx: &PageContext<'_>) -> Result<()> {
    log::header(&ctx.locale.messages.links_header);

    let mut view = DataView::new(ctx.lang);
    let ticket = view.begin();
    log::info(&ctx.locale.messages.loading);

    let outcome = ctx.fetcher.social_links(ticket.lang()).await;
    view.resolve(ticket, outcome, &ctx.locale.errors.fetch_failed);

    render_list(ctx, &view, |link: &SocialLink| {
        link.format(&ctx.locale.templates.link_item)
    });

    Ok(())
}
