// src/pages/contacts.rs

//! Student self-government contacts page.

use crate::error::Result;
use crate::models::StudentContact;
use crate::pages::{render_list, PageContext};
use crate::utils::log;
use crate::view::DataView;

/// Fetch and render the student contacts list.
pub async fn run_contacts(ctx: &PageContext<'_>) -> Result<()> {
    log::header(&ctx.locale.messages.contacts_header);

    let mut view = DataView::new(ctx.lang);
    let ticket = view.begin();
    log::info(&ctx.locale.messages.loading);

    let outcome = ctx.fetcher.contacts(ticket.lang()).await;
    view.resolve(ticket, outcome, &ctx.locale.errors.fetch_failed);

    render_list(ctx, &view, |contact: &StudentContact| {
        contact.format(&ctx.locale.templates.contact_item)
    });

    Ok(())
}
