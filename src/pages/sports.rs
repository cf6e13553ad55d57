// src/pages/sports.rs

//! Sports page: sections and achievements, fetched in parallel.
//!
//! Both requests must land before the page leaves loading; if either
//! fails, the whole page shows the error and the surviving result is
//! discarded.

use crate::error::Result;
use crate::models::{Achievement, SportsSection};
use crate::pages::{render_list, PageContext};
use crate::utils::log;
use crate::view::DataView;

pub async fn run_sports(ctx: &PageContext<'_>) -> Result<()> {
    log::header(&ctx.locale.messages.sports_header);

    let mut sections_view = DataView::new(ctx.lang);
    let mut achievements_view = DataView::new(ctx.lang);
    let sections_ticket = sections_view.begin();
    let achievements_ticket = achievements_view.begin();
    log::info(&ctx.locale.messages.loading);

    let (sections, achievements) = tokio::join!(
        ctx.fetcher.sports_sections(ctx.lang),
        ctx.fetcher.achievements(ctx.lang),
    );

    let fallback = &ctx.locale.errors.fetch_failed;
    match (sections, achievements) {
        (Ok(sections), Ok(achievements)) => {
            sections_view.resolve(sections_ticket, Ok(sections), fallback);
            achievements_view.resolve(achievements_ticket, Ok(achievements), fallback);
        }
        (sections, achievements) => {
            match sections {
                Err(e) => {
                    sections_view.resolve(sections_ticket, Err(e), fallback);
                }
                Ok(_) => {
                    sections_view.fail(sections_ticket, fallback);
                }
            }
            match achievements {
                Err(e) => {
                    achievements_view.resolve(achievements_ticket, Err(e), fallback);
                }
                Ok(_) => {
                    achievements_view.fail(achievements_ticket, fallback);
                }
            }
        }
    }

    render_list(ctx, &sections_view, |section: &SportsSection| {
        section.format(&ctx.locale.templates.sports_item)
    });
    log::separator();
    render_list(ctx, &achievements_view, |achievement: &Achievement| {
        achievement.format(&ctx.locale.templates.achievement_item)
    });

    Ok(())
}
