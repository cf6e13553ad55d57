// src/pages/home.rs

//! Home page: news, events and social links in one fixed fan-out.
//!
//! Three parallel requests; the page renders only when all have landed,
//! and any single failure errors every section.

use crate::error::Result;
use crate::models::{EventItem, NewsItem, SocialLink};
use crate::pages::{render_list, PageContext};
use crate::utils::log;
use crate::view::DataView;

pub async fn run_home(ctx: &PageContext<'_>) -> Result<()> {
    log::header(&ctx.locale.messages.home_header);

    let mut news_view = DataView::new(ctx.lang);
    let mut events_view = DataView::new(ctx.lang);
    let mut links_view = DataView::new(ctx.lang);
    let news_ticket = news_view.begin();
    let events_ticket = events_view.begin();
    let links_ticket = links_view.begin();
    log::info(&ctx.locale.messages.loading);

    let (news, events, links) = tokio::join!(
        ctx.fetcher.news(ctx.lang),
        ctx.fetcher.events(ctx.lang),
        ctx.fetcher.social_links(ctx.lang),
    );

    let fallback = &ctx.locale.errors.fetch_failed;
    let any_failed = news.is_err() || events.is_err() || links.is_err();
    if any_failed {
        match news {
            Err(e) => {
                news_view.resolve(news_ticket, Err(e), fallback);
            }
            Ok(_) => {
                news_view.fail(news_ticket, fallback);
            }
        }
        match events {
            Err(e) => {
                events_view.resolve(events_ticket, Err(e), fallback);
            }
            Ok(_) => {
                events_view.fail(events_ticket, fallback);
            }
        }
        match links {
            Err(e) => {
                links_view.resolve(links_ticket, Err(e), fallback);
            }
            Ok(_) => {
                links_view.fail(links_ticket, fallback);
            }
        }
    } else {
        news_view.resolve(news_ticket, news, fallback);
        events_view.resolve(events_ticket, events, fallback);
        links_view.resolve(links_ticket, links, fallback);
    }

    render_list(ctx, &news_view, |item: &NewsItem| {
        item.format(&ctx.locale.templates.news_item, ctx.ui.excerpt_graphemes)
    });
    log::separator();
    render_list(ctx, &events_view, |item: &EventItem| {
        item.format(&ctx.locale.templates.event_item, ctx.ui.excerpt_graphemes)
    });
    log::separator();
    render_list(ctx, &links_view, |link: &SocialLink| {
        link.format(&ctx.locale.templates.link_item)
    });

    Ok(())
}
