// src/pages/watch.rs

//! News reel: the auto-advancing carousel, run in the foreground.
//!
//! The reel cycles through the news list on the configured interval and
//! periodically reloads it, re-clamping the cursor when the list shrinks
//! mid-flight. Two visibility gates are wired up:
//!
//! - a `Toggle` gate pauses the timer while the reel is off screen (during
//!   a reload) and resumes it afterwards;
//! - a `Latch` gate reveals the upcoming-events footer once enough of the
//!   reel has been seen, and never replays the reveal.
//!
//! Ctrl-C (or `--frames`) ends the loop; the timer task and both gate
//! subscriptions are owned handles that abort on drop.

use std::time::Duration;

use tokio::sync::{mpsc, watch};

use crate::error::Result;
use crate::models::{EventItem, NewsItem};
use crate::pages::{render_list, PageContext};
use crate::utils::log;
use crate::view::{
    AutoAdvance, Carousel, DataView, GatePolicy, LoadState, VisibilityGate,
    VisibilitySubscription,
};

/// Reload the news list after this many frames.
const RELOAD_EVERY_FRAMES: u64 = 12;

pub async fn run_watch(ctx: &PageContext<'_>, max_frames: Option<u64>) -> Result<()> {
    log::header(&ctx.locale.messages.watch_header);
    log::info(&ctx.locale.messages.watch_hint);

    // Initial fan-out: the reel and its footer load together, fail-fast.
    let mut reel = DataView::new(ctx.lang);
    let mut footer = DataView::new(ctx.lang);
    let reel_ticket = reel.begin();
    let footer_ticket = footer.begin();
    log::info(&ctx.locale.messages.loading);

    let (news, events) = tokio::join!(ctx.fetcher.news(ctx.lang), ctx.fetcher.events(ctx.lang));

    let fallback = &ctx.locale.errors.fetch_failed;
    if news.is_err() || events.is_err() {
        match news {
            Err(e) => {
                reel.resolve(reel_ticket, Err(e), fallback);
            }
            Ok(_) => {
                reel.fail(reel_ticket, fallback);
            }
        }
        match events {
            Err(e) => {
                footer.resolve(footer_ticket, Err(e), fallback);
            }
            Ok(_) => {
                footer.fail(footer_ticket, fallback);
            }
        }
    } else {
        reel.resolve(reel_ticket, news, fallback);
        footer.resolve(footer_ticket, events, fallback);
    }

    let mut items: Vec<NewsItem> = match reel.state() {
        LoadState::Ready(items) if !items.is_empty() => items.clone(),
        _ => {
            // Nothing to cycle through; render the state and stop.
            render_list(ctx, &reel, |item: &NewsItem| {
                item.format(&ctx.locale.templates.news_item, ctx.ui.excerpt_graphemes)
            });
            return Ok(());
        }
    };

    let mut carousel = Carousel::new(items.len());

    let (tick_tx, mut tick_rx) = mpsc::channel(1);
    let timer = AutoAdvance::start(
        Duration::from_millis(ctx.ui.carousel_interval_ms),
        tick_tx,
    );

    // Latch gate: footer reveal, driven by how much of the reel was seen.
    let (coverage_tx, coverage_rx) = watch::channel(0.0f32);
    let (reveal_tx, mut reveal_rx) = mpsc::channel(1);
    let _reveal_sub = VisibilitySubscription::attach(
        VisibilityGate::new(ctx.ui.visibility_threshold, GatePolicy::Latch),
        coverage_rx,
        reveal_tx,
    );

    // Toggle gate: the reel leaves the screen while reloading; the timer
    // pauses for exactly that window.
    let (on_screen_tx, on_screen_rx) = watch::channel(1.0f32);
    let (pause_tx, mut pause_rx) = mpsc::channel(1);
    let _pause_sub = VisibilitySubscription::attach(
        VisibilityGate::new(0.5, GatePolicy::Toggle),
        on_screen_rx,
        pause_tx,
    );

    render_frame(ctx, &items, &carousel);
    let mut frames: u64 = 0;
    let mut timer_paused = false;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                log::info(&ctx.locale.messages.watch_stopped);
                break;
            }
            Some(flag) = pause_rx.recv() => {
                let pause = !flag;
                if pause != timer_paused {
                    timer_paused = pause;
                    timer.set_paused(pause);
                    log::info(if pause {
                        &ctx.locale.messages.watch_paused
                    } else {
                        &ctx.locale.messages.watch_resumed
                    });
                }
            }
            Some(true) = reveal_rx.recv() => {
                log::separator();
                render_list(ctx, &footer, |event: &EventItem| {
                    event.format(&ctx.locale.templates.event_item, ctx.ui.excerpt_graphemes)
                });
            }
            Some(()) = tick_rx.recv() => {
                if carousel.tick().is_some() {
                    render_frame(ctx, &items, &carousel);
                }
                frames += 1;

                let coverage = frames.min(items.len() as u64) as f32 / items.len() as f32;
                let _ = coverage_tx.send(coverage);

                if let Some(max) = max_frames {
                    if frames >= max {
                        log::info(&ctx.locale.messages.watch_stopped);
                        break;
                    }
                }

                if frames % RELOAD_EVERY_FRAMES == 0 {
                    let _ = on_screen_tx.send(0.0);
                    let ticket = reel.begin();
                    let outcome = ctx.fetcher.news(ticket.lang()).await;
                    reel.resolve(ticket, outcome, fallback);

                    match reel.state() {
                        LoadState::Ready(reloaded) if !reloaded.is_empty() => {
                            items = reloaded.clone();
                            // Re-clamp before the next tick can read the cursor.
                            carousel.sync_len(items.len());
                            let _ = on_screen_tx.send(1.0);
                        }
                        _ => {
                            render_list(ctx, &reel, |item: &NewsItem| {
                                item.format(
                                    &ctx.locale.templates.news_item,
                                    ctx.ui.excerpt_graphemes,
                                )
                            });
                            break;
                        }
                    }
                }
            }
        }
    }

    drop(timer);
    Ok(())
}

fn render_frame(ctx: &PageContext<'_>, items: &[NewsItem], carousel: &Carousel) {
    let item = &items[carousel.cursor()];
    log::frame(&format!(
        "▸ [{}/{}] {}",
        carousel.cursor() + 1,
        carousel.len(),
        item.format(&ctx.locale.templates.news_item, ctx.ui.excerpt_graphemes)
    ));
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use crate::error::Result;
    use crate::models::*;
    use crate::services::ContentFetch;

    /// Stub backend with a fixed three-item news list.
    struct StubFetch;

    #[async_trait]
    impl ContentFetch for StubFetch {
        async fn news(&self, _: Lang) -> Result<Vec<NewsItem>> {
            Ok(from_values(vec![
                serde_json::json!({"id": 1, "title": "a"}),
                serde_json::json!({"id": 2, "title": "b"}),
                serde_json::json!({"id": 3, "title": "c"}),
            ]))
        }
        async fn events(&self, _: Lang) -> Result<Vec<EventItem>> {
            Ok(vec![])
        }
        async fn leadership(&self, _: Lang) -> Result<Vec<LeadershipMember>> {
            Ok(vec![])
        }
        async fn sports_sections(&self, _: Lang) -> Result<Vec<SportsSection>> {
            Ok(vec![])
        }
        async fn achievements(&self, _: Lang) -> Result<Vec<Achievement>> {
            Ok(vec![])
        }
        async fn contacts(&self, _: Lang) -> Result<Vec<StudentContact>> {
            Ok(vec![])
        }
        async fn documents(&self, _: Lang) -> Result<Vec<DocumentItem>> {
            Ok(vec![])
        }
        async fn social_links(&self, _: Lang) -> Result<Vec<SocialLink>> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn test_watch_runs_bounded_frames_and_tears_down() {
        let stub = StubFetch;
        let locale = LocaleConfig::default();
        let ui = UiConfig {
            carousel_interval_ms: 5,
            ..UiConfig::default()
        };
        let ctx = super::PageContext {
            fetcher: &stub,
            locale: &locale,
            ui: &ui,
            lang: Lang::En,
        };
        assert!(super::run_watch(&ctx, Some(4)).await.is_ok());
    }
}
