// src/pages/mod.rs

//! Page runners. One per site page: localized header, fetch through the
//! view lifecycle, render by phase.

mod contacts;
mod documents;
mod events;
mod home;
mod leadership;
mod links;
mod news;
mod sports;
mod watch;

pub use contacts::run_contacts;
pub use documents::run_documents;
pub use events::run_events;
pub use home::run_home;
pub use leadership::run_leadership;
pub use links::run_links;
pub use news::run_news;
pub use sports::run_sports;
pub use watch::run_watch;

use crate::models::{Lang, LocaleConfig, UiConfig};
use crate::services::ContentFetch;
use crate::utils::log;
use crate::view::{DataView, ViewPhase};

/// Everything a page runner needs.
pub struct PageContext<'a> {
    pub fetcher: &'a dyn ContentFetch,
    pub locale: &'a LocaleConfig,
    pub ui: &'a UiConfig,
    pub lang: Lang,
}

/// Render a view by phase: loading > error > empty > populated.
pub(crate) fn render_list<T>(
    ctx: &PageContext<'_>,
    view: &DataView<T>,
    mut line: impl FnMut(&T) -> String,
) {
    match view.phase() {
        ViewPhase::Loading => log::info(&ctx.locale.messages.loading),
        ViewPhase::Error(message) => log::error(message),
        ViewPhase::Empty => log::info(&ctx.locale.messages.empty),
        ViewPhase::Populated(items) => {
            log::info(
                &ctx.locale
                    .messages
                    .loaded_items
                    .replace("{count}", &items.len().to_string()),
            );
            for item in items {
                log::sub_item(&line(item));
            }
        }
    }
}
