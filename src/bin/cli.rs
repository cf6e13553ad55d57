// src/bin/cli.rs

//! campusview CLI entry point.
//!
//! One subcommand per site page; `--lang` selects both the UI strings and
//! the language the backend is queried in.

use clap::{Parser, Subcommand};

use campusview::error::Result;
use campusview::models::{Config, Lang, LocaleConfig};
use campusview::pages::{
    run_contacts, run_documents, run_events, run_home, run_leadership, run_links, run_news,
    run_sports, run_watch, PageContext,
};
use campusview::services::ApiClient;
use campusview::utils::log;

#[derive(Parser, Debug)]
#[command(
    name = "campusview",
    version = "0.1.0",
    about = "Terminal client for the academy's public website API"
)]

/// CLI Arguments
struct Cli {
    #[arg(short, long, default_value = "data/config.toml")]
    config: String,

    /// Display language (ge, en, ru)
    #[arg(short, long, default_value = "ge")]
    lang: String,

    /// Override the API base URL
    #[arg(long)]
    api_base: Option<String>,

    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

/// CLI Commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Show the home page (news, events and social links)
    Home,
    /// Show the news list
    News {
        /// Keep only items in this category (applied after loading)
        #[arg(long)]
        category: Option<String>,
    },
    /// Show upcoming events
    Events,
    /// Show the leadership list
    Leadership,
    /// Show sports sections and achievements
    Sports,
    /// Show student self-government contacts
    Contacts,
    /// Show public documents
    Documents {
        #[arg(long)]
        category: Option<String>,
    },
    /// Show social links
    Links,
    /// Run the auto-advancing news reel
    Watch {
        /// Stop after this many frames instead of running until Ctrl-C
        #[arg(long)]
        frames: Option<u64>,
    },
    /// Validate the configuration file
    Validate,
}

/// Main entry point
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let lang = Lang::from_code(&cli.lang);
    let mut config = Config::load_or_default(&cli.config);
    if let Some(base) = cli.api_base {
        config.api.base_url = base;
    }
    let locale = LocaleConfig::load_or_default(&config.paths.locale_dir, lang);

    // Initialize logging system
    let level = if cli.quiet {
        "error"
    } else {
        config.logging.level.as_str()
    };
    log::init(&locale, level);

    config.validate()?;

    if let Command::Validate = cli.command {
        log::success("Configuration is valid");
        return Ok(());
    }

    let client = ApiClient::new(&config.api)?;
    let ctx = PageContext {
        fetcher: &client,
        locale: &locale,
        ui: &config.ui,
        lang,
    };

    match cli.command {
        Command::Home => run_home(&ctx).await?,
        Command::News { category } => run_news(&ctx, category.as_deref()).await?,
        Command::Events => run_events(&ctx).await?,
        Command::Leadership => run_leadership(&ctx).await?,
        Command::Sports => run_sports(&ctx).await?,
        Command::Contacts => run_contacts(&ctx).await?,
        Command::Documents { category } => run_documents(&ctx, category.as_deref()).await?,
        Command::Links => run_links(&ctx).await?,
        Command::Watch { frames } => run_watch(&ctx, frames).await?,
        Command::Validate => unreachable!(),
    }

    Ok(())
}
