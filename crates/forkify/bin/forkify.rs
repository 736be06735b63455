#[macro_use]
extern crate log;

use std::{sync::Arc, time::Duration};

use anyhow::bail;
use clap::{Parser, Subcommand};
use forkify::{
    application::{
        AppContext, Event, Outcome, controllers::recipe::control_scale_servings, dispatch,
    },
    domain::repositories::storage::Storage,
    infrastructure::{
        config::Config,
        repositories::storage::{FileStorage, MemoryStorage},
        source::ForkifyApi,
    },
    presentation::{shell, terminal::TerminalView},
};

#[derive(Parser)]
#[clap(version, about = "Search recipes, scale them, build a shopping list")]
struct Opts {
    /// Path to config file
    #[clap(long)]
    config: Option<String>,
    /// Keep likes in memory only
    #[clap(long)]
    ephemeral: bool,
    #[clap(subcommand)]
    subcmd: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Search recipes by keyword
    Search {
        query: String,
        #[clap(long, default_value_t = 1)]
        page: usize,
    },
    /// Show a recipe, optionally scaled to a number of servings
    Recipe {
        id: String,
        #[clap(long)]
        servings: Option<u32>,
    },
    /// List liked recipes
    Likes,
    /// Like a recipe, or unlike it if it is already liked
    Like { id: String },
    /// Interactive session
    Shell,
}

fn ensure(outcome: Outcome) -> Result<(), anyhow::Error> {
    if outcome == Outcome::Failed {
        bail!("request to the recipe source failed");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let mut logger = env_logger::Builder::from_default_env();
    if std::env::var("RUST_LOG").is_err() {
        if let Ok(forkify_log) = std::env::var("FORKIFY_LOG") {
            logger.parse_filters(&format!("forkify={forkify_log},forkify_lib={forkify_log}"));
        }
    }
    logger.init();

    let opts: Opts = Opts::parse();
    let config = Config::open(opts.config.as_ref())?;

    debug!("config: {:?}", config);

    let source = ForkifyApi::new(
        &config.api_url,
        Duration::from_secs(config.request_timeout),
    )?;
    info!(
        "forkify {} (source contract {})",
        env!("CARGO_PKG_VERSION"),
        forkify_lib::LIB_VERSION
    );

    let storage: Arc<dyn Storage> = if opts.ephemeral {
        Arc::new(MemoryStorage::default())
    } else {
        let storage = FileStorage::open(&config.storage_path)?;
        debug!("likes stored at {:?}", storage.path());
        Arc::new(storage)
    };

    let ctx = AppContext::new(Arc::new(source), storage, Arc::new(TerminalView::new()))
        .with_results_per_page(config.results_per_page);

    match opts.subcmd.unwrap_or(Command::Shell) {
        Command::Search { query, page } => {
            ensure(dispatch(&ctx, Event::SearchSubmitted(query)).await)?;
            if page > 1 {
                dispatch(&ctx, Event::ResultsPage(page)).await;
            }
        }
        Command::Recipe { id, servings } => {
            ensure(dispatch(&ctx, Event::Load(Some(id))).await)?;
            if let Some(target) = servings {
                control_scale_servings(&ctx, target).await;
            }
        }
        Command::Likes => {
            dispatch(&ctx, Event::Load(None)).await;
        }
        Command::Like { id } => {
            ensure(dispatch(&ctx, Event::Load(Some(id))).await)?;
            dispatch(&ctx, Event::LikeToggled).await;
        }
        Command::Shell => {
            dispatch(&ctx, Event::Load(None)).await;
            shell::run(&ctx).await?;
        }
    }

    Ok(())
}
