//! `todo-view`: fetch the todo list and print the first few titles.
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use colored::Colorize;
use todo_core::{TodoClient, TodoItem};
use tracing::level_filters::LevelFilter;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod error;
mod query;
mod render;
mod ui;

use cli::CliArgs;
use config::ViewConfig;
use error::ViewError;
use query::QueryCache;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    let config = ViewConfig::from(&args);
    debug!("running with {:?}", config);

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("todo-view failed: {:?}", e);
            eprintln!("{}: {}", "Error".red().bold(), error::report(&e));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level_filter = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let env_filter = EnvFilter::builder()
        .with_default_directive(level_filter.into())
        .with_env_var("TODO_VIEW_LOG")
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

async fn run(config: &ViewConfig) -> Result<(), ViewError> {
    let client = TodoClient::new(&config.base_url);
    let mut cache = QueryCache::new(config.stale_time);

    let Some(interval) = config.watch_interval else {
        return show(&client, &mut cache, config.display_limit, &mut io::stdout()).await;
    };

    loop {
        let result = show(&client, &mut cache, config.display_limit, &mut io::stdout()).await;
        if let Err(e) = result {
            if cache.data().is_none() {
                return Err(e);
            }
            warn!("refresh failed, keeping previously shown todos: {}", e);
        }
        tokio::time::sleep(interval).await;
    }
}

/// Load the todos through the cache, with a spinner while a fetch is in
/// flight, and render the first `limit` of them.
async fn show<W: Write>(
    client: &TodoClient,
    cache: &mut QueryCache<Vec<TodoItem>>,
    limit: usize,
    out: &mut W,
) -> Result<(), ViewError> {
    let now = Instant::now();
    let spinner = cache.is_stale(now).then(|| ui::create_spinner("Loading..."));
    let result = cache.fetch(now, || client.fetch_todos()).await;
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let todos = result?;
    debug!("rendering {} of {} todos", limit.min(todos.len()), todos.len());
    render::render_todos(out, todos, limit)?;
    Ok(())
}
