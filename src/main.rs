use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use newssum::api::{NewsSumClient, SuggestionClient};
use newssum::cli::{Cli, Commands};
use newssum::config::Config;
use newssum::domain::{NewsArticle, NewsSource, Suggestion};
use newssum::errors::{NewsSumError, NewsSumResult};
use newssum::logger::Logger;
use newssum::services::{ReaderService, SubscriptionStore};
use newssum::storage::{SqliteLocalStorage, SqliteStorage};

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();
}

async fn run() -> NewsSumResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env()?;
    let logger = Logger::new(config.mode);

    // Initialize storage
    let storage = SqliteStorage::new(&config.db_path)?;
    let local = SqliteLocalStorage::new(storage, &config.origin);

    let service = ReaderService::new(
        NewsSumClient::from_config(&config)?,
        SuggestionClient::from_config(&config)?,
        SubscriptionStore::new(local, logger),
        logger,
    );

    match cli.command {
        Commands::Sources { subscribed } => cmd_sources(&service, subscribed).await,
        Commands::Articles { path } => cmd_articles(&service, &path, false).await,
        Commands::Open { path } => cmd_articles(&service, &path, true).await,
        Commands::About => cmd_about(&service).await,
        Commands::Health => cmd_health(&service).await,
        Commands::Suggest { query } => cmd_suggest(&service, &query).await,
        Commands::Subscribe { paths } => cmd_subscribe(&service, &paths),
        Commands::Subscriptions => cmd_subscriptions(&service),
        Commands::LastRead { path } => cmd_last_read(&service, path),
    }
}

fn require_path(path: &str) -> NewsSumResult<&str> {
    let path = path.trim().trim_matches('/');
    if path.is_empty() {
        return Err(NewsSumError::InvalidInput("Source path is empty".to_string()));
    }
    Ok(path)
}

async fn cmd_sources(
    service: &ReaderService<SqliteLocalStorage>,
    subscribed: bool,
) -> NewsSumResult<()> {
    let sources = if subscribed {
        service.subscribed_sources().await?
    } else {
        service.news().get_sources().await?
    };

    if sources.is_empty() {
        if subscribed {
            println!("No subscriptions.");
        } else {
            println!("No sources available.");
        }
        return Ok(());
    }

    let subs = service.store().subscriptions();
    for NewsSource { path, desc } in &sources {
        let marker = if subs.contains(path) { "*" } else { " " };
        println!(" {} {} ({})", marker, desc, path);
    }

    Ok(())
}

async fn cmd_articles(
    service: &ReaderService<SqliteLocalStorage>,
    path: &str,
    remember: bool,
) -> NewsSumResult<()> {
    let path = require_path(path)?;

    let articles = if remember {
        service.open_source(path).await?
    } else {
        service.news().get_articles(path).await?
    };

    if articles.is_empty() {
        println!("No articles.");
        return Ok(());
    }

    for article in &articles {
        print_article(article);
    }

    Ok(())
}

fn print_article(article: &NewsArticle) {
    if article.is_section() {
        println!("== {} ==\n", article.title);
        return;
    }

    println!("{}", article.title);
    println!("  {}", article.url);
    if !article.summary.is_empty() {
        println!("  {}", article.summary);
    }
    for suggestion in &article.suggestions {
        print_suggestion("    ~ ", suggestion);
    }
    println!();
}

fn print_suggestion(prefix: &str, suggestion: &Suggestion) {
    match (suggestion.title(), suggestion.url()) {
        (Some(title), Some(url)) => println!("{}{} <{}>", prefix, title, url),
        (Some(title), None) => println!("{}{}", prefix, title),
        _ => println!("{}{}", prefix, suggestion.as_value()),
    }
}

async fn cmd_about(service: &ReaderService<SqliteLocalStorage>) -> NewsSumResult<()> {
    let properties = service.news().get_app_properties().await?;

    let mut entries: Vec<_> = properties.into_iter().collect();
    entries.sort();

    for (key, value) in entries {
        println!("{}: {}", key, value);
    }

    Ok(())
}

async fn cmd_health(service: &ReaderService<SqliteLocalStorage>) -> NewsSumResult<()> {
    if service.suggestions().is_available().await {
        println!("Suggestion service is available.");
    } else {
        println!("Suggestion service is not available.");
    }
    Ok(())
}

async fn cmd_suggest(
    service: &ReaderService<SqliteLocalStorage>,
    query: &str,
) -> NewsSumResult<()> {
    if query.trim().is_empty() {
        return Err(NewsSumError::InvalidInput("Query is empty".to_string()));
    }

    let suggestions = service.search(query).await?;

    if suggestions.is_empty() {
        println!("No suggestions.");
        return Ok(());
    }

    for suggestion in &suggestions {
        print_suggestion("  ", suggestion);
    }

    Ok(())
}

fn cmd_subscribe(
    service: &ReaderService<SqliteLocalStorage>,
    paths: &[String],
) -> NewsSumResult<()> {
    let paths = paths
        .iter()
        .map(|p| require_path(p))
        .collect::<NewsSumResult<Vec<_>>>()?;

    service.store().update_subscription(&paths)?;

    let subs = service.store().subscriptions();
    println!("Subscribed to {} sources.", subs.len());
    Ok(())
}

fn cmd_subscriptions(service: &ReaderService<SqliteLocalStorage>) -> NewsSumResult<()> {
    let subs = service.store().subscriptions();

    if subs.is_empty() {
        println!("No subscriptions.");
        return Ok(());
    }

    for sub in subs {
        println!("{}", sub);
    }

    Ok(())
}

fn cmd_last_read(
    service: &ReaderService<SqliteLocalStorage>,
    path: Option<String>,
) -> NewsSumResult<()> {
    match path {
        Some(path) => {
            let path = require_path(&path)?;
            service.store().set_last_read(path)?;
            println!("Last read: {}", path);
        }
        None => match service.store().get_last_read() {
            Some(last) if !last.is_empty() => println!("{}", last),
            _ => println!("Nothing read yet."),
        },
    }

    Ok(())
}
