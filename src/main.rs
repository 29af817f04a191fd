mod aggregate;
mod api_types;
mod cache;
mod config;
mod fetch;
mod lexicon;
mod models;
mod orchestrator;
mod render;
mod score;
mod viz_export;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use std::time::Duration;
use tracing::{debug, info};

use crate::cache::TtlCache;
use crate::config::{
    Config, DEFAULT_API_BASE, DEFAULT_CACHE_TTL_SECS, DEFAULT_LANGUAGE, DEFAULT_PAGE_SIZE,
};
use crate::lexicon::Lexicon;
use crate::orchestrator::run_analysis;

/// News Mood Arc - emotional mood/affect arcs for live news headlines
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// News topic to analyze (e.g. "Apple", "Climate Change", "Election")
    #[arg(short, long, default_value = "AI")]
    topic: String,

    /// Output directory for generated files (default: "out")
    #[arg(short, long, default_value = "out")]
    output_dir: String,

    /// Path to the NRC-format word-emotion lexicon (overrides NEWS_LEXICON)
    #[arg(short, long)]
    lexicon: Option<String>,

    /// News API key (overrides NEWS_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Maximum number of articles to request
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: u32,
}

fn resolve_api_key(args: &Args) -> Result<String> {
    if let Some(ref key) = args.api_key {
        debug!("Using API key from --api-key argument");
        return Ok(key.clone());
    }
    match std::env::var("NEWS_API_KEY") {
        Ok(key) if !key.is_empty() => Ok(key),
        _ => Err(anyhow::anyhow!(
            "No News API key configured.\n\
             Use --api-key or set the NEWS_API_KEY environment variable.\n\
             Keys are free at https://newsapi.org.",
        )),
    }
}

fn resolve_lexicon_path(args: &Args) -> Result<String> {
    if let Some(ref path) = args.lexicon {
        debug!("Using lexicon file from --lexicon argument: {}", path);
        return Ok(path.clone());
    }
    match std::env::var("NEWS_LEXICON") {
        Ok(path) if !path.is_empty() => Ok(path),
        _ => Err(anyhow::anyhow!(
            "No word-emotion lexicon configured.\n\
             Use --lexicon or set the NEWS_LEXICON environment variable.\n\
             Expected format: NRC Emotion Lexicon TSV (word<TAB>tag<TAB>0|1).",
        )),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();

    info!("Starting news_mood_arc");

    let args = Args::parse();

    let api_key = resolve_api_key(&args)?;
    let lexicon_path = resolve_lexicon_path(&args)?;
    let lexicon = Lexicon::from_tsv_path(&lexicon_path)?;
    if lexicon.is_empty() {
        return Err(anyhow::anyhow!(
            "Lexicon at {} parsed to zero entries; is it NRC TSV format?",
            lexicon_path
        ));
    }

    let cfg = Config {
        api_key,
        api_base: DEFAULT_API_BASE.to_string(),
        language: DEFAULT_LANGUAGE.to_string(),
        page_size: args.page_size,
        cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
    };

    // feed timestamps are UTC; the run date just names the output dir
    let run_date = Utc::now().date_naive().to_string();
    info!(
        "Run configuration - topic={}, run_date={}, output_dir={}",
        args.topic, run_date, args.output_dir
    );

    let client = reqwest::Client::builder().build()?;
    let mut cache = TtlCache::new(Duration::from_secs(cfg.cache_ttl_secs));

    run_analysis(
        &client,
        &cfg,
        &lexicon,
        &mut cache,
        &args.topic,
        &run_date,
        &args.output_dir,
    )
    .await
}
