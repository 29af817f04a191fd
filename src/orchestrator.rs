use anyhow::{Context, Result};
use reqwest::Client;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::aggregate::aggregate_daily;
use crate::cache::TtlCache;
use crate::config::Config;
use crate::fetch::fetch_headlines;
use crate::lexicon::Lexicon;
use crate::models::{Headline, ScoredHeadline};
use crate::render::render_mood_report;
use crate::score::score_text;
use crate::viz_export::write_all_viz;

pub async fn run_analysis(
    client: &Client,
    cfg: &Config,
    lexicon: &Lexicon,
    cache: &mut TtlCache<String, Vec<Headline>>,
    topic: &str,
    run_date: &str,
    output_dir: &str,
) -> Result<()> {
    let pipeline_start = std::time::Instant::now();
    info!("Analysis started - topic={}, run_date={}", topic, run_date);

    // 1) fetch headlines, consulting the TTL cache first
    let headlines = match cache.get(&topic.to_string()) {
        Some(cached) => {
            info!("Cache hit - topic={}, headlines={}", topic, cached.len());
            cached
        }
        None => {
            let fetched = fetch_headlines(client, cfg, topic).await?;
            cache.insert(topic.to_string(), fetched.clone());
            fetched
        }
    };

    if headlines.is_empty() {
        warn!(
            "No recent articles found for topic '{}'. Try a different keyword.",
            topic
        );
    }

    // 2) score each headline title independently
    let score_start = std::time::Instant::now();
    let scored: Vec<ScoredHeadline> = headlines
        .iter()
        .map(|h| {
            let score = score_text(lexicon, &h.title);
            ScoredHeadline {
                id: h.id.clone(),
                date: h.published,
                title: h.title.clone(),
                sentiment: score.sentiment,
                emotions: score.emotions,
            }
        })
        .collect();
    debug!(
        "Scoring completed - duration={:.3}s, headlines={}",
        score_start.elapsed().as_secs_f32(),
        scored.len()
    );

    // 3) aggregate per calendar day
    let daily = aggregate_daily(&scored);
    info!(
        "Aggregation completed - days={}, headlines={}",
        daily.len(),
        scored.len()
    );
    if daily.is_empty() {
        // no data is a defined outcome, the outputs below record it as such
        warn!("No daily rows produced for topic '{}'", topic);
    }

    // 4) write viz JSONs and the markdown report
    let out_dir = Path::new(output_dir).join(run_date);
    write_all_viz(&out_dir, run_date, topic, &scored, &daily)?;

    let report = render_mood_report(topic, scored.len(), &daily);
    let report_path = out_dir.join("report.md");
    std::fs::write(&report_path, report)
        .with_context(|| format!("write {:?}", report_path))?;

    info!(
        "Analysis completed - duration={:.2}s, output={}",
        pipeline_start.elapsed().as_secs_f32(),
        out_dir.display()
    );
    Ok(())
}
