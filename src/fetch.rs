use anyhow::{bail, Context, Result};
use chrono::DateTime;
use reqwest::Client;
use std::collections::HashSet;
use tracing::{debug, info, warn};
use xxhash_rust::xxh3::xxh3_64;

use crate::api_types::{NewsApiArticle, NewsApiResponse};
use crate::config::Config;
use crate::models::Headline;

fn make_headline_id(source: &str, title: &str) -> String {
    format!("{:016x}", xxh3_64(format!("{}|{}", source, title).as_bytes()))
}

/// Fetch recent headlines for a topic. Wire failures and NewsAPI error
/// bodies surface as errors; they are never downgraded to an empty result
/// that would read as "no emotion" downstream.
pub async fn fetch_headlines(client: &Client, cfg: &Config, topic: &str) -> Result<Vec<Headline>> {
    let start = std::time::Instant::now();
    debug!("Fetching headlines - topic={}, page_size={}", topic, cfg.page_size);

    let page_size = cfg.page_size.to_string();
    let resp = client
        .get(&cfg.api_base)
        .query(&[
            ("q", topic),
            ("language", cfg.language.as_str()),
            ("sortBy", "publishedAt"),
            ("pageSize", page_size.as_str()),
            ("apiKey", cfg.api_key.as_str()),
        ])
        .send()
        .await
        .with_context(|| format!("Request failed for {}", cfg.api_base))?;

    let resp = resp
        .error_for_status()
        .context("News API returned an HTTP error; check your API key or retry later")?;

    let api_resp: NewsApiResponse = resp
        .json()
        .await
        .context("Decoding JSON from News API")?;

    if api_resp.status != "ok" {
        bail!(
            "News API error - code={}, message={}",
            api_resp.code.as_deref().unwrap_or("unknown"),
            api_resp.message.as_deref().unwrap_or("no message")
        );
    }

    let total = api_resp.articles.len();
    let headlines = to_headlines(api_resp.articles);

    let elapsed = start.elapsed();
    info!(
        "Headline fetch completed - duration={:.2}s, topic={}, fetched={}, usable={}",
        elapsed.as_secs_f32(),
        topic,
        total,
        headlines.len()
    );
    Ok(headlines)
}

/// Map wire articles to domain headlines, applying the boundary policy:
/// articles with an empty/missing title or an unparseable `publishedAt` are
/// excluded here, before any scoring sees them. Exact source+title
/// duplicates collapse to one headline.
pub fn to_headlines(articles: Vec<NewsApiArticle>) -> Vec<Headline> {
    let mut out = Vec::with_capacity(articles.len());
    let mut seen: HashSet<String> = HashSet::new();
    let mut dropped_title = 0usize;
    let mut dropped_date = 0usize;
    let mut dropped_dup = 0usize;

    for a in articles {
        let title = match a.title.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => {
                dropped_title += 1;
                continue;
            }
        };

        let published = match a
            .published_at
            .as_deref()
            .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
        {
            Some(dt) => dt.date_naive(), // time-of-day discarded
            None => {
                dropped_date += 1;
                continue;
            }
        };

        let source = a
            .source
            .and_then(|s| s.name)
            .or(a.url)
            .unwrap_or_default();

        let id = make_headline_id(&source, &title);
        if !seen.insert(id.clone()) {
            dropped_dup += 1;
            continue;
        }

        out.push(Headline {
            id,
            title,
            source,
            published,
        });
    }

    if dropped_title + dropped_date + dropped_dup > 0 {
        warn!(
            "Excluded articles at the wire boundary - empty_title={}, bad_date={}, duplicates={}",
            dropped_title, dropped_date, dropped_dup
        );
    }
    out
}
