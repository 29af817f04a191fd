// src/viz_export.rs
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::json;
use std::{collections::BTreeMap, fs, path::Path};

use crate::models::{DailyMood, Emotion, ScoredHeadline};

/* -------------------------------------------------------------------------- */
/* Entry point                                                                */
/* -------------------------------------------------------------------------- */

/// Write all D3-ready visualization JSONs for one run into `out/<date>/`.
pub fn write_all_viz(
    out_dir_for_run: &Path, // e.g., out/2024-01-02
    run_date: &str,         // "YYYY-MM-DD"
    topic: &str,
    scored: &[ScoredHeadline],
    daily: &[DailyMood],
) -> Result<()> {
    fs::create_dir_all(out_dir_for_run)
        .with_context(|| format!("create {:?}", out_dir_for_run))?;

    // 1) Mood arc (daily mean sentiment, with the neutral baseline)
    let mood = build_mood(daily);
    write_json(out_dir_for_run.join("viz.mood.json"), &mood)?;

    // 2) Affect distribution (stacked-area series per emotion)
    let affect = build_affect(daily);
    write_json(out_dir_for_run.join("viz.affect.json"), &affect)?;

    // 3) Raw per-headline score table
    write_json(out_dir_for_run.join("viz.headlines.json"), &scored)?;

    // 4) Per-run index
    let idx = json!({
        "date": run_date,
        "topic": topic,
        "version": 1,
        "counts": {
            "headlines": scored.len(),
            "days": daily.len(),
        },
        "files": [
            "viz.mood.json",
            "viz.affect.json",
            "viz.headlines.json"
        ]
    });
    write_json(out_dir_for_run.join("viz.index.json"), &idx)?;

    Ok(())
}

fn write_json<P: AsRef<Path>, T: ?Sized + Serialize>(path: P, value: &T) -> Result<()> {
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .map(|_| ())
        .map_err(|e| e.into())
}

/* -------------------------------------------------------------------------- */
/* Mood arc                                                                   */
/* -------------------------------------------------------------------------- */

#[derive(Serialize)]
struct VMood {
    dates: Vec<String>,
    sentiment: Vec<f64>,
    neutral: f64, // baseline for the dashed zero line
}

fn build_mood(daily: &[DailyMood]) -> VMood {
    VMood {
        dates: daily.iter().map(|d| d.date.to_string()).collect(),
        sentiment: daily.iter().map(|d| d.sentiment).collect(),
        neutral: 0.0,
    }
}

/* -------------------------------------------------------------------------- */
/* Affect distribution                                                        */
/* -------------------------------------------------------------------------- */

#[derive(Serialize)]
struct VAffect {
    dates: Vec<String>,
    /// One series per emotion, emitted in canonical order, aligned to `dates`.
    series: BTreeMap<Emotion, Vec<f64>>,
}

fn build_affect(daily: &[DailyMood]) -> VAffect {
    let mut series: BTreeMap<Emotion, Vec<f64>> = BTreeMap::new();
    for &e in Emotion::ALL.iter() {
        series.insert(e, daily.iter().map(|d| d.emotions[&e]).collect());
    }
    VAffect {
        dates: daily.iter().map(|d| d.date.to_string()).collect(),
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::zero_emotions;

    fn day(date: &str, sentiment: f64, anticipation: f64) -> DailyMood {
        let mut emotions = zero_emotions();
        emotions.insert(Emotion::Anticipation, anticipation);
        DailyMood {
            date: date.parse().unwrap(),
            sentiment,
            emotions,
        }
    }

    #[test]
    fn test_mood_series_aligns_with_dates() {
        let mood = build_mood(&[day("2024-01-01", 1.5, 0.0), day("2024-01-02", -0.5, 0.0)]);
        assert_eq!(mood.dates, ["2024-01-01", "2024-01-02"]);
        assert_eq!(mood.sentiment, [1.5, -0.5]);
        assert_eq!(mood.neutral, 0.0);
    }

    #[test]
    fn test_affect_emits_all_eight_series() {
        let affect = build_affect(&[day("2024-01-01", 0.0, 0.4)]);
        assert_eq!(affect.series.len(), 8);
        assert_eq!(affect.series[&Emotion::Anticipation], [0.4]);
        assert_eq!(affect.series[&Emotion::Joy], [0.0]);
    }

    #[test]
    fn test_empty_run_serializes_to_empty_series() {
        let mood = build_mood(&[]);
        assert!(mood.dates.is_empty() && mood.sentiment.is_empty());
        let affect = build_affect(&[]);
        assert!(affect.series.values().all(|s| s.is_empty()));
    }

    #[test]
    fn test_emotion_keys_serialize_in_canonical_order() {
        let affect = build_affect(&[day("2024-01-01", 0.0, 0.4)]);
        let json = serde_json::to_string(&affect).unwrap();
        let joy = json.find("\"joy\"").unwrap();
        let anger = json.find("\"anger\"").unwrap();
        let trust = json.find("\"trust\"").unwrap();
        assert!(joy < anger && anger < trust);
    }
}
