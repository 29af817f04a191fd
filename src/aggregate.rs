use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::{zero_emotions, DailyMood, Emotion, ScoredHeadline};

/// Group scored headlines by calendar day and compute per-day arithmetic
/// means of sentiment and of each emotion frequency independently.
///
/// Rows come out ascending by date (one per distinct date, no gap filling);
/// an empty input produces an empty output. Grouping and averaging are
/// order-independent over the input multiset.
pub fn aggregate_daily(scored: &[ScoredHeadline]) -> Vec<DailyMood> {
    let mut by_date: BTreeMap<NaiveDate, Vec<&ScoredHeadline>> = BTreeMap::new();
    for sh in scored {
        by_date.entry(sh.date).or_default().push(sh);
    }

    by_date
        .into_iter()
        .map(|(date, group)| {
            let n = group.len() as f64;
            let sentiment = group.iter().map(|sh| sh.sentiment as f64).sum::<f64>() / n;

            let mut emotions = zero_emotions();
            for &e in Emotion::ALL.iter() {
                let sum: f64 = group.iter().map(|sh| sh.emotions[&e]).sum();
                emotions.insert(e, sum / n);
            }

            DailyMood { date, sentiment, emotions }
        })
        .collect()
}
