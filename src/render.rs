// src/render.rs
use crate::models::{DailyMood, Emotion};

/// Human-readable run summary written next to the viz JSONs.
pub fn render_mood_report(topic: &str, headline_count: usize, daily: &[DailyMood]) -> String {
    let mut md = String::new();
    md.push_str(&format!("# News Mood Arc — {}\n\n", topic));
    md.push_str(&format!(
        "Scored {} headlines across {} day(s).\n\n",
        headline_count,
        daily.len()
    ));

    if daily.is_empty() {
        md.push_str("No scorable headlines were found for this topic.\n");
        return md;
    }

    md.push_str("## Daily Mood\n\n");
    md.push_str("| Date | Mean sentiment | Dominant emotion |\n");
    md.push_str("|------|---------------:|------------------|\n");
    for d in daily {
        md.push_str(&format!(
            "| {} | {:+.2} | {} |\n",
            d.date,
            d.sentiment,
            dominant_emotion(d)
        ));
    }
    md.push('\n');

    md.push_str("## Affect\n\n");
    md.push_str("Mean normalized emotion frequency per day:\n\n");
    md.push_str("| Date |");
    for e in Emotion::ALL.iter() {
        md.push_str(&format!(" {} |", e));
    }
    md.push('\n');
    md.push_str("|------|");
    for _ in Emotion::ALL.iter() {
        md.push_str("-----:|");
    }
    md.push('\n');
    for d in daily {
        md.push_str(&format!("| {} |", d.date));
        for e in Emotion::ALL.iter() {
            md.push_str(&format!(" {:.3} |", d.emotions[e]));
        }
        md.push('\n');
    }

    md
}

fn dominant_emotion(d: &DailyMood) -> String {
    let (best, value) = d
        .emotions
        .iter()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(e, v)| (*e, *v))
        .unwrap_or((Emotion::Joy, 0.0));
    if value == 0.0 {
        "none".to_string()
    } else {
        best.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::zero_emotions;

    #[test]
    fn test_report_lists_one_row_per_day() {
        let mut emotions = zero_emotions();
        emotions.insert(Emotion::Fear, 0.6);
        let daily = vec![DailyMood {
            date: "2024-01-01".parse().unwrap(),
            sentiment: -1.5,
            emotions,
        }];
        let md = render_mood_report("climate", 12, &daily);
        assert!(md.contains("# News Mood Arc — climate"));
        assert!(md.contains("| 2024-01-01 | -1.50 | fear |"));
    }

    #[test]
    fn test_empty_run_renders_no_data_notice() {
        let md = render_mood_report("ai", 0, &[]);
        assert!(md.contains("No scorable headlines"));
    }
}
