use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The eight NRC emotion categories, in canonical reporting order.
/// Declaration order is the canonical order; `Ord` (and therefore
/// `BTreeMap<Emotion, _>` iteration) follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Anger,
    Fear,
    Sadness,
    Disgust,
    Anticipation,
    Surprise,
    Trust,
}

impl Emotion {
    pub const ALL: [Emotion; 8] = [
        Emotion::Joy,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Sadness,
        Emotion::Disgust,
        Emotion::Anticipation,
        Emotion::Surprise,
        Emotion::Trust,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Sadness => "sadness",
            Emotion::Disgust => "disgust",
            Emotion::Anticipation => "anticipation",
            Emotion::Surprise => "surprise",
            Emotion::Trust => "trust",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lexicon tag: either one of the eight emotions, or a valence pseudo-tag.
/// Valence tags feed the sentiment score only and never enter the normalized
/// emotion vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tag {
    Emotion(Emotion),
    Positive,
    Negative,
}

impl FromStr for Tag {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "joy" => Ok(Tag::Emotion(Emotion::Joy)),
            "anger" => Ok(Tag::Emotion(Emotion::Anger)),
            "fear" => Ok(Tag::Emotion(Emotion::Fear)),
            "sadness" => Ok(Tag::Emotion(Emotion::Sadness)),
            "disgust" => Ok(Tag::Emotion(Emotion::Disgust)),
            "anticipation" => Ok(Tag::Emotion(Emotion::Anticipation)),
            "surprise" => Ok(Tag::Emotion(Emotion::Surprise)),
            "trust" => Ok(Tag::Emotion(Emotion::Trust)),
            "positive" => Ok(Tag::Positive),
            "negative" => Ok(Tag::Negative),
            _ => Err(()),
        }
    }
}

/// One fetched headline, already validated at the wire boundary: the title is
/// non-empty and the publication timestamp parsed to a calendar day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Headline {
    pub id: String,
    pub title: String,
    pub source: String,
    pub published: NaiveDate,
}

/// Emotion scorer output for one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadlineScore {
    /// positive-word count minus negative-word count, unnormalized
    pub sentiment: i64,
    /// normalized emotion frequencies; always all 8 keys, each in [0,1]
    pub emotions: BTreeMap<Emotion, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredHeadline {
    pub id: String,
    pub date: NaiveDate,
    pub title: String,
    pub sentiment: i64,
    pub emotions: BTreeMap<Emotion, f64>,
}

/// Per-day means across every scored headline published that day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyMood {
    pub date: NaiveDate,
    pub sentiment: f64,
    pub emotions: BTreeMap<Emotion, f64>,
}

/// An emotion vector with every category present and zeroed.
pub fn zero_emotions() -> BTreeMap<Emotion, f64> {
    Emotion::ALL.iter().map(|&e| (e, 0.0)).collect()
}
