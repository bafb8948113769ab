use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Final match score, restricted to the two 3-set sweeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinalScore {
    #[serde(rename = "3-0")]
    ThreeNil,
    #[serde(rename = "0-3")]
    NilThree,
}

impl FinalScore {
    /// Exact match only; surrounding whitespace must already be trimmed.
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "3-0" => Some(Self::ThreeNil),
            "0-3" => Some(Self::NilThree),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ThreeNil => "3-0",
            Self::NilThree => "0-3",
        }
    }
}

impl fmt::Display for FinalScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A listing row that survived score and date filtering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateMatch {
    pub competition: String,
    #[serde(rename = "date_time")]
    pub scheduled_at: NaiveDateTime,
    pub players: String,
    #[serde(rename = "result")]
    pub final_score: FinalScore,
    #[serde(
        rename = "result_link",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub detail_link: Option<String>,
}

impl CandidateMatch {
    /// `DD/MM HH:MM`, the way the listing shows it
    pub fn display_time(&self) -> String {
        self.scheduled_at.format("%d/%m %H:%M").to_string()
    }
}

/// One player's points per set, serialized as `[name, [points...]]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, Vec<u32>)", into = "(String, Vec<u32>)")]
pub struct SetScorePair {
    pub player_name: String,
    pub points: Vec<u32>,
}

impl SetScorePair {
    pub fn new(player_name: impl Into<String>, points: Vec<u32>) -> Self {
        Self {
            player_name: player_name.into(),
            points,
        }
    }
}

impl From<(String, Vec<u32>)> for SetScorePair {
    fn from((player_name, points): (String, Vec<u32>)) -> Self {
        Self {
            player_name,
            points,
        }
    }
}

impl From<SetScorePair> for (String, Vec<u32>) {
    fn from(pair: SetScorePair) -> Self {
        (pair.player_name, pair.points)
    }
}

/// Candidate plus its set scores and the classifier verdict.
///
/// Only matched records leave the crawler, so `matched` is not part of the
/// wire format and reads back as `true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedMatch {
    #[serde(flatten)]
    pub candidate: CandidateMatch,
    #[serde(rename = "set_results")]
    pub set_scores: Vec<SetScorePair>,
    #[serde(skip_serializing, default = "emitted_as_matched")]
    pub matched: bool,
}

fn emitted_as_matched() -> bool {
    true
}

impl ClassifiedMatch {
    pub fn new(candidate: CandidateMatch, set_scores: Vec<SetScorePair>, matched: bool) -> Self {
        Self {
            candidate,
            set_scores,
            matched,
        }
    }
}
