use serde::Serialize;
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString, IntoEnumIterator};

use crate::chart::{DIMENSION_COUNT, MAX_SCORE};

pub const CHECKLIST_LEN: usize = 6;

/// The five scored dimensions, in angular order: index 0 sits at the top
/// of the chart, later indices advance clockwise.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Value,
    Future,
    Past,
    Health,
    Dividend,
}

impl Dimension {
    pub fn as_index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(idx: usize) -> Option<Self> {
        Self::iter().nth(idx % DIMENSION_COUNT)
    }

    pub fn label(&self) -> String {
        self.to_string().to_uppercase()
    }

    fn default_description(&self) -> &'static str {
        match self {
            Self::Value => {
                "Calculated based on P/E ratio, PEG ratio, and Price to Book \
                 relative to peers and industry average."
            }
            Self::Future => {
                "Analyst forecasts for revenue and earnings growth over the next 1-3 years."
            }
            Self::Past => {
                "Historical earnings performance and growth stability over the last 5 years."
            }
            Self::Health => {
                "Analysis of balance sheet strength, debt levels, and coverage ratios."
            }
            Self::Dividend => {
                "Evaluation of dividend yield, stability, and payout ratios relative to market."
            }
        }
    }
}

/// One dimension's display data. The checklist is secondary display only;
/// the geometry core reads nothing but the score.
#[derive(Debug, Clone)]
pub struct DimensionData {
    pub key: Dimension,
    pub score: u8,
    pub description: String,
    pub checklist: [bool; CHECKLIST_LEN],
}

impl DimensionData {
    pub fn new(key: Dimension, score: u8) -> Self {
        let score = score.min(MAX_SCORE);
        Self {
            key,
            score,
            description: key.default_description().to_string(),
            checklist: derive_checklist(score),
        }
    }

    pub fn set_score(&mut self, score: u8) {
        self.score = score.min(MAX_SCORE);
        self.checklist = derive_checklist(self.score);
    }
}

/// Demo scores matching the built-in dataset.
pub const DEMO_SCORES: [u8; DIMENSION_COUNT] = [3, 7, 5, 7, 1];

pub fn demo_dimensions() -> [DimensionData; DIMENSION_COUNT] {
    dimensions_from_scores(DEMO_SCORES)
}

pub fn dimensions_from_scores(scores: [u8; DIMENSION_COUNT]) -> [DimensionData; DIMENSION_COUNT] {
    std::array::from_fn(|i| {
        let key = Dimension::from_index(i).unwrap_or(Dimension::Value);
        DimensionData::new(key, scores[i])
    })
}

fn derive_checklist(score: u8) -> [bool; CHECKLIST_LEN] {
    std::array::from_fn(|i| (i as u8 + 1) < score)
}
