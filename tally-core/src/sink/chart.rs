//! Chart description handed to an external renderer.

use serde::{Deserialize, Serialize};
use tally_types::FrequencyEntry;

const TITLE: &str = "Most Frequent Words";
const EMPTY_TITLE: &str = "No Words Found";
const EMPTY_MESSAGE: &str = "No words found in the provided text";
const X_LABEL: &str = "Words";
const Y_LABEL: &str = "Frequency";

/// One bar of a frequency chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartBar {
    pub word: String,
    pub frequency: u64,
}

/// Renderer-independent bar chart of the most frequent words.
///
/// When no words were found the chart has no bars and carries a placeholder
/// message; only that chart has a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<ChartBar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ChartSpec {
    /// Builds a chart of the first `top_n` rows.
    pub fn from_entries(rows: &[FrequencyEntry], top_n: usize) -> Self {
        if rows.is_empty() {
            return Self::placeholder();
        }

        Self {
            title: TITLE.to_string(),
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            bars: rows
                .iter()
                .take(top_n)
                .map(|e| ChartBar {
                    word: e.word.clone(),
                    frequency: e.frequency,
                })
                .collect(),
            message: None,
        }
    }

    /// The "no data" chart.
    pub fn placeholder() -> Self {
        Self {
            title: EMPTY_TITLE.to_string(),
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            bars: Vec::new(),
            message: Some(EMPTY_MESSAGE.to_string()),
        }
    }

    /// Returns `true` for the "no data" chart.
    pub fn is_placeholder(&self) -> bool {
        self.message.is_some()
    }
}
