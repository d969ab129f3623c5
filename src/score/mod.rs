pub mod compatibility;
pub mod timeline;

use serde::Deserialize;

pub use compatibility::{score, ScoreError, ScoreResult, SenderAggregate};
pub use timeline::{mood_series, MoodPoint};

/// Scoring policy knobs. All of these are tunable constants, not derived
/// values; defaults match the reference behavior. A JSON file with any
/// subset of the fields can override them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Most recent records retained for classification when a transcript is
    /// oversized; a throughput guard, not a correctness requirement.
    pub message_limit: usize,
    /// Additive offset applied to the mean polarity before scaling.
    pub positivity_offset: f64,
    /// Multiplier mapping the offset polarity onto the 0-100 band.
    pub positivity_scale: f64,
    /// Weight of the positivity sub-score in the final score.
    pub positivity_weight: f64,
    /// Weight of the participation-balance sub-score in the final score.
    pub balance_weight: f64,
    /// Smallest moving-average window for the mood series.
    pub min_window: usize,
    /// The window grows with transcript size: total records / this divisor.
    pub window_divisor: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        ScoringConfig {
            message_limit: 5000,
            positivity_offset: 0.2,
            positivity_scale: 200.0,
            positivity_weight: 0.6,
            balance_weight: 0.4,
            min_window: 5,
            window_divisor: 20,
        }
    }
}

impl ScoringConfig {
    /// Moving-average window for a transcript of `total` records.
    pub fn window_size(&self, total: usize) -> usize {
        (total / self.window_divisor).max(self.min_window)
    }
}
