//! Chat compatibility analysis.
//!
//! Parses an exported chat transcript into discrete messages, scores each
//! message's emotional polarity through an external sentiment classifier,
//! and derives a 0-100 compatibility score plus a smoothed per-sender mood
//! timeline for the two most active participants.

pub mod analysis;
pub mod classify;
pub mod parser;
pub mod score;

pub use analysis::{analyze, AnalysisEvent};
pub use classify::{Sentiment, SentimentClassifier, SentimentLabel};
pub use parser::{parse_transcript, MessageRecord};
pub use score::{ScoreError, ScoreResult, ScoringConfig, SenderAggregate};
