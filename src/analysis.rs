use tracing::{debug, info};

use crate::classify::{truncate_input, SentimentClassifier};
use crate::parser::{parse_transcript, MessageRecord};
use crate::score::{score, ScoreError, ScoreResult, ScoringConfig};

/// Classification progress is reported every this many records.
const PROGRESS_EVERY: usize = 10;

/// Observable side events of an analysis run. These carry no result data;
/// they exist so the caller can surface truncation and progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisEvent {
    /// The transcript exceeded the record limit; only the most recent
    /// `limit` records are analyzed. Fired once, before classification.
    Truncated { original: usize, limit: usize },
    /// Periodic progress during the sequential classification pass.
    ClassifyProgress { done: usize, total: usize },
}

/// Run the full pipeline: parse, filter, truncate, classify, score.
///
/// Synchronous and single-threaded; the dominant cost is one blocking
/// classifier call per record. A classifier failure on one record downgrades
/// that record to neutral polarity and never aborts the batch.
pub fn analyze<C, F>(
    content: &str,
    classifier: &C,
    config: &ScoringConfig,
    mut on_event: F,
) -> Result<ScoreResult, ScoreError>
where
    C: SentimentClassifier,
    F: FnMut(AnalysisEvent),
{
    let start = std::time::Instant::now();

    let parsed = parse_transcript(content);
    info!("parsed {} messages in {:?}", parsed.len(), start.elapsed());

    // Records with no scorable text (media, deletions, pure links) are
    // dropped before counting anything.
    let mut records: Vec<MessageRecord> = parsed
        .into_iter()
        .filter(|r| !r.clean_text.is_empty())
        .collect();

    if records.len() > config.message_limit {
        let original = records.len();
        debug!(
            "transcript oversized ({original} records), keeping the last {}",
            config.message_limit
        );
        on_event(AnalysisEvent::Truncated {
            original,
            limit: config.message_limit,
        });
        records.drain(..original - config.message_limit);
    }

    let classify_start = std::time::Instant::now();
    let total = records.len();
    for (idx, record) in records.iter_mut().enumerate() {
        record.polarity = match classifier.classify(truncate_input(&record.clean_text)) {
            Ok(sentiment) => sentiment.polarity(),
            // The single point where classifier failure collapses to neutral
            Err(e) => {
                debug!("classifier failed on record {idx}: {e}");
                0.0
            }
        };

        if idx % PROGRESS_EVERY == 0 {
            on_event(AnalysisEvent::ClassifyProgress {
                done: idx + 1,
                total,
            });
        }
    }
    info!(
        "classified {total} messages in {:?}",
        classify_start.elapsed()
    );

    score(&records, config)
}
