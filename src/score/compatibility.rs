use indexmap::IndexMap;
use serde::Serialize;

use super::timeline::{mood_series, MoodPoint};
use super::ScoringConfig;
use crate::parser::MessageRecord;

/// Per-participant aggregate, computed fresh per analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct SenderAggregate {
    pub name: String,
    pub message_count: usize,
    pub mean_polarity: f64,
}

/// The final result bundle handed to the presentation layer. Passive data,
/// no rendering concerns.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreResult {
    pub final_score: f64,
    pub positivity: f64,
    pub balance: f64,
    /// The two most active senders, most active first.
    pub participants: [SenderAggregate; 2],
    pub mood_series: Vec<MoodPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoreError {
    #[error("need at least two people in the chat, found {found}")]
    InsufficientParticipants { found: usize },
}

/// Score a polarity-annotated transcript.
///
/// The two most frequent senders become the participants; ties keep
/// first-appearance order (insertion-ordered counting plus a stable sort).
/// Messages from other senders stay in the mood timeline but are excluded
/// from the scalar sub-scores.
pub fn score(
    records: &[MessageRecord],
    config: &ScoringConfig,
) -> Result<ScoreResult, ScoreError> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for record in records {
        *counts.entry(record.sender.as_str()).or_insert(0) += 1;
    }

    if counts.len() < 2 {
        return Err(ScoreError::InsufficientParticipants {
            found: counts.len(),
        });
    }

    let mut ranked: Vec<(&str, usize)> = counts.iter().map(|(s, c)| (*s, *c)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let participants: Vec<SenderAggregate> = ranked
        .iter()
        .take(2)
        .map(|&(name, count)| {
            let sum: f64 = records
                .iter()
                .filter(|r| r.sender == name)
                .map(|r| r.polarity)
                .sum();
            SenderAggregate {
                name: name.to_string(),
                message_count: count,
                mean_polarity: sum / count as f64,
            }
        })
        .collect();
    let p1 = &participants[0];
    let p2 = &participants[1];

    let avg = (p1.mean_polarity + p2.mean_polarity) / 2.0;
    let positivity =
        ((avg + config.positivity_offset) * config.positivity_scale).clamp(0.0, 100.0);

    // Both counts are >= 1 by construction, so the denominator is non-zero
    let gap = p1.message_count.abs_diff(p2.message_count) as f64;
    let total = (p1.message_count + p2.message_count) as f64;
    let balance = (1.0 - gap / total) * 100.0;

    let final_score = positivity * config.positivity_weight + balance * config.balance_weight;

    let series = mood_series(records, config.window_size(records.len()));

    Ok(ScoreResult {
        final_score,
        positivity,
        balance,
        participants: [p1.clone(), p2.clone()],
        mood_series: series,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sender: &str, polarity: f64) -> MessageRecord {
        let mut r = MessageRecord::new(
            "1/1/24, 10.00.00".to_string(),
            sender.to_string(),
            "msg".to_string(),
        );
        r.polarity = polarity;
        r
    }

    fn records(spec: &[(&str, f64, usize)]) -> Vec<MessageRecord> {
        let mut out = Vec::new();
        for &(sender, polarity, count) in spec {
            for _ in 0..count {
                out.push(record(sender, polarity));
            }
        }
        out
    }

    #[test]
    fn test_single_sender_is_an_error() {
        let config = ScoringConfig::default();
        let rs = records(&[("Alice", 0.5, 3)]);
        assert_eq!(
            score(&rs, &config).err(),
            Some(ScoreError::InsufficientParticipants { found: 1 })
        );
        assert_eq!(
            score(&[], &config).err(),
            Some(ScoreError::InsufficientParticipants { found: 0 })
        );
    }

    #[test]
    fn test_balance_is_100_for_equal_counts() {
        let config = ScoringConfig::default();
        let rs = records(&[("Alice", 0.0, 4), ("Bob", 0.0, 4)]);
        let result = score(&rs, &config).expect("two participants");
        assert!((result.balance - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_balance_decreases_with_count_gap() {
        let config = ScoringConfig::default();
        let total = 10;
        let mut previous = f64::INFINITY;
        // For a fixed total, widening the gap strictly lowers the balance
        for count1 in [5, 6, 7, 8, 9] {
            let rs = records(&[("Alice", 0.0, count1), ("Bob", 0.0, total - count1)]);
            let result = score(&rs, &config).expect("two participants");
            assert!(result.balance < previous || count1 == 5);
            previous = result.balance;
        }
    }

    #[test]
    fn test_positivity_clamps() {
        let config = ScoringConfig::default();

        // Maximal positivity saturates at 100
        let rs = records(&[("Alice", 1.0, 2), ("Bob", 1.0, 2)]);
        let result = score(&rs, &config).expect("two participants");
        assert!((result.positivity - 100.0).abs() < 1e-9);

        // avg <= -1.2 bottoms out at 0 (only reachable with the offset)
        let rs = records(&[("Alice", -1.0, 2), ("Bob", -1.0, 2)]);
        let result = score(&rs, &config).expect("two participants");
        assert_eq!(result.positivity, 0.0);
    }

    #[test]
    fn test_mean_polarity_per_participant() {
        let config = ScoringConfig::default();
        let rs = vec![
            record("Alice", 0.4),
            record("Alice", 0.8),
            record("Bob", -0.2),
        ];
        let result = score(&rs, &config).expect("two participants");
        assert_eq!(result.participants[0].name, "Alice");
        assert_eq!(result.participants[0].message_count, 2);
        assert!((result.participants[0].mean_polarity - 0.6).abs() < 1e-9);
        assert_eq!(result.participants[1].name, "Bob");
        assert!((result.participants[1].mean_polarity + 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_most_active_sender_ranks_first() {
        let config = ScoringConfig::default();
        let rs = records(&[("Alice", 0.0, 2), ("Bob", 0.0, 5)]);
        let result = score(&rs, &config).expect("two participants");
        assert_eq!(result.participants[0].name, "Bob");
        assert_eq!(result.participants[1].name, "Alice");
    }

    #[test]
    fn test_third_sender_excluded_from_subscores() {
        let config = ScoringConfig::default();
        // Carol's strongly negative messages must not touch the sub-scores
        let rs = records(&[("Alice", 0.5, 4), ("Bob", 0.5, 4), ("Carol", -1.0, 1)]);
        let result = score(&rs, &config).expect("two participants");
        assert!((result.balance - 100.0).abs() < 1e-9);
        let names: Vec<&str> = result
            .participants
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["Alice", "Bob"]);
    }

    #[test]
    fn test_final_score_weighting() {
        let config = ScoringConfig::default();
        // avg = 0.05 -> positivity 50; counts 3 vs 1 -> balance 50
        let rs = records(&[("Alice", 0.1, 3), ("Bob", 0.0, 1)]);
        let result = score(&rs, &config).expect("two participants");
        assert!((result.positivity - 50.0).abs() < 1e-9);
        assert!((result.balance - 50.0).abs() < 1e-9);
        assert!((result.final_score - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_reference_example_scores_100() {
        let config = ScoringConfig::default();
        let rs = vec![record("Alice", 0.8), record("Bob", 0.4)];
        let result = score(&rs, &config).expect("two participants");
        // avg = 0.6 -> (0.6 + 0.2) * 200 = 160, clamped to 100; balance 100
        assert!((result.positivity - 100.0).abs() < 1e-9);
        assert!((result.balance - 100.0).abs() < 1e-9);
        assert!((result.final_score - 100.0).abs() < 1e-9);
    }
}
