use indexmap::IndexMap;
use serde::Serialize;
use std::collections::VecDeque;

use crate::parser::MessageRecord;

/// One smoothed point of the mood timeline: the trailing-window mean of a
/// sender's polarity at a given parse-order index.
#[derive(Debug, Clone, Serialize)]
pub struct MoodPoint {
    pub index: usize,
    pub sender: String,
    pub value: f64,
}

/// Trailing moving average of polarity per sender over parse order.
///
/// Every sender in `records` contributes a line, indexed on the shared
/// message axis. Points before a sender's window first fills are omitted.
pub fn mood_series(records: &[MessageRecord], window: usize) -> Vec<MoodPoint> {
    let window = window.max(1);
    let mut trailing: IndexMap<&str, VecDeque<f64>> = IndexMap::new();
    let mut points = Vec::new();

    for (index, record) in records.iter().enumerate() {
        let buffer = trailing.entry(record.sender.as_str()).or_default();
        buffer.push_back(record.polarity);
        if buffer.len() > window {
            buffer.pop_front();
        }
        if buffer.len() == window {
            points.push(MoodPoint {
                index,
                sender: record.sender.clone(),
                value: buffer.iter().sum::<f64>() / window as f64,
            });
        }
    }

    points
}
