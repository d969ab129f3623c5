use serde::Serialize;

/// One logical chat message, possibly reconstructed from several physical
/// lines of the export.
#[derive(Debug, Clone, Serialize)]
pub struct MessageRecord {
    /// Timestamp token exactly as captured from the header line. Opaque;
    /// never re-parsed into a calendar type.
    pub timestamp: String,
    /// Display name before the first colon on the header line.
    pub sender: String,
    /// Message body, continuation lines joined with single spaces.
    pub raw_text: String,
    /// Normalized body; empty means the record is excluded from scoring.
    pub clean_text: String,
    /// Signed polarity in [-1, 1], filled in by the classifier pass.
    pub polarity: f64,
}

impl MessageRecord {
    pub fn new(timestamp: String, sender: String, raw_text: String) -> Self {
        let clean_text = super::clean_text(&raw_text);
        MessageRecord {
            timestamp,
            sender,
            raw_text,
            clean_text,
            polarity: 0.0,
        }
    }
}
