pub mod remote;

pub use remote::RemoteClassifier;

/// Longest input the classifier accepts; longer messages are cut here.
pub const MAX_INPUT_CHARS: usize = 512;

/// Coarse label taxonomy shared by the classifier boundary. Anything the
/// model reports that is neither positive nor negative maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Other,
}

impl SentimentLabel {
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case("positive") {
            SentimentLabel::Positive
        } else if label.eq_ignore_ascii_case("negative") {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Other
        }
    }
}

/// One classification outcome: a label plus the model's confidence in [0, 1].
#[derive(Debug, Clone, Copy)]
pub struct Sentiment {
    pub label: SentimentLabel,
    pub score: f64,
}

impl Sentiment {
    /// Signed polarity in [-1, 1]: confidence carries the sign of the label,
    /// and anything non-polar is neutral.
    pub fn polarity(&self) -> f64 {
        match self.label {
            SentimentLabel::Positive => self.score,
            SentimentLabel::Negative => -self.score,
            SentimentLabel::Other => 0.0,
        }
    }
}

/// Errors from the external classifier.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("cannot reach classifier at {0} (is the inference server running?)")]
    Connection(String),
    #[error("classifier request failed: {0}")]
    Http(String),
    #[error("classifier returned status {status}: {body}")]
    Endpoint { status: u16, body: String },
    #[error("malformed classifier response: {0}")]
    ResponseParsing(String),
    #[error("classifier returned no candidates")]
    EmptyResponse,
}

/// The external text -> polarity oracle. Implementations are reused across
/// sequential analysis runs; concurrent calls are not assumed safe.
pub trait SentimentClassifier {
    fn classify(&self, text: &str) -> Result<Sentiment, ClassifierError>;
}

/// Cut `text` to the classifier's input limit without splitting a character.
pub fn truncate_input(text: &str) -> &str {
    match text.char_indices().nth(MAX_INPUT_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_mapping() {
        assert_eq!(SentimentLabel::from_label("positive"), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_label("POSITIVE"), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_label("negative"), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_label("neutral"), SentimentLabel::Other);
        assert_eq!(SentimentLabel::from_label("LABEL_1"), SentimentLabel::Other);
    }

    #[test]
    fn test_polarity_sign() {
        let positive = Sentiment {
            label: SentimentLabel::Positive,
            score: 0.9,
        };
        assert!((positive.polarity() - 0.9).abs() < f64::EPSILON);

        let negative = Sentiment {
            label: SentimentLabel::Negative,
            score: 0.7,
        };
        assert!((negative.polarity() + 0.7).abs() < f64::EPSILON);

        let other = Sentiment {
            label: SentimentLabel::Other,
            score: 0.99,
        };
        assert_eq!(other.polarity(), 0.0);
    }

    #[test]
    fn test_truncate_short_input_unchanged() {
        assert_eq!(truncate_input("hello"), "hello");
    }

    #[test]
    fn test_truncate_long_input_at_char_boundary() {
        // Multi-byte chars: counting must be by character, not byte
        let long: String = "é".repeat(MAX_INPUT_CHARS + 100);
        let cut = truncate_input(&long);
        assert_eq!(cut.chars().count(), MAX_INPUT_CHARS);
    }
}
