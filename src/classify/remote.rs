use serde::{Deserialize, Serialize};

use super::{ClassifierError, Sentiment, SentimentClassifier, SentimentLabel};

/// HTTP client for a local text-classification inference server speaking the
/// Hugging Face pipeline JSON shape: `{"inputs": text}` in, an array of
/// `{label, score}` candidates (best first) out.
pub struct RemoteClassifier {
    base_url: String,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl RemoteClassifier {
    /// Create a client for the server at `base_url`.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, ClassifierError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ClassifierError::Http(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs,
        })
    }

    /// Default local inference server with a one-minute request timeout.
    pub fn default_local() -> Result<Self, ClassifierError> {
        Self::new("http://localhost:8080", 60)
    }
}

/// Request body for POST /predict
#[derive(Serialize)]
struct PredictRequest<'a> {
    inputs: &'a str,
}

/// One candidate label from the classification response
#[derive(Deserialize)]
struct Candidate {
    label: String,
    score: f64,
}

impl SentimentClassifier for RemoteClassifier {
    fn classify(&self, text: &str) -> Result<Sentiment, ClassifierError> {
        let url = format!("{}/predict", self.base_url);
        let body = PredictRequest { inputs: text };

        let response = self.client.post(&url).json(&body).send().map_err(|e| {
            if e.is_connect() {
                ClassifierError::Connection(self.base_url.clone())
            } else if e.is_timeout() {
                ClassifierError::Http(format!(
                    "request timed out after {}s",
                    self.timeout_secs
                ))
            } else {
                ClassifierError::Http(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ClassifierError::Endpoint {
                status: status.as_u16(),
                body,
            });
        }

        let candidates: Vec<Candidate> = response
            .json()
            .map_err(|e| ClassifierError::ResponseParsing(e.to_string()))?;

        // Candidates come back ordered by confidence; the first one wins
        let best = candidates.first().ok_or(ClassifierError::EmptyResponse)?;

        Ok(Sentiment {
            label: SentimentLabel::from_label(&best.label),
            score: best.score.clamp(0.0, 1.0),
        })
    }
}
