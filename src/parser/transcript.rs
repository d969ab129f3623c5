use super::record::MessageRecord;
use fancy_regex::Regex;
use std::sync::LazyLock;

// Header grammar of the bracketed-timestamp export convention:
// [D/M/Y, H.MM.SS optional-AM/PM] sender: first body line
// The sender is everything up to the first colon after the bracket.
static HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(\d{1,2}/\d{1,2}/\d{2,4}, \d{1,2}\.\d{2}\.\d{2}\s?(?:AM|PM)?)\] ([^:]+): (.*)$")
        .expect("valid regex literal")
});

/// The message currently being accumulated during the forward pass.
struct OpenMessage {
    timestamp: String,
    sender: String,
    body: Vec<String>,
}

impl OpenMessage {
    fn finish(self) -> MessageRecord {
        MessageRecord::new(self.timestamp, self.sender, self.body.join(" "))
    }
}

/// Parse a full transcript into ordered message records.
///
/// Single forward pass, no lookahead. A header line flushes the open message
/// and starts a new one; any other line is folded into the open message as a
/// continuation, or discarded if no message is open yet (export preamble,
/// leading blanks). Malformed input never errors.
pub fn parse_transcript(content: &str) -> Vec<MessageRecord> {
    let mut records = Vec::new();
    let mut open: Option<OpenMessage> = None;

    for raw_line in content.lines() {
        let line = raw_line.trim();

        if let Ok(Some(caps)) = HEADER.captures(line) {
            if let Some(message) = open.take() {
                records.push(message.finish());
            }
            // Some export encodings prefix the body with a left-to-right mark
            let first = caps[3].strip_prefix('\u{200e}').unwrap_or(&caps[3]);
            open = Some(OpenMessage {
                timestamp: caps[1].to_string(),
                sender: caps[2].to_string(),
                body: vec![first.to_string()],
            });
        } else if let Some(message) = open.as_mut() {
            message.body.push(line.to_string());
        }
    }

    if let Some(message) = open.take() {
        records.push(message.finish());
    }

    records
}
