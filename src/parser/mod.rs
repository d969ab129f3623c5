pub mod record;
pub mod transcript;

use fancy_regex::Regex;
use std::sync::LazyLock;

pub use record::MessageRecord;
pub use transcript::parse_transcript;

// Placeholders the export substitutes for content that never made it into
// the text file. A message containing one carries no scorable text.
const MEDIA_PLACEHOLDER: &str = "<media omitted>";
const DELETED_PLACEHOLDER: &str = "message deleted";

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"http\S+").expect("valid regex literal"));

/// Normalize a message body for classification.
///
/// Lowercases the text, blanks it entirely if it is a media or deletion
/// placeholder, strips URL tokens, and trims surrounding whitespace. An
/// empty result means "exclude from scoring".
pub fn clean_text(raw: &str) -> String {
    let text = raw.to_lowercase();

    if text.contains(MEDIA_PLACEHOLDER) || text.contains(DELETED_PLACEHOLDER) {
        return String::new();
    }

    URL_PATTERN.replace_all(&text, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_trims() {
        assert_eq!(clean_text("  Hello There  "), "hello there");
    }

    #[test]
    fn test_media_placeholder_blanks_text() {
        assert_eq!(clean_text("<Media omitted>"), "");
        assert_eq!(clean_text("look: <MEDIA OMITTED>"), "");
    }

    #[test]
    fn test_deletion_placeholder_blanks_text() {
        assert_eq!(clean_text("This message deleted"), "");
    }

    #[test]
    fn test_strips_urls() {
        assert_eq!(
            clean_text("check https://example.com/a?b=c out"),
            "check  out"
        );
        assert_eq!(clean_text("http://only.a.link"), "");
    }
}
