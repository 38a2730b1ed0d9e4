//! Locating the JSON object inside a model's free-text answer.
//!
//! Models often wrap their JSON in prose or markdown fences. An extractor only
//! finds the candidate substring; parsing and shape checks happen in the
//! pipeline.

use once_cell::sync::Lazy;
use regex::Regex;

/// Finds the JSON payload in a text completion.
pub trait ResponseExtractor: Send + Sync {
    /// Return the substring holding the JSON object, if any.
    fn extract<'a>(&self, text: &'a str) -> Option<&'a str>;
}

/// First `{` through the last `}`, across newlines.
static OBJECT_SPAN: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"(?s)\{.*\}").ok());

/// Greedy brace span extractor.
///
/// Takes everything from the first `{` to the last `}`. Tolerates leading
/// prose and code fences; trailing prose containing a `}` will break parsing.
#[derive(Debug, Default, Clone, Copy)]
pub struct RegexExtractor;

impl ResponseExtractor for RegexExtractor {
    fn extract<'a>(&self, text: &'a str) -> Option<&'a str> {
        let re = OBJECT_SPAN.as_ref()?;
        re.find(text).map(|m| m.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bare_object() {
        let text = r#"{"a": 1}"#;
        assert_eq!(RegexExtractor.extract(text), Some(r#"{"a": 1}"#));
    }

    #[test]
    fn test_extract_from_code_fence() {
        let text = "Sure! ```json\n{\"instagram\":{},\"linkedin\":{}}\n```";
        assert_eq!(
            RegexExtractor.extract(text),
            Some("{\"instagram\":{},\"linkedin\":{}}")
        );
    }

    #[test]
    fn test_extract_spans_nested_objects_and_newlines() {
        let text = "Here you go:\n{\n  \"x\": {\"y\": 2}\n}\nEnjoy!";
        assert_eq!(
            RegexExtractor.extract(text),
            Some("{\n  \"x\": {\"y\": 2}\n}")
        );
    }

    #[test]
    fn test_extract_none_without_braces() {
        assert_eq!(RegexExtractor.extract("I cannot help with that."), None);
        assert_eq!(RegexExtractor.extract(""), None);
    }

    #[test]
    fn test_extract_needs_closing_brace() {
        assert_eq!(RegexExtractor.extract("{ \"truncated\": "), None);
    }
}
