//! Annotation grammar shared by the compiler and the extractor

use crate::TokenKind;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// Opening delimiter of an annotation
pub const OPEN: char = '{';
/// Closing delimiter of an annotation
pub const CLOSE: char = '}';

/// Grammar of the text between the braces: a sigil and an optional name
static ANNOTATION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<sigil>::|:|\$)(?P<name>[.\w]+)?$").unwrap());

/// Classify the text between a pair of braces
///
/// Returns `None` for inert braces such as CSS rules or `{$}`.
pub fn classify(inner: &str) -> Option<(TokenKind, Option<String>)> {
    let captures = ANNOTATION_REGEX.captures(inner)?;
    let name = captures.name("name").map(|m| m.as_str().to_string());

    let kind = match (&captures["sigil"], name.is_some()) {
        ("::", true) => TokenKind::ListStart,
        ("::", false) => TokenKind::ListEnd,
        (":", true) => TokenKind::ObjectStart,
        (":", false) => TokenKind::ObjectEnd,
        ("$", true) => TokenKind::Value,
        _ => return None,
    };

    Some((kind, name))
}

/// Drop every recognized annotation from `text`, never failing
///
/// Scans like the tokenizer, but a `{` without a closing `}` is kept as
/// ordinary text. Borrows `text` when nothing was removed.
///
/// ```
/// use schemee_domain::annotation::remove_annotations;
///
/// assert_eq!(remove_annotations("{$name}Apples"), "Apples");
/// assert_eq!(remove_annotations("a { b"), "a { b");
/// ```
pub fn remove_annotations(text: &str) -> Cow<'_, str> {
    let mut plain = String::new();
    let mut copied = 0;
    let mut pos = 0;

    while let Some(found) = text[pos..].find(OPEN) {
        let start = pos + found;
        let Some(end) = text[start + 1..].find(CLOSE).map(|i| start + 1 + i) else {
            break;
        };

        if classify(&text[start + 1..end]).is_some() {
            plain.push_str(&text[copied..start]);
            copied = end + 1;
            pos = end + 1;
        } else {
            pos = start + 1;
        }
    }

    if copied == 0 {
        return Cow::Borrowed(text);
    }
    plain.push_str(&text[copied..]);
    Cow::Owned(plain)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_kinds() {
        assert_eq!(classify("::rows"), Some((TokenKind::ListStart, Some("rows".into()))));
        assert_eq!(classify("::"), Some((TokenKind::ListEnd, None)));
        assert_eq!(classify(":row"), Some((TokenKind::ObjectStart, Some("row".into()))));
        assert_eq!(classify(":"), Some((TokenKind::ObjectEnd, None)));
        assert_eq!(classify("$a.b"), Some((TokenKind::Value, Some("a.b".into()))));
        assert_eq!(classify("$"), None);
        assert_eq!(classify(" color: red "), None);
    }

    #[test]
    fn test_remove_annotations_keeps_surrounding_text() {
        assert_eq!(remove_annotations("x{$a}y{::}z{:obj}"), "xyz");
    }

    #[test]
    fn test_remove_annotations_keeps_inert_braces() {
        assert_eq!(remove_annotations("p { color: red } {$}"), "p { color: red } {$}");
        assert_eq!(remove_annotations("{a{$x}b"), "{ab");
    }

    #[test]
    fn test_remove_annotations_tolerates_unterminated_brace() {
        assert_eq!(remove_annotations("{$a}1 {$broken"), "1 {$broken");
        assert!(matches!(remove_annotations("plain {"), Cow::Borrowed(_)));
    }
}
