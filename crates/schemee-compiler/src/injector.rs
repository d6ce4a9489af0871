//! Marker injection - replaces annotations with synthetic elements

use schemee_domain::{Token, TokenKind, MARKER_ATTRIBUTE};

/// Replace every annotation span in `input` with its marker element
///
/// Text between annotations is copied verbatim and in order. Container
/// markers open at their start annotation and close at their end annotation,
/// so each container marker wraps exactly the content it annotates. Value
/// markers are empty elements placed just before the value's text.
pub fn inject_markers(input: &str, tokens: &[Token]) -> String {
    let mut marked = String::with_capacity(input.len() + tokens.len() * 64);
    let mut previous_end = 0;

    for token in tokens {
        let Some(span) = token.span else {
            continue;
        };
        marked.push_str(&input[previous_end..span.start]);
        marked.push_str(&render_marker(token));
        previous_end = span.end;
    }
    marked.push_str(&input[previous_end..]);

    marked
}

/// Marker element text for a single token
pub fn render_marker(token: &Token) -> String {
    let Some(tag) = token.kind.marker_tag() else {
        return String::new();
    };

    let id_attribute = token
        .marker_id
        .map(|id| format!(" {}=\"{}\"", MARKER_ATTRIBUTE, id))
        .unwrap_or_default();

    match token.kind {
        TokenKind::ObjectStart | TokenKind::ListStart => format!("<{}{}>", tag, id_attribute),
        TokenKind::ObjectEnd | TokenKind::ListEnd => format!("</{}>", tag),
        TokenKind::Value => format!("<{tag}{id_attribute}></{tag}>"),
        TokenKind::Root => String::new(),
    }
}
