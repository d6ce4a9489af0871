//! Annotation scanning

use schemee_domain::annotation::{classify, CLOSE, OPEN};
use schemee_domain::{SourceSpan, SyntaxError, Token};

/// Scan `input` for annotations
///
/// The first token is always the synthetic root. Brace pairs whose content
/// does not match the grammar are inert text and produce no token.
///
/// # Errors
///
/// Fails with [`SyntaxError::UnterminatedAnnotation`] when a `{` has no `}`
/// after it.
pub fn tokenize(input: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut tokens = vec![Token::root()];
    let mut pos = 0;

    while let Some(found) = input[pos..].find(OPEN) {
        let start = pos + found;
        let end = input[start + 1..]
            .find(CLOSE)
            .map(|i| start + 1 + i)
            .ok_or(SyntaxError::UnterminatedAnnotation { offset: start })?;

        match classify(&input[start + 1..end]) {
            Some((kind, name)) => {
                tokens.push(Token::new(kind, name, SourceSpan::new(start, end + 1)));
                pos = end + 1;
            }
            // Inert braces; an annotation may still start inside them
            None => pos = start + 1,
        }
    }

    Ok(tokens)
}

/// Remove every recognized annotation from `input`
///
/// Gives back the plain document a sample was written from. Inert braces are
/// kept.
pub fn strip_annotations(input: &str) -> Result<String, SyntaxError> {
    let tokens = tokenize(input)?;
    let mut plain = String::with_capacity(input.len());
    let mut previous_end = 0;

    for span in tokens.iter().filter_map(|token| token.span) {
        plain.push_str(&input[previous_end..span.start]);
        previous_end = span.end;
    }
    plain.push_str(&input[previous_end..]);

    Ok(plain)
}
