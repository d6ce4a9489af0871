//! Tree & address learning
//!
//! Nests the flat token sequence into a tree and records, for every field,
//! the address of its node relative to its parent container's node.

use schemee_domain::traits::DocumentTree;
use schemee_domain::{Address, Blueprint, StructuralError, Token, TokenKind};
use tracing::debug;

/// A container whose end annotation has not been seen yet
struct OpenContainer {
    token: Token,
    /// Absolute address of the node this container is anchored on
    anchor: Address,
}

/// Build the blueprint named `name` from `tokens` and the marked sample
///
/// `tokens` must be the tokenizer output for the sample that `marked` was
/// produced from.
///
/// Anchors: a container is anchored on the first element it encloses, a
/// value on the element that encloses it.
///
/// # Errors
///
/// - [`StructuralError::UnbalancedContainer`] when an end annotation has no
///   matching open container, closes the wrong kind, or a container is never
///   closed
/// - [`StructuralError::MarkerNotFound`] when a marker is missing from the
///   parsed sample
/// - [`StructuralError::EmptyContainer`] when a container encloses no element
/// - [`StructuralError::DetachedField`] when a field's element is not inside
///   its container's element
pub fn learn<D: DocumentTree>(
    name: &str,
    tokens: Vec<Token>,
    marked: &str,
) -> Result<Blueprint, StructuralError> {
    check_pairing(&tokens)?;
    let document = D::parse(marked);

    let mut tokens = tokens.into_iter().peekable();
    let root_token = tokens
        .next_if(|token| token.kind == TokenKind::Root)
        .unwrap_or_else(Token::root);

    let mut root = OpenContainer {
        token: root_token,
        anchor: Address::empty(),
    };
    let mut open: Vec<OpenContainer> = Vec::new();

    for mut token in tokens {
        if token.kind.is_closing() {
            // Pairing was checked up front, so every close has an open container
            if let Some(finished) = open.pop() {
                let parent = open.last_mut().unwrap_or(&mut root);
                parent.token.children.push(finished.token);
            }
            continue;
        }

        let parent = open.last().unwrap_or(&root);
        let absolute = locate(&document, &token)?;
        let relative = absolute
            .strip_prefix(&parent.anchor)
            .ok_or_else(|| StructuralError::DetachedField {
                field: token.name_str().to_string(),
                container: parent.token.name_str().to_string(),
            })?;

        debug!(
            "Learned {} '{}' at '{}' (relative to '{}')",
            token.kind.as_str(),
            token.name_str(),
            relative,
            parent.token.name_str()
        );
        token.relative_address = Some(relative);

        if token.kind.is_container() {
            open.push(OpenContainer {
                token,
                anchor: absolute,
            });
        } else {
            let parent = open.last_mut().unwrap_or(&mut root);
            parent.token.children.push(token);
        }
    }

    Ok(Blueprint::new(name, root.token))
}

/// Match every end annotation with its start using a depth stack over the kinds
///
/// Runs before the sample is parsed: the parser may close marker elements on
/// its own, which would otherwise surface as a misplaced field.
fn check_pairing(tokens: &[Token]) -> Result<(), StructuralError> {
    let mut open: Vec<&Token> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::ObjectStart | TokenKind::ListStart => open.push(token),
            TokenKind::ObjectEnd | TokenKind::ListEnd => {
                let offset = token.span.map(|span| span.start);
                let start = open.pop().ok_or_else(|| StructuralError::UnbalancedContainer {
                    offset,
                    reason: "no open container to close".to_string(),
                })?;

                if !token.kind.closes(start.kind) {
                    return Err(StructuralError::UnbalancedContainer {
                        offset,
                        reason: format!(
                            "{} end annotation closes {} '{}'",
                            if token.kind == TokenKind::ListEnd { "list" } else { "object" },
                            start.kind.as_str(),
                            start.name_str()
                        ),
                    });
                }
            }
            TokenKind::Root | TokenKind::Value => {}
        }
    }

    match open.last() {
        Some(unclosed) => Err(StructuralError::UnbalancedContainer {
            offset: unclosed.span.map(|span| span.start),
            reason: format!(
                "{} '{}' is never closed",
                unclosed.kind.as_str(),
                unclosed.name_str()
            ),
        }),
        None => Ok(()),
    }
}

/// Absolute address of the element a token is anchored on
fn locate<D: DocumentTree>(document: &D, token: &Token) -> Result<Address, StructuralError> {
    let marker = token
        .marker_id
        .and_then(|id| document.find_marker(id))
        .ok_or_else(|| StructuralError::MarkerNotFound {
            field: token.name_str().to_string(),
        })?;

    let anchor = if token.kind.is_container() {
        document
            .first_child_element(&marker)
            .ok_or_else(|| StructuralError::EmptyContainer {
                name: token.name_str().to_string(),
            })?
    } else {
        document
            .parent_element(&marker)
            .or_else(|| document.root_element())
            .ok_or_else(|| StructuralError::MarkerNotFound {
                field: token.name_str().to_string(),
            })?
    };

    Ok(document.selector_for(&anchor))
}
