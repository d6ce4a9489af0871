//! Extraction traversal engine

use crate::config::{ExtractorConfig, MissingFieldPolicy};
use crate::error::ExtractorError;
use schemee_domain::traits::DocumentTree;
use schemee_domain::{remove_annotations, Address, Blueprint, StructuralError, Token, TokenKind};
use serde_json::{Map, Value};
use std::marker::PhantomData;
use tracing::{debug, info, warn};

/// Extracts result values from documents shaped like a blueprint's sample
///
/// Generic over the document tree so the traversal never touches a parser
/// directly. Each call parses its own document and keeps its own stack, so
/// one extractor can serve concurrent calls.
pub struct Extractor<D> {
    config: ExtractorConfig,
    _document: PhantomData<fn() -> D>,
}

impl<D> std::fmt::Debug for Extractor<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extractor")
            .field("config", &self.config)
            .finish()
    }
}

impl<D> Default for Extractor<D> {
    fn default() -> Self {
        Self {
            config: ExtractorConfig::default(),
            _document: PhantomData,
        }
    }
}

/// One entry of the traversal stack
enum PathNode<'b, N> {
    /// Root or object: one matched node, fields visited once
    Object {
        token: &'b Token,
        node: N,
        cursor: usize,
        fields: Map<String, Value>,
    },
    /// List: the field cursor restarts on every repetition
    List {
        token: &'b Token,
        item: N,
        item_tag: Option<String>,
        cursor: usize,
        items: Vec<Value>,
        current: Map<String, Value>,
    },
}

/// Outcome of advancing the top of the stack by one field
enum Step<'b, N> {
    /// A nested container was matched and must be traversed next
    Descend(PathNode<'b, N>),
    /// The frame advanced and stays on the stack
    Continue,
    /// The frame is finished with this value
    Complete(Value),
}

impl<D: DocumentTree> Extractor<D> {
    /// Create a new extractor
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        Ok(Self {
            config,
            _document: PhantomData,
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Parse `document` and extract the value `blueprint` describes
    pub fn extract(&self, blueprint: &Blueprint, document: &str) -> Result<Value, ExtractorError> {
        if document.len() > self.config.max_document_length {
            return Err(ExtractorError::DocumentTooLong(
                document.len(),
                self.config.max_document_length,
            ));
        }

        let tree = D::parse(document);
        let value = self.extract_from(blueprint, &tree)?;

        info!(
            "Extracted '{}' from {} byte document",
            blueprint.name,
            document.len()
        );
        Ok(value)
    }

    /// Extract the value `blueprint` describes from an already parsed tree
    pub fn extract_from(&self, blueprint: &Blueprint, tree: &D) -> Result<Value, ExtractorError> {
        let root_node = tree
            .root_element()
            .ok_or_else(|| StructuralError::NodeNotFound {
                field: blueprint.name.clone(),
                address: Address::empty(),
            })?;

        let mut stack = vec![PathNode::Object {
            token: &blueprint.root,
            node: root_node,
            cursor: 0,
            fields: Map::new(),
        }];

        loop {
            let step = match stack.last_mut() {
                Some(top) => self.advance(tree, top)?,
                // The root frame only leaves the stack through `Complete`
                None => return Ok(Value::Object(Map::new())),
            };

            match step {
                Step::Continue => {}
                Step::Descend(child) => stack.push(child),
                Step::Complete(value) => {
                    let Some(finished) = stack.pop() else {
                        return Ok(value);
                    };
                    match stack.last_mut() {
                        Some(parent) => {
                            parent.sink().insert(finished.token().name_str().to_string(), value);
                        }
                        None => return Ok(value),
                    }
                }
            }
        }
    }

    /// Advance `frame` by one field, or one repetition when its fields are exhausted
    fn advance<'b>(
        &self,
        tree: &D,
        frame: &mut PathNode<'b, D::Node>,
    ) -> Result<Step<'b, D::Node>, ExtractorError> {
        let (token, anchor, cursor) = match &mut *frame {
            PathNode::Object {
                token, node, cursor, ..
            } => (*token, node.clone(), cursor),
            PathNode::List {
                token, item, cursor, ..
            } => (*token, item.clone(), cursor),
        };

        if let Some(field) = token.children.get(*cursor) {
            *cursor += 1;
            return self.visit_field(tree, field, &anchor, frame);
        }

        match frame {
            PathNode::Object { fields, .. } => Ok(Step::Complete(Value::Object(std::mem::take(fields)))),
            PathNode::List {
                token,
                item,
                item_tag,
                cursor,
                items,
                current,
            } => {
                items.push(Value::Object(std::mem::take(current)));

                let next = self.next_repetition(tree, item, item_tag.as_deref());
                match next {
                    Some(sibling) if items.len() >= self.config.max_list_items => {
                        warn!(
                            "List '{}' truncated at {} items (next: <{}>)",
                            token.name_str(),
                            items.len(),
                            tree.tag_name(&sibling).unwrap_or_default()
                        );
                        Ok(Step::Complete(Value::Array(std::mem::take(items))))
                    }
                    Some(sibling) => {
                        *item = sibling;
                        *cursor = 0;
                        Ok(Step::Continue)
                    }
                    None => {
                        debug!("List '{}' ended after {} items", token.name_str(), items.len());
                        Ok(Step::Complete(Value::Array(std::mem::take(items))))
                    }
                }
            }
        }
    }

    /// Resolve `field` from `anchor` and either record it or descend into it
    fn visit_field<'b>(
        &self,
        tree: &D,
        field: &'b Token,
        anchor: &D::Node,
        frame: &mut PathNode<'b, D::Node>,
    ) -> Result<Step<'b, D::Node>, ExtractorError> {
        let address = field.relative_address.clone().unwrap_or_default();

        let Some(node) = tree.resolve(anchor, &address) else {
            return match self.config.missing_field {
                MissingFieldPolicy::Fail => Err(StructuralError::NodeNotFound {
                    field: field.name_str().to_string(),
                    address,
                }
                .into()),
                MissingFieldPolicy::Skip if field.kind == TokenKind::ListStart => {
                    warn!(
                        "List '{}' has no repetitions at '{}'",
                        field.name_str(),
                        address
                    );
                    frame
                        .sink()
                        .insert(field.name_str().to_string(), Value::Array(Vec::new()));
                    Ok(Step::Continue)
                }
                MissingFieldPolicy::Skip => {
                    warn!(
                        "Skipping {} '{}': nothing at '{}'",
                        field.kind.as_str(),
                        field.name_str(),
                        address
                    );
                    Ok(Step::Continue)
                }
            };
        };

        match field.kind {
            TokenKind::Value => {
                // Extracting from an annotated sample reads its literal values
                let raw = tree.text_content(&node);
                let text = remove_annotations(&raw);
                let text = if self.config.trim_values {
                    text.trim().to_string()
                } else {
                    text.into_owned()
                };
                frame
                    .sink()
                    .insert(field.name_str().to_string(), Value::String(text));
                Ok(Step::Continue)
            }
            TokenKind::ObjectStart => Ok(Step::Descend(PathNode::Object {
                token: field,
                node,
                cursor: 0,
                fields: Map::new(),
            })),
            TokenKind::ListStart => {
                let item_tag = tree.tag_name(&node);
                Ok(Step::Descend(PathNode::List {
                    token: field,
                    item: node,
                    item_tag,
                    cursor: 0,
                    items: Vec::new(),
                    current: Map::new(),
                }))
            }
            // Learned blueprints never nest these; a hand-edited one is ignored
            TokenKind::Root | TokenKind::ObjectEnd | TokenKind::ListEnd => {
                debug!("Ignoring {} token in blueprint", field.kind.as_str());
                Ok(Step::Continue)
            }
        }
    }

    /// Next sibling element that can start a new repetition
    fn next_repetition(&self, tree: &D, item: &D::Node, item_tag: Option<&str>) -> Option<D::Node> {
        let sibling = tree.next_element_sibling(item)?;
        if self.config.match_sibling_tag && tree.tag_name(&sibling).as_deref() != item_tag {
            return None;
        }
        Some(sibling)
    }
}

impl<'b, N> PathNode<'b, N> {
    fn token(&self) -> &'b Token {
        match self {
            PathNode::Object { token, .. } | PathNode::List { token, .. } => token,
        }
    }

    /// Accumulator that receives this frame's fields
    fn sink(&mut self) -> &mut Map<String, Value> {
        match self {
            PathNode::Object { fields, .. } => fields,
            PathNode::List { current, .. } => current,
        }
    }
}
