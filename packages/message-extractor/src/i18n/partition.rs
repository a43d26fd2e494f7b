//! Partitioner
//!
//! Groups a list of siblings into [`Part`]s. A marked element is a part of
//! its own, a `<!-- i18n -->` ... `<!-- /i18n -->` block is one part holding
//! everything between the comments, and consecutive unmarked nodes form a
//! non-translatable run. Marker comments themselves belong to no part.

use super::errors::I18nError;
use super::markers::{explicit_element_meta, is_closing_comment, is_opening_comment, I18nMeta};
use crate::ml_parser::ast::{Element, Node};
use crate::parse_util::ParseSourceSpan;
use indexmap::IndexSet;
use tracing::trace;

#[derive(Debug, Clone)]
pub struct Part<'a> {
    /// Set when the part is about a single element or text node.
    pub root: Option<&'a Node>,
    /// The siblings grouped into this part, in source order.
    pub nodes: &'a [Node],
    pub translatable: bool,
    pub meta: I18nMeta,
    pub source_span: ParseSourceSpan,
}

impl<'a> Part<'a> {
    fn marked(node: &'a [Node], meta: I18nMeta) -> Self {
        Part {
            root: node.first(),
            source_span: node[0].source_span().clone(),
            nodes: node,
            translatable: true,
            meta,
        }
    }

    fn block(nodes: &'a [Node], opening: &ParseSourceSpan) -> Self {
        Part {
            root: None,
            source_span: span_of(nodes).unwrap_or_else(|| opening.clone()),
            nodes,
            translatable: true,
            meta: I18nMeta::default(),
        }
    }

    fn run(nodes: &'a [Node]) -> Self {
        let root = match nodes {
            [node @ (Node::Element(_) | Node::Text(_))] => Some(node),
            _ => None,
        };
        Part {
            root,
            source_span: span_of(nodes).unwrap_or_else(|| nodes[0].source_span().clone()),
            nodes,
            translatable: false,
            meta: I18nMeta::default(),
        }
    }

    pub fn root_element(&self) -> Option<&'a Element> {
        self.root.and_then(Node::as_element)
    }

    /// The nodes whose content makes up the part's message: the root
    /// element's children, or the grouped siblings when there is no root.
    pub fn children(&self) -> &'a [Node] {
        match self.root {
            Some(Node::Element(el)) => &el.children,
            Some(_) => &[],
            None => self.nodes,
        }
    }
}

fn span_of(nodes: &[Node]) -> Option<ParseSourceSpan> {
    let first = nodes.first()?;
    let last = nodes.last()?;
    Some(ParseSourceSpan::covering(first.source_span(), last.source_span()))
}

fn element_marker(
    element: &Element,
    implicit_tags: &IndexSet<String>,
    errors: &mut Vec<I18nError>,
) -> Option<I18nMeta> {
    let explicit = match explicit_element_meta(element) {
        Some(Ok(meta)) => Some(meta),
        Some(Err(error)) => {
            errors.push(error);
            None
        }
        None => None,
    };
    explicit.or_else(|| implicit_tags.contains(&element.name).then(I18nMeta::default))
}

fn flush_run<'a>(
    nodes: &'a [Node],
    run_start: &mut Option<usize>,
    end: usize,
    parts: &mut Vec<Part<'a>>,
) {
    if let Some(start) = run_start.take() {
        parts.push(Part::run(&nodes[start..end]));
    }
}

/// Split `nodes` into parts. Every node other than a marker comment ends up
/// in exactly one part, and parts keep source order.
pub fn partition<'a>(
    nodes: &'a [Node],
    implicit_tags: &IndexSet<String>,
) -> (Vec<Part<'a>>, Vec<I18nError>) {
    let mut parts = Vec::new();
    let mut errors = Vec::new();
    let mut run_start: Option<usize> = None;
    let mut i = 0;

    while i < nodes.len() {
        let node = &nodes[i];

        if is_opening_comment(node) {
            flush_run(nodes, &mut run_start, i, &mut parts);
            let start = i + 1;
            let mut end = start;
            while end < nodes.len() && !is_closing_comment(&nodes[end]) {
                if is_opening_comment(&nodes[end]) {
                    errors.push(I18nError::marker(
                        nodes[end].source_span(),
                        "Nested 'i18n' comment blocks are not supported.",
                    ));
                }
                end += 1;
            }
            if end == nodes.len() {
                errors.push(I18nError::unmatched_marker(node.source_span()));
            }
            parts.push(Part::block(&nodes[start..end], node.source_span()));
            i = end + 1;
            continue;
        }

        if is_closing_comment(node) {
            flush_run(nodes, &mut run_start, i, &mut parts);
            errors.push(I18nError::unexpected_closing_marker(node.source_span()));
            i += 1;
            continue;
        }

        if let Node::Element(element) = node {
            if let Some(meta) = element_marker(element, implicit_tags, &mut errors) {
                flush_run(nodes, &mut run_start, i, &mut parts);
                parts.push(Part::marked(&nodes[i..=i], meta));
                i += 1;
                continue;
            }
        }

        run_start.get_or_insert(i);
        i += 1;
    }
    flush_run(nodes, &mut run_start, nodes.len(), &mut parts);

    trace!(
        siblings = nodes.len(),
        parts = parts.len(),
        errors = errors.len(),
        "partitioned siblings"
    );
    (parts, errors)
}
