//! Tree expander
//!
//! Rewrites ICU expansion forms into plain elements before partitioning:
//!
//! ```text
//! {messages.length, plural, =0 {zero} =1 {one}}
//! ```
//!
//! becomes
//!
//! ```text
//! <ul [ngPlural]="messages.length">
//!   <template ngPluralCase="=0"><li i18n="plural_=0">zero</li></template>
//!   <template ngPluralCase="=1"><li i18n="plural_=1">one</li></template>
//! </ul>
//! ```
//!
//! Any other expansion type becomes an `[ngSwitch]` list with `ngSwitchWhen`
//! cases. A case whose content itself contained an expansion gets no `i18n`
//! marker so that the inner cases are extracted on their own.

use super::markers::I18N_ATTR;
use crate::ml_parser::ast::{self as html, Attribute, Comment, Element, Expansion, Node, Text};

#[derive(Debug, Clone, PartialEq)]
pub struct ExpansionResult {
    pub nodes: Vec<Node>,
    /// Whether at least one expansion was rewritten.
    pub expanded: bool,
}

/// Expand every expansion form in `nodes`. Expanding an already expanded
/// tree returns an equal tree.
pub fn expand_nodes(nodes: &[Node]) -> ExpansionResult {
    let mut expander = Expander::default();
    let nodes = html::visit_all(&mut expander, nodes);
    ExpansionResult {
        nodes,
        expanded: expander.expanded,
    }
}

#[derive(Default)]
struct Expander {
    expanded: bool,
}

impl html::Visitor for Expander {
    type Output = Node;

    fn visit_element(&mut self, element: &Element) -> Node {
        Node::Element(Element {
            children: html::visit_all(self, &element.children),
            ..element.clone()
        })
    }

    fn visit_text(&mut self, text: &Text) -> Node {
        Node::Text(text.clone())
    }

    fn visit_comment(&mut self, comment: &Comment) -> Node {
        Node::Comment(comment.clone())
    }

    fn visit_expansion(&mut self, expansion: &Expansion) -> Node {
        self.expanded = true;
        if expansion.expansion_type == "plural" {
            expand_form(expansion, "[ngPlural]", "ngPluralCase")
        } else {
            expand_form(expansion, "[ngSwitch]", "ngSwitchWhen")
        }
    }
}

fn expand_form(expansion: &Expansion, switch_attr: &str, case_attr: &str) -> Node {
    let children = expansion
        .cases
        .iter()
        .map(|case| {
            let inner = expand_nodes(&case.expression);
            let i18n_attrs = if inner.expanded {
                vec![]
            } else {
                vec![Attribute::new(
                    I18N_ATTR,
                    format!("{}_{}", expansion.expansion_type, case.value),
                    case.value_source_span.clone(),
                )]
            };
            let item = Element::new("li", i18n_attrs, inner.nodes, case.source_span.clone());
            Node::Element(Element::new(
                "template",
                vec![Attribute::new(case_attr, case.value.clone(), case.value_source_span.clone())],
                vec![Node::Element(item)],
                case.source_span.clone(),
            ))
        })
        .collect();

    let switch = Attribute::new(
        switch_attr,
        expansion.switch_value.clone(),
        expansion.switch_value_source_span.clone(),
    );
    Node::Element(Element::new("ul", vec![switch], children, expansion.source_span.clone()))
}
