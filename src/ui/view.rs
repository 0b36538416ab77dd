//! Framework-agnostic view tree produced by [`crate::ui::render::render`].
//!
//! Nodes are addressable the way a user or a test would find them: by their
//! visible text, input label, placeholder, role or test id.

use crate::core::field::Field;
use regex::{Regex, RegexBuilder};

pub const ERROR_TEST_ID: &str = "error";
pub const SUBMIT_TEST_ID: &str = "submit";
pub const DISPLAY_TEST_ID: &str = "displayComponent";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Heading,
    Textbox,
    Alert,
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewNode {
    Heading {
        text: String,
    },
    Input {
        field: Field,
        label: String,
        placeholder: String,
        value: String,
    },
    Error {
        field: Field,
        message: String,
    },
    Button {
        label: String,
    },
    Text {
        text: String,
        test_id: Option<String>,
    },
    Section {
        test_id: Option<String>,
        children: Vec<ViewNode>,
    },
}

impl ViewNode {
    pub fn text(text: impl Into<String>) -> Self {
        ViewNode::Text {
            text: text.into(),
            test_id: None,
        }
    }

    pub fn text_with_id(text: impl Into<String>, test_id: impl Into<String>) -> Self {
        ViewNode::Text {
            text: text.into(),
            test_id: Some(test_id.into()),
        }
    }

    pub fn test_id(&self) -> Option<&str> {
        match self {
            ViewNode::Error { .. } => Some(ERROR_TEST_ID),
            ViewNode::Button { .. } => Some(SUBMIT_TEST_ID),
            ViewNode::Text { test_id, .. } | ViewNode::Section { test_id, .. } => {
                test_id.as_deref()
            }
            _ => None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            ViewNode::Heading { .. } => Some(Role::Heading),
            ViewNode::Input { .. } => Some(Role::Textbox),
            ViewNode::Error { .. } => Some(Role::Alert),
            ViewNode::Button { .. } => Some(Role::Submit),
            _ => None,
        }
    }

    pub fn field(&self) -> Option<Field> {
        match self {
            ViewNode::Input { field, .. } | ViewNode::Error { field, .. } => Some(*field),
            _ => None,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            ViewNode::Input { label, .. } => Some(label.as_str()),
            _ => None,
        }
    }

    pub fn placeholder(&self) -> Option<&str> {
        match self {
            ViewNode::Input { placeholder, .. } if !placeholder.is_empty() => {
                Some(placeholder.as_str())
            }
            _ => None,
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            ViewNode::Input { value, .. } => Some(value.as_str()),
            _ => None,
        }
    }

    /// Text owned directly by this node. Inputs own none; their value is not content.
    pub fn own_text(&self) -> Option<&str> {
        match self {
            ViewNode::Heading { text } | ViewNode::Text { text, .. } => Some(text.as_str()),
            ViewNode::Error { message, .. } => Some(message.as_str()),
            ViewNode::Button { label } => Some(label.as_str()),
            _ => None,
        }
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        match self {
            ViewNode::Section { children, .. } => {
                children.iter().map(ViewNode::text_content).collect()
            }
            other => other.own_text().unwrap_or_default().to_string(),
        }
    }

    pub fn children(&self) -> &[ViewNode] {
        match self {
            ViewNode::Section { children, .. } => children,
            _ => &[],
        }
    }
}

/// How a query compares a node attribute.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Whole-string match, ignoring surrounding whitespace.
    Exact(String),
    Pattern(Regex),
}

impl Matcher {
    /// Case-insensitive substring pattern.
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map(Matcher::Pattern)
    }

    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Matcher::Exact(expected) => candidate.trim() == expected.trim(),
            Matcher::Pattern(re) => re.is_match(candidate),
        }
    }
}

impl From<&str> for Matcher {
    fn from(value: &str) -> Self {
        Matcher::Exact(value.to_string())
    }
}

impl From<Regex> for Matcher {
    fn from(value: Regex) -> Self {
        Matcher::Pattern(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewTree {
    nodes: Vec<ViewNode>,
}

impl ViewTree {
    pub fn new(nodes: Vec<ViewNode>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[ViewNode] {
        &self.nodes
    }

    /// Every node, depth first, in document order.
    pub fn walk(&self) -> Vec<&ViewNode> {
        fn visit<'a>(nodes: &'a [ViewNode], out: &mut Vec<&'a ViewNode>) {
            for node in nodes {
                out.push(node);
                visit(node.children(), out);
            }
        }

        let mut out = Vec::new();
        visit(&self.nodes, &mut out);
        out
    }

    pub fn find_all<F>(&self, predicate: F) -> Vec<&ViewNode>
    where
        F: Fn(&ViewNode) -> bool,
    {
        self.walk().into_iter().filter(|node| predicate(node)).collect()
    }

    pub fn find_all_by_text(&self, matcher: impl Into<Matcher>) -> Vec<&ViewNode> {
        let matcher = matcher.into();
        self.find_all(|node| node.own_text().is_some_and(|text| matcher.matches(text)))
    }

    pub fn find_by_text(&self, matcher: impl Into<Matcher>) -> Option<&ViewNode> {
        self.find_all_by_text(matcher).into_iter().next()
    }

    pub fn find_all_by_test_id(&self, test_id: &str) -> Vec<&ViewNode> {
        self.find_all(|node| node.test_id() == Some(test_id))
    }

    pub fn find_by_test_id(&self, test_id: &str) -> Option<&ViewNode> {
        self.find_all_by_test_id(test_id).into_iter().next()
    }

    pub fn find_all_by_role(&self, role: Role) -> Vec<&ViewNode> {
        self.find_all(|node| node.role() == Some(role))
    }

    pub fn find_by_role(&self, role: Role) -> Option<&ViewNode> {
        self.find_all_by_role(role).into_iter().next()
    }

    pub fn find_by_label(&self, matcher: impl Into<Matcher>) -> Option<&ViewNode> {
        let matcher = matcher.into();
        self.walk()
            .into_iter()
            .find(|node| node.label().is_some_and(|label| matcher.matches(label)))
    }

    pub fn find_by_placeholder(&self, matcher: impl Into<Matcher>) -> Option<&ViewNode> {
        let matcher = matcher.into();
        self.walk().into_iter().find(|node| {
            node.placeholder()
                .is_some_and(|placeholder| matcher.matches(placeholder))
        })
    }

    pub fn errors(&self) -> Vec<&ViewNode> {
        self.find_all_by_test_id(ERROR_TEST_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ViewTree {
        ViewTree::new(vec![
            ViewNode::Heading {
                text: "Contact Form".to_string(),
            },
            ViewNode::Input {
                field: Field::FirstName,
                label: "First Name".to_string(),
                placeholder: "Edd".to_string(),
                value: String::new(),
            },
            ViewNode::Error {
                field: Field::FirstName,
                message: "firstName is a required field.".to_string(),
            },
            ViewNode::Section {
                test_id: Some("row".to_string()),
                children: vec![ViewNode::text("Name:"), ViewNode::text_with_id("Ann", "name")],
            },
        ])
    }

    #[test]
    fn walk_visits_section_children_in_order() {
        let tree = sample();
        let kinds: Vec<_> = tree.walk().into_iter().map(|node| node.test_id()).collect();
        assert_eq!(kinds, vec![None, None, Some("error"), Some("row"), None, Some("name")]);
    }

    #[test]
    fn exact_text_ignores_surrounding_whitespace_only() {
        let tree = sample();
        assert!(tree.find_by_text(" Contact Form ").is_some());
        assert!(tree.find_by_text("contact form").is_none());
    }

    #[test]
    fn pattern_is_case_insensitive() {
        let tree = sample();
        let matcher = Matcher::pattern("contact form").expect("pattern");
        assert!(tree.find_by_text(matcher).is_some());

        let input = tree
            .find_by_placeholder(Matcher::pattern("edd").expect("pattern"))
            .expect("input");
        assert_eq!(input.field(), Some(Field::FirstName));
    }

    #[test]
    fn section_text_content_concatenates_children() {
        let tree = sample();
        let row = tree.find_by_test_id("row").expect("row");
        assert_eq!(row.text_content(), "Name:Ann");
        assert_eq!(tree.find_by_test_id("name").map(ViewNode::text_content), Some("Ann".into()));
    }

    #[test]
    fn error_nodes_carry_role_and_test_id() {
        let tree = sample();
        assert_eq!(tree.errors().len(), 1);
        assert_eq!(tree.find_all_by_role(Role::Alert).len(), 1);
        assert!(tree.find_by_role(Role::Submit).is_none());
    }
}
