//! Tree Nodes
//!
//! The recursive tree value produced by induction. Every internal node owns its
//! children outright, so a tree can never share subtrees or contain cycles.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A node of a decision tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node {
    /// Terminal node carrying the predicted class.
    Leaf { label: String },
    /// Decision node, with one branch per value of `attribute` observed in
    /// the rows that reached it.
    Internal { attribute: String, branches: Vec<Branch> },
}

/// Edge from a decision node to the subtree for one attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub value: String,
    pub node: Node,
}

impl Node {
    pub fn leaf<S: Into<String>>(label: S) -> Self {
        Node::Leaf { label: label.into() }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Number of levels, a single leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { branches, .. } => 1 + branches.iter().map(|b| b.node.depth()).max().unwrap_or(0),
        }
    }

    pub fn n_nodes(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { branches, .. } => 1 + branches.iter().map(|b| b.node.n_nodes()).sum::<usize>(),
        }
    }

    pub fn n_leaves(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { branches, .. } => branches.iter().map(|b| b.node.n_leaves()).sum(),
        }
    }

    /// Child for an attribute value. Always `None` on a leaf.
    pub fn branch(&self, value: &str) -> Option<&Node> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { branches, .. } => branches.iter().find(|b| b.value == value).map(|b| &b.node),
        }
    }

    /// Nested json form: a leaf is its label, a decision node is
    /// `{attribute: {value: subtree, ...}}` with branches in tree order.
    pub fn to_json_value(&self) -> Value {
        match self {
            Node::Leaf { label } => Value::String(label.clone()),
            Node::Internal { attribute, branches } => {
                let mut children = Map::new();
                for b in branches {
                    children.insert(b.value.clone(), b.node.to_json_value());
                }
                let mut node = Map::new();
                node.insert(attribute.clone(), Value::Object(children));
                Value::Object(node)
            }
        }
    }
}
