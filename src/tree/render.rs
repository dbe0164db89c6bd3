//! Tree Rendering
//!
//! Indented text outline of a tree, produced lazily one line at a time.
use crate::tree::node::Node;
use crate::tree::tree::DecisionTree;
use std::fmt::{self, Display};

/// Padding added per level of the outline.
pub const INDENT: &str = "      ";

enum Frame<'a> {
    Node { node: &'a Node, level: usize },
    Branch { value: &'a str, level: usize },
}

/// Iterator over the lines of a tree outline.
///
/// A leaf renders as `Result: <label>`, a decision node as `[<attribute>]`
/// followed, for every branch, by `  --> <value>` and the indented subtree.
pub struct RenderLines<'a> {
    stack: Vec<Frame<'a>>,
}

impl<'a> RenderLines<'a> {
    pub fn new(root: &'a Node) -> Self {
        RenderLines {
            stack: vec![Frame::Node { node: root, level: 0 }],
        }
    }
}

impl<'a> Iterator for RenderLines<'a> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let line = match self.stack.pop()? {
            Frame::Node {
                node: Node::Leaf { label },
                level,
            } => format!("{}Result: {}", INDENT.repeat(level), label),
            Frame::Node {
                node: Node::Internal { attribute, branches },
                level,
            } => {
                for b in branches.iter().rev() {
                    self.stack.push(Frame::Node {
                        node: &b.node,
                        level: level + 1,
                    });
                    self.stack.push(Frame::Branch { value: &b.value, level });
                }
                format!("{}[{}]", INDENT.repeat(level), attribute)
            }
            Frame::Branch { value, level } => format!("{}  --> {}", INDENT.repeat(level), value),
        };
        Some(line)
    }
}

impl Node {
    /// Lines of the indented outline of this subtree.
    pub fn render(&self) -> RenderLines<'_> {
        RenderLines::new(self)
    }
}

impl DecisionTree {
    pub fn render(&self) -> RenderLines<'_> {
        self.root.render()
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in self.render() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::quinlan_play_tennis;

    #[test]
    fn test_render_leaf() {
        let lines: Vec<String> = Node::leaf("yes").render().collect();
        assert_eq!(lines, vec!["Result: yes"]);
    }

    #[test]
    fn test_render_quinlan() {
        let ds = quinlan_play_tennis().unwrap();
        let tree = DecisionTree::fit(&ds, "PlayTennis", &["Outlook", "Humidity", "Wind"]).unwrap();
        let lines: Vec<String> = tree.render().collect();
        let expected = vec![
            "[Outlook]",
            "  --> sunny",
            "      [Humidity]",
            "        --> high",
            "            Result: no",
            "        --> normal",
            "            Result: yes",
            "  --> overcast",
            "      Result: yes",
            "  --> rain",
            "      [Wind]",
            "        --> weak",
            "            Result: yes",
            "        --> strong",
            "            Result: no",
        ];
        assert_eq!(lines, expected);
        assert_eq!(tree.to_string(), expected.join("\n") + "\n");
    }

    #[test]
    fn test_render_is_lazy_and_restartable() {
        let ds = quinlan_play_tennis().unwrap();
        let tree = DecisionTree::fit(&ds, "PlayTennis", &["Outlook", "Humidity", "Wind"]).unwrap();
        let first_two: Vec<String> = tree.render().take(2).collect();
        assert_eq!(first_two, vec!["[Outlook]", "  --> sunny"]);
        assert_eq!(tree.render().count(), 15);
    }
}
