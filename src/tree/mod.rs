pub mod node;
pub mod predict;
pub mod render;
#[allow(clippy::module_inception)]
pub mod tree;

pub use node::{Branch, Node};
pub use render::RenderLines;
pub use tree::{build, DecisionTree};
