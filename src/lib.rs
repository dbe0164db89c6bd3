// Modules
pub mod config;
pub mod data;
pub mod datasets;
pub mod entropy;
pub mod errors;
pub mod metrics;
pub mod sampler;
pub mod tree;
pub mod utils;

// Individual classes, and functions
pub use config::{Id3Config, ModelIO};
pub use data::{Dataset, Partition, Record};
pub use entropy::{entropy, information_gain};
pub use errors::Id3Error;
pub use tree::{build, DecisionTree, Node};
