use crate::config::{Id3Config, ModelIO};
use crate::data::{Dataset, Partition};
use crate::entropy::gain;
use crate::errors::Id3Error;
use crate::tree::node::{Branch, Node};
use crate::utils::{most_frequent, value_counts};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Grow a tree over `dataset` with ID3.
///
/// * `dataset` - Rows to learn from, must not be empty.
/// * `target` - Name of the label column.
/// * `attributes` - Candidate columns to split on, in tie-break order.
///
/// When two attributes have exactly the same gain, the one listed first is
/// used. When a leaf has to be decided by vote, the most frequent label wins
/// and ties go to the label seen first in row order.
pub fn build<S: AsRef<str>>(dataset: &Dataset, target: &str, attributes: &[S]) -> Result<Node, Id3Error> {
    let target_idx = dataset
        .column_index(target)
        .map_err(|_| Id3Error::InvalidTarget(target.to_string()))?;
    if dataset.is_empty() {
        return Err(Id3Error::EmptyDataset);
    }
    let mut candidates = Vec::with_capacity(attributes.len());
    for a in attributes {
        let a = a.as_ref();
        let idx = dataset.column_index(a)?;
        if idx == target_idx {
            return Err(Id3Error::TargetInAttributes(a.to_string()));
        }
        if candidates.contains(&idx) {
            return Err(Id3Error::DuplicateAttribute(a.to_string()));
        }
        candidates.push(idx);
    }
    Ok(grow(&Partition::full(dataset), target_idx, &candidates, 1))
}

fn grow(partition: &Partition, target: usize, candidates: &[usize], depth: usize) -> Node {
    let counts = value_counts(partition.values(target));
    if counts.len() == 1 {
        return Node::leaf(counts[0].0);
    }
    if candidates.is_empty() {
        // Partitions are never empty, so there is always a winner.
        let label = most_frequent(&counts).unwrap_or_default();
        debug!(
            "No attributes left at depth {}, voting {} over {} rows",
            depth,
            label,
            partition.len()
        );
        return Node::leaf(label);
    }

    let mut best = candidates[0];
    let mut best_gain = gain(partition, best, target);
    for &a in &candidates[1..] {
        let g = gain(partition, a, target);
        if g > best_gain {
            best = a;
            best_gain = g;
        }
    }

    let dataset = partition.dataset();
    let attribute = dataset.columns()[best].clone();
    debug!(
        "Splitting {} rows on {} with gain {:.6} at depth {}",
        partition.len(),
        attribute,
        best_gain,
        depth
    );

    let remaining: Vec<usize> = candidates.iter().copied().filter(|&a| a != best).collect();
    let branches = partition
        .split_by(best)
        .into_iter()
        .map(|(value, sub)| Branch {
            value: value.to_string(),
            node: grow(&sub, target, &remaining, depth + 1),
        })
        .collect();
    Node::Internal { attribute, branches }
}

/// A fitted ID3 model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    /// Label column the tree predicts.
    pub target: String,
    /// Candidate attributes the tree was grown with.
    pub attributes: Vec<String>,
    pub root: Node,
}

impl DecisionTree {
    /// Fit a tree on `dataset`.
    ///
    /// * `dataset` - Rows to learn from.
    /// * `target` - Name of the label column.
    /// * `attributes` - Candidate columns to split on.
    pub fn fit<S: AsRef<str>>(dataset: &Dataset, target: &str, attributes: &[S]) -> Result<Self, Id3Error> {
        let root = build(dataset, target, attributes)?;
        info!(
            "Fitted tree on {} rows: {} nodes, {} leaves, depth {}.",
            dataset.n_rows(),
            root.n_nodes(),
            root.n_leaves(),
            root.depth()
        );
        Ok(DecisionTree {
            target: target.to_string(),
            attributes: attributes.iter().map(|a| a.as_ref().to_string()).collect(),
            root,
        })
    }

    /// Fit a tree with the target and features chosen by `config`.
    pub fn fit_with_config(dataset: &Dataset, config: &Id3Config) -> Result<Self, Id3Error> {
        let (target, features) = config.resolve(dataset)?;
        Self::fit(dataset, &target, &features)
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn n_nodes(&self) -> usize {
        self.root.n_nodes()
    }

    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }

    /// Number of decision nodes that split on each candidate attribute,
    /// in candidate order.
    pub fn feature_usage(&self) -> Vec<(String, usize)> {
        let mut usage: Vec<(String, usize)> = self.attributes.iter().map(|a| (a.clone(), 0)).collect();
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if let Node::Internal { attribute, branches } = node {
                if let Some(u) = usage.iter_mut().find(|(a, _)| a == attribute) {
                    u.1 += 1;
                }
                stack.extend(branches.iter().map(|b| &b.node));
            }
        }
        usage
    }
}

impl ModelIO for DecisionTree {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::{play_tennis, quinlan_play_tennis};
    use rand::rngs::StdRng;
    use rand::Rng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    const FEATURES: [&str; 3] = ["Outlook", "Humidity", "Wind"];

    fn attribute(node: &Node) -> &str {
        match node {
            Node::Internal { attribute, .. } => attribute.as_str(),
            Node::Leaf { label } => panic!("expected a decision node, found leaf {}", label),
        }
    }

    #[test]
    fn test_quinlan_tree() {
        let ds = quinlan_play_tennis().unwrap();
        let root = build(&ds, "PlayTennis", &FEATURES).unwrap();
        assert_eq!(attribute(&root), "Outlook");
        assert_eq!(root.branch("overcast"), Some(&Node::leaf("yes")));

        let sunny = root.branch("sunny").unwrap();
        assert_eq!(attribute(sunny), "Humidity");
        assert_eq!(sunny.branch("high"), Some(&Node::leaf("no")));
        assert_eq!(sunny.branch("normal"), Some(&Node::leaf("yes")));

        let rain = root.branch("rain").unwrap();
        assert_eq!(attribute(rain), "Wind");
        assert_eq!(rain.branch("weak"), Some(&Node::leaf("yes")));
        assert_eq!(rain.branch("strong"), Some(&Node::leaf("no")));
        assert_eq!(root.n_leaves(), 5);
        assert_eq!(root.depth(), 3);
    }

    #[test]
    fn test_play_tennis_tree() {
        let ds = play_tennis().unwrap();
        let root = build(&ds, "PlayTennis", &FEATURES).unwrap();
        assert_eq!(attribute(&root), "Outlook");
        let Node::Internal { branches, .. } = &root else {
            panic!("root should be a decision node");
        };
        let keys: Vec<&str> = branches.iter().map(|b| b.value.as_str()).collect();
        assert_eq!(keys, vec!["sunny", "overcast", "rain"]);
        assert_eq!(root.branch("rain"), Some(&Node::leaf("yes")));
        // One overcast row is labelled no, so that branch has to split again.
        assert!(!root.branch("overcast").unwrap().is_leaf());
    }

    #[test]
    fn test_build_is_deterministic() {
        let ds = play_tennis().unwrap();
        let a = build(&ds, "PlayTennis", &FEATURES).unwrap();
        let b = build(&ds, "PlayTennis", &FEATURES).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_no_attributes_majority() {
        let ds = Dataset::new(&["label"], &[vec!["yes"], vec!["no"], vec!["yes"], vec!["yes"]]).unwrap();
        let none: [&str; 0] = [];
        assert_eq!(build(&ds, "label", &none).unwrap(), Node::leaf("yes"));

        let tie = Dataset::new(&["label"], &[vec!["no"], vec!["yes"]]).unwrap();
        assert_eq!(build(&tie, "label", &none).unwrap(), Node::leaf("no"));
    }

    #[test]
    fn test_pure_and_single_row() {
        let ds = Dataset::new(&["a", "label"], &[vec!["x", "yes"], vec!["y", "yes"]]).unwrap();
        assert_eq!(build(&ds, "label", &["a"]).unwrap(), Node::leaf("yes"));
        let one = Dataset::new(&["a", "label"], &[vec!["x", "no"]]).unwrap();
        assert_eq!(build(&one, "label", &["a"]).unwrap(), Node::leaf("no"));
    }

    #[test]
    fn test_gain_tie_takes_first_attribute() {
        let ds = Dataset::new(
            &["first", "second", "label"],
            &[vec!["a", "c", "x"], vec!["b", "d", "y"]],
        )
        .unwrap();
        let root = build(&ds, "label", &["first", "second"]).unwrap();
        assert_eq!(attribute(&root), "first");
        let root = build(&ds, "label", &["second", "first"]).unwrap();
        assert_eq!(attribute(&root), "second");
    }

    #[test]
    fn test_only_observed_values_branch() {
        // "e" never reaches the split on "b" under "p", so that node has no "e" branch.
        let ds = Dataset::new(
            &["a", "b", "label"],
            &[
                vec!["p", "c", "x"],
                vec!["p", "d", "y"],
                vec!["q", "d", "x"],
                vec!["q", "e", "x"],
                vec!["q", "c", "x"],
                vec!["q", "d", "x"],
            ],
        )
        .unwrap();
        let root = build(&ds, "label", &["a", "b"]).unwrap();
        assert_eq!(attribute(&root), "a");
        assert_eq!(root.branch("q"), Some(&Node::leaf("x")));
        let p = root.branch("p").unwrap();
        assert_eq!(attribute(p), "b");
        assert_eq!(p.branch("c"), Some(&Node::leaf("x")));
        assert_eq!(p.branch("d"), Some(&Node::leaf("y")));
        assert_eq!(p.branch("e"), None);
    }

    #[test]
    fn test_build_errors() {
        let ds = play_tennis().unwrap();
        assert_eq!(
            build(&ds, "Play", &FEATURES),
            Err(Id3Error::InvalidTarget("Play".to_string()))
        );
        assert_eq!(
            build(&ds, "PlayTennis", &["Outlook", "Temperature"]),
            Err(Id3Error::UnknownColumn("Temperature".to_string()))
        );
        assert_eq!(
            build(&ds, "PlayTennis", &["Outlook", "PlayTennis"]),
            Err(Id3Error::TargetInAttributes("PlayTennis".to_string()))
        );
        assert_eq!(
            build(&ds, "PlayTennis", &["Wind", "Outlook", "Wind"]),
            Err(Id3Error::DuplicateAttribute("Wind".to_string()))
        );
        let empty = Dataset::new(&["a", "label"], &Vec::<Vec<&str>>::new()).unwrap();
        assert_eq!(build(&empty, "label", &["a"]), Err(Id3Error::EmptyDataset));
    }

    fn check_paths(node: &Node, used: &mut Vec<String>) {
        if let Node::Internal { attribute, branches } = node {
            assert!(!used.contains(attribute), "{} reused along a path", attribute);
            used.push(attribute.clone());
            let values: HashSet<&str> = branches.iter().map(|b| b.value.as_str()).collect();
            assert_eq!(values.len(), branches.len());
            for b in branches {
                check_paths(&b.node, used);
            }
            used.pop();
        }
    }

    #[test]
    fn test_random_tables_terminate() {
        let mut rng = StdRng::seed_from_u64(7);
        for n_attrs in 0..=10_usize {
            let mut columns: Vec<String> = (0..n_attrs).map(|i| format!("a{}", i)).collect();
            columns.push("label".to_string());
            let records: Vec<Vec<String>> = (0..200)
                .map(|_| {
                    let mut r: Vec<String> = (0..n_attrs).map(|_| format!("v{}", rng.gen_range(0..3))).collect();
                    r.push(format!("l{}", rng.gen_range(0..3)));
                    r
                })
                .collect();
            let ds = Dataset::new(&columns, &records).unwrap();
            let tree = DecisionTree::fit(&ds, "label", &columns[..n_attrs]).unwrap();
            assert!(tree.depth() <= n_attrs + 1);
            check_paths(&tree.root, &mut Vec::new());
        }
    }

    #[test]
    fn test_fit_with_config_and_usage() {
        let ds = quinlan_play_tennis().unwrap();
        let tree = DecisionTree::fit_with_config(&ds, &Id3Config::default()).unwrap();
        assert_eq!(tree.target, "PlayTennis");
        assert_eq!(tree.attributes, FEATURES);
        assert_eq!(tree.n_nodes(), 8);
        assert_eq!(
            tree.feature_usage(),
            vec![
                ("Outlook".to_string(), 1),
                ("Humidity".to_string(), 1),
                ("Wind".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_model_io() {
        let ds = quinlan_play_tennis().unwrap();
        let tree = DecisionTree::fit(&ds, "PlayTennis", &FEATURES).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tree.json");
        tree.save(&path).unwrap();
        let loaded = DecisionTree::load(&path).unwrap();
        assert_eq!(loaded, tree);
        assert!(matches!(DecisionTree::from_json("{"), Err(Id3Error::UnableToRead(_))));
    }
}
