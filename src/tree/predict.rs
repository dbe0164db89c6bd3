//! Tree Prediction Methods
//!
//! Classification of records by walking from the root to a leaf.
use super::node::Node;
use super::tree::DecisionTree;
use crate::data::{Dataset, Record};
use crate::errors::Id3Error;
use crate::metrics::accuracy;
use rayon::prelude::*;

impl Node {
    /// Label of the leaf a record reaches.
    ///
    /// Fails with [`Id3Error::MissingAttribute`] when the record lacks an
    /// attribute a decision node splits on, and with
    /// [`Id3Error::NoMatchingBranch`] when the record's value was never seen
    /// at that node during fitting.
    pub fn classify<R: Record + ?Sized>(&self, record: &R) -> Result<&str, Id3Error> {
        let mut node = self;
        loop {
            match node {
                Node::Leaf { label } => return Ok(label.as_str()),
                Node::Internal { attribute, branches } => {
                    let value = record
                        .get_value(attribute)
                        .ok_or_else(|| Id3Error::MissingAttribute(attribute.clone()))?;
                    node = branches
                        .iter()
                        .find(|b| b.value == value)
                        .map(|b| &b.node)
                        .ok_or_else(|| Id3Error::NoMatchingBranch {
                            attribute: attribute.clone(),
                            value: value.to_string(),
                        })?;
                }
            }
        }
    }
}

impl DecisionTree {
    /// Predict the label of a single record.
    pub fn predict_record<R: Record + ?Sized>(&self, record: &R) -> Result<String, Id3Error> {
        self.root.classify(record).map(String::from)
    }

    /// Predict a label for every row of `dataset`.
    ///
    /// A single failing row fails the whole prediction.
    pub fn predict(&self, dataset: &Dataset) -> Result<Vec<String>, Id3Error> {
        (0..dataset.n_rows())
            .into_par_iter()
            .map(|i| self.predict_record(&dataset.row(i)))
            .collect()
    }

    /// Share of rows of `dataset` whose target value the tree predicts.
    pub fn accuracy(&self, dataset: &Dataset) -> Result<f64, Id3Error> {
        let target = dataset
            .column_index(&self.target)
            .map_err(|_| Id3Error::InvalidTarget(self.target.clone()))?;
        let predictions = self.predict(dataset)?;
        accuracy(&predictions, dataset.column(target))
    }
}
