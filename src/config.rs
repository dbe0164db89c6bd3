//! Configuration
//!
//! Choice of target and feature columns, and json persistence shared by
//! configs and fitted trees.
use crate::data::Dataset;
use crate::errors::Id3Error;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Which columns to learn from.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Id3Config {
    /// Label column. Defaults to the last column of the dataset.
    #[serde(default)]
    pub target: Option<String>,
    /// Candidate attributes. Defaults to every column but the target, in column order.
    #[serde(default)]
    pub features: Option<Vec<String>>,
}

impl Id3Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label column.
    /// * `target` - Name of the column to predict.
    pub fn set_target(mut self, target: Option<String>) -> Self {
        self.target = target;
        self
    }

    /// Set the candidate attributes.
    /// * `features` - Columns to split on, in tie-break order.
    pub fn set_features(mut self, features: Option<Vec<String>>) -> Self {
        self.features = features;
        self
    }

    /// Target and feature names for `dataset`, with defaults filled in.
    pub fn resolve(&self, dataset: &Dataset) -> Result<(String, Vec<String>), Id3Error> {
        let target = match &self.target {
            Some(t) => t.clone(),
            None => dataset.columns().last().cloned().ok_or(Id3Error::EmptySchema)?,
        };
        if dataset.column_index(&target).is_err() {
            return Err(Id3Error::InvalidTarget(target));
        }
        let features = match &self.features {
            Some(f) => f.clone(),
            None => dataset.columns().iter().filter(|c| **c != target).cloned().collect(),
        };
        Ok((target, features))
    }
}

/// IO
pub trait ModelIO: Serialize + DeserializeOwned + Sized {
    /// Save as a json object to a file.
    ///
    /// * `path` - Path to save to.
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Id3Error> {
        fs::write(path, self.json_dump()?).map_err(|e| Id3Error::UnableToWrite(e.to_string()))
    }

    /// Dump as a json object
    fn json_dump(&self) -> Result<String, Id3Error> {
        serde_json::to_string(self).map_err(|e| Id3Error::UnableToWrite(e.to_string()))
    }

    /// Load from a json string
    ///
    /// * `json_str` - String object, which can be deserialized from json.
    fn from_json(json_str: &str) -> Result<Self, Id3Error> {
        serde_json::from_str::<Self>(json_str).map_err(|e| Id3Error::UnableToRead(e.to_string()))
    }

    /// Load from a path to a json object.
    ///
    /// * `path` - Path to load from.
    fn load<P: AsRef<Path>>(path: P) -> Result<Self, Id3Error> {
        let json_str = fs::read_to_string(path).map_err(|e| Id3Error::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }
}

impl ModelIO for Id3Config {}
