//! Errors
//!
//! Custom error types used throughout the `id3tree` crate.
use thiserror::Error;

/// Errors that can occur while loading data, building or using a tree.
#[derive(Debug, Error, PartialEq)]
pub enum Id3Error {
    /// The target column is not one of the dataset columns.
    #[error("Target column {0} was not found in the dataset.")]
    InvalidTarget(String),
    /// The dataset has no rows.
    #[error("The dataset is empty, at least one row is required.")]
    EmptyDataset,
    /// The dataset has no columns.
    #[error("The dataset has no columns.")]
    EmptySchema,
    /// A column name was requested that the dataset does not have.
    #[error("Column {0} was not found in the dataset.")]
    UnknownColumn(String),
    /// The target was also passed as a candidate attribute.
    #[error("The target column {0} cannot be used as a splitting attribute.")]
    TargetInAttributes(String),
    /// A candidate attribute was passed more than once.
    #[error("Attribute {0} was passed more than once.")]
    DuplicateAttribute(String),
    /// Two columns share the same name.
    #[error("Column name {0} is used more than once.")]
    DuplicateColumn(String),
    /// A record does not have one value per column.
    #[error("Record {row} has {found} values, expected {expected}.")]
    RaggedRecord { row: usize, expected: usize, found: usize },
    /// A record used for prediction lacks an attribute the tree splits on.
    #[error("The record has no value for attribute {0}.")]
    MissingAttribute(String),
    /// No branch exists for the value a record presents at a decision node.
    #[error("No branch for value {value} of attribute {attribute}.")]
    NoMatchingBranch { attribute: String, value: String },
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// Unable to read a model, config or dataset.
    #[error("Unable to read from {0}")]
    UnableToRead(String),
    /// Unable to write a model or config.
    #[error("Unable to write: {0}")]
    UnableToWrite(String),
}
