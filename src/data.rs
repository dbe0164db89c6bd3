//! Data
//!
//! Schema-checked categorical table and the row-index views used while growing a tree.
use crate::errors::Id3Error;
use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Column major table of categorical values.
///
/// Every column has a unique name and every column holds exactly `rows` values.
/// The table is never mutated once built; growing a tree only ever reads it
/// through [`Partition`] views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDataset", into = "RawDataset")]
pub struct Dataset {
    columns: Vec<String>,
    data: Vec<Vec<String>>,
    rows: usize,
}

/// Serialized form of a [`Dataset`]: column names and column major values.
///
/// Deserializing goes through [`Dataset::from_columns`], so the schema is
/// checked the same way as for any other source.
#[derive(Serialize, Deserialize)]
struct RawDataset {
    columns: Vec<String>,
    data: Vec<Vec<String>>,
}

impl TryFrom<RawDataset> for Dataset {
    type Error = Id3Error;

    fn try_from(raw: RawDataset) -> Result<Self, Self::Error> {
        if raw.columns.len() != raw.data.len() {
            return Err(Id3Error::InvalidParameter(
                "data".to_string(),
                format!("{} columns", raw.columns.len()),
                format!("{} columns", raw.data.len()),
            ));
        }
        let columns: Vec<(String, Vec<String>)> = raw.columns.into_iter().zip(raw.data).collect();
        Dataset::from_columns(&columns)
    }
}

impl From<Dataset> for RawDataset {
    fn from(ds: Dataset) -> Self {
        RawDataset {
            columns: ds.columns,
            data: ds.data,
        }
    }
}

fn check_columns<S: AsRef<str>>(columns: &[S]) -> Result<Vec<String>, Id3Error> {
    if columns.is_empty() {
        return Err(Id3Error::EmptySchema);
    }
    let mut seen = HashSet::with_capacity(columns.len());
    for c in columns {
        if !seen.insert(c.as_ref()) {
            return Err(Id3Error::DuplicateColumn(c.as_ref().to_string()));
        }
    }
    Ok(columns.iter().map(|c| c.as_ref().to_string()).collect())
}

impl Dataset {
    /// Build a dataset from a header and row major records.
    ///
    /// * `columns` - Column names, must be unique and non-empty.
    /// * `records` - One record per row, with one value per column.
    pub fn new<S, T>(columns: &[S], records: &[Vec<T>]) -> Result<Self, Id3Error>
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let columns = check_columns(columns)?;
        let mut data = vec![Vec::with_capacity(records.len()); columns.len()];
        for (row, record) in records.iter().enumerate() {
            if record.len() != columns.len() {
                return Err(Id3Error::RaggedRecord {
                    row,
                    expected: columns.len(),
                    found: record.len(),
                });
            }
            for (col, value) in record.iter().enumerate() {
                data[col].push(value.as_ref().to_string());
            }
        }
        Ok(Dataset {
            columns,
            data,
            rows: records.len(),
        })
    }

    /// Build a dataset from named columns of equal length.
    pub fn from_columns<N, V>(columns: &[(N, Vec<V>)]) -> Result<Self, Id3Error>
    where
        N: AsRef<str>,
        V: AsRef<str>,
    {
        let names: Vec<&str> = columns.iter().map(|(n, _)| n.as_ref()).collect();
        let names = check_columns(&names)?;
        let rows = columns[0].1.len();
        if let Some((n, v)) = columns.iter().find(|(_, v)| v.len() != rows) {
            return Err(Id3Error::InvalidParameter(
                n.as_ref().to_string(),
                format!("{} values", rows),
                format!("{} values", v.len()),
            ));
        }
        let data = columns
            .iter()
            .map(|(_, v)| v.iter().map(|x| x.as_ref().to_string()).collect())
            .collect();
        Ok(Dataset {
            columns: names,
            data,
            rows,
        })
    }

    /// Read a dataset from csv data with a header row.
    ///
    /// Values are trimmed of surrounding whitespace.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, Id3Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);
        let columns: Vec<String> = rdr
            .headers()
            .map_err(|e| Id3Error::UnableToRead(e.to_string()))?
            .iter()
            .map(String::from)
            .collect();
        let mut records = Vec::new();
        for record in rdr.records() {
            let record = record.map_err(|e| Id3Error::UnableToRead(e.to_string()))?;
            records.push(record.iter().map(String::from).collect::<Vec<_>>());
        }
        Self::new(&columns, &records)
    }

    /// Read a dataset from a csv file on disk.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, Id3Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Id3Error::UnableToRead(format!("{}: {}", path.display(), e)))?;
        Self::from_csv_reader(file)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn n_rows(&self) -> usize {
        self.rows
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Position of a column, failing for names outside the schema.
    pub fn column_index(&self, name: &str) -> Result<usize, Id3Error> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| Id3Error::UnknownColumn(name.to_string()))
    }

    pub fn column(&self, col: usize) -> &[String] {
        &self.data[col]
    }

    pub fn value(&self, row: usize, col: usize) -> &str {
        &self.data[col][row]
    }

    /// View of a single row, usable as a prediction record.
    pub fn row(&self, row: usize) -> RowView<'_> {
        RowView { dataset: self, row }
    }

    /// Copy the given rows, in the given order, into a new dataset.
    pub fn select_rows(&self, index: &[usize]) -> Dataset {
        let data = self
            .data
            .iter()
            .map(|c| index.iter().map(|&i| c[i].clone()).collect())
            .collect();
        Dataset {
            columns: self.columns.clone(),
            data,
            rows: index.len(),
        }
    }
}

/// Attribute lookup used when classifying a record.
pub trait Record {
    /// Value of the named attribute, if the record has one.
    fn get_value(&self, attribute: &str) -> Option<&str>;
}

impl Record for HashMap<String, String> {
    fn get_value(&self, attribute: &str) -> Option<&str> {
        self.get(attribute).map(String::as_str)
    }
}

impl Record for std::collections::HashMap<String, String> {
    fn get_value(&self, attribute: &str) -> Option<&str> {
        self.get(attribute).map(String::as_str)
    }
}

impl Record for [(&str, &str)] {
    fn get_value(&self, attribute: &str) -> Option<&str> {
        self.iter().find(|(a, _)| *a == attribute).map(|(_, v)| *v)
    }
}

/// A single row of a [`Dataset`].
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    dataset: &'a Dataset,
    row: usize,
}

impl Record for RowView<'_> {
    fn get_value(&self, attribute: &str) -> Option<&str> {
        let col = self.dataset.column_index(attribute).ok()?;
        Some(self.dataset.value(self.row, col))
    }
}

/// Subset of the rows of a dataset, held as row indices.
#[derive(Debug, Clone)]
pub struct Partition<'a> {
    dataset: &'a Dataset,
    index: Vec<usize>,
}

impl<'a> Partition<'a> {
    /// Partition covering every row of the dataset.
    pub fn full(dataset: &'a Dataset) -> Self {
        Partition {
            dataset,
            index: (0..dataset.n_rows()).collect(),
        }
    }

    /// Partition over the given rows.
    ///
    /// Fails with [`Id3Error::InvalidParameter`] when a row is outside the dataset.
    pub fn new(dataset: &'a Dataset, index: Vec<usize>) -> Result<Self, Id3Error> {
        if let Some(&i) = index.iter().find(|&&i| i >= dataset.n_rows()) {
            return Err(Id3Error::InvalidParameter(
                "index".to_string(),
                format!("rows below {}", dataset.n_rows()),
                i.to_string(),
            ));
        }
        Ok(Partition { dataset, index })
    }

    /// Rows of the dataset in this partition.
    pub fn index(&self) -> &[usize] {
        &self.index
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Values of one column for the rows in this partition.
    pub fn values(&self, col: usize) -> impl Iterator<Item = &'a str> + '_ {
        let column = self.dataset.column(col);
        self.index.iter().map(move |&i| column[i].as_str())
    }

    /// Split into one partition per distinct value of `col`.
    ///
    /// Values come back in the order they first appear in this partition.
    pub fn split_by(&self, col: usize) -> Vec<(&'a str, Partition<'a>)> {
        let column = self.dataset.column(col);
        let mut position: HashMap<&'a str, usize> = HashMap::new();
        let mut splits: Vec<(&'a str, Partition<'a>)> = Vec::new();
        for &i in self.index.iter() {
            let v = column[i].as_str();
            let p = *position.entry(v).or_insert_with(|| {
                splits.push((
                    v,
                    Partition {
                        dataset: self.dataset,
                        index: Vec::new(),
                    },
                ));
                splits.len() - 1
            });
            splits[p].1.index.push(i);
        }
        splits
    }
}
