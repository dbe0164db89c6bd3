//! Entropy
//!
//! Entropy of a label distribution and the information gain of splitting a
//! partition on an attribute. All logarithms are base 2, so values are in bits.
use crate::data::Partition;
use crate::errors::Id3Error;
use crate::utils::value_counts;

/// Entropy of a sequence of labels.
///
/// Only labels that are present contribute, so `0 * log2(0)` never occurs.
/// Fails with [`Id3Error::EmptyDataset`] when `labels` is empty.
pub fn entropy<'a, I>(labels: I) -> Result<f64, Id3Error>
where
    I: IntoIterator<Item = &'a str>,
{
    let counts = value_counts(labels);
    let total: usize = counts.iter().map(|(_, c)| c).sum();
    if total == 0 {
        return Err(Id3Error::EmptyDataset);
    }
    Ok(entropy_from_counts(counts.iter().map(|(_, c)| *c), total))
}

/// Entropy from class counts that add up to `total`.
pub fn entropy_from_counts<I: IntoIterator<Item = usize>>(counts: I, total: usize) -> f64 {
    let total = total as f64;
    counts.into_iter().fold(0.0, |acc, c| {
        let p = c as f64 / total;
        acc - p * p.log2()
    })
}

/// Information gain of splitting `partition` on `attribute`, with respect to `target`.
///
/// * `partition` - Rows to evaluate, must not be empty.
/// * `attribute` - Name of the column to split on.
/// * `target` - Name of the label column.
pub fn information_gain(partition: &Partition, attribute: &str, target: &str) -> Result<f64, Id3Error> {
    let dataset = partition.dataset();
    let target = dataset
        .column_index(target)
        .map_err(|_| Id3Error::InvalidTarget(target.to_string()))?;
    let attribute = dataset.column_index(attribute)?;
    if partition.is_empty() {
        return Err(Id3Error::EmptyDataset);
    }
    Ok(gain(partition, attribute, target))
}

/// Entropy of the target column over a non-empty partition.
pub(crate) fn partition_entropy(partition: &Partition, target: usize) -> f64 {
    let counts = value_counts(partition.values(target));
    entropy_from_counts(counts.into_iter().map(|(_, c)| c), partition.len())
}

/// Information gain by column position, for a non-empty partition.
pub(crate) fn gain(partition: &Partition, attribute: usize, target: usize) -> f64 {
    let total = partition.len() as f64;
    let baseline = partition_entropy(partition, target);
    let weighted = partition
        .split_by(attribute)
        .iter()
        .fold(0.0, |acc, (_, sub)| acc + (sub.len() as f64 / total) * partition_entropy(sub, target));
    baseline - weighted
}
