//! Metrics
//!
//! Evaluation of predicted labels.
use crate::errors::Id3Error;

/// Share of predictions equal to the matching label.
///
/// * `predictions` - Predicted labels.
/// * `labels` - True labels, same length as `predictions`.
pub fn accuracy<P: AsRef<str>, L: AsRef<str>>(predictions: &[P], labels: &[L]) -> Result<f64, Id3Error> {
    if predictions.len() != labels.len() {
        return Err(Id3Error::InvalidParameter(
            "labels".to_string(),
            format!("{} values", predictions.len()),
            format!("{} values", labels.len()),
        ));
    }
    if predictions.is_empty() {
        return Err(Id3Error::EmptyDataset);
    }
    let correct = predictions
        .iter()
        .zip(labels)
        .filter(|(p, l)| p.as_ref() == l.as_ref())
        .count();
    Ok(correct as f64 / predictions.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_accuracy() {
        let preds = vec!["yes", "no", "yes", "yes"];
        let labels = vec!["yes", "yes", "yes", "no"];
        assert_relative_eq!(accuracy(&preds, &labels).unwrap(), 0.5);
        assert_relative_eq!(accuracy(&labels, &labels).unwrap(), 1.0);
    }

    #[test]
    fn test_accuracy_errors() {
        assert!(matches!(
            accuracy(&["yes"], &["yes", "no"]),
            Err(Id3Error::InvalidParameter(..))
        ));
        let empty: [&str; 0] = [];
        assert_eq!(accuracy(&empty, &empty), Err(Id3Error::EmptyDataset));
    }
}
