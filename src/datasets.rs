//! Datasets
//!
//! Small built-in tables for demos and regression tests.
use crate::data::Dataset;
use crate::errors::Id3Error;

const COLUMNS: [&str; 4] = ["Outlook", "Humidity", "Wind", "PlayTennis"];

/// The synthetic 14 row tennis table.
pub fn play_tennis() -> Result<Dataset, Id3Error> {
    Dataset::from_columns(&[
        (
            COLUMNS[0],
            vec![
                "sunny", "sunny", "overcast", "rain", "rain", "overcast", "sunny", "sunny", "overcast", "rain",
                "overcast", "overcast", "rain", "sunny",
            ],
        ),
        (
            COLUMNS[1],
            vec![
                "high", "normal", "high", "normal", "high", "high", "normal", "normal", "normal", "normal", "normal",
                "high", "high", "normal",
            ],
        ),
        (
            COLUMNS[2],
            vec![
                "weak", "strong", "weak", "weak", "weak", "strong", "strong", "weak", "weak", "weak", "strong",
                "strong", "weak", "strong",
            ],
        ),
        (
            COLUMNS[3],
            vec![
                "no", "no", "yes", "yes", "yes", "no", "yes", "no", "yes", "yes", "yes", "yes", "yes", "no",
            ],
        ),
    ])
}

/// Quinlan's textbook tennis table, without the temperature column.
pub fn quinlan_play_tennis() -> Result<Dataset, Id3Error> {
    Dataset::new(
        &COLUMNS,
        &[
            vec!["sunny", "high", "weak", "no"],
            vec!["sunny", "high", "strong", "no"],
            vec!["overcast", "high", "weak", "yes"],
            vec!["rain", "high", "weak", "yes"],
            vec!["rain", "normal", "weak", "yes"],
            vec!["rain", "normal", "strong", "no"],
            vec!["overcast", "normal", "strong", "yes"],
            vec!["sunny", "high", "weak", "no"],
            vec!["sunny", "normal", "weak", "yes"],
            vec!["rain", "normal", "weak", "yes"],
            vec!["sunny", "normal", "strong", "yes"],
            vec!["overcast", "high", "strong", "yes"],
            vec!["overcast", "normal", "weak", "yes"],
            vec!["rain", "high", "strong", "no"],
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_tennis_matches_resource() {
        let ds = play_tennis().unwrap();
        let from_csv = Dataset::from_csv_path("resources/play_tennis.csv").unwrap();
        assert_eq!(ds, from_csv);
    }

    #[test]
    fn test_quinlan_shape() {
        let ds = quinlan_play_tennis().unwrap();
        assert_eq!(ds.n_rows(), 14);
        assert_eq!(ds.columns(), &COLUMNS);
    }
}
