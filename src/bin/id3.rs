//! Command line entrypoint: build an ID3 tree from a csv file and print it.
use clap::Parser;
use id3tree::datasets::play_tennis;
use id3tree::sampler::train_test_split;
use id3tree::{Dataset, DecisionTree, Id3Config, Id3Error, ModelIO};
use log::{error, info, warn};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "id3", about = "Build an ID3 decision tree from categorical data.")]
struct Options {
    /// The path to your .csv file. The built-in tennis data is used when omitted.
    #[arg(short, long)]
    file: Option<PathBuf>,
    /// The name of the column to predict. Defaults to the last column.
    #[arg(short, long)]
    target: Option<String>,
    /// Comma separated columns to split on. Defaults to every column but the target.
    #[arg(long, value_delimiter = ',')]
    features: Option<Vec<String>>,
    /// The path to a json config file. Flags override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// The path to write the fitted tree to, as json.
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Share of rows to hold out and score the tree on.
    #[arg(long)]
    test_fraction: Option<f64>,
    /// Seed for the held out rows.
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Only print the json structure.
    #[arg(long, conflicts_with = "outline_only")]
    json_only: bool,
    /// Only print the indented outline.
    #[arg(long)]
    outline_only: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    match run(Options::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(options: Options) -> Result<(), Id3Error> {
    let dataset = match &options.file {
        Some(path) => Dataset::from_csv_path(path)?,
        None => play_tennis()?,
    };
    info!("Loaded {} rows and {} columns.", dataset.n_rows(), dataset.n_cols());

    let config = merge_config(&options)?;
    let (train, test) = holdout(dataset, &options)?;
    let tree = DecisionTree::fit_with_config(&train, &config)?;

    for line in report(&tree, &options)? {
        println!("{}", line);
    }

    if let Some(test) = test {
        match tree.accuracy(&test) {
            Ok(acc) => info!("Accuracy on {} held out rows: {:.4}", test.n_rows(), acc),
            Err(e) => warn!("Unable to score held out rows: {}", e),
        }
    }
    if let Some(path) = &options.output {
        tree.save(path)?;
        info!("Saved tree to {}.", path.display());
    }
    Ok(())
}

/// Config file values, with `--target` and `--features` taking precedence.
fn merge_config(options: &Options) -> Result<Id3Config, Id3Error> {
    let mut config = match &options.config {
        Some(path) => Id3Config::load(path)?,
        None => Id3Config::default(),
    };
    if options.target.is_some() {
        config = config.set_target(options.target.clone());
    }
    if options.features.is_some() {
        config = config.set_features(options.features.clone());
    }
    Ok(config)
}

/// Rows to fit on, and the held out rows when `--test-fraction` is set.
fn holdout(dataset: Dataset, options: &Options) -> Result<(Dataset, Option<Dataset>), Id3Error> {
    match options.test_fraction {
        Some(fraction) => {
            let (train, test) = train_test_split(&dataset, fraction, options.seed)?;
            Ok((train, Some(test)))
        }
        None => Ok((dataset, None)),
    }
}

/// Lines to print: the pretty json structure, then the outline.
fn report(tree: &DecisionTree, options: &Options) -> Result<Vec<String>, Id3Error> {
    let mut lines = Vec::new();
    if !options.outline_only {
        let json = serde_json::to_string_pretty(&tree.root.to_json_value())
            .map_err(|e| Id3Error::UnableToWrite(e.to_string()))?;
        lines.extend(json.lines().map(String::from));
    }
    if !options.json_only {
        lines.extend(tree.render());
    }
    Ok(lines)
}
