//! Sampler
//!
//! Seeded row sampling, used to hold rows out of fitting for evaluation.
use crate::data::Dataset;
use crate::errors::Id3Error;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

// A sampler splits a set of row indices in two.
pub trait Sampler {
    /// Sample the rows, returning a tuple, where the first item is the rows
    /// chosen, and the second are the rows excluded. Both keep input order.
    fn sample(&mut self, rng: &mut StdRng, index: &[usize]) -> (Vec<usize>, Vec<usize>);
}

/// Chooses an exact share of the rows uniformly at random.
pub struct HoldoutSampler {
    fraction: f64,
}

impl HoldoutSampler {
    pub fn new(fraction: f64) -> Self {
        HoldoutSampler { fraction }
    }

    fn n_chosen(&self, n: usize) -> usize {
        ((n as f64) * self.fraction).round() as usize
    }
}

impl Sampler for HoldoutSampler {
    fn sample(&mut self, rng: &mut StdRng, index: &[usize]) -> (Vec<usize>, Vec<usize>) {
        let n = self.n_chosen(index.len()).min(index.len());
        let mut order: Vec<usize> = (0..index.len()).collect();
        order.shuffle(rng);
        let mut chosen = vec![false; index.len()];
        for &p in &order[..n] {
            chosen[p] = true;
        }
        let mut c = Vec::new();
        let mut e = Vec::new();
        for (p, i) in index.iter().enumerate() {
            if chosen[p] {
                c.push(*i);
            } else {
                e.push(*i);
            }
        }
        (c, e)
    }
}

/// Split a dataset into a train and a test part.
///
/// * `dataset` - Rows to split.
/// * `test_fraction` - Share of rows held out for testing, strictly between 0 and 1.
/// * `seed` - Seed for the random number generator.
///
/// Both parts must end up with at least one row.
pub fn train_test_split(dataset: &Dataset, test_fraction: f64, seed: u64) -> Result<(Dataset, Dataset), Id3Error> {
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(Id3Error::InvalidParameter(
            "test_fraction".to_string(),
            "a value in (0, 1)".to_string(),
            test_fraction.to_string(),
        ));
    }
    let mut sampler = HoldoutSampler::new(test_fraction);
    let n_test = sampler.n_chosen(dataset.n_rows());
    if n_test == 0 || n_test >= dataset.n_rows() {
        return Err(Id3Error::InvalidParameter(
            "test_fraction".to_string(),
            format!("a split leaving rows on both sides of {} rows", dataset.n_rows()),
            test_fraction.to_string(),
        ));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let index: Vec<usize> = (0..dataset.n_rows()).collect();
    let (test, train) = sampler.sample(&mut rng, &index);
    Ok((dataset.select_rows(&train), dataset.select_rows(&test)))
}
