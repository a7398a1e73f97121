use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::models::Dataset;

/// Indices of the first `n` rows.
pub fn head(dataset: &Dataset, n: usize) -> Vec<usize> {
    (0..n.min(dataset.n_rows())).collect()
}

/// Indices of `n` distinct rows drawn uniformly at random, in draw order.
///
/// The same `seed` always yields the same rows; `None` seeds from OS entropy.
pub fn sample_rows(dataset: &Dataset, n: usize, seed: Option<u64>) -> Vec<usize> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let amount = n.min(dataset.n_rows());
    rand::seq::index::sample(&mut rng, dataset.n_rows(), amount).into_vec()
}
