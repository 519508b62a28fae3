use super::traits::Sampler;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// A sampler that randomly samples indices from a dataset.
///
/// Without replacement each epoch is a shuffled prefix of `0..dataset_len`;
/// with replacement indices are drawn independently and may repeat.
#[derive(Debug, Clone)]
pub struct RandomSampler {
    replacement: bool,
    num_samples: Option<usize>,
    rng: StdRng,
}

impl RandomSampler {
    /// Creates a new `RandomSampler` seeded from system entropy.
    ///
    /// # Arguments
    ///
    /// * `replacement`: If `true`, an index can be selected multiple times.
    /// * `num_samples`: The number of samples per epoch. Defaults to the dataset size.
    pub fn new(replacement: bool, num_samples: Option<usize>) -> Self {
        RandomSampler {
            replacement,
            num_samples,
            rng: StdRng::from_entropy(),
        }
    }

    /// Same as [`RandomSampler::new`] with a reproducible sequence of epochs.
    pub fn seeded(replacement: bool, num_samples: Option<usize>, seed: u64) -> Self {
        RandomSampler {
            replacement,
            num_samples,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn replacement(&self) -> bool {
        self.replacement
    }
}

impl Sampler for RandomSampler {
    fn iter(&mut self, dataset_len: usize) -> Box<dyn Iterator<Item = usize>> {
        if dataset_len == 0 {
            return Box::new(std::iter::empty());
        }

        let requested = self.num_samples.unwrap_or(dataset_len);
        if self.replacement {
            let indices: Vec<usize> = (0..requested)
                .map(|_| self.rng.gen_range(0..dataset_len))
                .collect();
            return Box::new(indices.into_iter());
        }

        if requested > dataset_len {
            log::warn!(
                "RandomSampler: num_samples ({}) > dataset_len ({}) without replacement, yielding {} samples",
                requested,
                dataset_len,
                dataset_len
            );
        }
        let mut indices: Vec<usize> = (0..dataset_len).collect();
        indices.shuffle(&mut self.rng);
        indices.truncate(requested);
        Box::new(indices.into_iter())
    }

    fn len(&self, dataset_len: usize) -> usize {
        if dataset_len == 0 {
            return 0;
        }
        let requested = self.num_samples.unwrap_or(dataset_len);
        if self.replacement {
            requested
        } else {
            requested.min(dataset_len)
        }
    }
}

#[cfg(test)]
#[path = "random_sampler_test.rs"]
mod tests;
