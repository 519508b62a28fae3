//! # DataLoader
//!
//! Batches the samples of a [`Dataset`] in the order chosen by a [`Sampler`].
//!
//! ```
//! use napagrad_data::dataloader::DataLoader;
//! use napagrad_data::datasets::VecDataset;
//! use napagrad_data::samplers::SequentialSampler;
//!
//! let dataset = VecDataset::new(vec![1, 2, 3, 4, 5, 6]);
//! let mut loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false).unwrap();
//! for batch in &mut loader {
//!     println!("Batch: {:?}", batch.unwrap());
//! }
//! loader.reset(); // next epoch
//! assert_eq!(loader.next().unwrap().unwrap(), vec![1, 2]);
//! ```

use crate::datasets::Dataset;
use crate::samplers::Sampler;
use napagrad_core::NapagradError;

/// Iterator over batches of dataset items.
///
/// One pass over the iterator is one epoch. Call [`DataLoader::reset`] to
/// start the next one; a random sampler then yields a fresh order.
pub struct DataLoader<D: Dataset, S: Sampler> {
    dataset: D,
    batch_size: usize,
    sampler: S,
    /// If true, a final batch smaller than `batch_size` is skipped.
    drop_last: bool,
    indices_iter: Box<dyn Iterator<Item = usize>>,
    epoch: usize,
}

impl<D: Dataset, S: Sampler> DataLoader<D, S> {
    /// Creates a loader positioned at the start of the first epoch.
    ///
    /// # Errors
    /// [`NapagradError::InvalidArgument`] if `batch_size` is zero.
    pub fn new(dataset: D, batch_size: usize, mut sampler: S, drop_last: bool) -> Result<Self, NapagradError> {
        if batch_size == 0 {
            return Err(NapagradError::InvalidArgument {
                name: "batch_size".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        let indices_iter = sampler.iter(dataset.len());
        Ok(Self {
            dataset,
            batch_size,
            sampler,
            drop_last,
            indices_iter,
            epoch: 0,
        })
    }

    /// Starts a new epoch, discarding whatever is left of the current one.
    pub fn reset(&mut self) {
        self.indices_iter = self.sampler.iter(self.dataset.len());
        self.epoch += 1;
        log::debug!(
            "DataLoader: epoch {} ({} batches of up to {})",
            self.epoch,
            self.num_batches(),
            self.batch_size
        );
    }

    /// Number of batches in a full epoch.
    pub fn num_batches(&self) -> usize {
        let samples = self.sampler.len(self.dataset.len());
        if self.drop_last {
            samples / self.batch_size
        } else {
            (samples + self.batch_size - 1) / self.batch_size
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of completed calls to [`DataLoader::reset`].
    pub fn epoch(&self) -> usize {
        self.epoch
    }

    pub fn dataset(&self) -> &D {
        &self.dataset
    }
}

impl<D: Dataset, S: Sampler> Iterator for DataLoader<D, S> {
    type Item = Result<Vec<D::Item>, NapagradError>;

    /// Returns the next batch, `Some(Err(_))` if the dataset fails to
    /// produce an item, or `None` at the end of the epoch.
    fn next(&mut self) -> Option<Self::Item> {
        let mut batch = Vec::with_capacity(self.batch_size);
        for idx in self.indices_iter.by_ref().take(self.batch_size) {
            match self.dataset.get(idx) {
                Ok(item) => batch.push(item),
                Err(e) => return Some(Err(e)),
            }
        }
        if batch.is_empty() || (self.drop_last && batch.len() < self.batch_size) {
            return None;
        }
        Some(Ok(batch))
    }
}

impl<D: Dataset, S: Sampler> std::fmt::Debug for DataLoader<D, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataLoader")
            .field("dataset_len", &self.dataset.len())
            .field("batch_size", &self.batch_size)
            .field("sampler", &self.sampler)
            .field("drop_last", &self.drop_last)
            .field("epoch", &self.epoch)
            .finish()
    }
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
