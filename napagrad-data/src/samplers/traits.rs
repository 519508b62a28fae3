use std::fmt::Debug;

/// Defines the order in which a [`DataLoader`](crate::DataLoader) visits
/// the indices of a dataset.
pub trait Sampler: Debug {
    /// Returns the indices for one epoch.
    ///
    /// Takes `&mut self` so that stateful samplers (e.g. a seeded shuffle)
    /// produce a new order each epoch.
    fn iter(&mut self, dataset_len: usize) -> Box<dyn Iterator<Item = usize>>;

    /// Number of indices one epoch yields for a dataset of `dataset_len` items.
    fn len(&self, dataset_len: usize) -> usize;
}
