use napagrad_core::NapagradError;

/// Trait representing a dataset.
///
/// A dataset provides access to individual samples (e.g. input features and
/// the corresponding target) via an index.
///
/// `Item` is the type returned for a single sample, often a tuple like
/// `(Vec<f64>, f64)`.
pub trait Dataset {
    /// The type of a single item returned by the dataset.
    type Item;

    /// Returns the sample at `index`.
    ///
    /// # Errors
    /// [`NapagradError::IndexOutOfBounds`] if `index >= self.len()`.
    fn get(&self, index: usize) -> Result<Self::Item, NapagradError>;

    /// Returns the total number of samples in the dataset.
    fn len(&self) -> usize;

    /// Returns true if the dataset contains no samples.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
