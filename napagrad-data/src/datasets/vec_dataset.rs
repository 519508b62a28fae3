use super::traits::Dataset;
use napagrad_core::NapagradError;

/// A simple dataset that wraps a `Vec` of items.
///
/// Each item in the `Vec` corresponds to a sample in the dataset.
#[derive(Debug, Clone)]
pub struct VecDataset<T: Clone> {
    data: Vec<T>,
}

impl<T: Clone> VecDataset<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn into_inner(self) -> Vec<T> {
        self.data
    }
}

impl<T: Clone> From<Vec<T>> for VecDataset<T> {
    fn from(data: Vec<T>) -> Self {
        VecDataset::new(data)
    }
}

impl<T: Clone> Dataset for VecDataset<T> {
    type Item = T;

    /// Returns a clone of the item at `index`.
    fn get(&self, index: usize) -> Result<Self::Item, NapagradError> {
        self.data
            .get(index)
            .cloned()
            .ok_or(NapagradError::IndexOutOfBounds {
                index,
                len: self.data.len(),
            })
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
#[path = "vec_dataset_test.rs"]
mod tests;
