//! # napagrad-data
//!
//! Datasets, index samplers and a batching [`DataLoader`] for feeding
//! training samples to napagrad networks.
//!
//! ```
//! use napagrad_data::{DataLoader, SequentialSampler, VecDataset};
//!
//! let dataset = VecDataset::new(vec![1, 2, 3, 4, 5]);
//! let loader = DataLoader::new(dataset, 2, SequentialSampler::new(), false).unwrap();
//! let batches: Vec<Vec<i32>> = loader.map(|b| b.unwrap()).collect();
//! assert_eq!(batches, vec![vec![1, 2], vec![3, 4], vec![5]]);
//! ```

pub mod dataloader;
pub mod datasets;
pub mod samplers;

pub use dataloader::DataLoader;
pub use datasets::{Dataset, VecDataset};
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
