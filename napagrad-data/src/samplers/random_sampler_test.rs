use super::*;
use std::collections::HashSet;

#[test]
fn test_random_sampler_len_default() {
    let sampler = RandomSampler::new(false, None);
    assert_eq!(sampler.len(10), 10);
    assert_eq!(sampler.len(0), 0);
}

#[test]
fn test_random_sampler_len_with_num_samples() {
    assert_eq!(RandomSampler::new(false, Some(5)).len(10), 5);
    assert_eq!(RandomSampler::new(false, Some(20)).len(10), 10);
    assert_eq!(RandomSampler::new(true, Some(20)).len(10), 20);
}

#[test]
fn test_random_sampler_no_replacement_is_permutation() {
    let mut sampler = RandomSampler::seeded(false, None, 0);
    let indices: Vec<usize> = sampler.iter(10).collect();
    assert_eq!(indices.len(), 10);
    let unique: HashSet<usize> = indices.into_iter().collect();
    assert_eq!(unique, (0..10).collect());
}

#[test]
fn test_random_sampler_no_replacement_subset() {
    let mut sampler = RandomSampler::seeded(false, Some(4), 1);
    let indices: Vec<usize> = sampler.iter(10).collect();
    assert_eq!(indices.len(), 4);
    let unique: HashSet<usize> = indices.iter().copied().collect();
    assert_eq!(unique.len(), 4);
    assert!(indices.iter().all(|&i| i < 10));
}

#[test]
fn test_random_sampler_too_many_without_replacement() {
    let mut sampler = RandomSampler::seeded(false, Some(15), 2);
    let indices: Vec<usize> = sampler.iter(10).collect();
    assert_eq!(indices.len(), 10);
}

#[test]
fn test_random_sampler_with_replacement() {
    let mut sampler = RandomSampler::seeded(true, Some(50), 3);
    let indices: Vec<usize> = sampler.iter(5).collect();
    assert_eq!(indices.len(), 50);
    assert!(indices.iter().all(|&i| i < 5));
    assert!(sampler.replacement());
}

#[test]
fn test_random_sampler_empty_dataset() {
    let mut sampler = RandomSampler::seeded(true, Some(5), 4);
    assert_eq!(sampler.iter(0).count(), 0);
}

#[test]
fn test_random_sampler_seeded_is_reproducible() {
    let mut a = RandomSampler::seeded(false, None, 42);
    let mut b = RandomSampler::seeded(false, None, 42);
    let first_a: Vec<usize> = a.iter(20).collect();
    let first_b: Vec<usize> = b.iter(20).collect();
    assert_eq!(first_a, first_b);

    // The next epoch continues the same stream.
    let second_a: Vec<usize> = a.iter(20).collect();
    let second_b: Vec<usize> = b.iter(20).collect();
    assert_eq!(second_a, second_b);
    assert_ne!(first_a, second_a);
}
