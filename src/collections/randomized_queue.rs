use crate::error::CollectionError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const GROWTH_FACTOR: usize = 2;

/// Bag whose removals and samples pick a uniformly random element.
///
/// Elements sit in a contiguous array. A removal moves the last element into
/// the vacated slot. Capacity doubles when the array is full and halves once
/// occupancy drops to a quarter, which keeps both operations amortized O(1)
/// without thrashing at the boundary.
#[derive(Debug, Clone)]
pub struct RandomizedQueue<T> {
    items: Vec<T>,
    capacity: usize,
    rng: StdRng,
}

impl<T> RandomizedQueue<T> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_rng(&mut rand::rng()))
    }

    /// Queue whose draws are reproducible for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        RandomizedQueue {
            items: Vec::with_capacity(1),
            capacity: 1,
            rng,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Slots currently reserved for elements.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn enqueue(&mut self, item: T) {
        if self.items.len() == self.capacity {
            self.resize(self.capacity * GROWTH_FACTOR);
        }
        self.items.push(item);
    }

    /// Removes and returns a uniformly random element.
    pub fn dequeue(&mut self) -> Result<T, CollectionError> {
        if self.is_empty() {
            return Err(CollectionError::Empty("randomized queue"));
        }

        let idx = self.rng.random_range(0..self.items.len());
        let item = self.items.swap_remove(idx);

        if !self.items.is_empty() && self.items.len() <= self.capacity / 4 {
            self.resize(self.capacity / GROWTH_FACTOR);
        }
        Ok(item)
    }

    /// Returns a uniformly random element without removing it.
    pub fn sample(&mut self) -> Result<&T, CollectionError> {
        if self.is_empty() {
            return Err(CollectionError::Empty("randomized queue"));
        }
        let idx = self.rng.random_range(0..self.items.len());
        Ok(&self.items[idx])
    }

    /// Visits every element once, in an order freshly shuffled for this iterator.
    ///
    /// The queue is left untouched.
    pub fn iter(&mut self) -> Iter<'_, T> {
        let mut order: Vec<usize> = (0..self.items.len()).collect();
        order.shuffle(&mut self.rng);
        Iter {
            items: &self.items,
            order: order.into_iter(),
        }
    }

    fn resize(&mut self, capacity: usize) {
        let capacity = capacity.max(1);
        log::trace!(
            "randomized queue: capacity {} -> {capacity} at {} elements",
            self.capacity,
            self.items.len()
        );
        if capacity > self.capacity {
            self.items.reserve_exact(capacity - self.items.len());
        } else {
            self.items.shrink_to(capacity);
        }
        self.capacity = capacity;
    }
}

impl<T> Default for RandomizedQueue<T> {
    fn default() -> Self {
        RandomizedQueue::new()
    }
}

impl<T> Extend<T> for RandomizedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T> FromIterator<T> for RandomizedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = RandomizedQueue::new();
        queue.extend(iter);
        queue
    }
}

pub struct Iter<'a, T> {
    items: &'a [T],
    order: std::vec::IntoIter<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.order.next().map(|idx| &self.items[idx])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Consumes the queue, yielding every element in uniformly random order.
impl<T> IntoIterator for RandomizedQueue<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        self.items.shuffle(&mut self.rng);
        self.items.into_iter()
    }
}
