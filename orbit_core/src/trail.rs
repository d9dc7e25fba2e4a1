//! Bounded position history used to draw orbit trails

use glam::DVec2;
use std::collections::VecDeque;

/// Fixed-capacity ring buffer of recently visited positions.
///
/// Samples are kept oldest first. Once full, every push evicts the oldest
/// sample, so `len() <= capacity()` always holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Trail {
    samples: VecDeque<DVec2>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, position: DVec2) {
        if self.capacity == 0 {
            return;
        }
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(position);
    }

    /// Change the capacity, dropping the oldest samples if the trail no longer fits
    pub fn set_capacity(&mut self, capacity: usize) {
        while self.samples.len() > capacity {
            self.samples.pop_front();
        }
        if capacity > self.samples.capacity() {
            self.samples.reserve_exact(capacity - self.samples.len());
        }
        self.capacity = capacity;
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Most recent sample
    pub fn latest(&self) -> Option<DVec2> {
        self.samples.back().copied()
    }

    /// Samples from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &DVec2> + '_ {
        self.samples.iter()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new(crate::constants::UNCONSTRAINED_TRAIL_CAPACITY)
    }
}
