//! Fixed-capacity circular sample buffer
//!
//! Samples are kept in a plain array sized for the widest possible graph.
//! Logical position `i` (0 = oldest) lives at physical slot
//! `(start + i) mod capacity`. Once full, appending overwrites the oldest
//! sample and advances `start`.

use crate::constants::MAX_SAMPLES;
use crate::error::{GraphError, GraphResult};
use crate::sample::Sample;

/// Circular buffer of raw samples, oldest first
#[derive(Debug, Clone)]
pub struct SampleStore<T: Sample> {
    /// Physical storage; only the first `capacity` slots are used
    slots: [T; MAX_SAMPLES],
    /// Logical capacity (graph width x columns per glyph)
    capacity: usize,
    /// Physical index of the oldest sample
    start: usize,
    /// Number of valid samples
    count: usize,
}

impl<T: Sample> SampleStore<T> {
    /// Create an empty store holding at most `capacity` samples
    pub fn new(capacity: usize) -> GraphResult<Self> {
        if capacity == 0 || capacity > MAX_SAMPLES {
            return Err(GraphError::InvalidCapacity {
                capacity,
                max: MAX_SAMPLES,
            });
        }

        Ok(Self {
            slots: [T::ZERO; MAX_SAMPLES],
            capacity,
            start: 0,
            count: 0,
        })
    }

    /// Map a position in `0..2 * capacity` back into `0..capacity`.
    ///
    /// Subtraction instead of `%`: cores without a hardware divider pay
    /// heavily for modulo.
    #[inline]
    fn wrap(&self, position: usize) -> usize {
        if position >= self.capacity {
            position - self.capacity
        } else {
            position
        }
    }

    /// Append a sample, discarding the oldest one when full
    pub fn append(&mut self, value: T) {
        let position = self.wrap(self.start + self.count);
        self.slots[position] = value;

        if self.count < self.capacity {
            self.count += 1;
        } else {
            self.start = self.wrap(self.start + 1);
        }
    }

    /// Forget all samples. Stored values are left in place but unreachable.
    pub fn clear(&mut self) {
        self.count = 0;
    }

    /// Sample at a logical position (0 = oldest)
    pub fn at(&self, index: usize) -> GraphResult<T> {
        if index >= self.count {
            return Err(GraphError::IndexOutOfRange {
                index,
                length: self.count,
            });
        }

        Ok(self.slots[self.wrap(self.start + index)])
    }

    /// Number of valid samples
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the store holds no samples
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Maximum number of samples retained
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate over the samples from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.count).map(move |i| self.slots[self.wrap(self.start + i)])
    }
}
