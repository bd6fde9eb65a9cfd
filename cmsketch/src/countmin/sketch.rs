// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::f64::consts::E;
use std::hash::Hash;

use crate::countmin::CountMinSketchBuilder;
use crate::countmin::CountMinValue;
use crate::countmin::UniversalHash;
use crate::countmin::builder::buckets_for_epsilon;
use crate::countmin::builder::hashes_for_delta;
use crate::error::Error;
use crate::hash::hash_element;

/// Count-Min sketch for estimating item frequencies.
///
/// The sketch keeps `num_hashes` rows of `num_buckets` counters. Every update adds
/// its weight to one counter per row, chosen by that row's [`UniversalHash`], and an
/// estimate is the minimum of those counters. For streams with non-negative weights
/// the estimate is never below the true frequency, and it exceeds the true frequency
/// by more than [`relative_error`](Self::relative_error) times the total weight with
/// probability at most `1 - confidence()`.
///
/// Counters have type `T` (see [`CountMinValue`]). Negative weights are accepted,
/// but the one-sided guarantee only holds while every weight is non-negative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountMinSketch<T: CountMinValue = i64> {
    num_buckets: usize,
    num_hashes: usize,
    hashes: Vec<UniversalHash>,
    // Row-major, `num_hashes` rows of `num_buckets` counters.
    counts: Vec<T>,
    total_weight: T,
    num_updates: u64,
}

impl CountMinSketch {
    /// Returns a builder for creating a Count-Min sketch.
    pub fn builder() -> CountMinSketchBuilder {
        CountMinSketchBuilder::new()
    }

    /// Suggests the number of buckets for the given relative error, `ceil(e / epsilon)`.
    ///
    /// # Panics
    ///
    /// Panics if `epsilon` is not in (0, 1).
    pub fn suggest_num_buckets(epsilon: f64) -> usize {
        assert!(
            epsilon > 0.0 && epsilon < 1.0,
            "epsilon must be between 0.0 and 1.0 (exclusive)"
        );
        buckets_for_epsilon(epsilon)
    }

    /// Suggests the number of hash functions for the given failure probability,
    /// `ceil(ln(1 / delta))`.
    ///
    /// # Panics
    ///
    /// Panics if `delta` is not in (0, 1).
    pub fn suggest_num_hashes(delta: f64) -> usize {
        assert!(
            delta > 0.0 && delta < 1.0,
            "delta must be between 0.0 and 1.0 (exclusive)"
        );
        hashes_for_delta(delta)
    }
}

impl<T: CountMinValue> CountMinSketch<T> {
    /// Creates a sketch sized for the given error bound and failure probability.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cmsketch::countmin::CountMinSketch;
    /// let sketch = CountMinSketch::<i64>::with_accuracy(0.01, 0.01).unwrap();
    /// assert_eq!(sketch.num_buckets(), 272);
    /// assert_eq!(sketch.num_hashes(), 5);
    /// ```
    pub fn with_accuracy(epsilon: f64, delta: f64) -> Result<Self, Error> {
        CountMinSketchBuilder::with_accuracy(epsilon, delta).build()
    }

    /// Creates a sketch with `num_hashes` rows of `num_buckets` counters.
    pub fn with_dimensions(num_buckets: usize, num_hashes: usize) -> Result<Self, Error> {
        CountMinSketchBuilder::with_dimensions(num_buckets, num_hashes).build()
    }

    pub(super) fn from_parts(
        num_buckets: usize,
        num_hashes: usize,
        hashes: Vec<UniversalHash>,
        counts: Vec<T>,
    ) -> Self {
        debug_assert_eq!(hashes.len(), num_hashes);
        debug_assert_eq!(counts.len(), num_buckets * num_hashes);
        CountMinSketch {
            num_buckets,
            num_hashes,
            hashes,
            counts,
            total_weight: T::ZERO,
            num_updates: 0,
        }
    }

    /// Returns the number of buckets per row.
    pub fn num_buckets(&self) -> usize {
        self.num_buckets
    }

    /// Returns the number of rows (hash functions).
    pub fn num_hashes(&self) -> usize {
        self.num_hashes
    }

    /// Returns the sum of all weights applied so far.
    pub fn total_weight(&self) -> T {
        self.total_weight
    }

    /// Returns true if no update has been applied.
    pub fn is_empty(&self) -> bool {
        self.num_updates == 0
    }

    /// Returns the row hash functions, in row order.
    pub fn hash_functions(&self) -> &[UniversalHash] {
        &self.hashes
    }

    /// Returns the counters of each row, in row order.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.counts.chunks_exact(self.num_buckets)
    }

    /// Returns the relative error achieved by this sketch, `e / num_buckets`.
    pub fn relative_error(&self) -> f64 {
        E / self.num_buckets as f64
    }

    /// Returns the probability that an estimate is within the error bound,
    /// `1 - e^(-num_hashes)`.
    pub fn confidence(&self) -> f64 {
        1.0 - (-(self.num_hashes as f64)).exp()
    }

    /// Updates the sketch with a single occurrence of the item.
    pub fn update<I: Hash>(&mut self, item: I) {
        self.update_with_weight(item, T::ONE);
    }

    /// Updates the sketch with the given weight for the item.
    ///
    /// Negative weights are applied as-is; they are not corrected for collisions.
    pub fn update_with_weight<I: Hash>(&mut self, item: I, weight: T) {
        let x = hash_element(&item);
        for (row, hash) in self.hashes.iter().enumerate() {
            let index = row * self.num_buckets + hash.bucket(x);
            self.counts[index] = self.counts[index].add(weight);
        }
        self.total_weight = self.total_weight.add(weight);
        self.num_updates += 1;
    }

    /// Returns the estimated frequency of the item.
    pub fn estimate<I: Hash>(&self, item: I) -> T {
        self.estimate_with_column(item).1
    }

    /// Returns the estimated frequency along with the bucket the last row used.
    ///
    /// The bucket is diagnostic only.
    pub fn estimate_with_column<I: Hash>(&self, item: I) -> (usize, T) {
        let x = hash_element(&item);
        let mut column = 0;
        let mut min = T::MAX;
        for (row, hash) in self.hashes.iter().enumerate() {
            column = hash.bucket(x);
            min = min.min(self.counts[row * self.num_buckets + column]);
        }
        (column, min)
    }

    /// Returns the upper bound of the true frequency, which is the estimate itself.
    pub fn upper_bound<I: Hash>(&self, item: I) -> T {
        self.estimate(item)
    }

    /// Returns a lower bound of the true frequency that holds with probability
    /// [`confidence`](Self::confidence) for non-negative streams.
    pub fn lower_bound<I: Hash>(&self, item: I) -> T {
        let error = T::from_f64(self.relative_error() * self.total_weight.to_f64());
        self.estimate(item).sub(error)
    }
}
