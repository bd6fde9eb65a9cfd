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

use rand::Rng;

use crate::countmin::CountMinSketch;
use crate::countmin::CountMinValue;
use crate::countmin::UniversalHash;
use crate::error::Error;

/// Builder for creating [`CountMinSketch`] instances.
///
/// A sketch is sized in one of two ways:
/// - by accuracy: [`epsilon`](Self::epsilon) and [`delta`](Self::delta), from which
///   `num_buckets = ceil(e / epsilon)` and `num_hashes = ceil(ln(1 / delta))` are derived;
/// - by dimensions: [`num_buckets`](Self::num_buckets) and [`num_hashes`](Self::num_hashes).
///
/// When both pairs are complete the accuracy pair wins. When neither is complete,
/// [`build`](Self::build) fails with [`ErrorKind::ConfigInvalid`](crate::error::ErrorKind).
///
/// # Examples
///
/// ```
/// # use cmsketch::countmin::CountMinSketch;
/// # use cmsketch::countmin::CountMinSketchBuilder;
/// let sketch: CountMinSketch = CountMinSketchBuilder::new()
///     .epsilon(0.01)
///     .delta(0.01)
///     .build()
///     .unwrap();
/// assert_eq!(sketch.num_buckets(), 272);
/// assert_eq!(sketch.num_hashes(), 5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CountMinSketchBuilder {
    epsilon: Option<f64>,
    delta: Option<f64>,
    num_buckets: Option<usize>,
    num_hashes: Option<usize>,
}

impl CountMinSketchBuilder {
    /// Creates a builder with no parameters set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder sized for the given error bound and failure probability.
    pub fn with_accuracy(epsilon: f64, delta: f64) -> Self {
        Self::new().epsilon(epsilon).delta(delta)
    }

    /// Creates a builder with explicit table dimensions.
    pub fn with_dimensions(num_buckets: usize, num_hashes: usize) -> Self {
        Self::new().num_buckets(num_buckets).num_hashes(num_hashes)
    }

    /// Sets the additive error bound, as a fraction of the total stream weight.
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = Some(epsilon);
        self
    }

    /// Sets the probability that an estimate exceeds the error bound.
    pub fn delta(mut self, delta: f64) -> Self {
        self.delta = Some(delta);
        self
    }

    /// Sets the number of buckets per row (`k`).
    pub fn num_buckets(mut self, num_buckets: usize) -> Self {
        self.num_buckets = Some(num_buckets);
        self
    }

    /// Sets the number of rows, one per hash function (`n`).
    pub fn num_hashes(mut self, num_hashes: usize) -> Self {
        self.num_hashes = Some(num_hashes);
        self
    }

    /// Resolves the configured parameters into `(num_buckets, num_hashes)`.
    ///
    /// This performs the parameter checks of [`build`](Self::build) without allocating.
    /// Only the final table-size check, which depends on the counter type, is left to
    /// `build`.
    pub fn dimensions(&self) -> Result<(usize, usize), Error> {
        self.resolve().map(|sizing| (sizing.num_buckets, sizing.num_hashes))
    }

    /// Builds the sketch, drawing hash parameters from the thread-local generator.
    pub fn build<T: CountMinValue>(self) -> Result<CountMinSketch<T>, Error> {
        self.build_with_rng(&mut rand::rng())
    }

    /// Builds the sketch, drawing hash parameters from `rng`.
    ///
    /// Two sketches built from identically seeded generators route every element
    /// to the same buckets.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cmsketch::countmin::CountMinSketch;
    /// # use cmsketch::countmin::CountMinSketchBuilder;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let sketch: CountMinSketch<i32> = CountMinSketchBuilder::with_dimensions(1000, 4)
    ///     .build_with_rng(&mut rng)
    ///     .unwrap();
    /// assert_eq!(sketch.hash_functions().len(), 4);
    /// ```
    pub fn build_with_rng<T: CountMinValue, R: Rng + ?Sized>(
        self,
        rng: &mut R,
    ) -> Result<CountMinSketch<T>, Error> {
        let sizing = self.resolve()?;
        let num_buckets = sizing.num_buckets;
        let num_hashes = sizing.num_hashes;

        let len = sizing.len;
        if len
            .checked_mul(size_of::<T>())
            .is_none_or(|bytes| bytes > isize::MAX as usize)
        {
            return Err(Error::table_too_large(num_buckets, num_hashes));
        }

        let mut counts = Vec::<T>::new();
        counts
            .try_reserve_exact(len)
            .map_err(|_| Error::table_allocation_failed(num_buckets, num_hashes))?;
        counts.resize(len, T::ZERO);

        let hashes = (0..num_hashes)
            .map(|_| UniversalHash::random(&mut *rng, num_buckets))
            .collect();

        tracing::debug!(
            mode = sizing.mode,
            num_buckets,
            num_hashes,
            "created count-min sketch"
        );

        Ok(CountMinSketch::from_parts(
            num_buckets,
            num_hashes,
            hashes,
            counts,
        ))
    }

    fn resolve(&self) -> Result<Sizing, Error> {
        match (self.epsilon, self.delta, self.num_buckets, self.num_hashes) {
            (Some(epsilon), Some(delta), _, _) => {
                ensure_open_unit_interval("epsilon", epsilon)?;
                ensure_open_unit_interval("delta", delta)?;
                Sizing::new(
                    "accuracy",
                    buckets_for_epsilon(epsilon),
                    hashes_for_delta(delta),
                )
            }
            (_, _, Some(num_buckets), Some(num_hashes)) => {
                if num_buckets == 0 {
                    return Err(Error::non_positive("num_buckets"));
                }
                if num_hashes == 0 {
                    return Err(Error::non_positive("num_hashes"));
                }
                Sizing::new("dimensions", num_buckets, num_hashes)
            }
            _ => Err(Error::insufficient_parameters()),
        }
    }
}

struct Sizing {
    mode: &'static str,
    num_buckets: usize,
    num_hashes: usize,
    len: usize,
}

impl Sizing {
    fn new(mode: &'static str, num_buckets: usize, num_hashes: usize) -> Result<Self, Error> {
        let len = num_buckets
            .checked_mul(num_hashes)
            .ok_or_else(|| Error::table_too_large(num_buckets, num_hashes))?;
        Ok(Self {
            mode,
            num_buckets,
            num_hashes,
            len,
        })
    }
}

fn ensure_open_unit_interval(name: &'static str, value: f64) -> Result<(), Error> {
    // Written so that NaN is rejected.
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(Error::open_unit_interval(name, value))
    }
}

/// `ceil(e / epsilon)`; saturates at `usize::MAX` for tiny `epsilon`.
pub(super) fn buckets_for_epsilon(epsilon: f64) -> usize {
    ((E / epsilon).ceil() as usize).max(1)
}

/// `ceil(ln(1 / delta))`, at least one row.
pub(super) fn hashes_for_delta(delta: f64) -> usize {
    ((1.0 / delta).ln().ceil() as usize).max(1)
}
