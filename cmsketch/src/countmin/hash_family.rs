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

use rand::Rng;

/// The prime modulus shared by every row hash of every sketch.
pub const BIG_PRIME: u64 = 10_089_886_811_898_868_001;

/// One member of the pairwise-independent family
/// `h(x) = ((a * x + b) mod P) mod k`.
///
/// Evaluation is done in 128-bit arithmetic, so `a * x + b` never overflows
/// for any `u64` input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UniversalHash {
    a: u64,
    b: u64,
    num_buckets: u64,
    prime: u64,
}

impl UniversalHash {
    /// Creates a hash function from explicit parameters.
    ///
    /// # Panics
    ///
    /// Panics if `num_buckets` is zero, or if `a` or `b` is not below [`BIG_PRIME`].
    pub fn new(a: u64, b: u64, num_buckets: usize) -> Self {
        assert!(num_buckets >= 1, "num_buckets must be at least 1");
        assert!(a < BIG_PRIME, "a must be less than BIG_PRIME");
        assert!(b < BIG_PRIME, "b must be less than BIG_PRIME");
        Self {
            a,
            b,
            num_buckets: num_buckets as u64,
            prime: BIG_PRIME,
        }
    }

    /// Draws `a` and `b` uniformly from `[0, BIG_PRIME - 1]`.
    pub(crate) fn random<R: Rng + ?Sized>(rng: &mut R, num_buckets: usize) -> Self {
        let a = rng.random_range(0..BIG_PRIME);
        let b = rng.random_range(0..BIG_PRIME);
        Self::new(a, b, num_buckets)
    }

    /// Returns the multiplier `a`.
    pub fn a(&self) -> u64 {
        self.a
    }

    /// Returns the offset `b`.
    pub fn b(&self) -> u64 {
        self.b
    }

    /// Returns the number of buckets `k` this function maps into.
    pub fn num_buckets(&self) -> usize {
        self.num_buckets as usize
    }

    /// Returns the prime modulus `P`.
    pub fn prime(&self) -> u64 {
        self.prime
    }

    /// Maps `x` to a bucket in `[0, num_buckets)`.
    #[inline]
    pub fn bucket(&self, x: u64) -> usize {
        let mixed = (self.a as u128 * x as u128 + self.b as u128) % self.prime as u128;
        (mixed % self.num_buckets as u128) as usize
    }
}
