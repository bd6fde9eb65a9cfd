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

mod private {
    // Sealed trait to prevent external implementations of CountMinValue.
    pub trait Sealed {}
}

/// Counter type supported in a Count-Min sketch.
///
/// Counters are signed so that negative increments can be applied. The width
/// of the type is the capacity of the sketch: arithmetic wraps once a counter
/// leaves the representable range.
pub trait CountMinValue: private::Sealed + Copy + Ord + std::fmt::Debug {
    /// Zero value for counters and weights.
    const ZERO: Self;

    /// One value for unit updates.
    const ONE: Self;

    /// Maximum representable value for initializing minima.
    const MAX: Self;

    /// Performs the wrapping + operation.
    fn add(self, other: Self) -> Self;

    /// Performs the wrapping - operation.
    fn sub(self, other: Self) -> Self;

    /// Converts into `f64`.
    fn to_f64(self) -> f64;

    /// Converts from `f64` by truncating toward zero.
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_signed {
    ($name:ty) => {
        impl private::Sealed for $name {}

        impl CountMinValue for $name {
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MAX: Self = <$name>::MAX;

            #[inline(always)]
            fn add(self, other: Self) -> Self {
                self.wrapping_add(other)
            }

            #[inline(always)]
            fn sub(self, other: Self) -> Self {
                self.wrapping_sub(other)
            }

            #[inline(always)]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline(always)]
            fn from_f64(value: f64) -> Self {
                value.trunc() as $name
            }
        }
    };
}

impl_signed!(i32);
impl_signed!(i64);
