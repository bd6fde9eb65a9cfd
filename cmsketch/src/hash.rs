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

//! Element-to-integer hashing shared by update and estimate.

use std::hash::Hash;
use std::hash::Hasher;

const ELEMENT_HASH_SEED: u32 = 0;

/// Maps an element to the non-negative integer fed into every row hash.
///
/// The element's [`Hash`] bytes go through MurmurHash3 x64/128. The first 64-bit
/// half is read as a signed value and its magnitude is used, so the result is at
/// most `2^63`.
#[inline]
pub(crate) fn hash_element<H: Hash + ?Sized>(element: &H) -> u64 {
    let mut hasher = mur3::Hasher128::with_seed(ELEMENT_HASH_SEED);
    element.hash(&mut hasher);
    let (h1, _) = hasher.finish128();
    (h1 as i64).unsigned_abs()
}
