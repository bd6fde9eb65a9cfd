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

//! Count-Min sketch implementation for frequency estimation.
//!
//! The Count-Min sketch provides approximate frequency counts for streaming data
//! in fixed memory, with a configurable additive error and confidence. Estimates
//! never fall below the true count for streams with non-negative weights.
//!
//! # Usage
//!
//! ```rust
//! # use cmsketch::countmin::CountMinSketch;
//! let mut sketch = CountMinSketch::<i64>::with_dimensions(256, 5).unwrap();
//! sketch.update("apple");
//! sketch.update_with_weight("banana", 3);
//! assert!(sketch.estimate("banana") >= 3);
//! assert_eq!(sketch.total_weight(), 4);
//! ```
//!
//! # Configuration
//!
//! A sketch is sized either by accuracy (`epsilon`, `delta`) or by dimensions
//! (`num_buckets`, `num_hashes`):
//!
//! ```rust
//! # use cmsketch::countmin::CountMinSketch;
//! let buckets = CountMinSketch::suggest_num_buckets(0.01);
//! let hashes = CountMinSketch::suggest_num_hashes(0.01);
//! assert_eq!((buckets, hashes), (272, 5));
//!
//! let sketch: CountMinSketch = CountMinSketch::builder()
//!     .epsilon(0.01)
//!     .delta(0.01)
//!     .build()
//!     .unwrap();
//! assert_eq!(sketch.num_buckets(), buckets);
//! ```
//!
//! # Concurrency
//!
//! Sketches do no internal locking. Share one across threads behind a lock such as
//! [`std::sync::Mutex`], which also makes the per-row writes of an update atomic for
//! readers.

mod builder;
pub use self::builder::CountMinSketchBuilder;

mod hash_family;
pub use self::hash_family::BIG_PRIME;
pub use self::hash_family::UniversalHash;

mod sketch;
pub use self::sketch::CountMinSketch;

mod value;
pub use self::value::CountMinValue;
