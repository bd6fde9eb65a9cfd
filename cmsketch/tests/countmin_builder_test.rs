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

use cmsketch::countmin::CountMinSketch;
use cmsketch::countmin::CountMinSketchBuilder;
use cmsketch::error::ErrorKind;
use googletest::assert_that;
use googletest::prelude::contains_substring;
use googletest::prelude::eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn build(builder: CountMinSketchBuilder) -> Result<CountMinSketch, cmsketch::error::Error> {
    builder.build()
}

#[test]
fn test_missing_parameters() {
    let err = build(CountMinSketch::builder()).unwrap_err();
    assert_that!(err.kind(), eq(ErrorKind::ConfigInvalid));
    assert_that!(err.message(), contains_substring("insufficient parameters"));
}

#[test]
fn test_partial_parameter_pairs() {
    let partial = [
        CountMinSketchBuilder::new().epsilon(0.01),
        CountMinSketchBuilder::new().delta(0.01),
        CountMinSketchBuilder::new().num_buckets(100),
        CountMinSketchBuilder::new().num_hashes(4),
        CountMinSketchBuilder::new().epsilon(0.01).num_hashes(4),
        CountMinSketchBuilder::new().delta(0.01).num_buckets(100),
    ];
    for builder in partial {
        let err = build(builder).unwrap_err();
        assert_that!(err.kind(), eq(ErrorKind::ConfigInvalid));
    }
}

#[test]
fn test_epsilon_and_delta_outside_unit_interval() {
    for value in [0.0, 1.0, -0.5, 1.5, f64::INFINITY] {
        let err = build(CountMinSketchBuilder::with_accuracy(value, 0.1)).unwrap_err();
        assert_that!(err.kind(), eq(ErrorKind::InvalidParameter));
        assert_that!(err.message(), contains_substring("epsilon"));

        let err = build(CountMinSketchBuilder::with_accuracy(0.1, value)).unwrap_err();
        assert_that!(err.kind(), eq(ErrorKind::InvalidParameter));
        assert_that!(err.message(), contains_substring("delta"));
    }
}

#[test]
fn test_zero_dimensions() {
    let err = build(CountMinSketchBuilder::with_dimensions(0, 3)).unwrap_err();
    assert_that!(err.kind(), eq(ErrorKind::InvalidParameter));
    assert_that!(err.message(), contains_substring("num_buckets"));

    let err = build(CountMinSketchBuilder::with_dimensions(3, 0)).unwrap_err();
    assert_that!(err.kind(), eq(ErrorKind::InvalidParameter));
    assert_that!(err.message(), contains_substring("num_hashes"));
}

#[test]
fn test_table_size_overflow() {
    let err = build(CountMinSketchBuilder::with_dimensions(usize::MAX / 4, 2)).unwrap_err();
    assert_that!(err.kind(), eq(ErrorKind::InvalidParameter));
}

#[test]
fn test_unallocatable_table_is_an_error() {
    let err = build(CountMinSketchBuilder::with_accuracy(1e-15, 0.5)).unwrap_err();
    assert_that!(err.kind(), eq(ErrorKind::InvalidParameter));
    assert_that!(err.message(), contains_substring("cannot be allocated"));
}

#[test]
fn test_minimal_dimensions() {
    let mut sketch = build(CountMinSketchBuilder::with_dimensions(1, 1)).unwrap();
    sketch.update("a");
    sketch.update("b");
    assert_eq!(sketch.estimate("a"), 2);
    assert_eq!(sketch.estimate("never"), 2);
}

#[test]
fn test_build_with_rng_is_reproducible() {
    let builder = CountMinSketchBuilder::with_accuracy(0.05, 0.05);
    let left: CountMinSketch = builder
        .build_with_rng(&mut StdRng::seed_from_u64(3))
        .unwrap();
    let right: CountMinSketch = builder
        .build_with_rng(&mut StdRng::seed_from_u64(3))
        .unwrap();
    assert_eq!(left.hash_functions(), right.hash_functions());
    assert_eq!(builder.dimensions().unwrap(), (55, 3));
}

#[test]
fn test_error_display() {
    let err = build(CountMinSketchBuilder::with_accuracy(1.5, 0.1)).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"InvalidParameter, context: { epsilon: 1.5 } => epsilon must be in the open interval (0, 1)"
    );

    let err = build(CountMinSketchBuilder::new()).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"ConfigInvalid => insufficient parameters: either epsilon and delta, or num_buckets and num_hashes must be supplied"
    );
}

#[test]
fn test_error_debug() {
    let err = build(CountMinSketchBuilder::with_dimensions(4, 0)).unwrap_err();
    assert_eq!(
        format!("{err:?}"),
        "InvalidParameter => num_hashes must be at least 1\n\nContext:\n   num_hashes: 0\n"
    );
    let pretty = format!("{err:#?}");
    assert_that!(pretty.as_str(), contains_substring("kind: InvalidParameter"));
}
