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

//! Error types for Count-Min sketch construction.

use std::fmt;

/// ErrorKind is all kinds of Error of cmsketch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Neither sizing mode was fully configured.
    ConfigInvalid,
    /// A supplied parameter is outside its valid domain.
    InvalidParameter,
}

impl ErrorKind {
    /// Convert this error kind instance into static str.
    pub const fn into_static(self) -> &'static str {
        match self {
            ErrorKind::ConfigInvalid => "ConfigInvalid",
            ErrorKind::InvalidParameter => "InvalidParameter",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.into_static())
    }
}

/// Error is the error struct returned by all cmsketch functions.
pub struct Error {
    kind: ErrorKind,
    message: String,
    context: Vec<(&'static str, String)>,
}

impl Error {
    /// Create a new Error with error kind and message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: Vec::default(),
        }
    }

    /// Add more context in error.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmsketch::error::{Error, ErrorKind};
    ///
    /// let error = Error::new(ErrorKind::InvalidParameter, "bad value").with_context("epsilon", 2.0);
    /// assert_eq!(error.to_string(), "InvalidParameter, context: { epsilon: 2 } => bad value");
    /// ```
    pub fn with_context(mut self, key: &'static str, value: impl ToString) -> Self {
        self.context.push((key, value.to_string()));
        self
    }

    /// Return error's kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Return error's message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Return the context attached to this error.
    pub fn context(&self) -> &[(&'static str, String)] {
        &self.context
    }
}

impl Error {
    pub(crate) fn insufficient_parameters() -> Self {
        Self::new(
            ErrorKind::ConfigInvalid,
            "insufficient parameters: either epsilon and delta, or num_buckets and num_hashes must be supplied",
        )
    }

    pub(crate) fn open_unit_interval(name: &'static str, value: f64) -> Self {
        Self::new(
            ErrorKind::InvalidParameter,
            format!("{name} must be in the open interval (0, 1)"),
        )
        .with_context(name, value)
    }

    pub(crate) fn non_positive(name: &'static str) -> Self {
        Self::new(
            ErrorKind::InvalidParameter,
            format!("{name} must be at least 1"),
        )
        .with_context(name, 0)
    }

    pub(crate) fn table_too_large(num_buckets: usize, num_hashes: usize) -> Self {
        Self::new(
            ErrorKind::InvalidParameter,
            "counter table size overflows usize",
        )
        .with_context("num_buckets", num_buckets)
        .with_context("num_hashes", num_hashes)
    }

    pub(crate) fn table_allocation_failed(num_buckets: usize, num_hashes: usize) -> Self {
        Self::new(
            ErrorKind::InvalidParameter,
            "counter table cannot be allocated",
        )
        .with_context("num_buckets", num_buckets)
        .with_context("num_hashes", num_hashes)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return f
                .debug_struct("Error")
                .field("kind", &self.kind())
                .field("message", &self.message())
                .field("context", &self.context())
                .finish();
        }

        match self.message() {
            "" => writeln!(f, "{}", self.kind())?,
            message => writeln!(f, "{} => {message}", self.kind())?,
        }

        if let [_, ..] = self.context() {
            write!(f, "\nContext:\n")?;
            self.context()
                .iter()
                .try_for_each(|(key, value)| writeln!(f, "   {key}: {value}"))?;
        }

        Ok(())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind().into_static())?;

        for (i, (key, value)) in self.context().iter().enumerate() {
            let sep = if i == 0 { ", context: { " } else { ", " };
            write!(f, "{sep}{key}: {value}")?;
        }
        if !self.context().is_empty() {
            f.write_str(" }")?;
        }

        match self.message() {
            "" => Ok(()),
            message => write!(f, " => {message}"),
        }
    }
}

impl std::error::Error for Error {}
