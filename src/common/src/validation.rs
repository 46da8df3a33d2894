// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::{Error, Result};

/// Ways a required field can fail validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Problem {
    /// A required field was not set.
    Null,
    /// A required field was not set, or was set to an empty value.
    Empty,
}

/// A required field that failed validation.
///
/// The display format is `<field> cannot be null` or `<field> cannot be
/// empty`.
#[derive(thiserror::Error, Debug, PartialEq)]
#[error("{field} {problem}")]
pub struct FieldViolation {
    field: &'static str,
    problem: Problem,
}

impl FieldViolation {
    /// A violation for a required field that is not set.
    pub fn null(field: &'static str) -> Self {
        Self {
            field,
            problem: Problem::Null,
        }
    }

    /// A violation for a required field that is not set or is empty.
    pub fn empty(field: &'static str) -> Self {
        Self {
            field,
            problem: Problem::Empty,
        }
    }

    /// The name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Why the field failed validation.
    pub fn problem(&self) -> Problem {
        self.problem
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Problem::Null => write!(f, "cannot be null"),
            Problem::Empty => write!(f, "cannot be empty"),
        }
    }
}

/// Types that can be checked for presence by a [Checklist].
///
/// `Option<T>` is null when it is `None`. Strings and lists are empty when
/// they are null or have zero length.
pub trait Presence {
    /// Returns true if the value is not set.
    fn is_null(&self) -> bool;

    /// Returns true if the value is not set, or is set to an empty value.
    fn is_empty_value(&self) -> bool {
        self.is_null()
    }
}

impl<T: Presence> Presence for Option<T> {
    fn is_null(&self) -> bool {
        self.is_none()
    }
    fn is_empty_value(&self) -> bool {
        self.as_ref().is_none_or(Presence::is_empty_value)
    }
}

impl Presence for String {
    fn is_null(&self) -> bool {
        false
    }
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Presence for &str {
    fn is_null(&self) -> bool {
        false
    }
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Presence for Vec<T> {
    fn is_null(&self) -> bool {
        false
    }
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Presence for bool {
    fn is_null(&self) -> bool {
        false
    }
}

impl Presence for i64 {
    fn is_null(&self) -> bool {
        false
    }
}

impl Presence for bytes::Bytes {
    fn is_null(&self) -> bool {
        false
    }
}

/// A list of required-field checks, evaluated in declaration order.
///
/// The checklist keeps the first violation and ignores the rest. That makes
/// the error deterministic: it always names the first required field, in
/// schema order, that is missing.
#[derive(Debug, Default)]
#[must_use = "a checklist does nothing until `check()` is called"]
pub struct Checklist {
    violation: Option<FieldViolation>,
}

impl Checklist {
    /// Creates an empty checklist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires `value` to be set.
    pub fn not_null<T: Presence + ?Sized>(self, field: &'static str, value: &T) -> Self {
        self.record(value.is_null(), || FieldViolation::null(field))
    }

    /// Requires `value` to be set and not empty.
    pub fn not_empty<T: Presence + ?Sized>(self, field: &'static str, value: &T) -> Self {
        self.record(value.is_empty_value(), || FieldViolation::empty(field))
    }

    /// Returns the first violation, if any, as an
    /// [InvalidArgument][crate::ErrorKind::InvalidArgument] error.
    pub fn check(self) -> Result<()> {
        match self.violation {
            None => Ok(()),
            Some(v) => {
                tracing::debug!(field = v.field(), problem = %v.problem(), "required field check failed");
                Err(Error::invalid_argument(v))
            }
        }
    }

    fn record<F>(mut self, failed: bool, violation: F) -> Self
    where
        F: FnOnce() -> FieldViolation,
    {
        if failed && self.violation.is_none() {
            self.violation = Some(violation());
        }
        self
    }
}

/// Requires `value` to be set.
pub fn not_null<T: Presence + ?Sized>(field: &'static str, value: &T) -> Result<()> {
    Checklist::new().not_null(field, value).check()
}

/// Requires `value` to be set and not empty.
pub fn not_empty<T: Presence + ?Sized>(field: &'static str, value: &T) -> Result<()> {
    Checklist::new().not_empty(field, value).check()
}

/// Unwraps a required value.
///
/// The generated builders call this after a [Checklist] passed, to move the
/// value into the built model. It only fails if the checklist missed the
/// field.
pub fn required<T>(field: &'static str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| Error::invalid_argument(FieldViolation::null(field)))
}
