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

use crate::Result;

/// Formats a query parameter.
///
/// Some options fields are sent as query parameters and need special
/// formatting:
/// - [Option] fields that do not contain a value are not included in the
///   query.
/// - Booleans are formatted as `true` or `false`.
/// - Lists of strings are joined with commas, empty lists are omitted.
/// - Simple scalars are formatted as usual.
///
/// This function is called from the generated code. It is not intended for
/// general use.
pub fn format<T>(name: &'static str, parameter: &T) -> Result<Option<(&'static str, String)>>
where
    T: QueryParameter,
{
    QueryParameter::format(parameter)
        .map(|result| result.map(|s| (name, s)))
        .transpose()
}

/// [QueryParameter] is a trait representing types that can be used as a query
/// parameter.
pub trait QueryParameter {
    /// Formats the value, returns `None` if the parameter should be omitted.
    fn format(&self) -> Option<Result<String>>;
}

impl<T: QueryParameter> QueryParameter for Option<T> {
    fn format(&self) -> Option<Result<String>> {
        self.as_ref().and_then(QueryParameter::format)
    }
}

impl QueryParameter for Vec<String> {
    fn format(&self) -> Option<Result<String>> {
        if self.is_empty() {
            return None;
        }
        Some(Ok(self.join(",")))
    }
}

#[allow(private_bounds)]
impl<T: crate::request_parameter::RequestParameter> QueryParameter for T {
    fn format(&self) -> Option<Result<String>> {
        let formatted = crate::request_parameter::RequestParameter::format(self);
        Some(formatted.map_err(crate::Error::from))
    }
}
