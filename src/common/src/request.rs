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
use crate::file::FilePart;

/// A list of named request parameters.
pub type Parameters = Vec<(&'static str, String)>;

/// The request parts of an options model.
///
/// A transport uses this trait to turn a built options model into a request:
/// path parameters are substituted into the operation path, query parameters
/// and headers are added as-is, the body (if any) is sent as JSON, and file
/// parts (if any) are sent as a multipart form.
pub trait RequestOptions {
    /// The parameters substituted into the request path.
    ///
    /// Path parameters are always required, the builders guarantee they are
    /// set and not empty.
    fn path_parameters(&self) -> Parameters;

    /// The query parameters. Unset optional parameters are omitted.
    fn query_parameters(&self) -> Result<Parameters> {
        Ok(Vec::new())
    }

    /// The request headers. Unset optional headers are omitted.
    fn headers(&self) -> Parameters {
        Vec::new()
    }

    /// The JSON body, with only the fields sent in the body.
    fn body(&self) -> Result<Option<serde_json::Value>> {
        Ok(None)
    }

    /// The file content sent as multipart parts.
    fn file_parts(&self) -> Vec<FilePart> {
        Vec::new()
    }
}

/// Collects formatted query parameters, skipping the ones that are unset.
///
/// The generated code calls this with the output of
/// [query_parameter::format][crate::query_parameter::format] for each
/// parameter.
pub fn collect<I>(parameters: I) -> Result<Parameters>
where
    I: IntoIterator<Item = Result<Option<(&'static str, String)>>>,
{
    let mut collected = Vec::new();
    for p in parameters {
        if let Some(p) = p? {
            collected.push(p);
        }
    }
    Ok(collected)
}
