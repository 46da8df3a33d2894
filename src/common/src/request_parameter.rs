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

type Result = std::result::Result<String, Error>;

/// Scalar types that can be formatted as a request parameter.
pub(crate) trait RequestParameter {
    fn format(&self) -> Result;
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("cannot format as request parameter {0:?}")]
    Format(Box<dyn std::error::Error + Send + Sync>),
}

impl From<Error> for crate::Error {
    fn from(e: Error) -> Self {
        crate::Error::invalid_argument(e)
    }
}

impl RequestParameter for i32 { fn format(&self) -> Result { Ok(format!("{self}")) } }
impl RequestParameter for i64 { fn format(&self) -> Result { Ok(format!("{self}")) } }
impl RequestParameter for u32 { fn format(&self) -> Result { Ok(format!("{self}")) } }
impl RequestParameter for u64 { fn format(&self) -> Result { Ok(format!("{self}")) } }
impl RequestParameter for bool { fn format(&self) -> Result { Ok(format!("{self}")) } }
impl RequestParameter for String { fn format(&self) -> Result { Ok(self.clone()) } }
impl RequestParameter for &str { fn format(&self) -> Result { Ok(self.to_string()) } }

impl RequestParameter for f64 {
    fn format(&self) -> Result {
        if !self.is_finite() {
            return Err(Error::Format(format!("{self} is not a finite number").into()));
        }
        Ok(format!("{self}"))
    }
}
