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

//! The models use `serde` for their JSON representation. These helpers
//! convert `serde_json` failures into [Error] values of kind
//! [Serde][crate::ErrorKind::Serde], with the original failure as the source.

use crate::{Error, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Encodes `value` as a JSON string.
pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(map_error)
}

/// Encodes `value` as a pretty-printed JSON string.
pub fn to_string_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(map_error)
}

/// Encodes `value` as a [serde_json::Value].
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<serde_json::Value> {
    serde_json::to_value(value).map_err(map_error)
}

/// Decodes a value of type `T` from a JSON string.
pub fn from_str<T: DeserializeOwned>(input: &str) -> Result<T> {
    serde_json::from_str(input).map_err(map_error)
}

/// Decodes a value of type `T` from JSON bytes.
pub fn from_slice<T: DeserializeOwned>(input: &[u8]) -> Result<T> {
    serde_json::from_slice(input).map_err(map_error)
}

/// Decodes a value of type `T` from a [serde_json::Value].
pub fn from_value<T: DeserializeOwned>(input: serde_json::Value) -> Result<T> {
    serde_json::from_value(input).map_err(map_error)
}

fn map_error(e: serde_json::Error) -> Error {
    tracing::debug!(error = %e, "json codec failure");
    Error::serde(e)
}
