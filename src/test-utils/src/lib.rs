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

//! Test utilities shared by the IBM Cloud Platform Services crates.
//!
//! These are not intended for general use, the crate is never published.

/// Capture tracing events emitted by the code under test.
pub mod test_layer;

/// Enable tracing output in tests.
pub mod tracing;

/// Mock file content for options models that upload files.
pub mod files;

/// Generic checks of the model contract.
pub mod models;
