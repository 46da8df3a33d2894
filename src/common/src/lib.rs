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

//! Runtime helpers shared by the IBM Cloud Platform Services models.
//!
//! This crate contains the types and functions used by the generated model
//! crates (one per service). Application developers interact with these
//! types mostly through the generated builders: every builder returns a
//! [Result] from `build()`, and every error is an [Error].
//!
//! The crate does not send requests. A transport layer is expected to take
//! a built options model, extract its parts through
//! [RequestOptions][request::RequestOptions], and send them.

/// The core error types used by the generated models.
pub mod error;
pub use error::{Error, ErrorKind};

/// Validation of required fields.
///
/// Builders collect values without validating them. Validation happens
/// exactly once, when `build()` is called, and reports the first field that
/// is missing or empty. The generated code always reads:
///
/// ```
/// # use ibm_cloud_platform_services_common::validation::Checklist;
/// # let profile_id: Option<String> = Some("p".into());
/// # let r#type: Option<String> = Some("Profile-SAML".into());
/// Checklist::new()
///     .not_empty("profile_id", &profile_id)
///     .not_null("type", &r#type)
///     .check()?;
/// # Ok::<(), ibm_cloud_platform_services_common::Error>(())
/// ```
pub mod validation;

/// Traits implemented by every builder-backed model.
pub mod model;

/// JSON encoding and decoding for models.
pub mod json;

/// Defines traits and helpers to split an options model into request parts.
///
/// Each API operation has an options model. Some of its fields are sent in
/// the request path, some as query parameters, some as headers, and the rest
/// in the body. The generated code implements
/// [RequestOptions][request::RequestOptions] to describe that split.
pub mod request;

/// Defines traits and helpers to format query parameters.
///
/// Query parameters can be booleans, integers, strings or lists of strings.
/// The generator produces query parameters as optional fields in the
/// options model, and the code is simpler if all of them can be formatted
/// uniformly.
pub mod query_parameter;

/// Implementation details for [query_parameter].
mod request_parameter;

/// File content sent as multipart form parts.
pub mod file;

/// Service endpoint configuration.
pub mod config;

/// The result type returned by builders and codecs in this crate.
pub type Result<T> = std::result::Result<T, Error>;
