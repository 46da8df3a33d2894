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

//! IBM Cloud Platform Services for Rust - IAM Identity API.
//!
//! **WARNING:** this crate is under active development. We expect multiple
//! breaking changes in the upcoming releases. Testing is also incomplete, we do
//! **not** recommend that you use this crate in production. We welcome feedback
//! about the APIs, documentation, missing features, bugs, etc.
//!
//! The IAM Identity API manages identities (service IDs, API keys, trusted
//! profiles) and the account settings that control them. This crate contains
//! the request and response models for the API.
//!
//! # Example
//! ```
//! use ibm_cloud_iam_identity_v1::model::{CreateClaimRuleOptionsBuilder, ProfileClaimRuleConditions};
//! use common::request::RequestOptions;
//! let condition = ProfileClaimRuleConditions::builder()
//!     .claim("blueGroups")
//!     .operator(ProfileClaimRuleConditions::EQUALS)
//!     .value("\"cloud-docs-dev\"")
//!     .build()?;
//! let options = CreateClaimRuleOptionsBuilder::new("profile-1", "Profile-SAML", [condition])
//!     .realm_name("https://sdk.test.realm/1234")
//!     .build()?;
//! assert_eq!(options.path_parameters(), vec![("profile-id", "profile-1".to_string())]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use common::{Error, Result};

/// The messages and enums that are part of this client library.
pub mod model;

/// The service name used to find the configuration overrides in the
/// environment.
pub const DEFAULT_SERVICE_NAME: &str = "iam_identity";

/// The default base URL for the service.
pub const DEFAULT_SERVICE_URL: &str = "https://iam.cloud.ibm.com";

/// Returns the service configuration, with the overrides from the
/// environment applied.
///
/// The URL can be changed with the `IAM_IDENTITY_URL` environment variable.
pub fn service_config() -> Result<common::config::ServiceConfig> {
    common::config::ServiceConfig::from_environment(DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_URL)
}
