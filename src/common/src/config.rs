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

use crate::validation::{Checklist, required};
use crate::{Error, Result};
use std::env::VarError;

const URL_SUFFIX: &str = "_URL";
const DISABLE_SSL_SUFFIX: &str = "_DISABLE_SSL";

/// Problems detected while validating a [ServiceConfig].
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ConfigError {
    /// The service URL could not be parsed.
    #[error("invalid service URL {url:?}")]
    InvalidUrl {
        /// The rejected value.
        url: String,
        /// The parser error.
        #[source]
        source: url::ParseError,
    },
    /// The service URL does not use a supported scheme.
    #[error("unsupported scheme {0:?} in service URL, expected http or https")]
    UnsupportedScheme(String),
    /// An environment variable holds a value that cannot be parsed.
    #[error("cannot parse {name}={value:?}")]
    InvalidVariable {
        /// The name of the variable.
        name: String,
        /// The rejected value.
        value: String,
    },
}

/// The endpoint configuration for one service.
///
/// Each generated service crate exposes its default service name and URL,
/// and a `service_config()` function that applies the environment overrides.
///
/// # Example
/// ```
/// use ibm_cloud_platform_services_common::config::ServiceConfig;
/// let config = ServiceConfig::builder()
///     .service_name("global_catalog")
///     .service_url("https://globalcatalog.cloud.ibm.com/api/v1")
///     .build()?;
/// assert_eq!(config.service_url().host_str(), Some("globalcatalog.cloud.ibm.com"));
/// # Ok::<(), ibm_cloud_platform_services_common::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct ServiceConfig {
    service_name: String,
    service_url: url::Url,
    disable_ssl_verification: bool,
}

impl ServiceConfig {
    /// Creates a builder to more easily construct the [ServiceConfig] struct.
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::default()
    }

    /// Loads the configuration for `service_name` from the environment.
    ///
    /// The service URL is read from `<SERVICE_NAME>_URL`, where the service
    /// name is upper-cased and `-` is replaced with `_`. If the variable is
    /// not set, `default_url` is used. The `<SERVICE_NAME>_DISABLE_SSL`
    /// variable, if set, must be `true` or `false` in any case. A variable
    /// that is set but not valid Unicode is an error.
    pub fn from_environment(service_name: &str, default_url: &str) -> Result<Self> {
        let prefix = env_prefix(service_name);
        let mut builder = ServiceConfigBuilder::default().service_name(service_name);
        let name = format!("{prefix}{URL_SUFFIX}");
        match std::env::var(&name) {
            Ok(url) => {
                tracing::debug!(variable = %name, url = %url, "service URL overridden by environment");
                builder = builder.service_url(url);
            }
            Err(VarError::NotPresent) => builder = builder.service_url(default_url),
            Err(VarError::NotUnicode(value)) => return Err(invalid_variable(name, &value)),
        }
        let name = format!("{prefix}{DISABLE_SSL_SUFFIX}");
        match std::env::var(&name) {
            Ok(value) => {
                let disable = parse_flag(&value).ok_or_else(|| invalid_variable(name, &value))?;
                builder = builder.disable_ssl_verification(disable);
            }
            Err(VarError::NotPresent) => {}
            Err(VarError::NotUnicode(value)) => return Err(invalid_variable(name, &value)),
        }
        builder.build()
    }

    /// The name of the service, used to find the environment overrides.
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// The base URL for the service.
    pub fn service_url(&self) -> &url::Url {
        &self.service_url
    }

    /// If true, the transport should not verify the server certificates.
    pub fn disable_ssl_verification(&self) -> bool {
        self.disable_ssl_verification
    }
}

/// A builder used to more easily construct the [ServiceConfig] struct.
#[derive(Clone, Debug, Default)]
pub struct ServiceConfigBuilder {
    service_name: Option<String>,
    service_url: Option<String>,
    disable_ssl_verification: Option<bool>,
}

impl ServiceConfigBuilder {
    /// The name of the service.
    pub fn service_name(mut self, value: impl Into<String>) -> Self {
        self.service_name = Some(value.into());
        self
    }

    /// The base URL for the service.
    pub fn service_url(mut self, value: impl Into<String>) -> Self {
        self.service_url = Some(value.into());
        self
    }

    /// Disables verification of the server certificates.
    pub fn disable_ssl_verification(mut self, value: bool) -> Self {
        self.disable_ssl_verification = Some(value);
        self
    }

    /// Builds [ServiceConfig].
    pub fn build(self) -> Result<ServiceConfig> {
        Checklist::new()
            .not_empty("service_name", &self.service_name)
            .not_empty("service_url", &self.service_url)
            .check()?;
        let url = required("service_url", self.service_url)?;
        let service_url = url::Url::parse(url.trim_end_matches('/'))
            .map_err(|source| Error::invalid_argument(ConfigError::InvalidUrl { url, source }))?;
        if !matches!(service_url.scheme(), "http" | "https") {
            return Err(Error::invalid_argument(ConfigError::UnsupportedScheme(
                service_url.scheme().to_string(),
            )));
        }
        Ok(ServiceConfig {
            service_name: required("service_name", self.service_name)?,
            service_url,
            disable_ssl_verification: self.disable_ssl_verification.unwrap_or_default(),
        })
    }
}

/// Parses `true` or `false`, ignoring case and surrounding whitespace.
fn parse_flag(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn invalid_variable<V: AsRef<std::ffi::OsStr>>(name: String, value: V) -> Error {
    Error::invalid_argument(ConfigError::InvalidVariable {
        name,
        value: value.as_ref().to_string_lossy().into_owned(),
    })
}

fn env_prefix(service_name: &str) -> String {
    service_name.to_uppercase().replace('-', "_")
}
