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

use scoped_env::ScopedEnv;
use serial_test::serial;

type Result = anyhow::Result<()>;

#[test]
#[serial]
fn default_config() -> Result {
    let _url = ScopedEnv::remove("GLOBAL_CATALOG_URL");
    let _ssl = ScopedEnv::remove("GLOBAL_CATALOG_DISABLE_SSL");
    let config = ibm_cloud_global_catalog_v1::service_config()?;
    assert_eq!(config.service_name(), "global_catalog");
    assert_eq!(
        config.service_url().as_str(),
        ibm_cloud_global_catalog_v1::DEFAULT_SERVICE_URL
    );
    assert!(!config.disable_ssl_verification());
    Ok(())
}

#[test]
#[serial]
fn url_override() -> Result {
    let _url = ScopedEnv::set("GLOBAL_CATALOG_URL", "http://localhost:8080/api/v1");
    let _ssl = ScopedEnv::set("GLOBAL_CATALOG_DISABLE_SSL", "true");
    let config = ibm_cloud_global_catalog_v1::service_config()?;
    assert_eq!(config.service_url().as_str(), "http://localhost:8080/api/v1");
    assert!(config.disable_ssl_verification());
    Ok(())
}

#[test]
#[serial]
fn invalid_override() {
    let _url = ScopedEnv::set("GLOBAL_CATALOG_URL", "not a url");
    let _ssl = ScopedEnv::remove("GLOBAL_CATALOG_DISABLE_SSL");
    let e = ibm_cloud_global_catalog_v1::service_config().unwrap_err();
    assert!(e.is_invalid_argument(), "{e:?}");
}
