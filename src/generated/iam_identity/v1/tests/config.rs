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
    let _url = ScopedEnv::remove("IAM_IDENTITY_URL");
    let _ssl = ScopedEnv::remove("IAM_IDENTITY_DISABLE_SSL");
    let config = ibm_cloud_iam_identity_v1::service_config()?;
    assert_eq!(config.service_name(), "iam_identity");
    assert_eq!(config.service_url().as_str(), "https://iam.cloud.ibm.com/");
    assert!(!config.disable_ssl_verification());
    Ok(())
}

#[test]
#[serial]
fn url_override() -> Result {
    let _url = ScopedEnv::set("IAM_IDENTITY_URL", "https://iam.test.cloud.ibm.com/");
    let _ssl = ScopedEnv::remove("IAM_IDENTITY_DISABLE_SSL");
    let config = ibm_cloud_iam_identity_v1::service_config()?;
    assert_eq!(
        config.service_url().as_str(),
        "https://iam.test.cloud.ibm.com/"
    );
    Ok(())
}

#[test]
#[serial]
fn invalid_disable_ssl() {
    let _url = ScopedEnv::remove("IAM_IDENTITY_URL");
    let _ssl = ScopedEnv::set("IAM_IDENTITY_DISABLE_SSL", "maybe");
    let e = ibm_cloud_iam_identity_v1::service_config().unwrap_err();
    assert!(e.is_invalid_argument(), "{e:?}");
    assert!(e.to_string().contains("IAM_IDENTITY_DISABLE_SSL"), "{e}");
}

#[test]
#[serial]
fn disable_ssl_ignores_case() -> Result {
    let _url = ScopedEnv::remove("IAM_IDENTITY_URL");
    let _ssl = ScopedEnv::set("IAM_IDENTITY_DISABLE_SSL", "True");
    let config = ibm_cloud_iam_identity_v1::service_config()?;
    assert!(config.disable_ssl_verification());
    Ok(())
}
