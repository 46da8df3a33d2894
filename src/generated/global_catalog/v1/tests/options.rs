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

use common::request::RequestOptions;
use ibm_cloud_global_catalog_v1::model::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;
use test_utils::files::{MOCK_CONTENT, mock_file};
use test_utils::models::{expect_invalid, rebuild, roundtrip};

type Result = anyhow::Result<()>;

#[test]
fn get_catalog_entry() -> Result {
    let options = GetCatalogEntryOptionsBuilder::new("testString")
        .account("testString")
        .include("testString")
        .languages("testString")
        .complete(true)
        .depth(38)
        .build()?;
    assert_eq!(options.id(), "testString");
    assert_eq!(options.account(), Some("testString"));
    assert_eq!(options.include(), Some("testString"));
    assert_eq!(options.languages(), Some("testString"));
    assert_eq!(options.complete(), Some(true));
    assert_eq!(options.depth(), Some(38));
    roundtrip(&options)?;
    rebuild(&options)?;

    assert_eq!(
        options.query_parameters()?,
        vec![
            ("account", "testString".to_string()),
            ("include", "testString".to_string()),
            ("languages", "testString".to_string()),
            ("complete", "true".to_string()),
            ("depth", "38".to_string()),
        ]
    );
    Ok(())
}

#[test]
fn get_catalog_entry_minimal() -> Result {
    let options = GetCatalogEntryOptions::builder().id("entry").build()?;
    assert_eq!(options.path_parameters(), vec![("id", "entry".to_string())]);
    assert!(options.query_parameters()?.is_empty());
    assert_eq!(serde_json::to_value(&options)?, json!({"id": "entry"}));
    Ok(())
}

#[test_case(GetCatalogEntryOptions::builder(); "unset")]
#[test_case(GetCatalogEntryOptionsBuilder::new(""); "empty")]
fn get_catalog_entry_invalid(builder: GetCatalogEntryOptionsBuilder) -> Result {
    expect_invalid(builder, "id")
}

#[test]
fn upload_artifact() -> Result {
    let _guard = test_utils::tracing::enable_tracing();
    let options = UploadArtifactOptionsBuilder::new("testString", "testString")
        .artifact(mock_file()?)
        .content_type("testString")
        .account("testString")
        .build()?;
    assert_eq!(options.object_id(), "testString");
    assert_eq!(options.artifact_id(), "testString");
    assert_eq!(options.content_type(), Some("testString"));
    assert_eq!(options.account(), Some("testString"));
    assert_eq!(
        options.artifact().map(|f| &f.data()[..]),
        Some(MOCK_CONTENT)
    );
    rebuild(&options)?;

    let parts = options.file_parts();
    assert_eq!(parts.len(), 1, "{parts:?}");
    assert_eq!(parts[0].name, "artifact");
    assert_eq!(parts[0].file.filename(), Some("mock_file.txt"));
    assert_eq!(
        options.headers(),
        vec![("Content-Type", "testString".to_string())]
    );
    assert_eq!(
        options.query_parameters()?,
        vec![("account", "testString".to_string())]
    );
    Ok(())
}

#[test]
fn upload_artifact_json_omits_content() -> Result {
    let options = UploadArtifactOptionsBuilder::new("o", "a")
        .artifact(mock_file()?)
        .build()?;
    let json = serde_json::to_value(&options)?;
    assert_eq!(json, json!({"object_id": "o", "artifact_id": "a"}));
    let got = serde_json::from_value::<UploadArtifactOptions>(json)?;
    assert_eq!(got.artifact(), None);
    assert!(got.file_parts().is_empty());
    assert!(got.headers().is_empty());
    Ok(())
}

#[test_case(UploadArtifactOptions::builder(), "object_id")]
#[test_case(UploadArtifactOptions::builder().object_id("o"), "artifact_id")]
#[test_case(UploadArtifactOptionsBuilder::new("", "a"), "object_id")]
#[test_case(UploadArtifactOptionsBuilder::new("o", ""), "artifact_id")]
fn upload_artifact_invalid(builder: UploadArtifactOptionsBuilder, field: &str) -> Result {
    expect_invalid(builder, field)
}
