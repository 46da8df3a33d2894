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

use ibm_cloud_global_catalog_v1::model::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_utils::models::{rebuild, roundtrip, to_object};

type Result = anyhow::Result<()>;

fn bullets() -> anyhow::Result<Bullets> {
    let model = Bullets::builder()
        .title("testString")
        .description("testString")
        .icon("testString")
        .quantity(26)
        .build()?;
    Ok(model)
}

fn media() -> anyhow::Result<UIMetaMedia> {
    let source = UIMediaSourceMetaData::builder()
        .r#type("testString")
        .url("testString")
        .build()?;
    assert_eq!(source.r#type(), Some("testString"));
    assert_eq!(source.url(), Some("testString"));
    let model = UIMetaMedia::builder()
        .caption("testString")
        .thumbnail_url("testString")
        .r#type("testString")
        .url("testString")
        .source([source])
        .build()?;
    Ok(model)
}

#[test]
fn strings() -> Result {
    let bullets = bullets()?;
    assert_eq!(bullets.title(), Some("testString"));
    assert_eq!(bullets.description(), Some("testString"));
    assert_eq!(bullets.icon(), Some("testString"));
    assert_eq!(bullets.quantity(), Some(26));

    let media = media()?;
    assert_eq!(media.caption(), Some("testString"));
    assert_eq!(media.thumbnail_url(), Some("testString"));
    assert_eq!(media.r#type(), Some("testString"));
    assert_eq!(media.url(), Some("testString"));
    assert_eq!(media.source().map(|s| s.len()), Some(1));

    let strings = Strings::builder()
        .bullets([bullets.clone()])
        .media([media.clone()])
        .not_creatable_msg("testString")
        .not_creatable_robot_msg("testString")
        .deprecation_warning("testString")
        .popup_warning_message("testString")
        .instruction("testString")
        .build()?;
    assert_eq!(strings.bullets(), Some(std::slice::from_ref(&bullets)));
    assert_eq!(strings.media(), Some(std::slice::from_ref(&media)));
    assert_eq!(strings.not_creatable_msg(), Some("testString"));
    assert_eq!(strings.not_creatable_robot_msg(), Some("testString"));
    assert_eq!(strings.deprecation_warning(), Some("testString"));
    assert_eq!(strings.popup_warning_message(), Some("testString"));
    assert_eq!(strings.instruction(), Some("testString"));

    let got = roundtrip(&strings)?;
    assert_eq!(got.not_creatable_msg(), Some("testString"));
    assert_eq!(got.not_creatable_robot_msg(), Some("testString"));
    assert_eq!(got.deprecation_warning(), Some("testString"));
    assert_eq!(got.popup_warning_message(), Some("testString"));
    assert_eq!(got.instruction(), Some("testString"));
    Ok(())
}

#[test]
fn strings_json() -> Result {
    let strings = Strings::builder()
        .add_bullets(Bullets::builder().title("Fast").build()?)
        .add_media(UIMetaMedia::builder().url("https://example.com").build()?)
        .build()?;
    let object = to_object(&strings)?;
    assert_eq!(
        serde_json::Value::Object(object),
        json!({
            "bullets": [{"title": "Fast"}],
            "media": [{"URL": "https://example.com"}],
        })
    );
    Ok(())
}

#[test]
fn empty_models() -> Result {
    let strings = Strings::builder().build()?;
    assert!(to_object(&strings)?.is_empty());
    assert_eq!(strings.bullets(), None);
    let bullets = Bullets::builder().build()?;
    assert!(to_object(&bullets)?.is_empty());
    let got = serde_json::from_value::<Strings>(json!({}))?;
    assert_eq!(got, strings);
    Ok(())
}

#[test]
fn adders_append() -> Result {
    let first = bullets()?;
    let second = first.new_builder().title("second").build()?;
    let strings = Strings::builder()
        .bullets([first.clone()])
        .add_bullets(second.clone())
        .build()?;
    assert_eq!(strings.bullets(), Some([first.clone(), second].as_slice()));

    let replaced = strings.new_builder().bullets([first.clone()]).build()?;
    assert_eq!(replaced.bullets(), Some(std::slice::from_ref(&first)));
    Ok(())
}

#[test]
fn new_builder_is_independent() -> Result {
    let strings = Strings::builder()
        .instruction("original")
        .add_bullets(bullets()?)
        .build()?;
    let modified = strings
        .new_builder()
        .instruction("modified")
        .add_bullets(bullets()?)
        .build()?;
    assert_eq!(strings.instruction(), Some("original"));
    assert_eq!(strings.bullets().map(|b| b.len()), Some(1));
    assert_eq!(modified.instruction(), Some("modified"));
    assert_eq!(modified.bullets().map(|b| b.len()), Some(2));
    rebuild(&strings)?;
    rebuild(&modified)?;
    Ok(())
}

#[test]
fn unknown_fields_are_ignored() -> Result {
    let got = serde_json::from_value::<Bullets>(json!({"title": "t", "color": "blue"}))?;
    assert_eq!(got.title(), Some("t"));
    Ok(())
}
