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

use common::model::{Model, ModelBuilder};

/// Encodes and decodes `model`, returns the decoded value.
///
/// Fails if the decoded value differs from the input.
pub fn roundtrip<M: Model>(model: &M) -> anyhow::Result<M> {
    let json = common::json::to_string(model)?;
    let got = common::json::from_str::<M>(&json)?;
    if &got != model {
        anyhow::bail!("roundtrip mismatch:\n  json={json}\n  got={got:?}\n  want={model:?}");
    }
    Ok(got)
}

/// Opens a new builder from `model` and builds it without changes.
///
/// Fails if the rebuilt value differs from the input.
pub fn rebuild<M: Model>(model: &M) -> anyhow::Result<M> {
    let got = model.new_builder().build()?;
    if &got != model {
        anyhow::bail!("rebuild mismatch:\n  got={got:?}\n  want={model:?}");
    }
    Ok(got)
}

/// Verifies that building fails with an invalid argument error naming
/// `field`.
pub fn expect_invalid<B: ModelBuilder>(builder: B, field: &str) -> anyhow::Result<()>
where
    B::Model: std::fmt::Debug,
{
    match builder.build() {
        Ok(m) => anyhow::bail!("expected an error for {field}, got {m:?}"),
        Err(e) if !e.is_invalid_argument() => {
            anyhow::bail!("expected an invalid argument error for {field}, got {e:?}")
        }
        Err(e) => {
            let violation = e
                .as_inner::<common::validation::FieldViolation>()
                .ok_or_else(|| anyhow::anyhow!("missing field violation in {e:?}"))?;
            if violation.field() != field {
                anyhow::bail!("expected violation for {field}, got {violation:?}");
            }
            Ok(())
        }
    }
}

/// Returns the JSON object for `model`.
pub fn to_object<M: Model>(model: &M) -> anyhow::Result<serde_json::Map<String, serde_json::Value>> {
    match common::json::to_value(model)? {
        serde_json::Value::Object(map) => Ok(map),
        v => anyhow::bail!("expected a JSON object, got {v}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::validation::{Checklist, required};

    #[serde_with::skip_serializing_none]
    #[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
    struct Widget {
        #[serde(default)]
        name: String,
        size: Option<i64>,
    }

    #[derive(Debug, Default)]
    struct WidgetBuilder {
        name: Option<String>,
        size: Option<i64>,
    }

    impl ModelBuilder for WidgetBuilder {
        type Model = Widget;
        fn build(self) -> common::Result<Widget> {
            Checklist::new().not_empty("name", &self.name).check()?;
            Ok(Widget {
                name: required("name", self.name)?,
                size: self.size,
            })
        }
    }

    impl From<Widget> for WidgetBuilder {
        fn from(value: Widget) -> Self {
            Self {
                name: Some(value.name),
                size: value.size,
            }
        }
    }

    impl Model for Widget {
        type Builder = WidgetBuilder;
    }

    fn widget() -> Widget {
        Widget {
            name: "w".into(),
            size: Some(3),
        }
    }

    #[test]
    fn checks_pass() -> anyhow::Result<()> {
        let w = widget();
        assert_eq!(roundtrip(&w)?, w);
        assert_eq!(rebuild(&w)?, w);
        let object = to_object(&w)?;
        assert_eq!(object.get("size"), Some(&serde_json::json!(3)));
        expect_invalid(WidgetBuilder::default(), "name")?;
        Ok(())
    }

    #[test]
    fn expect_invalid_detects_success() {
        let builder = WidgetBuilder::from(widget());
        assert!(expect_invalid(builder, "name").is_err());
    }

    #[test]
    fn expect_invalid_detects_wrong_field() {
        assert!(expect_invalid(WidgetBuilder::default(), "size").is_err());
    }
}
