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
use ibm_cloud_iam_identity_v1::model::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;
use test_utils::models::{expect_invalid, rebuild, roundtrip, to_object};

type Result = anyhow::Result<()>;

fn response_context() -> anyhow::Result<ResponseContext> {
    let model = ResponseContext::builder()
        .transaction_id("testString")
        .operation("testString")
        .user_agent("testString")
        .url("testString")
        .instance_id("testString")
        .thread_id("testString")
        .host("testString")
        .start_time("testString")
        .end_time("testString")
        .elapsed_time("testString")
        .cluster_name("testString")
        .build()?;
    Ok(model)
}

fn condition() -> anyhow::Result<ProfileClaimRuleConditions> {
    let model = ProfileClaimRuleConditions::builder()
        .claim("testString")
        .operator(ProfileClaimRuleConditions::EQUALS)
        .value("testString")
        .build()?;
    Ok(model)
}

#[test]
fn response_context_fields() -> Result {
    let model = response_context()?;
    assert_eq!(model.transaction_id(), Some("testString"));
    assert_eq!(model.operation(), Some("testString"));
    assert_eq!(model.user_agent(), Some("testString"));
    assert_eq!(model.url(), Some("testString"));
    assert_eq!(model.instance_id(), Some("testString"));
    assert_eq!(model.thread_id(), Some("testString"));
    assert_eq!(model.host(), Some("testString"));
    assert_eq!(model.start_time(), Some("testString"));
    assert_eq!(model.end_time(), Some("testString"));
    assert_eq!(model.elapsed_time(), Some("testString"));
    assert_eq!(model.cluster_name(), Some("testString"));
    roundtrip(&model)?;
    rebuild(&model)?;
    Ok(())
}

#[test]
fn conditions() -> Result {
    let model = condition()?;
    assert_eq!(model.claim(), "testString");
    assert_eq!(model.operator(), "EQUALS");
    assert_eq!(model.value(), "testString");
    roundtrip(&model)?;
    Ok(())
}

#[test_case(ProfileClaimRuleConditions::EQUALS)]
#[test_case(ProfileClaimRuleConditions::NOT_EQUALS)]
#[test_case(ProfileClaimRuleConditions::EQUALS_IGNORE_CASE)]
#[test_case(ProfileClaimRuleConditions::NOT_EQUALS_IGNORE_CASE)]
#[test_case(ProfileClaimRuleConditions::CONTAINS)]
#[test_case(ProfileClaimRuleConditions::IN)]
fn operators(operator: &str) -> Result {
    let model = ProfileClaimRuleConditionsBuilder::new("claim", operator, "value").build()?;
    assert_eq!(to_object(&model)?.get("operator"), Some(&json!(operator)));
    Ok(())
}

#[test]
fn unknown_operator_is_preserved() -> Result {
    let got = serde_json::from_value::<ProfileClaimRuleConditions>(
        json!({"claim": "c", "operator": "MATCHES", "value": "v"}),
    )?;
    assert_eq!(got.operator(), "MATCHES");
    Ok(())
}

#[test_case(ProfileClaimRuleConditions::builder().operator("o").value("v"), "claim")]
#[test_case(ProfileClaimRuleConditions::builder().claim("c").value("v"), "operator")]
#[test_case(ProfileClaimRuleConditions::builder().claim("c").operator("o"), "value")]
fn conditions_invalid(builder: ProfileClaimRuleConditionsBuilder, field: &str) -> Result {
    expect_invalid(builder, field)
}

#[test]
fn create_claim_rule() -> Result {
    let options = CreateClaimRuleOptions::builder()
        .profile_id("testString")
        .r#type("testString")
        .conditions([condition()?])
        .context(response_context()?)
        .name("testString")
        .realm_name("testString")
        .cr_type("testString")
        .expiration(38)
        .build()?;
    assert_eq!(options.profile_id(), "testString");
    assert_eq!(options.r#type(), "testString");
    assert_eq!(options.conditions(), &[condition()?]);
    assert_eq!(options.context(), Some(&response_context()?));
    assert_eq!(options.name(), Some("testString"));
    assert_eq!(options.realm_name(), Some("testString"));
    assert_eq!(options.cr_type(), Some("testString"));
    assert_eq!(options.expiration(), Some(38));
    roundtrip(&options)?;
    rebuild(&options)?;

    assert_eq!(
        options.path_parameters(),
        vec![("profile-id", "testString".to_string())]
    );
    assert!(options.query_parameters()?.is_empty());
    assert!(options.headers().is_empty());
    let body = options
        .body()?
        .ok_or_else(|| anyhow::anyhow!("missing body"))?;
    assert!(body.get("profile_id").is_none(), "{body}");
    assert_eq!(body["type"], "testString");
    assert_eq!(body["context"]["cluster_name"], "testString");
    assert_eq!(body["expiration"], 38);
    Ok(())
}

#[test]
fn create_claim_rule_minimal() -> Result {
    let options = CreateClaimRuleOptionsBuilder::new("p", "Profile-SAML", []).build()?;
    assert!(options.conditions().is_empty());
    assert_eq!(options.name(), None);
    assert_eq!(
        options.body()?,
        Some(json!({"type": "Profile-SAML", "conditions": []}))
    );
    Ok(())
}

#[test]
fn add_conditions_appends() -> Result {
    let c = condition()?;
    let options = CreateClaimRuleOptions::builder()
        .profile_id("p")
        .r#type("Profile-SAML")
        .add_conditions(c.clone())
        .add_conditions(c.clone())
        .build()?;
    assert_eq!(options.conditions(), &[c.clone(), c.clone()]);

    let other = c.new_builder().claim("other").build()?;
    let options = options.new_builder().add_conditions(other.clone()).build()?;
    assert_eq!(options.conditions(), &[c.clone(), c, other]);
    Ok(())
}

#[test_case(CreateClaimRuleOptions::builder(), "profile_id")]
#[test_case(CreateClaimRuleOptionsBuilder::new("", "t", []), "profile_id")]
#[test_case(CreateClaimRuleOptions::builder().profile_id("p").conditions([]), "type")]
#[test_case(CreateClaimRuleOptions::builder().profile_id("p").r#type("t"), "conditions")]
fn create_claim_rule_invalid(builder: CreateClaimRuleOptionsBuilder, field: &str) -> Result {
    expect_invalid(builder, field)
}

#[test]
fn create_claim_rule_empty_type_is_allowed() -> Result {
    let options = CreateClaimRuleOptionsBuilder::new("p", "", []).build()?;
    assert_eq!(options.r#type(), "");
    Ok(())
}

#[test]
fn update_claim_rule() -> Result {
    let options = UpdateClaimRuleOptionsBuilder::new(
        "testString",
        "testString",
        "testString",
        "testString",
        [condition()?],
    )
    .context(response_context()?)
    .name("testString")
    .realm_name("testString")
    .cr_type("testString")
    .expiration(38)
    .build()?;
    assert_eq!(options.profile_id(), "testString");
    assert_eq!(options.rule_id(), "testString");
    assert_eq!(options.if_match(), "testString");
    assert_eq!(options.r#type(), "testString");
    assert_eq!(options.conditions(), &[condition()?]);
    assert_eq!(options.expiration(), Some(38));
    roundtrip(&options)?;
    rebuild(&options)?;

    assert_eq!(
        options.path_parameters(),
        vec![
            ("profile-id", "testString".to_string()),
            ("rule-id", "testString".to_string()),
        ]
    );
    assert_eq!(options.headers(), vec![("If-Match", "testString".to_string())]);
    let body = options
        .body()?
        .ok_or_else(|| anyhow::anyhow!("missing body"))?;
    for key in ["profile_id", "rule_id", "if_match"] {
        assert!(body.get(key).is_none(), "{key} in {body}");
    }
    assert_eq!(body["name"], "testString");
    Ok(())
}

#[test_case(UpdateClaimRuleOptions::builder(), "profile_id")]
#[test_case(UpdateClaimRuleOptions::builder().profile_id("p"), "rule_id")]
#[test_case(UpdateClaimRuleOptionsBuilder::new("p", "", "*", "t", []), "rule_id")]
#[test_case(UpdateClaimRuleOptions::builder().profile_id("p").rule_id("r"), "if_match")]
#[test_case(UpdateClaimRuleOptions::builder().profile_id("p").rule_id("r").if_match("*"), "type")]
#[test_case(UpdateClaimRuleOptions::builder().profile_id("p").rule_id("r").if_match("*").r#type("t"), "conditions")]
fn update_claim_rule_invalid(builder: UpdateClaimRuleOptionsBuilder, field: &str) -> Result {
    expect_invalid(builder, field)
}

#[test]
fn update_claim_rule_any_version() -> Result {
    let options = UpdateClaimRuleOptionsBuilder::new("p", "r", "", "t", []).build()?;
    assert_eq!(options.headers(), vec![("If-Match", String::new())]);
    let options = options.new_builder().if_match("*").build()?;
    assert_eq!(options.if_match(), "*");
    Ok(())
}

#[test]
fn profile_claim_rule_response() -> Result {
    let input = json!({
        "id": "ClaimRule-1",
        "entity_tag": "1-abc",
        "created_at": "2024-01-01T00:00:00Z",
        "modified_at": "2024-01-02T00:00:00Z",
        "name": "rule",
        "type": "Profile-SAML",
        "realm_name": "https://sdk.test.realm/1234",
        "expiration": 43200,
        "conditions": [{"claim": "blueGroups", "operator": "CONTAINS", "value": "\"dev\""}],
        "context": {"transaction_id": "tx-1"},
    });
    let got = serde_json::from_value::<ProfileClaimRule>(input.clone())?;
    assert_eq!(got.id(), Some("ClaimRule-1"));
    assert_eq!(got.entity_tag(), Some("1-abc"));
    assert_eq!(got.created_at(), Some("2024-01-01T00:00:00Z"));
    assert_eq!(got.modified_at(), Some("2024-01-02T00:00:00Z"));
    assert_eq!(got.name(), Some("rule"));
    assert_eq!(got.r#type(), Some("Profile-SAML"));
    assert_eq!(got.realm_name(), Some("https://sdk.test.realm/1234"));
    assert_eq!(got.expiration(), Some(43200));
    assert_eq!(got.cr_type(), None);
    assert_eq!(got.conditions().map(|c| c[0].operator()), Some("CONTAINS"));
    assert_eq!(
        got.context().and_then(ResponseContext::transaction_id),
        Some("tx-1")
    );
    assert_eq!(serde_json::to_value(&got)?, input);
    Ok(())
}

#[test]
fn profile_claim_rule_accepts_partial_conditions() -> Result {
    let input = json!({"id": "ClaimRule-1", "conditions": [{"claim": "c", "operator": "EQUALS"}]});
    let got = serde_json::from_value::<ProfileClaimRule>(input)?;
    assert_eq!(got.id(), Some("ClaimRule-1"));
    let conditions = got
        .conditions()
        .ok_or_else(|| anyhow::anyhow!("missing conditions"))?;
    assert_eq!(conditions.len(), 1);
    assert_eq!(conditions[0].claim(), "c");
    assert_eq!(conditions[0].operator(), ProfileClaimRuleConditions::EQUALS);
    assert_eq!(conditions[0].value(), "");
    Ok(())
}
