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

use common::Result;
use common::model::{Model, ModelBuilder};
use common::query_parameter::format;
use common::request::{self, Parameters, RequestOptions};
use common::validation::{Checklist, required};

/// Context with key properties for problem determination.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct ResponseContext {
    transaction_id: Option<String>,
    operation: Option<String>,
    user_agent: Option<String>,
    url: Option<String>,
    instance_id: Option<String>,
    thread_id: Option<String>,
    host: Option<String>,
    start_time: Option<String>,
    end_time: Option<String>,
    elapsed_time: Option<String>,
    cluster_name: Option<String>,
}

impl ResponseContext {
    /// Creates a builder to more easily construct the [ResponseContext] struct.
    pub fn builder() -> ResponseContextBuilder {
        ResponseContextBuilder::default()
    }

    /// Returns a new builder initialized with the fields of this model.
    pub fn new_builder(&self) -> ResponseContextBuilder {
        ResponseContextBuilder::from(self.clone())
    }

    /// The transaction ID of the inbound REST request.
    pub fn transaction_id(&self) -> Option<&str> {
        self.transaction_id.as_deref()
    }

    /// The operation of the inbound REST request.
    pub fn operation(&self) -> Option<&str> {
        self.operation.as_deref()
    }

    /// The user agent of the inbound REST request.
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    /// The URL of that cluster.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// The instance ID of the server instance processing the request.
    pub fn instance_id(&self) -> Option<&str> {
        self.instance_id.as_deref()
    }

    /// The thread ID of the server instance processing the request.
    pub fn thread_id(&self) -> Option<&str> {
        self.thread_id.as_deref()
    }

    /// The host of the server instance processing the request.
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// The start time of the request.
    pub fn start_time(&self) -> Option<&str> {
        self.start_time.as_deref()
    }

    /// The finish time of the request.
    pub fn end_time(&self) -> Option<&str> {
        self.end_time.as_deref()
    }

    /// The elapsed time in msec.
    pub fn elapsed_time(&self) -> Option<&str> {
        self.elapsed_time.as_deref()
    }

    /// The cluster name.
    pub fn cluster_name(&self) -> Option<&str> {
        self.cluster_name.as_deref()
    }
}

/// A builder used to more easily construct the [ResponseContext] struct.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct ResponseContextBuilder {
    transaction_id: Option<String>,
    operation: Option<String>,
    user_agent: Option<String>,
    url: Option<String>,
    instance_id: Option<String>,
    thread_id: Option<String>,
    host: Option<String>,
    start_time: Option<String>,
    end_time: Option<String>,
    elapsed_time: Option<String>,
    cluster_name: Option<String>,
}

impl ResponseContextBuilder {
    /// Sets the value of [transaction_id][ResponseContext::transaction_id].
    pub fn transaction_id(mut self, value: impl Into<String>) -> Self {
        self.transaction_id = Some(value.into());
        self
    }
    /// Sets the value of [operation][ResponseContext::operation].
    pub fn operation(mut self, value: impl Into<String>) -> Self {
        self.operation = Some(value.into());
        self
    }
    /// Sets the value of [user_agent][ResponseContext::user_agent].
    pub fn user_agent(mut self, value: impl Into<String>) -> Self {
        self.user_agent = Some(value.into());
        self
    }
    /// Sets the value of [url][ResponseContext::url].
    pub fn url(mut self, value: impl Into<String>) -> Self {
        self.url = Some(value.into());
        self
    }
    /// Sets the value of [instance_id][ResponseContext::instance_id].
    pub fn instance_id(mut self, value: impl Into<String>) -> Self {
        self.instance_id = Some(value.into());
        self
    }
    /// Sets the value of [thread_id][ResponseContext::thread_id].
    pub fn thread_id(mut self, value: impl Into<String>) -> Self {
        self.thread_id = Some(value.into());
        self
    }
    /// Sets the value of [host][ResponseContext::host].
    pub fn host(mut self, value: impl Into<String>) -> Self {
        self.host = Some(value.into());
        self
    }
    /// Sets the value of [start_time][ResponseContext::start_time].
    pub fn start_time(mut self, value: impl Into<String>) -> Self {
        self.start_time = Some(value.into());
        self
    }
    /// Sets the value of [end_time][ResponseContext::end_time].
    pub fn end_time(mut self, value: impl Into<String>) -> Self {
        self.end_time = Some(value.into());
        self
    }
    /// Sets the value of [elapsed_time][ResponseContext::elapsed_time].
    pub fn elapsed_time(mut self, value: impl Into<String>) -> Self {
        self.elapsed_time = Some(value.into());
        self
    }
    /// Sets the value of [cluster_name][ResponseContext::cluster_name].
    pub fn cluster_name(mut self, value: impl Into<String>) -> Self {
        self.cluster_name = Some(value.into());
        self
    }
    /// Builds [ResponseContext].
    pub fn build(self) -> Result<ResponseContext> {
        Ok(ResponseContext {
            transaction_id: self.transaction_id,
            operation: self.operation,
            user_agent: self.user_agent,
            url: self.url,
            instance_id: self.instance_id,
            thread_id: self.thread_id,
            host: self.host,
            start_time: self.start_time,
            end_time: self.end_time,
            elapsed_time: self.elapsed_time,
            cluster_name: self.cluster_name,
        })
    }
}

impl From<ResponseContext> for ResponseContextBuilder {
    fn from(value: ResponseContext) -> Self {
        Self {
            transaction_id: value.transaction_id,
            operation: value.operation,
            user_agent: value.user_agent,
            url: value.url,
            instance_id: value.instance_id,
            thread_id: value.thread_id,
            host: value.host,
            start_time: value.start_time,
            end_time: value.end_time,
            elapsed_time: value.elapsed_time,
            cluster_name: value.cluster_name,
        }
    }
}

impl ModelBuilder for ResponseContextBuilder {
    type Model = ResponseContext;
    fn build(self) -> Result<ResponseContext> {
        ResponseContextBuilder::build(self)
    }
}

impl Model for ResponseContext {
    type Builder = ResponseContextBuilder;
}

/// A condition of a claim rule.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct ProfileClaimRuleConditions {
    #[serde(default)]
    claim: String,
    #[serde(default)]
    operator: String,
    #[serde(default)]
    value: String,
}

impl ProfileClaimRuleConditions {
    /// The claim equals the value.
    pub const EQUALS: &'static str = "EQUALS";
    /// The claim does not equal the value.
    pub const NOT_EQUALS: &'static str = "NOT_EQUALS";
    /// The claim equals the value, ignoring case.
    pub const EQUALS_IGNORE_CASE: &'static str = "EQUALS_IGNORE_CASE";
    /// The claim does not equal the value, ignoring case.
    pub const NOT_EQUALS_IGNORE_CASE: &'static str = "NOT_EQUALS_IGNORE_CASE";
    /// The claim contains the value.
    pub const CONTAINS: &'static str = "CONTAINS";
    /// The claim is one of the values.
    pub const IN: &'static str = "IN";

    /// Creates a builder to more easily construct the [ProfileClaimRuleConditions] struct.
    pub fn builder() -> ProfileClaimRuleConditionsBuilder {
        ProfileClaimRuleConditionsBuilder::default()
    }

    /// Returns a new builder initialized with the fields of this model.
    pub fn new_builder(&self) -> ProfileClaimRuleConditionsBuilder {
        ProfileClaimRuleConditionsBuilder::from(self.clone())
    }

    /// The claim to evaluate against.
    pub fn claim(&self) -> &str {
        &self.claim
    }

    /// The operation to perform on the claim.
    ///
    /// Well-known values are available as associated constants, for example
    /// [ProfileClaimRuleConditions::EQUALS]. Other values are preserved.
    pub fn operator(&self) -> &str {
        &self.operator
    }

    /// The stringified JSON value that the claim is compared to using the
    /// operator.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A builder used to more easily construct the [ProfileClaimRuleConditions] struct.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct ProfileClaimRuleConditionsBuilder {
    claim: Option<String>,
    operator: Option<String>,
    value: Option<String>,
}

impl ProfileClaimRuleConditionsBuilder {
    /// Creates a builder with the required fields set.
    pub fn new(
        claim: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            claim: Some(claim.into()),
            operator: Some(operator.into()),
            value: Some(value.into()),
        }
    }
    /// Sets the value of [claim][ProfileClaimRuleConditions::claim].
    pub fn claim(mut self, value: impl Into<String>) -> Self {
        self.claim = Some(value.into());
        self
    }
    /// Sets the value of [operator][ProfileClaimRuleConditions::operator].
    pub fn operator(mut self, value: impl Into<String>) -> Self {
        self.operator = Some(value.into());
        self
    }
    /// Sets the value of [value][ProfileClaimRuleConditions::value].
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
    /// Builds [ProfileClaimRuleConditions].
    pub fn build(self) -> Result<ProfileClaimRuleConditions> {
        Checklist::new()
            .not_null("claim", &self.claim)
            .not_null("operator", &self.operator)
            .not_null("value", &self.value)
            .check()?;
        Ok(ProfileClaimRuleConditions {
            claim: required("claim", self.claim)?,
            operator: required("operator", self.operator)?,
            value: required("value", self.value)?,
        })
    }
}

impl From<ProfileClaimRuleConditions> for ProfileClaimRuleConditionsBuilder {
    fn from(value: ProfileClaimRuleConditions) -> Self {
        Self {
            claim: Some(value.claim),
            operator: Some(value.operator),
            value: Some(value.value),
        }
    }
}

impl ModelBuilder for ProfileClaimRuleConditionsBuilder {
    type Model = ProfileClaimRuleConditions;
    fn build(self) -> Result<ProfileClaimRuleConditions> {
        ProfileClaimRuleConditionsBuilder::build(self)
    }
}

impl Model for ProfileClaimRuleConditions {
    type Builder = ProfileClaimRuleConditionsBuilder;
}

/// The fields of a claim rule sent in the request body.
#[serde_with::skip_serializing_none]
#[derive(serde::Serialize)]
struct ClaimRuleBody<'a> {
    r#type: &'a str,
    conditions: &'a [ProfileClaimRuleConditions],
    context: Option<&'a ResponseContext>,
    name: Option<&'a str>,
    realm_name: Option<&'a str>,
    cr_type: Option<&'a str>,
    expiration: Option<i64>,
}

impl ClaimRuleBody<'_> {
    fn to_value(&self) -> Result<Option<serde_json::Value>> {
        common::json::to_value(self).map(Some)
    }
}

/// The options for the `create_claim_rule` operation.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct CreateClaimRuleOptions {
    #[serde(default)]
    profile_id: String,
    #[serde(default)]
    r#type: String,
    #[serde(default)]
    conditions: Vec<ProfileClaimRuleConditions>,
    context: Option<ResponseContext>,
    name: Option<String>,
    realm_name: Option<String>,
    cr_type: Option<String>,
    expiration: Option<i64>,
}

impl CreateClaimRuleOptions {
    /// Creates a builder to more easily construct the [CreateClaimRuleOptions] struct.
    pub fn builder() -> CreateClaimRuleOptionsBuilder {
        CreateClaimRuleOptionsBuilder::default()
    }

    /// Returns a new builder initialized with the fields of this model.
    pub fn new_builder(&self) -> CreateClaimRuleOptionsBuilder {
        CreateClaimRuleOptionsBuilder::from(self.clone())
    }

    /// ID of the trusted profile to create a claim rule.
    pub fn profile_id(&self) -> &str {
        &self.profile_id
    }

    /// Type of the claim rule, either `Profile-SAML` or `Profile-CR`.
    pub fn r#type(&self) -> &str {
        &self.r#type
    }

    /// Conditions of this claim rule.
    pub fn conditions(&self) -> &[ProfileClaimRuleConditions] {
        &self.conditions
    }

    /// Context with key properties for problem determination.
    pub fn context(&self) -> Option<&ResponseContext> {
        self.context.as_ref()
    }

    /// Name of the claim rule to be created or updated.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The realm name of the Idp this claim rule applies to.
    ///
    /// This field is required only if the type is `Profile-SAML`.
    pub fn realm_name(&self) -> Option<&str> {
        self.realm_name.as_deref()
    }

    /// The compute resource type the rule applies to.
    ///
    /// This field is required only if the type is `Profile-CR`. Valid values
    /// are `VSI`, `IKS_SA`, `ROKS_SA`.
    pub fn cr_type(&self) -> Option<&str> {
        self.cr_type.as_deref()
    }

    /// Session expiration in seconds, only required if type is
    /// `Profile-SAML`.
    pub fn expiration(&self) -> Option<i64> {
        self.expiration
    }

    fn request_body(&self) -> ClaimRuleBody<'_> {
        ClaimRuleBody {
            r#type: &self.r#type,
            conditions: &self.conditions,
            context: self.context.as_ref(),
            name: self.name.as_deref(),
            realm_name: self.realm_name.as_deref(),
            cr_type: self.cr_type.as_deref(),
            expiration: self.expiration,
        }
    }
}

/// A builder used to more easily construct the [CreateClaimRuleOptions] struct.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct CreateClaimRuleOptionsBuilder {
    profile_id: Option<String>,
    r#type: Option<String>,
    conditions: Option<Vec<ProfileClaimRuleConditions>>,
    context: Option<ResponseContext>,
    name: Option<String>,
    realm_name: Option<String>,
    cr_type: Option<String>,
    expiration: Option<i64>,
}

impl CreateClaimRuleOptionsBuilder {
    /// Creates a builder with the required fields set.
    pub fn new<T>(profile_id: impl Into<String>, r#type: impl Into<String>, conditions: T) -> Self
    where
        T: IntoIterator<Item = ProfileClaimRuleConditions>,
    {
        Self {
            profile_id: Some(profile_id.into()),
            r#type: Some(r#type.into()),
            conditions: Some(conditions.into_iter().collect()),
            ..Default::default()
        }
    }
    /// Sets the value of [profile_id][CreateClaimRuleOptions::profile_id].
    pub fn profile_id(mut self, value: impl Into<String>) -> Self {
        self.profile_id = Some(value.into());
        self
    }
    /// Sets the type of the claim rule.
    pub fn r#type(mut self, value: impl Into<String>) -> Self {
        self.r#type = Some(value.into());
        self
    }
    /// Replaces the [conditions][CreateClaimRuleOptions::conditions].
    pub fn conditions<T>(mut self, value: T) -> Self
    where
        T: IntoIterator<Item = ProfileClaimRuleConditions>,
    {
        self.conditions = Some(value.into_iter().collect());
        self
    }
    /// Appends one condition, creating the list if it is not set.
    pub fn add_conditions(mut self, value: ProfileClaimRuleConditions) -> Self {
        self.conditions.get_or_insert_with(Vec::new).push(value);
        self
    }
    /// Sets the value of [context][CreateClaimRuleOptions::context].
    pub fn context(mut self, value: ResponseContext) -> Self {
        self.context = Some(value);
        self
    }
    /// Sets the value of [name][CreateClaimRuleOptions::name].
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }
    /// Sets the value of [realm_name][CreateClaimRuleOptions::realm_name].
    pub fn realm_name(mut self, value: impl Into<String>) -> Self {
        self.realm_name = Some(value.into());
        self
    }
    /// Sets the value of [cr_type][CreateClaimRuleOptions::cr_type].
    pub fn cr_type(mut self, value: impl Into<String>) -> Self {
        self.cr_type = Some(value.into());
        self
    }
    /// Sets the value of [expiration][CreateClaimRuleOptions::expiration].
    pub fn expiration(mut self, value: i64) -> Self {
        self.expiration = Some(value);
        self
    }
    /// Builds [CreateClaimRuleOptions].
    pub fn build(self) -> Result<CreateClaimRuleOptions> {
        Checklist::new()
            .not_empty("profile_id", &self.profile_id)
            .not_null("type", &self.r#type)
            .not_null("conditions", &self.conditions)
            .check()?;
        Ok(CreateClaimRuleOptions {
            profile_id: required("profile_id", self.profile_id)?,
            r#type: required("type", self.r#type)?,
            conditions: required("conditions", self.conditions)?,
            context: self.context,
            name: self.name,
            realm_name: self.realm_name,
            cr_type: self.cr_type,
            expiration: self.expiration,
        })
    }
}

impl From<CreateClaimRuleOptions> for CreateClaimRuleOptionsBuilder {
    fn from(value: CreateClaimRuleOptions) -> Self {
        Self {
            profile_id: Some(value.profile_id),
            r#type: Some(value.r#type),
            conditions: Some(value.conditions),
            context: value.context,
            name: value.name,
            realm_name: value.realm_name,
            cr_type: value.cr_type,
            expiration: value.expiration,
        }
    }
}

impl ModelBuilder for CreateClaimRuleOptionsBuilder {
    type Model = CreateClaimRuleOptions;
    fn build(self) -> Result<CreateClaimRuleOptions> {
        CreateClaimRuleOptionsBuilder::build(self)
    }
}

impl Model for CreateClaimRuleOptions {
    type Builder = CreateClaimRuleOptionsBuilder;
}

impl RequestOptions for CreateClaimRuleOptions {
    fn path_parameters(&self) -> Parameters {
        vec![("profile-id", self.profile_id.clone())]
    }

    fn body(&self) -> Result<Option<serde_json::Value>> {
        self.request_body().to_value()
    }
}

/// The options for the `update_claim_rule` operation.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct UpdateClaimRuleOptions {
    #[serde(default)]
    profile_id: String,
    #[serde(default)]
    rule_id: String,
    #[serde(default)]
    if_match: String,
    #[serde(default)]
    r#type: String,
    #[serde(default)]
    conditions: Vec<ProfileClaimRuleConditions>,
    context: Option<ResponseContext>,
    name: Option<String>,
    realm_name: Option<String>,
    cr_type: Option<String>,
    expiration: Option<i64>,
}

impl UpdateClaimRuleOptions {
    /// Creates a builder to more easily construct the [UpdateClaimRuleOptions] struct.
    pub fn builder() -> UpdateClaimRuleOptionsBuilder {
        UpdateClaimRuleOptionsBuilder::default()
    }

    /// Returns a new builder initialized with the fields of this model.
    pub fn new_builder(&self) -> UpdateClaimRuleOptionsBuilder {
        UpdateClaimRuleOptionsBuilder::from(self.clone())
    }

    /// ID of the trusted profile.
    pub fn profile_id(&self) -> &str {
        &self.profile_id
    }

    /// ID of the claim rule to update.
    pub fn rule_id(&self) -> &str {
        &self.rule_id
    }

    /// Version of the claim rule to be updated.
    ///
    /// Specify the version that you retrieved as `entity_tag` (ETag header)
    /// when reading the rule. The value helps identify parallel usage of
    /// this API. Pass `*` to indicate to update any version available.
    pub fn if_match(&self) -> &str {
        &self.if_match
    }

    /// Type of the claim rule, either `Profile-SAML` or `Profile-CR`.
    pub fn r#type(&self) -> &str {
        &self.r#type
    }

    /// Conditions of this claim rule.
    pub fn conditions(&self) -> &[ProfileClaimRuleConditions] {
        &self.conditions
    }

    /// Context with key properties for problem determination.
    pub fn context(&self) -> Option<&ResponseContext> {
        self.context.as_ref()
    }

    /// Name of the claim rule to be created or updated.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The realm name of the Idp this claim rule applies to.
    pub fn realm_name(&self) -> Option<&str> {
        self.realm_name.as_deref()
    }

    /// The compute resource type the rule applies to.
    pub fn cr_type(&self) -> Option<&str> {
        self.cr_type.as_deref()
    }

    /// Session expiration in seconds.
    pub fn expiration(&self) -> Option<i64> {
        self.expiration
    }

    fn request_body(&self) -> ClaimRuleBody<'_> {
        ClaimRuleBody {
            r#type: &self.r#type,
            conditions: &self.conditions,
            context: self.context.as_ref(),
            name: self.name.as_deref(),
            realm_name: self.realm_name.as_deref(),
            cr_type: self.cr_type.as_deref(),
            expiration: self.expiration,
        }
    }
}

/// A builder used to more easily construct the [UpdateClaimRuleOptions] struct.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct UpdateClaimRuleOptionsBuilder {
    profile_id: Option<String>,
    rule_id: Option<String>,
    if_match: Option<String>,
    r#type: Option<String>,
    conditions: Option<Vec<ProfileClaimRuleConditions>>,
    context: Option<ResponseContext>,
    name: Option<String>,
    realm_name: Option<String>,
    cr_type: Option<String>,
    expiration: Option<i64>,
}

impl UpdateClaimRuleOptionsBuilder {
    /// Creates a builder with the required fields set.
    pub fn new<T>(
        profile_id: impl Into<String>,
        rule_id: impl Into<String>,
        if_match: impl Into<String>,
        r#type: impl Into<String>,
        conditions: T,
    ) -> Self
    where
        T: IntoIterator<Item = ProfileClaimRuleConditions>,
    {
        Self {
            profile_id: Some(profile_id.into()),
            rule_id: Some(rule_id.into()),
            if_match: Some(if_match.into()),
            r#type: Some(r#type.into()),
            conditions: Some(conditions.into_iter().collect()),
            ..Default::default()
        }
    }
    /// Sets the value of [profile_id][UpdateClaimRuleOptions::profile_id].
    pub fn profile_id(mut self, value: impl Into<String>) -> Self {
        self.profile_id = Some(value.into());
        self
    }
    /// Sets the value of [rule_id][UpdateClaimRuleOptions::rule_id].
    pub fn rule_id(mut self, value: impl Into<String>) -> Self {
        self.rule_id = Some(value.into());
        self
    }
    /// Sets the value of [if_match][UpdateClaimRuleOptions::if_match].
    pub fn if_match(mut self, value: impl Into<String>) -> Self {
        self.if_match = Some(value.into());
        self
    }
    /// Sets the type of the claim rule.
    pub fn r#type(mut self, value: impl Into<String>) -> Self {
        self.r#type = Some(value.into());
        self
    }
    /// Replaces the [conditions][UpdateClaimRuleOptions::conditions].
    pub fn conditions<T>(mut self, value: T) -> Self
    where
        T: IntoIterator<Item = ProfileClaimRuleConditions>,
    {
        self.conditions = Some(value.into_iter().collect());
        self
    }
    /// Appends one condition, creating the list if it is not set.
    pub fn add_conditions(mut self, value: ProfileClaimRuleConditions) -> Self {
        self.conditions.get_or_insert_with(Vec::new).push(value);
        self
    }
    /// Sets the value of [context][UpdateClaimRuleOptions::context].
    pub fn context(mut self, value: ResponseContext) -> Self {
        self.context = Some(value);
        self
    }
    /// Sets the value of [name][UpdateClaimRuleOptions::name].
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }
    /// Sets the value of [realm_name][UpdateClaimRuleOptions::realm_name].
    pub fn realm_name(mut self, value: impl Into<String>) -> Self {
        self.realm_name = Some(value.into());
        self
    }
    /// Sets the value of [cr_type][UpdateClaimRuleOptions::cr_type].
    pub fn cr_type(mut self, value: impl Into<String>) -> Self {
        self.cr_type = Some(value.into());
        self
    }
    /// Sets the value of [expiration][UpdateClaimRuleOptions::expiration].
    pub fn expiration(mut self, value: i64) -> Self {
        self.expiration = Some(value);
        self
    }
    /// Builds [UpdateClaimRuleOptions].
    pub fn build(self) -> Result<UpdateClaimRuleOptions> {
        Checklist::new()
            .not_empty("profile_id", &self.profile_id)
            .not_empty("rule_id", &self.rule_id)
            .not_null("if_match", &self.if_match)
            .not_null("type", &self.r#type)
            .not_null("conditions", &self.conditions)
            .check()?;
        Ok(UpdateClaimRuleOptions {
            profile_id: required("profile_id", self.profile_id)?,
            rule_id: required("rule_id", self.rule_id)?,
            if_match: required("if_match", self.if_match)?,
            r#type: required("type", self.r#type)?,
            conditions: required("conditions", self.conditions)?,
            context: self.context,
            name: self.name,
            realm_name: self.realm_name,
            cr_type: self.cr_type,
            expiration: self.expiration,
        })
    }
}

impl From<UpdateClaimRuleOptions> for UpdateClaimRuleOptionsBuilder {
    fn from(value: UpdateClaimRuleOptions) -> Self {
        Self {
            profile_id: Some(value.profile_id),
            rule_id: Some(value.rule_id),
            if_match: Some(value.if_match),
            r#type: Some(value.r#type),
            conditions: Some(value.conditions),
            context: value.context,
            name: value.name,
            realm_name: value.realm_name,
            cr_type: value.cr_type,
            expiration: value.expiration,
        }
    }
}

impl ModelBuilder for UpdateClaimRuleOptionsBuilder {
    type Model = UpdateClaimRuleOptions;
    fn build(self) -> Result<UpdateClaimRuleOptions> {
        UpdateClaimRuleOptionsBuilder::build(self)
    }
}

impl Model for UpdateClaimRuleOptions {
    type Builder = UpdateClaimRuleOptionsBuilder;
}

impl RequestOptions for UpdateClaimRuleOptions {
    fn path_parameters(&self) -> Parameters {
        vec![
            ("profile-id", self.profile_id.clone()),
            ("rule-id", self.rule_id.clone()),
        ]
    }

    fn headers(&self) -> Parameters {
        vec![("If-Match", self.if_match.clone())]
    }

    fn body(&self) -> Result<Option<serde_json::Value>> {
        self.request_body().to_value()
    }
}

/// The options for the `get_account_settings_assignment` operation.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct GetAccountSettingsAssignmentOptions {
    #[serde(default)]
    assignment_id: String,
    include_history: Option<bool>,
}

impl GetAccountSettingsAssignmentOptions {
    /// Creates a builder to more easily construct the [GetAccountSettingsAssignmentOptions] struct.
    pub fn builder() -> GetAccountSettingsAssignmentOptionsBuilder {
        GetAccountSettingsAssignmentOptionsBuilder::default()
    }

    /// Returns a new builder initialized with the fields of this model.
    pub fn new_builder(&self) -> GetAccountSettingsAssignmentOptionsBuilder {
        GetAccountSettingsAssignmentOptionsBuilder::from(self.clone())
    }

    /// ID of the Assignment Record.
    pub fn assignment_id(&self) -> &str {
        &self.assignment_id
    }

    /// Defines if the entity history is included in the response.
    pub fn include_history(&self) -> Option<bool> {
        self.include_history
    }
}

/// A builder used to more easily construct the [GetAccountSettingsAssignmentOptions] struct.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct GetAccountSettingsAssignmentOptionsBuilder {
    assignment_id: Option<String>,
    include_history: Option<bool>,
}

impl GetAccountSettingsAssignmentOptionsBuilder {
    /// Creates a builder with the required fields set.
    pub fn new(assignment_id: impl Into<String>) -> Self {
        Self {
            assignment_id: Some(assignment_id.into()),
            ..Default::default()
        }
    }
    /// Sets the value of [assignment_id][GetAccountSettingsAssignmentOptions::assignment_id].
    pub fn assignment_id(mut self, value: impl Into<String>) -> Self {
        self.assignment_id = Some(value.into());
        self
    }
    /// Sets the value of [include_history][GetAccountSettingsAssignmentOptions::include_history].
    pub fn include_history(mut self, value: bool) -> Self {
        self.include_history = Some(value);
        self
    }
    /// Builds [GetAccountSettingsAssignmentOptions].
    pub fn build(self) -> Result<GetAccountSettingsAssignmentOptions> {
        Checklist::new()
            .not_empty("assignment_id", &self.assignment_id)
            .check()?;
        Ok(GetAccountSettingsAssignmentOptions {
            assignment_id: required("assignment_id", self.assignment_id)?,
            include_history: self.include_history,
        })
    }
}

impl From<GetAccountSettingsAssignmentOptions> for GetAccountSettingsAssignmentOptionsBuilder {
    fn from(value: GetAccountSettingsAssignmentOptions) -> Self {
        Self {
            assignment_id: Some(value.assignment_id),
            include_history: value.include_history,
        }
    }
}

impl ModelBuilder for GetAccountSettingsAssignmentOptionsBuilder {
    type Model = GetAccountSettingsAssignmentOptions;
    fn build(self) -> Result<GetAccountSettingsAssignmentOptions> {
        GetAccountSettingsAssignmentOptionsBuilder::build(self)
    }
}

impl Model for GetAccountSettingsAssignmentOptions {
    type Builder = GetAccountSettingsAssignmentOptionsBuilder;
}

impl RequestOptions for GetAccountSettingsAssignmentOptions {
    fn path_parameters(&self) -> Parameters {
        vec![("assignment_id", self.assignment_id.clone())]
    }

    fn query_parameters(&self) -> Result<Parameters> {
        request::collect([format("include_history", &self.include_history)])
    }
}

/// A claim rule of a trusted profile, as returned by the service.
///
/// Claim rules are created and updated with [CreateClaimRuleOptions] and
/// [UpdateClaimRuleOptions]. This type is only decoded from responses, it has
/// no builder.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct ProfileClaimRule {
    id: Option<String>,
    entity_tag: Option<String>,
    created_at: Option<String>,
    modified_at: Option<String>,
    name: Option<String>,
    r#type: Option<String>,
    realm_name: Option<String>,
    expiration: Option<i64>,
    cr_type: Option<String>,
    conditions: Option<Vec<ProfileClaimRuleConditions>>,
    context: Option<ResponseContext>,
}

impl ProfileClaimRule {
    /// The unique identifier of the claim rule.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Version of the claim rule.
    pub fn entity_tag(&self) -> Option<&str> {
        self.entity_tag.as_deref()
    }

    /// If set, contains a date time string of the creation date in ISO
    /// format.
    pub fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    /// If set, contains a date time string of the last modification date in
    /// ISO format.
    pub fn modified_at(&self) -> Option<&str> {
        self.modified_at.as_deref()
    }

    /// The optional claim rule name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Type of the claim rule, either `Profile-SAML` or `Profile-CR`.
    pub fn r#type(&self) -> Option<&str> {
        self.r#type.as_deref()
    }

    /// The realm name of the Idp this claim rule applies to.
    pub fn realm_name(&self) -> Option<&str> {
        self.realm_name.as_deref()
    }

    /// Session expiration in seconds.
    pub fn expiration(&self) -> Option<i64> {
        self.expiration
    }

    /// The compute resource type.
    pub fn cr_type(&self) -> Option<&str> {
        self.cr_type.as_deref()
    }

    /// Conditions of this claim rule.
    pub fn conditions(&self) -> Option<&[ProfileClaimRuleConditions]> {
        self.conditions.as_deref()
    }

    /// Context with key properties for problem determination.
    pub fn context(&self) -> Option<&ResponseContext> {
        self.context.as_ref()
    }
}
