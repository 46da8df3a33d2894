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
use common::file::{FilePart, FileWithMetadata};
use common::model::{Model, ModelBuilder};
use common::query_parameter::format;
use common::request::{self, Parameters, RequestOptions};
use common::validation::{Checklist, required};

/// List of bullets.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct Bullets {
    title: Option<String>,
    description: Option<String>,
    icon: Option<String>,
    quantity: Option<i64>,
}

impl Bullets {
    /// Creates a builder to more easily construct the [Bullets] struct.
    pub fn builder() -> BulletsBuilder {
        BulletsBuilder::default()
    }

    /// Returns a new builder initialized with the fields of this model.
    pub fn new_builder(&self) -> BulletsBuilder {
        BulletsBuilder::from(self.clone())
    }

    /// The bullet title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Description of the bullet.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Icon to display with the bullet.
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Quantity of the bullet.
    pub fn quantity(&self) -> Option<i64> {
        self.quantity
    }
}

/// A builder used to more easily construct the [Bullets] struct.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct BulletsBuilder {
    title: Option<String>,
    description: Option<String>,
    icon: Option<String>,
    quantity: Option<i64>,
}

impl BulletsBuilder {
    /// The bullet title.
    pub fn title(mut self, value: impl Into<String>) -> Self {
        self.title = Some(value.into());
        self
    }
    /// Description of the bullet.
    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }
    /// Icon to display with the bullet.
    pub fn icon(mut self, value: impl Into<String>) -> Self {
        self.icon = Some(value.into());
        self
    }
    /// Quantity of the bullet.
    pub fn quantity(mut self, value: i64) -> Self {
        self.quantity = Some(value);
        self
    }
    /// Builds [Bullets].
    pub fn build(self) -> Result<Bullets> {
        Ok(Bullets {
            title: self.title,
            description: self.description,
            icon: self.icon,
            quantity: self.quantity,
        })
    }
}

impl From<Bullets> for BulletsBuilder {
    fn from(value: Bullets) -> Self {
        Self {
            title: value.title,
            description: value.description,
            icon: value.icon,
            quantity: value.quantity,
        }
    }
}

impl ModelBuilder for BulletsBuilder {
    type Model = Bullets;
    fn build(self) -> Result<Bullets> {
        BulletsBuilder::build(self)
    }
}

impl Model for Bullets {
    type Builder = BulletsBuilder;
}

/// Location of your images.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct Image {
    #[serde(default)]
    image: String,
    small_image: Option<String>,
    medium_image: Option<String>,
    feature_image: Option<String>,
}

impl Image {
    /// Creates a builder to more easily construct the [Image] struct.
    pub fn builder() -> ImageBuilder {
        ImageBuilder::default()
    }

    /// Returns a new builder initialized with the fields of this model.
    pub fn new_builder(&self) -> ImageBuilder {
        ImageBuilder::from(self.clone())
    }

    /// URL for your large image.
    pub fn image(&self) -> &str {
        &self.image
    }

    /// URL for your small image.
    pub fn small_image(&self) -> Option<&str> {
        self.small_image.as_deref()
    }

    /// URL for your medium image.
    pub fn medium_image(&self) -> Option<&str> {
        self.medium_image.as_deref()
    }

    /// URL for your featured image.
    pub fn feature_image(&self) -> Option<&str> {
        self.feature_image.as_deref()
    }
}

/// A builder used to more easily construct the [Image] struct.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct ImageBuilder {
    image: Option<String>,
    small_image: Option<String>,
    medium_image: Option<String>,
    feature_image: Option<String>,
}

impl ImageBuilder {
    /// Creates a builder with the required fields set.
    pub fn new(image: impl Into<String>) -> Self {
        Self {
            image: Some(image.into()),
            ..Default::default()
        }
    }
    /// URL for your large image.
    pub fn image(mut self, value: impl Into<String>) -> Self {
        self.image = Some(value.into());
        self
    }
    /// URL for your small image.
    pub fn small_image(mut self, value: impl Into<String>) -> Self {
        self.small_image = Some(value.into());
        self
    }
    /// URL for your medium image.
    pub fn medium_image(mut self, value: impl Into<String>) -> Self {
        self.medium_image = Some(value.into());
        self
    }
    /// URL for your featured image.
    pub fn feature_image(mut self, value: impl Into<String>) -> Self {
        self.feature_image = Some(value.into());
        self
    }
    /// Builds [Image].
    pub fn build(self) -> Result<Image> {
        Checklist::new().not_empty("image", &self.image).check()?;
        Ok(Image {
            image: required("image", self.image)?,
            small_image: self.small_image,
            medium_image: self.medium_image,
            feature_image: self.feature_image,
        })
    }
}

impl From<Image> for ImageBuilder {
    fn from(value: Image) -> Self {
        Self {
            image: Some(value.image),
            small_image: value.small_image,
            medium_image: value.medium_image,
            feature_image: value.feature_image,
        }
    }
}

impl ModelBuilder for ImageBuilder {
    type Model = Image;
    fn build(self) -> Result<Image> {
        ImageBuilder::build(self)
    }
}

impl Model for Image {
    type Builder = ImageBuilder;
}

/// Overview is nested in the top level. The key value pair is
/// `[_language_]overview_ui`.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct Overview {
    #[serde(default)]
    display_name: String,
    #[serde(default)]
    long_description: String,
    #[serde(default)]
    description: String,
    featured_description: Option<String>,
}

impl Overview {
    /// Creates a builder to more easily construct the [Overview] struct.
    pub fn builder() -> OverviewBuilder {
        OverviewBuilder::default()
    }

    /// Returns a new builder initialized with the fields of this model.
    pub fn new_builder(&self) -> OverviewBuilder {
        OverviewBuilder::from(self.clone())
    }

    /// The translated display name.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// The translated long description.
    pub fn long_description(&self) -> &str {
        &self.long_description
    }

    /// The translated description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The translated description that will be featured.
    pub fn featured_description(&self) -> Option<&str> {
        self.featured_description.as_deref()
    }
}

/// A builder used to more easily construct the [Overview] struct.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct OverviewBuilder {
    display_name: Option<String>,
    long_description: Option<String>,
    description: Option<String>,
    featured_description: Option<String>,
}

impl OverviewBuilder {
    /// Creates a builder with the required fields set.
    pub fn new(
        display_name: impl Into<String>,
        long_description: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            display_name: Some(display_name.into()),
            long_description: Some(long_description.into()),
            description: Some(description.into()),
            ..Default::default()
        }
    }
    /// The translated display name.
    pub fn display_name(mut self, value: impl Into<String>) -> Self {
        self.display_name = Some(value.into());
        self
    }
    /// The translated long description.
    pub fn long_description(mut self, value: impl Into<String>) -> Self {
        self.long_description = Some(value.into());
        self
    }
    /// The translated description.
    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }
    /// The translated description that will be featured.
    pub fn featured_description(mut self, value: impl Into<String>) -> Self {
        self.featured_description = Some(value.into());
        self
    }
    /// Builds [Overview].
    pub fn build(self) -> Result<Overview> {
        Checklist::new()
            .not_empty("display_name", &self.display_name)
            .not_empty("long_description", &self.long_description)
            .not_empty("description", &self.description)
            .check()?;
        Ok(Overview {
            display_name: required("display_name", self.display_name)?,
            long_description: required("long_description", self.long_description)?,
            description: required("description", self.description)?,
            featured_description: self.featured_description,
        })
    }
}

impl From<Overview> for OverviewBuilder {
    fn from(value: Overview) -> Self {
        Self {
            display_name: Some(value.display_name),
            long_description: Some(value.long_description),
            description: Some(value.description),
            featured_description: value.featured_description,
        }
    }
}

impl ModelBuilder for OverviewBuilder {
    type Model = Overview;
    fn build(self) -> Result<Overview> {
        OverviewBuilder::build(self)
    }
}

impl Model for Overview {
    type Builder = OverviewBuilder;
}

/// Information related to the provider associated with a catalog entry.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct Provider {
    #[serde(default)]
    email: String,
    #[serde(default)]
    name: String,
    contact: Option<String>,
    support_email: Option<String>,
    phone: Option<String>,
}

impl Provider {
    /// Creates a builder to more easily construct the [Provider] struct.
    pub fn builder() -> ProviderBuilder {
        ProviderBuilder::default()
    }

    /// Returns a new builder initialized with the fields of this model.
    pub fn new_builder(&self) -> ProviderBuilder {
        ProviderBuilder::from(self.clone())
    }

    /// Provider's email address for this catalog entry.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Provider's name, for example, IBM.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Provider's contact name.
    pub fn contact(&self) -> Option<&str> {
        self.contact.as_deref()
    }

    /// Provider's support email.
    pub fn support_email(&self) -> Option<&str> {
        self.support_email.as_deref()
    }

    /// Provider's contact phone.
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }
}

/// A builder used to more easily construct the [Provider] struct.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct ProviderBuilder {
    email: Option<String>,
    name: Option<String>,
    contact: Option<String>,
    support_email: Option<String>,
    phone: Option<String>,
}

impl ProviderBuilder {
    /// Creates a builder with the required fields set.
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            name: Some(name.into()),
            ..Default::default()
        }
    }
    /// Provider's email address for this catalog entry.
    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }
    /// Provider's name, for example, IBM.
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }
    /// Provider's contact name.
    pub fn contact(mut self, value: impl Into<String>) -> Self {
        self.contact = Some(value.into());
        self
    }
    /// Provider's support email.
    pub fn support_email(mut self, value: impl Into<String>) -> Self {
        self.support_email = Some(value.into());
        self
    }
    /// Provider's contact phone.
    pub fn phone(mut self, value: impl Into<String>) -> Self {
        self.phone = Some(value.into());
        self
    }
    /// Builds [Provider].
    pub fn build(self) -> Result<Provider> {
        Checklist::new()
            .not_empty("email", &self.email)
            .not_empty("name", &self.name)
            .check()?;
        Ok(Provider {
            email: required("email", self.email)?,
            name: required("name", self.name)?,
            contact: self.contact,
            support_email: self.support_email,
            phone: self.phone,
        })
    }
}

impl From<Provider> for ProviderBuilder {
    fn from(value: Provider) -> Self {
        Self {
            email: Some(value.email),
            name: Some(value.name),
            contact: value.contact,
            support_email: value.support_email,
            phone: value.phone,
        }
    }
}

impl ModelBuilder for ProviderBuilder {
    type Model = Provider;
    fn build(self) -> Result<Provider> {
        ProviderBuilder::build(self)
    }
}

impl Model for Provider {
    type Builder = ProviderBuilder;
}

/// Location of the media.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct UIMediaSourceMetaData {
    r#type: Option<String>,
    url: Option<String>,
}

impl UIMediaSourceMetaData {
    /// Creates a builder to more easily construct the [UIMediaSourceMetaData] struct.
    pub fn builder() -> UIMediaSourceMetaDataBuilder {
        UIMediaSourceMetaDataBuilder::default()
    }

    /// Returns a new builder initialized with the fields of this model.
    pub fn new_builder(&self) -> UIMediaSourceMetaDataBuilder {
        UIMediaSourceMetaDataBuilder::from(self.clone())
    }

    /// Type of the source.
    pub fn r#type(&self) -> Option<&str> {
        self.r#type.as_deref()
    }

    /// URL of the source.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

/// A builder used to more easily construct the [UIMediaSourceMetaData] struct.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct UIMediaSourceMetaDataBuilder {
    r#type: Option<String>,
    url: Option<String>,
}

impl UIMediaSourceMetaDataBuilder {
    /// Type of the source.
    pub fn r#type(mut self, value: impl Into<String>) -> Self {
        self.r#type = Some(value.into());
        self
    }
    /// URL of the source.
    pub fn url(mut self, value: impl Into<String>) -> Self {
        self.url = Some(value.into());
        self
    }
    /// Builds [UIMediaSourceMetaData].
    pub fn build(self) -> Result<UIMediaSourceMetaData> {
        Ok(UIMediaSourceMetaData {
            r#type: self.r#type,
            url: self.url,
        })
    }
}

impl From<UIMediaSourceMetaData> for UIMediaSourceMetaDataBuilder {
    fn from(value: UIMediaSourceMetaData) -> Self {
        Self {
            r#type: value.r#type,
            url: value.url,
        }
    }
}

impl ModelBuilder for UIMediaSourceMetaDataBuilder {
    type Model = UIMediaSourceMetaData;
    fn build(self) -> Result<UIMediaSourceMetaData> {
        UIMediaSourceMetaDataBuilder::build(self)
    }
}

impl Model for UIMediaSourceMetaData {
    type Builder = UIMediaSourceMetaDataBuilder;
}

/// Media-related metadata.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct UIMetaMedia {
    caption: Option<String>,
    thumbnail_url: Option<String>,
    r#type: Option<String>,
    #[serde(rename = "URL")]
    url: Option<String>,
    source: Option<Vec<UIMediaSourceMetaData>>,
}

impl UIMetaMedia {
    /// Creates a builder to more easily construct the [UIMetaMedia] struct.
    pub fn builder() -> UIMetaMediaBuilder {
        UIMetaMediaBuilder::default()
    }

    /// Returns a new builder initialized with the fields of this model.
    pub fn new_builder(&self) -> UIMetaMediaBuilder {
        UIMetaMediaBuilder::from(self.clone())
    }

    /// Caption for an image.
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// URL for thumbnail image.
    pub fn thumbnail_url(&self) -> Option<&str> {
        self.thumbnail_url.as_deref()
    }

    /// Type of media.
    pub fn r#type(&self) -> Option<&str> {
        self.r#type.as_deref()
    }

    /// URL for media.
    ///
    /// This field is named `URL` in the JSON representation.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// UI media source data for for UI media data.
    pub fn source(&self) -> Option<&[UIMediaSourceMetaData]> {
        self.source.as_deref()
    }
}

/// A builder used to more easily construct the [UIMetaMedia] struct.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct UIMetaMediaBuilder {
    caption: Option<String>,
    thumbnail_url: Option<String>,
    r#type: Option<String>,
    url: Option<String>,
    source: Option<Vec<UIMediaSourceMetaData>>,
}

impl UIMetaMediaBuilder {
    /// Caption for an image.
    pub fn caption(mut self, value: impl Into<String>) -> Self {
        self.caption = Some(value.into());
        self
    }
    /// URL for thumbnail image.
    pub fn thumbnail_url(mut self, value: impl Into<String>) -> Self {
        self.thumbnail_url = Some(value.into());
        self
    }
    /// Type of media.
    pub fn r#type(mut self, value: impl Into<String>) -> Self {
        self.r#type = Some(value.into());
        self
    }
    /// URL for media.
    pub fn url(mut self, value: impl Into<String>) -> Self {
        self.url = Some(value.into());
        self
    }
    /// Replaces the UI media source data.
    pub fn source<T>(mut self, value: T) -> Self
    where
        T: IntoIterator<Item = UIMediaSourceMetaData>,
    {
        self.source = Some(value.into_iter().collect());
        self
    }
    /// Appends one element to the UI media source data, creating the list if
    /// it is not set.
    pub fn add_source(mut self, value: UIMediaSourceMetaData) -> Self {
        self.source.get_or_insert_with(Vec::new).push(value);
        self
    }
    /// Builds [UIMetaMedia].
    pub fn build(self) -> Result<UIMetaMedia> {
        Ok(UIMetaMedia {
            caption: self.caption,
            thumbnail_url: self.thumbnail_url,
            r#type: self.r#type,
            url: self.url,
            source: self.source,
        })
    }
}

impl From<UIMetaMedia> for UIMetaMediaBuilder {
    fn from(value: UIMetaMedia) -> Self {
        Self {
            caption: value.caption,
            thumbnail_url: value.thumbnail_url,
            r#type: value.r#type,
            url: value.url,
            source: value.source,
        }
    }
}

impl ModelBuilder for UIMetaMediaBuilder {
    type Model = UIMetaMedia;
    fn build(self) -> Result<UIMetaMedia> {
        UIMetaMediaBuilder::build(self)
    }
}

impl Model for UIMetaMedia {
    type Builder = UIMetaMediaBuilder;
}

/// Information related to a translated text message.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct Strings {
    bullets: Option<Vec<Bullets>>,
    media: Option<Vec<UIMetaMedia>>,
    not_creatable_msg: Option<String>,
    #[serde(rename = "not_creatable__robot_msg")]
    not_creatable_robot_msg: Option<String>,
    deprecation_warning: Option<String>,
    popup_warning_message: Option<String>,
    instruction: Option<String>,
}

impl Strings {
    /// Creates a builder to more easily construct the [Strings] struct.
    pub fn builder() -> StringsBuilder {
        StringsBuilder::default()
    }

    /// Returns a new builder initialized with the fields of this model.
    pub fn new_builder(&self) -> StringsBuilder {
        StringsBuilder::from(self.clone())
    }

    /// Presentation information for the bullets.
    pub fn bullets(&self) -> Option<&[Bullets]> {
        self.bullets.as_deref()
    }

    /// Media-related information.
    pub fn media(&self) -> Option<&[UIMetaMedia]> {
        self.media.as_deref()
    }

    /// Warning that a message is not creatable.
    pub fn not_creatable_msg(&self) -> Option<&str> {
        self.not_creatable_msg.as_deref()
    }

    /// Warning that a robot message is not creatable.
    ///
    /// This field is named `not_creatable__robot_msg` in the JSON
    /// representation.
    pub fn not_creatable_robot_msg(&self) -> Option<&str> {
        self.not_creatable_robot_msg.as_deref()
    }

    /// Warning for deprecation.
    pub fn deprecation_warning(&self) -> Option<&str> {
        self.deprecation_warning.as_deref()
    }

    /// Popup warning message.
    pub fn popup_warning_message(&self) -> Option<&str> {
        self.popup_warning_message.as_deref()
    }

    /// Instructions for UI strings.
    pub fn instruction(&self) -> Option<&str> {
        self.instruction.as_deref()
    }
}

/// A builder used to more easily construct the [Strings] struct.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct StringsBuilder {
    bullets: Option<Vec<Bullets>>,
    media: Option<Vec<UIMetaMedia>>,
    not_creatable_msg: Option<String>,
    not_creatable_robot_msg: Option<String>,
    deprecation_warning: Option<String>,
    popup_warning_message: Option<String>,
    instruction: Option<String>,
}

impl StringsBuilder {
    /// Replaces the bullets.
    pub fn bullets<T>(mut self, value: T) -> Self
    where
        T: IntoIterator<Item = Bullets>,
    {
        self.bullets = Some(value.into_iter().collect());
        self
    }
    /// Appends one element to the bullets, creating the list if it is not
    /// set.
    pub fn add_bullets(mut self, value: Bullets) -> Self {
        self.bullets.get_or_insert_with(Vec::new).push(value);
        self
    }
    /// Replaces the media.
    pub fn media<T>(mut self, value: T) -> Self
    where
        T: IntoIterator<Item = UIMetaMedia>,
    {
        self.media = Some(value.into_iter().collect());
        self
    }
    /// Appends one element to the media, creating the list if it is not set.
    pub fn add_media(mut self, value: UIMetaMedia) -> Self {
        self.media.get_or_insert_with(Vec::new).push(value);
        self
    }
    /// Warning that a message is not creatable.
    pub fn not_creatable_msg(mut self, value: impl Into<String>) -> Self {
        self.not_creatable_msg = Some(value.into());
        self
    }
    /// Warning that a robot message is not creatable.
    pub fn not_creatable_robot_msg(mut self, value: impl Into<String>) -> Self {
        self.not_creatable_robot_msg = Some(value.into());
        self
    }
    /// Warning for deprecation.
    pub fn deprecation_warning(mut self, value: impl Into<String>) -> Self {
        self.deprecation_warning = Some(value.into());
        self
    }
    /// Popup warning message.
    pub fn popup_warning_message(mut self, value: impl Into<String>) -> Self {
        self.popup_warning_message = Some(value.into());
        self
    }
    /// Instructions for UI strings.
    pub fn instruction(mut self, value: impl Into<String>) -> Self {
        self.instruction = Some(value.into());
        self
    }
    /// Builds [Strings].
    pub fn build(self) -> Result<Strings> {
        Ok(Strings {
            bullets: self.bullets,
            media: self.media,
            not_creatable_msg: self.not_creatable_msg,
            not_creatable_robot_msg: self.not_creatable_robot_msg,
            deprecation_warning: self.deprecation_warning,
            popup_warning_message: self.popup_warning_message,
            instruction: self.instruction,
        })
    }
}

impl From<Strings> for StringsBuilder {
    fn from(value: Strings) -> Self {
        Self {
            bullets: value.bullets,
            media: value.media,
            not_creatable_msg: value.not_creatable_msg,
            not_creatable_robot_msg: value.not_creatable_robot_msg,
            deprecation_warning: value.deprecation_warning,
            popup_warning_message: value.popup_warning_message,
            instruction: value.instruction,
        }
    }
}

impl ModelBuilder for StringsBuilder {
    type Model = Strings;
    fn build(self) -> Result<Strings> {
        StringsBuilder::build(self)
    }
}

impl Model for Strings {
    type Builder = StringsBuilder;
}

/// The options for the `get_catalog_entry` operation.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct GetCatalogEntryOptions {
    #[serde(default)]
    id: String,
    account: Option<String>,
    include: Option<String>,
    languages: Option<String>,
    complete: Option<bool>,
    depth: Option<i64>,
}

impl GetCatalogEntryOptions {
    /// Creates a builder to more easily construct the [GetCatalogEntryOptions] struct.
    pub fn builder() -> GetCatalogEntryOptionsBuilder {
        GetCatalogEntryOptionsBuilder::default()
    }

    /// Returns a new builder initialized with the fields of this model.
    pub fn new_builder(&self) -> GetCatalogEntryOptionsBuilder {
        GetCatalogEntryOptionsBuilder::from(self.clone())
    }

    /// The catalog entry's unique ID.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// This changes the scope of the request regardless of the
    /// authorization header. Use `global` to get the global account.
    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    /// A GET call by default returns a basic set of properties. To include
    /// other properties, use this parameter. Use `*` for all properties, or
    /// a `:` separated list of property names.
    pub fn include(&self) -> Option<&str> {
        self.include.as_deref()
    }

    /// Return the data for the specified languages. Use `*` for all
    /// languages, or a comma separated list of language codes.
    pub fn languages(&self) -> Option<&str> {
        self.languages.as_deref()
    }

    /// Returns all available fields for all languages.
    pub fn complete(&self) -> Option<bool> {
        self.complete
    }

    /// Return the children down to the requested depth.
    pub fn depth(&self) -> Option<i64> {
        self.depth
    }
}

/// A builder used to more easily construct the [GetCatalogEntryOptions] struct.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct GetCatalogEntryOptionsBuilder {
    id: Option<String>,
    account: Option<String>,
    include: Option<String>,
    languages: Option<String>,
    complete: Option<bool>,
    depth: Option<i64>,
}

impl GetCatalogEntryOptionsBuilder {
    /// Creates a builder with the required fields set.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }
    /// The catalog entry's unique ID.
    pub fn id(mut self, value: impl Into<String>) -> Self {
        self.id = Some(value.into());
        self
    }
    /// Changes the scope of the request.
    pub fn account(mut self, value: impl Into<String>) -> Self {
        self.account = Some(value.into());
        self
    }
    /// The extra properties to include.
    pub fn include(mut self, value: impl Into<String>) -> Self {
        self.include = Some(value.into());
        self
    }
    /// The languages to return.
    pub fn languages(mut self, value: impl Into<String>) -> Self {
        self.languages = Some(value.into());
        self
    }
    /// Returns all available fields for all languages.
    pub fn complete(mut self, value: bool) -> Self {
        self.complete = Some(value);
        self
    }
    /// Return the children down to the requested depth.
    pub fn depth(mut self, value: i64) -> Self {
        self.depth = Some(value);
        self
    }
    /// Builds [GetCatalogEntryOptions].
    pub fn build(self) -> Result<GetCatalogEntryOptions> {
        Checklist::new().not_empty("id", &self.id).check()?;
        Ok(GetCatalogEntryOptions {
            id: required("id", self.id)?,
            account: self.account,
            include: self.include,
            languages: self.languages,
            complete: self.complete,
            depth: self.depth,
        })
    }
}

impl From<GetCatalogEntryOptions> for GetCatalogEntryOptionsBuilder {
    fn from(value: GetCatalogEntryOptions) -> Self {
        Self {
            id: Some(value.id),
            account: value.account,
            include: value.include,
            languages: value.languages,
            complete: value.complete,
            depth: value.depth,
        }
    }
}

impl ModelBuilder for GetCatalogEntryOptionsBuilder {
    type Model = GetCatalogEntryOptions;
    fn build(self) -> Result<GetCatalogEntryOptions> {
        GetCatalogEntryOptionsBuilder::build(self)
    }
}

impl Model for GetCatalogEntryOptions {
    type Builder = GetCatalogEntryOptionsBuilder;
}

impl RequestOptions for GetCatalogEntryOptions {
    fn path_parameters(&self) -> Parameters {
        vec![("id", self.id.clone())]
    }

    fn query_parameters(&self) -> Result<Parameters> {
        request::collect([
            format("account", &self.account),
            format("include", &self.include),
            format("languages", &self.languages),
            format("complete", &self.complete),
            format("depth", &self.depth),
        ])
    }
}

/// The options for the `upload_artifact` operation.
///
/// The artifact content is not part of the JSON representation, it is
/// returned from [RequestOptions::file_parts].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[non_exhaustive]
pub struct UploadArtifactOptions {
    #[serde(default)]
    object_id: String,
    #[serde(default)]
    artifact_id: String,
    #[serde(skip)]
    artifact: Option<FileWithMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    account: Option<String>,
}

impl UploadArtifactOptions {
    /// Creates a builder to more easily construct the [UploadArtifactOptions] struct.
    pub fn builder() -> UploadArtifactOptionsBuilder {
        UploadArtifactOptionsBuilder::default()
    }

    /// Returns a new builder initialized with the fields of this model.
    pub fn new_builder(&self) -> UploadArtifactOptionsBuilder {
        UploadArtifactOptionsBuilder::from(self.clone())
    }

    /// The object's unique ID.
    pub fn object_id(&self) -> &str {
        &self.object_id
    }

    /// The artifact's ID.
    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    /// The artifact content.
    pub fn artifact(&self) -> Option<&FileWithMetadata> {
        self.artifact.as_ref()
    }

    /// The type of the input.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// This changes the scope of the request regardless of the
    /// authorization header. Use `global` to get the global account.
    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }
}

/// A builder used to more easily construct the [UploadArtifactOptions] struct.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct UploadArtifactOptionsBuilder {
    object_id: Option<String>,
    artifact_id: Option<String>,
    artifact: Option<FileWithMetadata>,
    content_type: Option<String>,
    account: Option<String>,
}

impl UploadArtifactOptionsBuilder {
    /// Creates a builder with the required fields set.
    pub fn new(object_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            object_id: Some(object_id.into()),
            artifact_id: Some(artifact_id.into()),
            ..Default::default()
        }
    }
    /// The object's unique ID.
    pub fn object_id(mut self, value: impl Into<String>) -> Self {
        self.object_id = Some(value.into());
        self
    }
    /// The artifact's ID.
    pub fn artifact_id(mut self, value: impl Into<String>) -> Self {
        self.artifact_id = Some(value.into());
        self
    }
    /// The artifact content.
    pub fn artifact(mut self, value: FileWithMetadata) -> Self {
        self.artifact = Some(value);
        self
    }
    /// The type of the input.
    pub fn content_type(mut self, value: impl Into<String>) -> Self {
        self.content_type = Some(value.into());
        self
    }
    /// Changes the scope of the request.
    pub fn account(mut self, value: impl Into<String>) -> Self {
        self.account = Some(value.into());
        self
    }
    /// Builds [UploadArtifactOptions].
    pub fn build(self) -> Result<UploadArtifactOptions> {
        Checklist::new()
            .not_empty("object_id", &self.object_id)
            .not_empty("artifact_id", &self.artifact_id)
            .check()?;
        Ok(UploadArtifactOptions {
            object_id: required("object_id", self.object_id)?,
            artifact_id: required("artifact_id", self.artifact_id)?,
            artifact: self.artifact,
            content_type: self.content_type,
            account: self.account,
        })
    }
}

impl From<UploadArtifactOptions> for UploadArtifactOptionsBuilder {
    fn from(value: UploadArtifactOptions) -> Self {
        Self {
            object_id: Some(value.object_id),
            artifact_id: Some(value.artifact_id),
            artifact: value.artifact,
            content_type: value.content_type,
            account: value.account,
        }
    }
}

impl ModelBuilder for UploadArtifactOptionsBuilder {
    type Model = UploadArtifactOptions;
    fn build(self) -> Result<UploadArtifactOptions> {
        UploadArtifactOptionsBuilder::build(self)
    }
}

impl Model for UploadArtifactOptions {
    type Builder = UploadArtifactOptionsBuilder;
}

impl RequestOptions for UploadArtifactOptions {
    fn path_parameters(&self) -> Parameters {
        vec![
            ("object_id", self.object_id.clone()),
            ("artifact_id", self.artifact_id.clone()),
        ]
    }

    fn query_parameters(&self) -> Result<Parameters> {
        request::collect([format("account", &self.account)])
    }

    fn headers(&self) -> Parameters {
        self.content_type
            .iter()
            .map(|v| ("Content-Type", v.clone()))
            .collect()
    }

    fn file_parts(&self) -> Vec<FilePart> {
        self.artifact
            .iter()
            .map(|f| FilePart::new("artifact", f.clone()))
            .collect()
    }
}
