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

use crate::Result;
use crate::model::ModelBuilder;
use crate::validation::{Checklist, required};
use bytes::Bytes;

/// File content with the metadata needed to send it as a multipart part.
///
/// File content never appears in the JSON representation of a model. Options
/// models that upload files return them from
/// [RequestOptions::file_parts][crate::request::RequestOptions::file_parts].
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct FileWithMetadata {
    data: Bytes,
    filename: Option<String>,
    content_type: Option<String>,
}

impl FileWithMetadata {
    /// Creates a builder to more easily construct the [FileWithMetadata] struct.
    pub fn builder() -> FileWithMetadataBuilder {
        FileWithMetadataBuilder::default()
    }

    /// Returns a new builder initialized with the fields of this value.
    pub fn new_builder(&self) -> FileWithMetadataBuilder {
        FileWithMetadataBuilder::from(self.clone())
    }

    /// The file content.
    pub fn data(&self) -> &Bytes {
        &self.data
    }

    /// The filename reported in the `Content-Disposition` of the part.
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// The content type of the part.
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }
}

/// A builder used to more easily construct the [FileWithMetadata] struct.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct FileWithMetadataBuilder {
    data: Option<Bytes>,
    filename: Option<String>,
    content_type: Option<String>,
}

impl FileWithMetadataBuilder {
    /// Creates a builder with the required fields set.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: Some(data.into()),
            ..Default::default()
        }
    }

    /// The file content.
    pub fn data(mut self, value: impl Into<Bytes>) -> Self {
        self.data = Some(value.into());
        self
    }

    /// The filename reported in the `Content-Disposition` of the part.
    pub fn filename(mut self, value: impl Into<String>) -> Self {
        self.filename = Some(value.into());
        self
    }

    /// The content type of the part.
    pub fn content_type(mut self, value: impl Into<String>) -> Self {
        self.content_type = Some(value.into());
        self
    }

    /// Builds [FileWithMetadata].
    pub fn build(self) -> Result<FileWithMetadata> {
        Checklist::new().not_null("data", &self.data).check()?;
        Ok(FileWithMetadata {
            data: required("data", self.data)?,
            filename: self.filename,
            content_type: self.content_type,
        })
    }
}

impl ModelBuilder for FileWithMetadataBuilder {
    type Model = FileWithMetadata;
    fn build(self) -> Result<FileWithMetadata> {
        FileWithMetadataBuilder::build(self)
    }
}

impl From<FileWithMetadata> for FileWithMetadataBuilder {
    fn from(value: FileWithMetadata) -> Self {
        Self {
            data: Some(value.data),
            filename: value.filename,
            content_type: value.content_type,
        }
    }
}

/// One named part in a multipart request.
#[derive(Clone, Debug, PartialEq)]
pub struct FilePart {
    /// The name of the form field.
    pub name: &'static str,
    /// The content and metadata of the part.
    pub file: FileWithMetadata,
}

impl FilePart {
    /// Creates a new part.
    pub fn new(name: &'static str, file: FileWithMetadata) -> Self {
        Self { name, file }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build() -> anyhow::Result<()> {
        let file = FileWithMetadataBuilder::new("hello")
            .filename("hello.txt")
            .content_type("text/plain")
            .build()?;
        assert_eq!(file.data(), &Bytes::from_static(b"hello"));
        assert_eq!(file.filename(), Some("hello.txt"));
        assert_eq!(file.content_type(), Some("text/plain"));
        Ok(())
    }

    #[test]
    fn missing_data() {
        let e = FileWithMetadata::builder()
            .filename("hello.txt")
            .build()
            .unwrap_err();
        assert!(e.is_invalid_argument(), "{e:?}");
        assert!(e.to_string().contains("data cannot be null"), "{e}");
    }

    #[test]
    fn optional_metadata() -> anyhow::Result<()> {
        let file = FileWithMetadata::builder().data(vec![1_u8, 2, 3]).build()?;
        assert_eq!(file.data().as_ref(), &[1_u8, 2, 3]);
        assert_eq!(file.filename(), None);
        assert_eq!(file.content_type(), None);
        Ok(())
    }

    #[test]
    fn rebuild() -> anyhow::Result<()> {
        let file = FileWithMetadataBuilder::new("abc").content_type("a/b").build()?;
        let copy = file.new_builder().build()?;
        assert_eq!(copy, file);
        let changed = file.new_builder().filename("f.bin").build()?;
        assert_eq!(changed.filename(), Some("f.bin"));
        assert_eq!(changed.data(), file.data());
        Ok(())
    }

    #[test]
    fn part() -> anyhow::Result<()> {
        let file = FileWithMetadataBuilder::new("abc").build()?;
        let part = FilePart::new("artifact", file.clone());
        assert_eq!(part.name, "artifact");
        assert_eq!(part.file, file);
        Ok(())
    }
}
