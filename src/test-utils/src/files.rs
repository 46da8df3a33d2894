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

use common::file::{FileWithMetadata, FileWithMetadataBuilder};

/// The content used by [mock_file].
pub const MOCK_CONTENT: &[u8] = b"This is a mock file.";

/// Creates file content with metadata, suitable for upload tests.
pub fn mock_file() -> anyhow::Result<FileWithMetadata> {
    let file = FileWithMetadataBuilder::new(bytes::Bytes::from_static(MOCK_CONTENT))
        .filename("mock_file.txt")
        .content_type("text/plain")
        .build()?;
    Ok(file)
}

/// Creates a list with one mock file.
pub fn mock_files() -> anyhow::Result<Vec<FileWithMetadata>> {
    Ok(vec![mock_file()?])
}
