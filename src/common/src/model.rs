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

//! Define traits required of all builder-backed models.

use crate::Result;

/// A mutable accumulator for the fields of a [Model].
///
/// Setters never fail. All validation happens in [build][ModelBuilder::build],
/// which either returns a fully valid model or an error.
pub trait ModelBuilder: Default {
    /// The model produced by this builder.
    type Model;

    /// Validates the required fields and produces the immutable model.
    fn build(self) -> Result<Self::Model>;
}

/// A trait implemented by all request and response models with a builder.
///
/// Models are immutable once built. The only way to change a model is to
/// open a new builder from it, modify the builder, and build again.
///
/// Decoding does not go through the builder. A decoded model holds whatever
/// the service sent, a required field that is missing from the payload
/// decodes as its empty value.
pub trait Model:
    Clone + PartialEq + std::fmt::Debug + serde::Serialize + serde::de::DeserializeOwned
{
    /// The builder for this model.
    type Builder: ModelBuilder<Model = Self> + From<Self>;

    /// Returns a new builder initialized with the fields of this model.
    fn new_builder(&self) -> Self::Builder {
        Self::Builder::from(self.clone())
    }
}
