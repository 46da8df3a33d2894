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

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The core error returned by the model builders and codecs.
///
/// The models report errors from two sources: a builder may reject its
/// inputs because a required field is missing or empty, and the JSON codec
/// may fail to encode or decode a value. This type offers predicates to
/// determine the error kind. Applications can query the error
/// [source][std::error::Error::source] for deeper information.
///
/// # Example
/// ```
/// use ibm_cloud_platform_services_common::Error;
/// use ibm_cloud_platform_services_common::validation::FieldViolation;
/// let error = Error::invalid_argument(FieldViolation::null("profile_id"));
/// assert!(error.is_invalid_argument());
/// assert_eq!(error.as_inner::<FieldViolation>().map(|v| v.field()), Some("profile_id"));
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: BoxError,
}

impl Error {
    /// Creates a new [Error] with the given [ErrorKind] and source error.
    pub fn new<T: Into<BoxError>>(kind: ErrorKind, source: T) -> Self {
        Error {
            kind,
            source: source.into(),
        }
    }

    /// A helper to create a new [ErrorKind::InvalidArgument] error.
    pub fn invalid_argument<T: Into<BoxError>>(source: T) -> Self {
        Error::new(ErrorKind::InvalidArgument, source)
    }

    /// A helper to create a new [ErrorKind::Serde] error.
    pub fn serde<T: Into<BoxError>>(source: T) -> Self {
        Error::new(ErrorKind::Serde, source)
    }

    /// A helper to create a new [ErrorKind::Other] error.
    pub fn other<T: Into<BoxError>>(source: T) -> Self {
        Error::new(ErrorKind::Other, source)
    }

    /// Returns the [ErrorKind] associated with this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind.clone()
    }

    /// The inputs given to a builder, or to a configuration, were rejected.
    ///
    /// This is always a client-side error. The message names the offending
    /// field. The application must fix the input and build again.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidArgument)
    }

    /// A value could not be encoded to, or decoded from, JSON.
    pub fn is_serde(&self) -> bool {
        matches!(self.kind, ErrorKind::Serde)
    }

    /// Recurses through the source error chain and returns some reference to
    /// the inner value if it is of type `T`, or `None` if it isn't found.
    pub fn as_inner<T: std::error::Error + Send + Sync + 'static>(&self) -> Option<&T> {
        let mut error = self.source.as_ref() as &dyn std::error::Error;
        loop {
            match error.downcast_ref::<T>() {
                Some(e) => return Some(e),
                None => error = error.source()?,
            }
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.source)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

/// The category of an [Error].
#[derive(Clone, Debug, PartialEq, Default)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A required field was missing or empty, or a value was malformed.
    InvalidArgument,
    /// A serialization or deserialization error.
    Serde,
    /// An uncategorized error.
    #[default]
    Other,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::InvalidArgument => write!(f, "invalid argument"),
            ErrorKind::Serde => write!(
                f,
                "a problem occurred during serialization or deserialization"
            ),
            ErrorKind::Other => write!(f, "a problem occurred"),
        }
    }
}
