use std::{fmt, str::FromStr};

use strum::{AsRefStr, Display};
use uuid::Uuid;

pub const JPEG_CONTENT_TYPE: &str = "image/jpeg";

const JPEG_EXTENSION: &str = "jpg";

/// Unique file name of a stored image.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactName(String);

impl ArtifactName {
    /// A random (UUID v4) file name with a `.jpg` extension.
    pub fn new_jpeg() -> Self {
        Uuid::new_v4().into()
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Uuid> for ArtifactName {
    fn from(from: Uuid) -> Self {
        Self(format!("{}.{JPEG_EXTENSION}", from.hyphenated()))
    }
}

impl AsRef<str> for ArtifactName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for ArtifactName {
    type Err = InvalidArtifactName;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.contains('/') {
            return Err(InvalidArtifactName);
        }
        Ok(Self(s.to_owned()))
    }
}

impl fmt::Display for ArtifactName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Invalid artifact name")]
pub struct InvalidArtifactName;

/// The two images produced for every resolved address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ImageKind {
    StreetView,
    Map,
}
