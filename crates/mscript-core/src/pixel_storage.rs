//! Layout of raw pixel buffers.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::StorageType;

/// Channel letters accepted in a pixel mapping.
const MAPPING_CHANNELS: &str = "RGBAOCMYKIP";

/// Ordered channel layout of one pixel, for example `RGBA` or `CMYK`.
///
/// Letters are normalised to upper case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PixelMapping(String);

impl PixelMapping {
    /// Returns the normalised mapping text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the number of channels per pixel.
    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.0.len()
    }
}

/// Error returned for an empty mapping or an unknown channel letter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid pixel mapping '{input}', expected letters from {}", MAPPING_CHANNELS)]
pub struct PixelMappingError {
    input: String,
}

impl FromStr for PixelMapping {
    type Err = PixelMappingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_uppercase();
        let valid =
            !normalised.is_empty() && normalised.chars().all(|c| MAPPING_CHANNELS.contains(c));
        if valid {
            Ok(Self(normalised))
        } else {
            Err(PixelMappingError {
                input: s.to_owned(),
            })
        }
    }
}

impl fmt::Display for PixelMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for PixelMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Storage type and channel mapping used when reading raw pixels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PixelStorageSettings {
    /// Component storage type.
    pub storage_type: StorageType,
    /// Channel layout, if set.
    pub mapping: Option<PixelMapping>,
}
