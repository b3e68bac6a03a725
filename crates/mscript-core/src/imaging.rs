//! Capability seam to the native imaging library.
//!
//! Decoding, pattern construction and channel separation are performed by an
//! external backend. The script layer only sees the [`ImagingBackend`] and
//! [`Image`] traits and passes [`ImageHandle`]s around.

use std::fmt;
use std::sync::Arc;

use bitflags::bitflags;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::{ColorSpace, ConfigNode, ReadSettings};

bitflags! {
    /// Pixel channels selectable for separation.
    ///
    /// Colour-model aliases share bits with their RGB counterparts, matching
    /// ImageMagick's channel numbering.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Channels: u32 {
        /// Red channel.
        const RED = 0x0001;
        /// Green channel.
        const GREEN = 0x0002;
        /// Blue channel.
        const BLUE = 0x0004;
        /// Black channel of CMYK images.
        const BLACK = 0x0008;
        /// Alpha channel.
        const ALPHA = 0x0010;
        /// Colormap index channel.
        const INDEX = 0x0020;
        /// Gray channel (shares the red bit).
        const GRAY = Self::RED.bits();
        /// Cyan channel (shares the red bit).
        const CYAN = Self::RED.bits();
        /// Magenta channel (shares the green bit).
        const MAGENTA = Self::GREEN.bits();
        /// Yellow channel (shares the blue bit).
        const YELLOW = Self::BLUE.bits();
        /// Opacity channel (shares the alpha bit).
        const OPACITY = Self::ALPHA.bits();
        /// Red, green and blue.
        const RGB = Self::RED.bits() | Self::GREEN.bits() | Self::BLUE.bits();
        /// Cyan, magenta, yellow and black.
        const CMYK = Self::RGB.bits() | Self::BLACK.bits();
        /// CMYK plus alpha.
        const CMYKA = Self::CMYK.bits() | Self::ALPHA.bits();
        /// Every channel.
        const ALL = Self::CMYKA.bits() | Self::INDEX.bits();
    }
}

/// Errors reported by an imaging backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImagingError {
    /// Image data could not be decoded.
    #[error("failed to decode image: {message}")]
    Decode {
        /// Backend diagnostic.
        message: String,
    },
    /// A pattern node did not describe a usable image.
    #[error("invalid image description in '{node}': {message}")]
    InvalidDescription {
        /// Name of the describing node.
        node: String,
        /// Backend diagnostic.
        message: String,
    },
    /// None of the requested channels exist in the image.
    #[error("image has none of the requested channels {requested:?}")]
    NoSuchChannels {
        /// The requested channel set.
        requested: Channels,
    },
    /// Any other backend failure.
    #[error("imaging backend failure: {message}")]
    Backend {
        /// Backend diagnostic.
        message: String,
    },
}

impl ImagingError {
    /// Creates a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Creates an invalid description error.
    pub fn invalid_description(node: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidDescription {
            node: node.into(),
            message: message.into(),
        }
    }

    /// Creates a generic backend error.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }
}

/// An image owned by the imaging backend.
pub trait Image: fmt::Debug + Send + Sync {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Colour space of the pixel data.
    fn color_space(&self) -> ColorSpace;

    /// Channels present in the image.
    fn channels(&self) -> Channels;

    /// Splits the requested channels into separate gray images.
    ///
    /// Backends return one image per requested channel that the image has,
    /// in channel-bit order. Each result has [`ColorSpace::Gray`].
    ///
    /// # Errors
    ///
    /// Returns [`ImagingError::NoSuchChannels`] when none of the requested
    /// channels exist, or a backend-specific error.
    fn separate(&self, channels: Channels) -> Result<Vec<ImageHandle>, ImagingError>;

    /// Splits every channel the image has.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Self::separate`].
    fn separate_all(&self) -> Result<Vec<ImageHandle>, ImagingError> {
        self.separate(self.channels())
    }
}

/// Shared handle to a backend image.
///
/// Handles compare equal only when they point at the same image.
#[derive(Debug, Clone)]
pub struct ImageHandle(Arc<dyn Image>);

impl ImageHandle {
    /// Wraps a backend image.
    pub fn new(image: impl Image + 'static) -> Self {
        Self(Arc::new(image))
    }

    /// Borrows the underlying image.
    #[must_use]
    pub fn image(&self) -> &dyn Image {
        self.0.as_ref()
    }
}

impl PartialEq for ImageHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Serialize for ImageHandle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ImageHandle", 3)?;
        state.serialize_field("width", &self.0.width())?;
        state.serialize_field("height", &self.0.height())?;
        state.serialize_field("colorSpace", &self.0.color_space())?;
        state.end()
    }
}

/// Entry points the script layer needs from the imaging library.
pub trait ImagingBackend: Send + Sync {
    /// Decodes encoded image data using the supplied read settings.
    ///
    /// # Errors
    ///
    /// Returns [`ImagingError::Decode`] when the data cannot be read.
    fn decode_image(
        &self,
        data: &[u8],
        settings: &ReadSettings,
    ) -> Result<ImageHandle, ImagingError>;

    /// Builds an image from a script node, as used by fill and stroke
    /// patterns.
    ///
    /// # Errors
    ///
    /// Returns [`ImagingError::InvalidDescription`] when the node does not
    /// describe an image.
    fn build_image_from_node(&self, node: &ConfigNode) -> Result<ImageHandle, ImagingError>;
}
