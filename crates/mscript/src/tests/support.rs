//! Shared fixtures: node helpers and an in-memory imaging backend.

use mscript_core::{
    Channels, ColorSpace, ConfigNode, Image, ImageHandle, ImagingBackend, ImagingError,
    ReadSettings,
};

use crate::{DispatchContext, DispatchError, read_settings_registry};

/// Builds a directive element with the given attributes.
pub(super) fn directive(name: &str, attributes: &[(&str, &str)]) -> ConfigNode {
    let mut builder = ConfigNode::builder(name);
    for (key, value) in attributes {
        builder.push_attribute(*key, *value);
    }
    builder.build().expect("directive node")
}

/// Builds a single-value directive element.
pub(super) fn value_directive(name: &str, value: &str) -> ConfigNode {
    directive(name, &[("value", value)])
}

/// Builds an element with children.
pub(super) fn parent(name: &str, attributes: &[(&str, &str)], children: Vec<ConfigNode>) -> ConfigNode {
    let mut builder = ConfigNode::builder(name);
    for (key, value) in attributes {
        builder.push_attribute(*key, *value);
    }
    for child in children {
        builder.push_child(child);
    }
    builder.build().expect("parent node")
}

/// Applies one directive to default settings without variables or imaging.
pub(super) fn apply(node: &ConfigNode) -> Result<ReadSettings, DispatchError> {
    apply_with(node, &DispatchContext::default())
}

/// Applies one directive to default settings with the given context.
pub(super) fn apply_with(
    node: &ConfigNode,
    context: &DispatchContext<'_>,
) -> Result<ReadSettings, DispatchError> {
    let mut settings = ReadSettings::default();
    read_settings_registry().dispatch(node, &mut settings, context)?;
    Ok(settings)
}

const CHANNEL_BITS: [Channels; 6] = [
    Channels::RED,
    Channels::GREEN,
    Channels::BLUE,
    Channels::BLACK,
    Channels::ALPHA,
    Channels::INDEX,
];

/// In-memory image honouring the separation contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct FakeImage {
    pub(super) width: u32,
    pub(super) height: u32,
    pub(super) color_space: ColorSpace,
    pub(super) channels: Channels,
}

impl FakeImage {
    pub(super) const fn rgb(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            color_space: ColorSpace::Srgb,
            channels: Channels::RGB,
        }
    }
}

impl Image for FakeImage {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn color_space(&self) -> ColorSpace {
        self.color_space
    }

    fn channels(&self) -> Channels {
        self.channels
    }

    fn separate(&self, channels: Channels) -> Result<Vec<ImageHandle>, ImagingError> {
        let separated: Vec<_> = CHANNEL_BITS
            .iter()
            .filter(|bit| channels.contains(**bit) && self.channels.contains(**bit))
            .map(|_| {
                ImageHandle::new(Self {
                    width: self.width,
                    height: self.height,
                    color_space: ColorSpace::Gray,
                    channels: Channels::GRAY,
                })
            })
            .collect();
        if separated.is_empty() {
            return Err(ImagingError::NoSuchChannels {
                requested: channels,
            });
        }
        Ok(separated)
    }
}

/// Backend that decodes any data into an RGB image sized from the settings.
#[derive(Debug, Default)]
pub(super) struct FakeBackend;

impl ImagingBackend for FakeBackend {
    fn decode_image(
        &self,
        data: &[u8],
        settings: &ReadSettings,
    ) -> Result<ImageHandle, ImagingError> {
        if data.is_empty() {
            return Err(ImagingError::decode("no data"));
        }
        let size = |hint: Option<i32>| hint.and_then(|v| u32::try_from(v).ok()).unwrap_or(1);
        Ok(ImageHandle::new(FakeImage::rgb(
            size(settings.width),
            size(settings.height),
        )))
    }

    fn build_image_from_node(&self, node: &ConfigNode) -> Result<ImageHandle, ImagingError> {
        match node.attribute("size") {
            Some(size) => {
                let side = size
                    .parse()
                    .map_err(|_| ImagingError::invalid_description(node.name(), "bad size"))?;
                Ok(ImageHandle::new(FakeImage::rgb(side, side)))
            }
            None => Err(ImagingError::invalid_description(node.name(), "missing size")),
        }
    }
}
