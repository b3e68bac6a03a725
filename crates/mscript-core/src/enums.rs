//! Enumerations accepted by read-settings directives.
//!
//! Every enumeration parses from its exact member name (case-sensitive) and
//! displays as that same name, so values round-trip through text. Member
//! spellings follow ImageMagick's own names; [`MagickFormat`] members are
//! lower-case because format names double as define prefixes (`png:bit-depth`).

use serde::{Serialize, Serializer};
use strum::{Display, EnumIter, EnumString};

/// Serialises an enumeration as its display name.
macro_rules! serialize_as_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.collect_str(self)
                }
            }
        )+
    };
}

serialize_as_display!(
    ColorSpace,
    ColorType,
    CompressionMethod,
    Endian,
    FillRule,
    FontStyleType,
    FontWeight,
    Gravity,
    LineCap,
    LineJoin,
    MagickFormat,
    StorageType,
    TextDirection,
    TextEncoding,
);

/// Colour space of an image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumString, Display, EnumIter)]
pub enum ColorSpace {
    /// Not set.
    #[default]
    Undefined,
    /// Cyan, magenta, yellow.
    #[strum(serialize = "CMY")]
    Cmy,
    /// Cyan, magenta, yellow, black.
    #[strum(serialize = "CMYK")]
    Cmyk,
    /// Single gray channel.
    Gray,
    /// Hue, chroma, luma.
    #[strum(serialize = "HCL")]
    Hcl,
    /// Hue, chroma, luma (polar).
    #[strum(serialize = "HCLp")]
    Hclp,
    /// Hue, saturation, brightness.
    #[strum(serialize = "HSB")]
    Hsb,
    /// Hue, saturation, intensity.
    #[strum(serialize = "HSI")]
    Hsi,
    /// Hue, saturation, lightness.
    #[strum(serialize = "HSL")]
    Hsl,
    /// Hue, saturation, value.
    #[strum(serialize = "HSV")]
    Hsv,
    /// Hue, whiteness, blackness.
    #[strum(serialize = "HWB")]
    Hwb,
    /// CIE L*a*b*.
    Lab,
    /// CIE LCH.
    #[strum(serialize = "LCH")]
    Lch,
    /// CIE LCHab.
    #[strum(serialize = "LCHab")]
    Lchab,
    /// CIE LCHuv.
    #[strum(serialize = "LCHuv")]
    Lchuv,
    /// Logarithmic.
    Log,
    /// Long, medium, short cone response.
    #[strum(serialize = "LMS")]
    Lms,
    /// CIE L*u*v*.
    Luv,
    /// Ohta.
    #[strum(serialize = "OHTA")]
    Ohta,
    /// Rec. 601 `YCbCr`.
    Rec601YCbCr,
    /// Rec. 709 `YCbCr`.
    Rec709YCbCr,
    /// Linear RGB.
    #[strum(serialize = "RGB")]
    Rgb,
    /// Linear scRGB.
    #[strum(serialize = "scRGB")]
    ScRgb,
    /// Gamma-corrected sRGB.
    #[strum(serialize = "sRGB")]
    Srgb,
    /// Transparent.
    Transparent,
    /// CIE xyY.
    #[strum(serialize = "xyY")]
    XyY,
    /// CIE XYZ.
    #[strum(serialize = "XYZ")]
    Xyz,
    /// `YCbCr`.
    YCbCr,
    /// Kodak `PhotoYCC`.
    #[strum(serialize = "YCC")]
    Ycc,
    /// `YDbDr`.
    YDbDr,
    /// YIQ.
    #[strum(serialize = "YIQ")]
    Yiq,
    /// `YPbPr`.
    YPbPr,
    /// YUV.
    #[strum(serialize = "YUV")]
    Yuv,
}

/// Image type classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumString, Display, EnumIter)]
pub enum ColorType {
    /// Not set.
    #[default]
    Undefined,
    /// Black and white.
    Bilevel,
    /// Gray levels.
    Grayscale,
    /// Gray levels with alpha.
    GrayscaleAlpha,
    /// Indexed colour.
    Palette,
    /// Indexed colour with alpha.
    PaletteAlpha,
    /// Direct colour.
    TrueColor,
    /// Direct colour with alpha.
    TrueColorAlpha,
    /// CMYK separation.
    ColorSeparation,
    /// CMYK separation with alpha.
    ColorSeparationAlpha,
    /// Let the encoder pick.
    Optimize,
    /// Indexed bilevel with alpha.
    PaletteBilevelAlpha,
}

/// Pixel compression codec.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumString, Display, EnumIter)]
pub enum CompressionMethod {
    /// Not set.
    #[default]
    Undefined,
    /// Uncompressed.
    NoCompression,
    /// BZip.
    BZip,
    /// DirectX DXT1.
    #[strum(serialize = "DXT1")]
    Dxt1,
    /// DirectX DXT3.
    #[strum(serialize = "DXT3")]
    Dxt3,
    /// DirectX DXT5.
    #[strum(serialize = "DXT5")]
    Dxt5,
    /// CCITT Group 3 fax.
    Fax,
    /// CCITT Group 4 fax.
    Group4,
    /// JPEG.
    #[strum(serialize = "JPEG")]
    Jpeg,
    /// JPEG 2000.
    #[strum(serialize = "JPEG2000")]
    Jpeg2000,
    /// Lossless JPEG.
    #[strum(serialize = "LosslessJPEG")]
    LosslessJpeg,
    /// Lempel-Ziv-Welch.
    #[strum(serialize = "LZW")]
    Lzw,
    /// Run-length encoding.
    #[strum(serialize = "RLE")]
    Rle,
    /// Deflate.
    Zip,
    /// Deflate, single scanline.
    ZipS,
    /// OpenEXR PIZ wavelet.
    Piz,
    /// OpenEXR PXR24.
    Pxr24,
    /// OpenEXR B44.
    B44,
    /// OpenEXR B44A.
    B44A,
    /// LZMA.
    #[strum(serialize = "LZMA")]
    Lzma,
    /// JBIG1.
    #[strum(serialize = "JBIG1")]
    Jbig1,
    /// JBIG2.
    #[strum(serialize = "JBIG2")]
    Jbig2,
    /// Zstandard.
    ZStd,
    /// WebP.
    WebP,
}

/// Byte order of raw pixel data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumString, Display, EnumIter)]
pub enum Endian {
    /// Not set.
    #[default]
    Undefined,
    /// Least significant byte first.
    #[strum(serialize = "LSB")]
    Lsb,
    /// Most significant byte first.
    #[strum(serialize = "MSB")]
    Msb,
}

/// Polygon fill rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumString, Display, EnumIter)]
pub enum FillRule {
    /// Not set.
    #[default]
    Undefined,
    /// Even-odd rule.
    EvenOdd,
    /// Non-zero winding rule.
    Nonzero,
}

/// Font style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumString, Display, EnumIter)]
pub enum FontStyleType {
    /// Not set.
    #[default]
    Undefined,
    /// Upright.
    Normal,
    /// Italic.
    Italic,
    /// Oblique.
    Oblique,
    /// Any style.
    Any,
    /// Bold.
    Bold,
}

/// Font weight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumString, Display, EnumIter)]
pub enum FontWeight {
    /// Not set.
    #[default]
    Undefined,
    /// Weight 100.
    Thin,
    /// Weight 200.
    ExtraLight,
    /// Weight 300.
    Light,
    /// Weight 400.
    Normal,
    /// Weight 500.
    Medium,
    /// Weight 600.
    DemiBold,
    /// Weight 700.
    Bold,
    /// Weight 800.
    ExtraBold,
    /// Weight 900.
    Heavy,
}

/// Text placement gravity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumString, Display, EnumIter)]
pub enum Gravity {
    /// Not set.
    #[default]
    Undefined,
    /// No gravity.
    Forget,
    /// Top left.
    Northwest,
    /// Top centre.
    North,
    /// Top right.
    Northeast,
    /// Middle left.
    West,
    /// Centre.
    Center,
    /// Middle right.
    East,
    /// Bottom left.
    Southwest,
    /// Bottom centre.
    South,
    /// Bottom right.
    Southeast,
}

/// Stroke line cap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumString, Display, EnumIter)]
pub enum LineCap {
    /// Not set.
    #[default]
    Undefined,
    /// Flat cap at the end point.
    Butt,
    /// Rounded cap.
    Round,
    /// Square cap past the end point.
    Square,
}

/// Stroke line join.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumString, Display, EnumIter)]
pub enum LineJoin {
    /// Not set.
    #[default]
    Undefined,
    /// Sharp corner.
    Miter,
    /// Rounded corner.
    Round,
    /// Bevelled corner.
    Bevel,
}

/// Text direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumString, Display, EnumIter)]
pub enum TextDirection {
    /// Not set.
    #[default]
    Undefined,
    /// Right to left.
    RightToLeft,
    /// Left to right.
    LeftToRight,
}

/// Character encoding of annotation text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumString, Display, EnumIter)]
pub enum TextEncoding {
    /// Not set.
    #[default]
    #[strum(serialize = "undefined")]
    Undefined,
    /// 7-bit ASCII.
    #[strum(serialize = "us-ascii")]
    Ascii,
    /// ISO 8859-1.
    #[strum(serialize = "iso-8859-1")]
    Latin1,
    /// UTF-8.
    #[strum(serialize = "utf-8")]
    Utf8,
    /// UTF-16, little endian.
    #[strum(serialize = "utf-16")]
    Utf16,
    /// UTF-16, big endian.
    #[strum(serialize = "utf-16BE")]
    Utf16Be,
    /// UTF-32, little endian.
    #[strum(serialize = "utf-32")]
    Utf32,
}

/// Pixel component storage type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumString, Display, EnumIter)]
pub enum StorageType {
    /// Not set.
    #[default]
    Undefined,
    /// Unsigned 8-bit.
    Char,
    /// 64-bit float.
    Double,
    /// 32-bit float.
    Float,
    /// Unsigned 32-bit.
    Int32,
    /// Unsigned 64-bit.
    Int64,
    /// Native quantum.
    Quantum,
    /// Unsigned 16-bit.
    Short,
}

/// Image file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumString, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum MagickFormat {
    /// AV1 image file format.
    Avif,
    /// Windows bitmap.
    Bmp,
    /// Windows bitmap, version 2.
    Bmp2,
    /// Windows bitmap, version 3.
    Bmp3,
    /// Raw cyan, magenta, yellow, black samples.
    Cmyk,
    /// Raw CMYK samples with alpha.
    Cmyka,
    /// DirectDraw surface.
    Dds,
    /// Digital negative.
    Dng,
    /// Digital picture exchange.
    Dpx,
    /// Encapsulated PostScript.
    Eps,
    /// OpenEXR.
    Exr,
    /// Graphics interchange format.
    Gif,
    /// Raw gray samples.
    Gray,
    /// High efficiency image format.
    Heic,
    /// Windows icon.
    Ico,
    /// JPEG 2000.
    Jp2,
    /// JPEG.
    Jpeg,
    /// JPEG (short name).
    Jpg,
    /// JPEG XL.
    Jxl,
    /// Magick image file format.
    Miff,
    /// Portable arbitrary map.
    Pam,
    /// Portable bitmap.
    Pbm,
    /// `ZSoft` PCX.
    Pcx,
    /// Portable document format.
    Pdf,
    /// Portable graymap.
    Pgm,
    /// Portable network graphics.
    Png,
    /// 8-bit indexed PNG.
    Png8,
    /// 24-bit RGB PNG.
    Png24,
    /// 32-bit RGBA PNG.
    Png32,
    /// 48-bit RGB PNG.
    Png48,
    /// 64-bit RGBA PNG.
    Png64,
    /// Portable anymap.
    Pnm,
    /// Portable pixmap.
    Ppm,
    /// PostScript.
    Ps,
    /// Photoshop document.
    Psd,
    /// Camera raw.
    Raw,
    /// Raw red, green, blue samples.
    Rgb,
    /// Raw RGB samples with alpha.
    Rgba,
    /// Scalable vector graphics.
    Svg,
    /// Truevision Targa.
    Tga,
    /// Tagged image file format (short name).
    Tif,
    /// Tagged image file format.
    Tiff,
    /// Text pixel listing.
    Txt,
    /// `WebP`.
    WebP,
    /// Constant colour canvas.
    Xc,
    /// X Window pixmap.
    Xpm,
}
