use std::io::{Cursor, Read};
use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{ShapeError, ShapeResult};
use crate::raster::buffer::{Channels, PixelBuffer};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
/// Signature plus the complete IHDR chunk (length, type, 13 data bytes, CRC).
const HEADER_LEN: usize = 8 + 4 + 4 + 13 + 4;

/// Color model stored in the file, before normalization to RGBA8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PngColorType {
    Grayscale,
    Rgb,
    Indexed,
    GrayscaleAlpha,
    Rgba,
}

impl PngColorType {
    fn from_ihdr(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Grayscale),
            2 => Some(Self::Rgb),
            3 => Some(Self::Indexed),
            4 => Some(Self::GrayscaleAlpha),
            6 => Some(Self::Rgba),
            _ => None,
        }
    }

    /// Human-readable label used by the info report.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Grayscale => "Grayscale",
            Self::Rgb => "RGB",
            Self::Indexed => "Palette-based (indexed)",
            Self::GrayscaleAlpha => "Grayscale with alpha",
            Self::Rgba => "RGB with alpha (RGBA)",
        }
    }
}

/// Facts read from the IHDR chunk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    /// Bits per channel (per palette index for indexed images).
    pub bit_depth: u8,
    pub color_type: PngColorType,
}

impl ImageInfo {
    /// Multi-line report printed by `--info`.
    pub fn report(&self) -> String {
        format!(
            "=== PNG Image Information ===\n\
             Image size: {}x{} pixels\n\
             Color type: {}\n\
             Bit depth: {} bits per channel\n",
            self.width,
            self.height,
            self.color_type.describe(),
            self.bit_depth
        )
    }
}

/// A decoded file: its original header facts and the normalized RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    pub info: ImageInfo,
    pub buffer: PixelBuffer,
}

/// Validate the PNG signature and parse IHDR from the start of a file.
///
/// Read by hand because `image` reports palette images as plain RGB, and `--info` must name the
/// stored color type.
pub fn parse_png_header(bytes: &[u8]) -> ShapeResult<ImageInfo> {
    if bytes.len() < PNG_SIGNATURE.len() || bytes[..8] != PNG_SIGNATURE {
        return Err(ShapeError::io("not a valid PNG file (bad signature)"));
    }
    if bytes.len() < HEADER_LEN || &bytes[12..16] != b"IHDR" {
        return Err(ShapeError::io("PNG header is truncated or missing IHDR"));
    }

    let be_u32 = |at: usize| {
        u32::from_be_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
    };
    let color_code = bytes[25];
    let color_type = PngColorType::from_ihdr(color_code)
        .ok_or_else(|| ShapeError::io(format!("unknown PNG color type {color_code}")))?;

    Ok(ImageInfo {
        width: be_u32(16),
        height: be_u32(20),
        bit_depth: bytes[24],
        color_type,
    })
}

/// Read just enough of `path` to report its header.
pub fn read_png_header(path: &Path) -> ShapeResult<ImageInfo> {
    let f = std::fs::File::open(path)
        .with_context(|| format!("cannot read file '{}'", path.display()))?;
    let mut head = Vec::with_capacity(HEADER_LEN);
    f.take(HEADER_LEN as u64)
        .read_to_end(&mut head)
        .with_context(|| format!("read header of '{}'", path.display()))?;
    parse_png_header(&head)
}

/// Decode `path` into an RGBA8 buffer. Palette, grayscale, 16-bit and alpha-less inputs are all
/// expanded to 4 bytes per pixel.
#[tracing::instrument]
pub fn decode_png(path: &Path) -> ShapeResult<DecodedImage> {
    let bytes =
        std::fs::read(path).with_context(|| format!("cannot read file '{}'", path.display()))?;
    decode_png_bytes(&bytes)
}

/// In-memory variant of [`decode_png`].
pub fn decode_png_bytes(bytes: &[u8]) -> ShapeResult<DecodedImage> {
    let info = parse_png_header(bytes)?;
    let dyn_img = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
        .context("decode png")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    let channels =
        Channels::from_count(usize::from(<image::Rgba<u8> as image::Pixel>::CHANNEL_COUNT))?;
    let buffer = PixelBuffer::from_raw(width, height, channels, rgba.into_raw())?;
    tracing::debug!(
        width,
        height,
        color_type = ?info.color_type,
        bit_depth = info.bit_depth,
        "decoded png"
    );

    Ok(DecodedImage { info, buffer })
}

/// Write `buf` to `path` as 8-bit RGBA PNG.
#[tracing::instrument(skip(buf))]
pub fn encode_png(path: &Path, buf: &PixelBuffer) -> ShapeResult<()> {
    image::save_buffer_with_format(
        path,
        &buf.to_rgba8(),
        buf.width(),
        buf.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

/// In-memory variant of [`encode_png`].
pub fn encode_png_bytes(buf: &PixelBuffer) -> ShapeResult<Vec<u8>> {
    let img = image::RgbaImage::from_raw(buf.width(), buf.height(), buf.to_rgba8())
        .ok_or_else(|| ShapeError::io("pixel buffer does not match its dimensions"))?;
    let mut out = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/codec/png.rs"]
mod tests;
