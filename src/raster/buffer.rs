use crate::foundation::core::{Canvas, Color};
use crate::foundation::error::{ShapeError, ShapeResult};

/// Bytes per pixel of a [`PixelBuffer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Channels {
    /// Three bytes per pixel: red, green, blue.
    Rgb,
    /// Four bytes per pixel: red, green, blue, alpha.
    Rgba,
}

impl Channels {
    /// Map a raw channel count onto a supported layout.
    pub fn from_count(count: usize) -> ShapeResult<Self> {
        match count {
            3 => Ok(Self::Rgb),
            4 => Ok(Self::Rgba),
            n => Err(ShapeError::channels(format!(
                "expected 3 or 4 channels, got {n}"
            ))),
        }
    }

    /// Bytes per pixel.
    pub fn count(self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }

    /// `true` when a fourth (alpha) byte follows the color bytes.
    pub fn has_alpha(self) -> bool {
        matches!(self, Self::Rgba)
    }
}

/// Decoded image: dimensions, channel layout and row-major pixel bytes.
///
/// Rows are contiguous and `width * channels` bytes long. All drawing goes through
/// [`PixelBuffer::set_pixel`], which silently drops writes outside the canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    channels: Channels,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Zero-filled buffer.
    pub fn new(width: u32, height: u32, channels: Channels) -> ShapeResult<Self> {
        let len = byte_len(width, height, channels)?;
        Ok(Self {
            width,
            height,
            channels,
            data: vec![0u8; len],
        })
    }

    /// Wrap existing row-major bytes. `data.len()` must equal `width * height * channels`.
    pub fn from_raw(
        width: u32,
        height: u32,
        channels: Channels,
        data: Vec<u8>,
    ) -> ShapeResult<Self> {
        let expected = byte_len(width, height, channels)?;
        if data.len() != expected {
            return Err(ShapeError::channels(format!(
                "pixel data is {} bytes, expected {expected} for {width}x{height}x{}",
                data.len(),
                channels.count()
            )));
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// Raw row-major bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Bytes of row `y`, or `None` past the last row.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let stride = self.stride();
        let start = y as usize * stride;
        Some(&self.data[start..start + stride])
    }

    /// Bytes of the pixel at `(x, y)`, or `None` when off-canvas.
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<&[u8]> {
        let idx = self.index_of(x, y)?;
        Some(&self.data[idx..idx + self.channels.count()])
    }

    /// Color channels of the pixel at `(x, y)`, ignoring alpha.
    pub fn color_at(&self, x: i32, y: i32) -> Option<Color> {
        self.get_pixel(x, y).map(|px| Color::new(px[0], px[1], px[2]))
    }

    /// Write `color` at `(x, y)`; alpha (when present) becomes 255. Off-canvas writes are
    /// ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        let Some(idx) = self.index_of(x, y) else {
            return;
        };
        let px = &mut self.data[idx..idx + self.channels.count()];
        px[..3].copy_from_slice(&color.to_array());
        if self.channels.has_alpha() {
            px[3] = 255;
        }
    }

    /// Paint every pixel of the canvas.
    pub fn fill(&mut self, color: Color) {
        let has_alpha = self.channels.has_alpha();
        for px in self.data.chunks_exact_mut(self.channels.count()) {
            px[..3].copy_from_slice(&color.to_array());
            if has_alpha {
                px[3] = 255;
            }
        }
    }

    /// Canonical 8-bit RGBA bytes; RGB buffers gain an opaque alpha byte.
    pub fn to_rgba8(&self) -> Vec<u8> {
        match self.channels {
            Channels::Rgba => self.data.clone(),
            Channels::Rgb => {
                let mut out = Vec::with_capacity(self.data.len() / 3 * 4);
                for px in self.data.chunks_exact(3) {
                    out.extend_from_slice(px);
                    out.push(255);
                }
                out
            }
        }
    }

    pub(crate) fn stride(&self) -> usize {
        self.width as usize * self.channels.count()
    }

    pub(crate) fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        if !self.canvas().contains(x, y) {
            return None;
        }
        Some(y as usize * self.stride() + x as usize * self.channels.count())
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

fn byte_len(width: u32, height: u32, channels: Channels) -> ShapeResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(channels.count()))
        .ok_or_else(|| ShapeError::io(format!("{width}x{height} pixel buffer size overflow")))
}

#[cfg(test)]
#[path = "../../tests/unit/raster/buffer.rs"]
mod tests;
