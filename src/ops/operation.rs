use crate::foundation::error::ShapeResult;
use crate::raster::buffer::PixelBuffer;
use crate::raster::copy::{CopySpec, copy_region};
use crate::raster::hexagon::{HexagonSpec, draw_hexagon};
use crate::raster::rect::{RectangleSpec, draw_rectangle};

/// The single edit performed on an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Rectangle(RectangleSpec),
    Hexagon(HexagonSpec),
    Copy(CopySpec),
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rectangle(_) => "rectangle",
            Self::Hexagon(_) => "hexagon",
            Self::Copy(_) => "copy",
        }
    }

    /// Run the edit against `buf`. On error the buffer is unchanged and must not be encoded.
    pub fn apply(&self, buf: &mut PixelBuffer) -> ShapeResult<()> {
        tracing::debug!(op = self.name(), "applying operation");
        match self {
            Self::Rectangle(spec) => draw_rectangle(buf, spec),
            Self::Hexagon(spec) => draw_hexagon(buf, spec),
            Self::Copy(spec) => copy_region(buf, spec),
        }
    }
}
