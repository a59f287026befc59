use crate::foundation::error::{ShapeError, ShapeResult};

pub use kurbo::{Point, Vec2};

/// Integer pixel coordinate. May lie outside the canvas; writes there are clipped.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct IPoint {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl IPoint {
    /// Build a point from column and row.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Truncate a floating-point position toward zero, the way pixel corners are derived from
    /// analytic geometry.
    pub fn from_point_trunc(p: Point) -> Self {
        Self::new(p.x as i32, p.y as i32)
    }

    /// Exact floating-point position of this pixel.
    pub fn to_point(self) -> Point {
        Point::new(f64::from(self.x), f64::from(self.y))
    }
}

impl From<(i32, i32)> for IPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Pixel grid dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Columns.
    pub width: u32,
    /// Rows.
    pub height: u32,
}

impl Canvas {
    /// `true` when `(x, y)` addresses a pixel of this canvas.
    pub fn contains(self, x: i32, y: i32) -> bool {
        x >= 0
            && y >= 0
            && i64::from(x) < i64::from(self.width)
            && i64::from(y) < i64::from(self.height)
    }
}

/// Straight 8-bit RGB color. Alpha is implied opaque on write.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

impl Color {
    /// `0.0.0`, the default border color.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// `255.255.255`, the default fill color.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Build a color from 8-bit components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from wider integers, rejecting components outside `0..=255`.
    pub fn from_components(r: i64, g: i64, b: i64) -> ShapeResult<Self> {
        fn channel(name: &str, v: i64) -> ShapeResult<u8> {
            u8::try_from(v).map_err(|_| {
                ShapeError::color(format!("{name} component {v} must be between 0 and 255"))
            })
        }

        Ok(Self {
            r: channel("red", r)?,
            g: channel("green", g)?,
            b: channel("blue", b)?,
        })
    }

    /// Components as `[r, g, b]`.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.r, self.g, self.b)
    }
}
