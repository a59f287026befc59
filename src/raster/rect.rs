use crate::foundation::core::{Color, IPoint};
use crate::foundation::error::{ShapeError, ShapeResult};
use crate::raster::buffer::PixelBuffer;

/// Axis-aligned rectangle outline with optional fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RectangleSpec {
    /// One corner (usually the top-left).
    pub top_left: IPoint,
    /// The opposite corner. Corners given in reverse order are swapped.
    pub bottom_right: IPoint,
    /// Border width in pixels; must be at least 1.
    pub thickness: u32,
    pub border_color: Color,
    /// Interior color, painted before the border.
    pub fill: Option<Color>,
}

/// Inclusive pixel bounds with `left <= right` and `top <= bottom`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NormalizedRect {
    pub left: i64,
    pub top: i64,
    pub right: i64,
    pub bottom: i64,
}

impl NormalizedRect {
    pub fn from_corners(a: IPoint, b: IPoint) -> Self {
        let (left, right) = ordered(a.x, b.x);
        let (top, bottom) = ordered(a.y, b.y);
        Self {
            left: i64::from(left),
            top: i64::from(top),
            right: i64::from(right),
            bottom: i64::from(bottom),
        }
    }
}

fn ordered(a: i32, b: i32) -> (i32, i32) {
    if a <= b { (a, b) } else { (b, a) }
}

impl RectangleSpec {
    pub fn validate(&self) -> ShapeResult<()> {
        if self.thickness == 0 {
            return Err(ShapeError::thickness("rectangle thickness must be at least 1"));
        }
        Ok(())
    }

    pub fn normalized(&self) -> NormalizedRect {
        NormalizedRect::from_corners(self.top_left, self.bottom_right)
    }
}

/// Render `spec` into `buf`: optional fill first, then four independent border bands of
/// half-width `thickness / 2` centred on the rectangle edges. Nothing is written if validation
/// fails.
#[tracing::instrument(skip(buf))]
pub fn draw_rectangle(buf: &mut PixelBuffer, spec: &RectangleSpec) -> ShapeResult<()> {
    spec.validate()?;
    let r = spec.normalized();
    let h = i64::from(spec.thickness / 2);
    tracing::debug!(?r, half = h, "normalized rectangle");

    if let Some(fill) = spec.fill {
        fill_span(buf, r.left, r.right, r.top, r.bottom, fill);
    }

    let c = spec.border_color;
    // top, bottom
    fill_span(buf, r.left - h, r.right + h, r.top - h, r.top + h, c);
    fill_span(buf, r.left - h, r.right + h, r.bottom - h, r.bottom + h, c);
    // left, right
    fill_span(buf, r.left - h, r.left + h, r.top, r.bottom, c);
    fill_span(buf, r.right - h, r.right + h, r.top, r.bottom, c);
    Ok(())
}

/// Paint the inclusive block `[x0, x1] x [y0, y1]`, clipped to the canvas.
pub(crate) fn fill_span(buf: &mut PixelBuffer, x0: i64, x1: i64, y0: i64, y1: i64, color: Color) {
    let max_x = i64::from(buf.width()) - 1;
    let max_y = i64::from(buf.height()) - 1;
    let (x0, x1) = (x0.max(0), x1.min(max_x));
    let (y0, y1) = (y0.max(0), y1.min(max_y));
    for y in y0..=y1 {
        for x in x0..=x1 {
            buf.set_pixel(x as i32, y as i32, color);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/rect.rs"]
mod tests;
