use crate::foundation::core::{Canvas, Color, IPoint, Point, Vec2};
use crate::foundation::error::{ShapeError, ShapeResult};
use crate::raster::buffer::PixelBuffer;
use crate::raster::line::{draw_thick_line, stamp_disk};

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Regular flat-top hexagon with optional fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HexagonSpec {
    /// Must lie on the canvas.
    pub center: IPoint,
    /// Center-to-vertex distance.
    pub radius: i32,
    /// Stroke width in pixels; must be at least 1.
    pub thickness: u32,
    pub border_color: Color,
    pub fill: Option<Color>,
}

impl HexagonSpec {
    pub fn validate(&self, canvas: Canvas) -> ShapeResult<()> {
        let IPoint { x, y } = self.center;
        if x < 0 || y < 0 || self.radius < 0 {
            return Err(ShapeError::coordinate(format!(
                "hexagon center ({x}, {y}) and radius {} must not be negative",
                self.radius
            )));
        }
        if !canvas.contains(x, y) {
            return Err(ShapeError::coordinate(format!(
                "hexagon center ({x}, {y}) is outside the {}x{} image",
                canvas.width, canvas.height
            )));
        }
        if self.thickness == 0 {
            return Err(ShapeError::thickness("hexagon thickness must be at least 1"));
        }
        Ok(())
    }

    /// Vertex pixels, see [`hexagon_vertices`].
    pub fn vertices(&self) -> [IPoint; 6] {
        hexagon_vertices(self.center, self.radius)
    }
}

/// The six corners of a flat-top hexagon, counter-clockwise in screen space starting from the
/// right-hand vertex `center + (radius, 0)`. Coordinates are truncated toward zero.
pub fn hexagon_vertices(center: IPoint, radius: i32) -> [IPoint; 6] {
    let c = center.to_point();
    let r = f64::from(radius);
    let h = r * SQRT_3 / 2.0;
    [
        c + Vec2::new(r, 0.0),
        c + Vec2::new(r / 2.0, -h),
        c + Vec2::new(-r / 2.0, -h),
        c + Vec2::new(-r, 0.0),
        c + Vec2::new(-r / 2.0, h),
        c + Vec2::new(r / 2.0, h),
    ]
    .map(IPoint::from_point_trunc)
}

/// Membership test against the ideal (unrounded) hexagon.
pub fn point_in_hexagon(x: i32, y: i32, center: Point, radius: f64) -> bool {
    let dx = (f64::from(x) - center.x).abs();
    let dy = (f64::from(y) - center.y).abs();
    dy <= SQRT_3 * radius / 2.0 && dx <= radius && SQRT_3 * dx + dy <= SQRT_3 * radius
}

/// Render `spec` into `buf`: interior fill, six thick edges, then a disk at every vertex so the
/// joints are closed. The center must be on the canvas; everything else is clipped.
#[tracing::instrument(skip(buf))]
pub fn draw_hexagon(buf: &mut PixelBuffer, spec: &HexagonSpec) -> ShapeResult<()> {
    spec.validate(buf.canvas())?;
    let [v1, v2, v3, v4, v5, v6] = spec.vertices();
    tracing::debug!(?v1, ?v2, ?v3, ?v4, ?v5, ?v6, "hexagon vertices");

    if let Some(fill) = spec.fill {
        fill_hexagon(buf, spec.center, spec.radius, fill);
    }

    let (t, c) = (spec.thickness, spec.border_color);
    for (from, to) in [(v3, v2), (v4, v3), (v4, v5), (v5, v6), (v6, v1), (v2, v1)] {
        draw_thick_line(buf, from, to, t, c);
    }
    for v in [v1, v2, v3, v4, v5, v6] {
        stamp_disk(buf, v, t, c);
    }
    Ok(())
}

fn fill_hexagon(buf: &mut PixelBuffer, center: IPoint, radius: i32, color: Color) {
    let c = center.to_point();
    let r = f64::from(radius);
    let h = r * SQRT_3 / 2.0;

    let y_start = ((c.y - h).floor() as i64).max(0);
    let y_end = ((c.y + h).ceil() as i64).min(i64::from(buf.height()) - 1);
    let x_start = ((c.x - r).floor() as i64).max(0);
    let x_end = ((c.x + r).ceil() as i64).min(i64::from(buf.width()) - 1);

    for y in y_start..=y_end {
        for x in x_start..=x_end {
            let (x, y) = (x as i32, y as i32);
            if point_in_hexagon(x, y, c, r) {
                buf.set_pixel(x, y, color);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/hexagon.rs"]
mod tests;
