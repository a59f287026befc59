use crate::foundation::core::IPoint;
use crate::foundation::error::{ShapeError, ShapeResult};
use crate::raster::buffer::PixelBuffer;

/// Copy of the half-open source rectangle `[left, right) x [top, bottom)` to `dest`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CopySpec {
    pub src_top_left: IPoint,
    /// Exclusive corner; swapped with `src_top_left` per axis when given in reverse.
    pub src_bottom_right: IPoint,
    /// Destination of the source's top-left pixel; must lie on the canvas.
    pub dest: IPoint,
}

/// Validated copy geometry in buffer units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CopyPlan {
    pub src_left: usize,
    pub src_top: usize,
    pub width: usize,
    pub height: usize,
    pub dest_left: usize,
    pub dest_top: usize,
}

impl CopySpec {
    /// Normalize the source corners and check every bound against `buf`.
    pub fn plan(&self, buf: &PixelBuffer) -> ShapeResult<CopyPlan> {
        let (left, right) = minmax(self.src_top_left.x, self.src_bottom_right.x);
        let (top, bottom) = minmax(self.src_top_left.y, self.src_bottom_right.y);
        let width = i64::from(right) - i64::from(left);
        let height = i64::from(bottom) - i64::from(top);

        if width <= 0 || height <= 0 {
            return Err(ShapeError::coordinate(format!(
                "copy region ({left}, {top})-({right}, {bottom}) has non-positive size"
            )));
        }
        if left < 0
            || top < 0
            || i64::from(right) > i64::from(buf.width())
            || i64::from(bottom) > i64::from(buf.height())
        {
            return Err(ShapeError::coordinate(format!(
                "copy source ({left}, {top})-({right}, {bottom}) is outside the {}x{} image",
                buf.width(),
                buf.height()
            )));
        }
        let IPoint { x: dx, y: dy } = self.dest;
        if !buf.canvas().contains(dx, dy) {
            return Err(ShapeError::coordinate(format!(
                "copy destination ({dx}, {dy}) is outside the {}x{} image",
                buf.width(),
                buf.height()
            )));
        }

        Ok(CopyPlan {
            src_left: left as usize,
            src_top: top as usize,
            width: width as usize,
            height: height as usize,
            dest_left: dx as usize,
            dest_top: dy as usize,
        })
    }
}

fn minmax(a: i32, b: i32) -> (i32, i32) {
    if b < a { (b, a) } else { (a, b) }
}

/// Copy a region of `buf` onto itself. The source is snapshotted before the first write, so
/// overlapping source and destination behave like a copy between two buffers. Destination pixels
/// past the right or bottom edge are dropped.
#[tracing::instrument(skip(buf))]
pub fn copy_region(buf: &mut PixelBuffer, spec: &CopySpec) -> ShapeResult<()> {
    let plan = spec.plan(buf)?;
    tracing::debug!(?plan, "copy plan");

    let bpp = buf.channels().count();
    let stride = buf.stride();
    let row_len = plan.width * bpp;

    let mut snapshot = Vec::with_capacity(row_len * plan.height);
    for y in plan.src_top..plan.src_top + plan.height {
        let start = y * stride + plan.src_left * bpp;
        snapshot.extend_from_slice(&buf.as_bytes()[start..start + row_len]);
    }

    let visible_w = plan.width.min(buf.width() as usize - plan.dest_left);
    let visible_h = plan.height.min(buf.height() as usize - plan.dest_top);
    let visible_len = visible_w * bpp;
    let data = buf.data_mut();
    for (row, src) in snapshot.chunks_exact(row_len).take(visible_h).enumerate() {
        let start = (plan.dest_top + row) * stride + plan.dest_left * bpp;
        data[start..start + visible_len].copy_from_slice(&src[..visible_len]);
    }
    Ok(())
}

impl PixelBuffer {
    /// Copy the source rectangle `src_top_left..src_bottom_right` so its top-left lands on
    /// `dest`. See [`copy_region`].
    pub fn copy_rect_to(
        &mut self,
        src_top_left: IPoint,
        src_bottom_right: IPoint,
        dest: IPoint,
    ) -> ShapeResult<()> {
        copy_region(
            self,
            &CopySpec {
                src_top_left,
                src_bottom_right,
                dest,
            },
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/copy.rs"]
mod tests;
