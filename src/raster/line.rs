//! Stroke primitives shared by the shape renderers.

use crate::foundation::core::{Color, IPoint};
use crate::raster::buffer::PixelBuffer;

/// Integer Bresenham walk from `from` to `to`, both endpoints included, any octant.
///
/// Each pixel is computed from its index along the major axis, so the walk can be restricted to
/// a window with [`Bresenham::clip_major`] without stepping through the skipped part. The pixels
/// are those of the classic incremental error walk.
#[derive(Clone, Debug)]
pub struct Bresenham {
    from: IPoint,
    major: i64,
    minor: i64,
    x_major: bool,
    sx: i64,
    sy: i64,
    next: i64,
    last: i64,
}

impl Bresenham {
    pub fn new(from: IPoint, to: IPoint) -> Self {
        let dx = (i64::from(to.x) - i64::from(from.x)).abs();
        let dy = (i64::from(to.y) - i64::from(from.y)).abs();
        let x_major = dx >= dy;
        let (major, minor) = if x_major { (dx, dy) } else { (dy, dx) };
        Self {
            from,
            major,
            minor,
            x_major,
            sx: if from.x < to.x { 1 } else { -1 },
            sy: if from.y < to.y { 1 } else { -1 },
            next: 0,
            last: major,
        }
    }

    /// `true` when every step advances x; spans are then vertical.
    pub fn is_x_major(&self) -> bool {
        self.x_major
    }

    /// Keep only the pixels whose major-axis coordinate lies in `lo..=hi`.
    pub fn clip_major(mut self, lo: i64, hi: i64) -> Self {
        let (origin, step) = if self.x_major {
            (i64::from(self.from.x), self.sx)
        } else {
            (i64::from(self.from.y), self.sy)
        };
        let (first, last) = if step > 0 {
            (lo - origin, hi - origin)
        } else {
            (origin - hi, origin - lo)
        };
        self.next = self.next.max(first);
        self.last = self.last.min(last);
        self
    }

    fn point_at(&self, i: i64) -> IPoint {
        // Minor steps taken after `i` major steps, in i128 since `2 * minor * i` exceeds i64
        // for segments spanning the full i32 range.
        let m = if self.major == 0 {
            0
        } else {
            let num = 2 * i128::from(self.minor) * i128::from(i) + i128::from(self.major);
            (num / (2 * i128::from(self.major))) as i64
        };
        let (ox, oy) = if self.x_major { (i, m) } else { (m, i) };
        IPoint::new(
            (i64::from(self.from.x) + self.sx * ox) as i32,
            (i64::from(self.from.y) + self.sy * oy) as i32,
        )
    }
}

impl Iterator for Bresenham {
    type Item = IPoint;

    fn next(&mut self) -> Option<IPoint> {
        if self.next > self.last {
            return None;
        }
        let p = self.point_at(self.next);
        self.next += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = usize::try_from(self.last - self.next + 1).unwrap_or(0);
        (n, Some(n))
    }
}

/// Stroke `from..=to` about `thickness` pixels wide.
///
/// The centre line is rasterized with [`Bresenham`] and each centre pixel is widened along the
/// minor axis (a vertical span for x-major segments, a horizontal span for y-major ones). The
/// half-span is scaled by `length / major_delta` so the width measured perpendicular to the
/// segment stays close to `thickness` in every direction. A horizontal segment therefore becomes
/// a band of `2 * (thickness / 2) + 1` rows.
///
/// Only centre pixels whose span can reach the canvas are visited, and every span is clamped to
/// it, so the cost is bounded by the canvas size.
pub fn draw_thick_line(
    buf: &mut PixelBuffer,
    from: IPoint,
    to: IPoint,
    thickness: u32,
    color: Color,
) {
    let dx = (f64::from(to.x) - f64::from(from.x)).abs();
    let dy = (f64::from(to.y) - f64::from(from.y)).abs();
    let half = perpendicular_half_span(thickness / 2, dx, dy);
    let max_x = i64::from(buf.width()) - 1;
    let max_y = i64::from(buf.height()) - 1;

    let walk = Bresenham::new(from, to);
    if walk.is_x_major() {
        for p in walk.clip_major(0, max_x) {
            let y = i64::from(p.y);
            for yy in (y - half).max(0)..=(y + half).min(max_y) {
                buf.set_pixel(p.x, yy as i32, color);
            }
        }
    } else {
        for p in walk.clip_major(0, max_y) {
            let x = i64::from(p.x);
            for xx in (x - half).max(0)..=(x + half).min(max_x) {
                buf.set_pixel(xx as i32, p.y, color);
            }
        }
    }
}

fn perpendicular_half_span(half: u32, dx: f64, dy: f64) -> i64 {
    let major = dx.max(dy);
    if half == 0 || major == 0.0 {
        return i64::from(half);
    }
    let len = dx.hypot(dy);
    (f64::from(half) * len / major).round() as i64
}

/// Filled disk of diameter `thickness` centred on `center`; used to cap stroke joints. Only the
/// part of the bounding square that lies on the canvas is scanned.
pub fn stamp_disk(buf: &mut PixelBuffer, center: IPoint, thickness: u32, color: Color) {
    let r = i64::from(thickness / 2);
    let r2 = r * r;
    let (cx, cy) = (i64::from(center.x), i64::from(center.y));
    let max_x = i64::from(buf.width()) - 1;
    let max_y = i64::from(buf.height()) - 1;
    for y in (cy - r).max(0)..=(cy + r).min(max_y) {
        for x in (cx - r).max(0)..=(cx + r).min(max_x) {
            let (ox, oy) = (x - cx, y - cy);
            if ox * ox + oy * oy <= r2 {
                buf.set_pixel(x as i32, y as i32, color);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/line.rs"]
mod tests;
