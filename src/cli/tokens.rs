//! Parsers for the `X.Y`, `R.G.B` and integer tokens accepted on the command line.
//!
//! Each parser reports the error kind of the option it serves so the kind survives clap and
//! reaches the exit code.

use crate::foundation::core::{Color, IPoint};
use crate::foundation::error::{ShapeError, ShapeResult};

/// `X.Y` with non-negative integer components.
pub fn parse_point(s: &str) -> ShapeResult<IPoint> {
    let bad = || ShapeError::coordinate(format!("'{s}' is not a valid X.Y coordinate pair"));
    let (x, y) = s.split_once('.').ok_or_else(bad)?;
    let x: i32 = x.parse().map_err(|_| bad())?;
    let y: i32 = y.parse().map_err(|_| bad())?;
    if x < 0 || y < 0 {
        return Err(bad());
    }
    Ok(IPoint::new(x, y))
}

/// Hexagon center: an `X.Y` pair whose failures count as hexagon argument errors.
pub fn parse_center(s: &str) -> ShapeResult<IPoint> {
    parse_point(s).map_err(|_| ShapeError::hexagon(format!("invalid --center value '{s}'")))
}

/// `R.G.B` with every component in `0..=255`.
pub fn parse_color(s: &str) -> ShapeResult<Color> {
    let parts: Vec<&str> = s.split('.').collect();
    let [r, g, b] = parts.as_slice() else {
        return Err(ShapeError::color(format!("'{s}' is not a valid R.G.B color")));
    };
    let component = |v: &str| {
        v.parse::<i64>()
            .map_err(|_| ShapeError::color(format!("'{s}' is not a valid R.G.B color")))
    };
    Color::from_components(component(*r)?, component(*g)?, component(*b)?)
}

/// Line thickness in pixels, at least 1.
pub fn parse_thickness(s: &str) -> ShapeResult<u32> {
    positive(s).ok_or_else(|| ShapeError::thickness(format!("invalid --thickness value '{s}'")))
}

/// Hexagon radius in pixels, at least 1.
pub fn parse_radius(s: &str) -> ShapeResult<i32> {
    positive(s)
        .map(|r| r as i32)
        .ok_or_else(|| ShapeError::hexagon(format!("invalid --radius value '{s}'")))
}

fn positive(s: &str) -> Option<u32> {
    s.parse::<i32>().ok().filter(|&v| v > 0).map(|v| v as u32)
}

#[cfg(test)]
#[path = "../../tests/unit/cli/tokens.rs"]
mod tests;
