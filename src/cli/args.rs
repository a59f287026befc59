use std::error::Error as _;
use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind as ClapErrorKind;

use crate::cli::tokens::{
    parse_center, parse_color, parse_point, parse_radius, parse_thickness,
};
use crate::foundation::core::{Color, IPoint};
use crate::foundation::error::{ErrorKind, ShapeError};

/// Command line of the `pngshape` binary.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "pngshape",
    version,
    about = "Draw rectangles and hexagons on PNG images, or copy a region within one.",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Print PNG file info.
    #[arg(short = 'i', long)]
    pub info: bool,

    /// With --info, print the report as JSON.
    #[arg(long)]
    pub json: bool,

    /// Draw a rectangle.
    #[arg(long)]
    pub rect: bool,

    /// Draw a hexagon.
    #[arg(long)]
    pub hexagon: bool,

    /// Copy a region.
    #[arg(long)]
    pub copy: bool,

    /// Input PNG file.
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file name.
    #[arg(short = 'o', long, value_name = "FILE", default_value = "out.png")]
    pub output: PathBuf,

    /// Top-left corner of the rectangle or copy source.
    #[arg(
        long = "left_up",
        value_name = "X.Y",
        value_parser = parse_point,
        allow_hyphen_values = true
    )]
    pub left_up: Option<IPoint>,

    /// Bottom-right corner of the rectangle or copy source.
    #[arg(
        long = "right_down",
        value_name = "X.Y",
        value_parser = parse_point,
        allow_hyphen_values = true
    )]
    pub right_down: Option<IPoint>,

    /// Border color.
    #[arg(
        long,
        value_name = "R.G.B",
        value_parser = parse_color,
        default_value = "0.0.0",
        allow_hyphen_values = true
    )]
    pub color: Color,

    /// Fill the shape.
    #[arg(long)]
    pub fill: bool,

    /// Fill color.
    #[arg(
        long = "fill_color",
        value_name = "R.G.B",
        value_parser = parse_color,
        default_value = "255.255.255",
        allow_hyphen_values = true
    )]
    pub fill_color: Color,

    /// Center of the hexagon.
    #[arg(long, value_name = "X.Y", value_parser = parse_center, allow_hyphen_values = true)]
    pub center: Option<IPoint>,

    /// Radius of the hexagon.
    #[arg(long, value_name = "N", value_parser = parse_radius, allow_hyphen_values = true)]
    pub radius: Option<i32>,

    /// Destination of the copied region's top-left corner.
    #[arg(
        long = "dest_left_up",
        value_name = "X.Y",
        value_parser = parse_point,
        allow_hyphen_values = true
    )]
    pub dest_left_up: Option<IPoint>,

    /// Line thickness.
    #[arg(
        long,
        value_name = "N",
        value_parser = parse_thickness,
        default_value = "1",
        allow_hyphen_values = true
    )]
    pub thickness: u32,

    /// Log progress to stderr.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// How the binary should react to a clap parse failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseOutcome {
    /// `--help`, `--version`, or no arguments: print and exit successfully.
    Informational,
    /// A real failure of the given kind.
    Failed(ErrorKind),
}

/// Classify a clap error. Token parse failures keep the kind of the option that rejected them;
/// everything else clap can complain about counts as an unknown option.
pub fn classify_clap_error(err: &clap::Error) -> ParseOutcome {
    match err.kind() {
        ClapErrorKind::DisplayHelp
        | ClapErrorKind::DisplayVersion
        | ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => ParseOutcome::Informational,
        _ => {
            let kind = err
                .source()
                .and_then(|src| src.downcast_ref::<ShapeError>())
                .map_or(ErrorKind::UnknownOption, ShapeError::kind);
            ParseOutcome::Failed(kind)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cli/args.rs"]
mod tests;
