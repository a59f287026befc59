use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::cli::args::Cli;
use crate::codec::png::{decode_png, encode_png, read_png_header};
use crate::foundation::error::{ShapeError, ShapeResult};
use crate::ops::operation::Operation;
use crate::raster::copy::CopySpec;
use crate::raster::hexagon::HexagonSpec;
use crate::raster::rect::RectangleSpec;

/// What a single invocation does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Report header facts; no output file is written.
    Info { json: bool },
    /// Decode, apply one edit, encode.
    Draw(Operation),
}

/// Fully validated invocation, built from [`Cli`] before any file is opened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
    pub action: Action,
}

impl TryFrom<Cli> for Job {
    type Error = ShapeError;

    fn try_from(cli: Cli) -> ShapeResult<Self> {
        let input = cli
            .input
            .clone()
            .ok_or_else(|| ShapeError::missing_input("an input PNG file must be provided"))?;
        if same_file(&input, &cli.output) {
            return Err(ShapeError::same_path(format!(
                "'{}' is both input and output",
                input.display()
            )));
        }

        let selected = [cli.info, cli.rect, cli.hexagon, cli.copy]
            .iter()
            .filter(|&&on| on)
            .count();
        if selected != 1 {
            return Err(ShapeError::actions(format!(
                "exactly one of --info, --rect, --hexagon, --copy is required, got {selected}"
            )));
        }

        let action = if cli.info {
            Action::Info { json: cli.json }
        } else {
            Action::Draw(operation_from(&cli)?)
        };

        Ok(Self {
            input,
            output: cli.output,
            action,
        })
    }
}

fn operation_from(cli: &Cli) -> ShapeResult<Operation> {
    let fill = cli.fill.then_some(cli.fill_color);

    if cli.rect {
        let (Some(top_left), Some(bottom_right)) = (cli.left_up, cli.right_down) else {
            return Err(ShapeError::coordinate(
                "--left_up and --right_down must be provided for --rect",
            ));
        };
        return Ok(Operation::Rectangle(RectangleSpec {
            top_left,
            bottom_right,
            thickness: cli.thickness,
            border_color: cli.color,
            fill,
        }));
    }

    if cli.hexagon {
        let (Some(center), Some(radius)) = (cli.center, cli.radius) else {
            return Err(ShapeError::coordinate(
                "--center and --radius must be provided for --hexagon",
            ));
        };
        return Ok(Operation::Hexagon(HexagonSpec {
            center,
            radius,
            thickness: cli.thickness,
            border_color: cli.color,
            fill,
        }));
    }

    let (Some(src_top_left), Some(src_bottom_right), Some(dest)) =
        (cli.left_up, cli.right_down, cli.dest_left_up)
    else {
        return Err(ShapeError::coordinate(
            "--left_up, --right_down and --dest_left_up must be provided for --copy",
        ));
    };
    Ok(Operation::Copy(CopySpec {
        src_top_left,
        src_bottom_right,
        dest,
    }))
}

/// Lexically equal paths, or two existing paths resolving to the same file.
fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Execute `job`. Reports go to `out`; the output image is only written after the edit
/// succeeded.
#[tracing::instrument(skip(out))]
pub fn run(job: &Job, out: &mut impl Write) -> ShapeResult<()> {
    match job.action {
        Action::Info { json } => {
            let info = read_png_header(&job.input)?;
            if json {
                let text = serde_json::to_string_pretty(&info).context("serialize image info")?;
                writeln!(out, "{text}").context("write info report")?;
            } else {
                write!(out, "{}", info.report()).context("write info report")?;
            }
        }
        Action::Draw(op) => {
            let mut decoded = decode_png(&job.input)?;
            op.apply(&mut decoded.buffer)?;
            encode_png(&job.output, &decoded.buffer)?;
            tracing::info!(output = %job.output.display(), op = op.name(), "wrote image");
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/cli/job.rs"]
mod tests;
