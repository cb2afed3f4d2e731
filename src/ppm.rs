//! Plain text PPM (`P3`) output.
//!
//! ```text
//! P3
//! <width> <height>
//! 255
//! <r> <g> <b>      one line per pixel, row-major, top row first
//! ```

use crate::math::Color;
use crate::tonemap::{Tonemapper, MAX_CHANNEL_VALUE};
use crate::vec2d::Vec2D;

use std::fmt::Write as FmtWrite;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{error, info, warn};

pub const MAGIC: &str = "P3";
pub const HEADER_LINES: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

impl From<&str> for OutputTarget {
    fn from(s: &str) -> Self {
        if s == "-" {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(PathBuf::from(s))
        }
    }
}

impl std::fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputTarget::File(path) => write!(f, "{}", path.display()),
            OutputTarget::Stdout => write!(f, "<stdout>"),
        }
    }
}

pub fn encode_ppm(film: &Vec2D<Color>, tonemapper: &dyn Tonemapper) -> String {
    // "255 255 255\n" is the longest in-range pixel line
    let mut out = String::with_capacity(32 + film.total_pixels() * 12);
    // writing into a String cannot fail
    let _ = writeln!(out, "{}", MAGIC);
    let _ = writeln!(out, "{} {}", film.width, film.height);
    let _ = writeln!(out, "{}", MAX_CHANNEL_VALUE);
    for row in film.rows() {
        for color in row {
            let [r, g, b] = tonemapper.map(*color);
            let _ = writeln!(out, "{} {} {}", r, g, b);
        }
    }
    out
}

/// Serializes the whole film before touching the writer, so a failure never leaves a
/// half-formatted image behind a successful return.
pub fn write_ppm<W: Write>(
    film: &Vec2D<Color>,
    tonemapper: &dyn Tonemapper,
    mut writer: W,
) -> anyhow::Result<()> {
    let encoded = encode_ppm(film, tonemapper);
    writer
        .write_all(encoded.as_bytes())
        .context("failed to write image data")?;
    writer.flush().context("failed to flush image data")?;
    Ok(())
}

pub fn output_film(
    film: &Vec2D<Color>,
    tonemapper: &dyn Tonemapper,
    target: &OutputTarget,
) -> anyhow::Result<()> {
    info!(
        "writing {}x{} image to {}",
        film.width, film.height, target
    );
    match target {
        OutputTarget::Stdout => {
            let stdout = io::stdout();
            write_ppm(film, tonemapper, stdout.lock())
        }
        OutputTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            write_or_remove(film, tonemapper, io::BufWriter::new(file), path)
        }
    }
}

/// Writes to `writer`, which is open on `path`. If the write fails and `path` is a regular
/// file, the truncated image is deleted. Devices and pipes are left alone.
pub fn write_or_remove<W: Write>(
    film: &Vec2D<Color>,
    tonemapper: &dyn Tonemapper,
    writer: W,
    path: &Path,
) -> anyhow::Result<()> {
    let result = write_ppm(film, tonemapper, writer)
        .with_context(|| format!("failed to write {}", path.display()));
    if let Err(inner) = &result {
        error!("{:?}", inner);
        let is_regular = fs::metadata(path).map(|m| m.is_file()).unwrap_or(false);
        if is_regular {
            match fs::remove_file(path) {
                Ok(()) => info!("removed partial image {}", path.display()),
                Err(e) => warn!("could not remove partial image {}: {}", path.display(), e),
            }
        }
    }
    result
}
