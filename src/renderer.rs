use crate::color::write_color;
use crate::math::Color;
use crate::parsing::{parse_tonemapper, TOMLConfig};
use crate::tonemap::Tonemapper;

use std::io::{self, Write};

use tracing::{debug, info};

/// Writes every configured pixel to the sink `open` returns for `config.output_file`.
///
/// A dry run never calls `open`, so no file is created and nothing is written.
pub fn render<W, F>(config: &TOMLConfig, dry_run: bool, open: F) -> io::Result<usize>
where
    W: Write,
    F: FnOnce(Option<&str>) -> io::Result<W>,
{
    if dry_run {
        info!("dry run, {} pixels not written", config.pixels.len());
        return Ok(0);
    }
    let tonemapper = parse_tonemapper(config.tonemap);
    let mut out = open(config.output_file.as_deref())?;
    let written = render_pixels(&config.pixels, tonemapper.as_ref(), &mut out)?;
    info!(
        "wrote {} pixels to {}",
        written,
        config.output_file.as_deref().unwrap_or("stdout")
    );
    Ok(written)
}

/// Tonemaps each pixel and writes its record, in the order given. Returns how many were written.
pub fn render_pixels<W: Write>(
    pixels: &[Color],
    tonemapper: &dyn Tonemapper,
    out: &mut W,
) -> io::Result<usize> {
    for pixel in pixels {
        let mapped = tonemapper.map(*pixel);
        debug!("{} -> {}", pixel, mapped);
        write_color(out, mapped)?;
    }
    out.flush()?;
    Ok(pixels.len())
}
