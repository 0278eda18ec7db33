pub mod config;
pub mod tonemap;

pub use config::TOMLConfig;
pub use tonemap::{parse_tonemapper, TonemapSettings};

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use tracing::info;

pub fn parse_config(input: &str) -> anyhow::Result<TOMLConfig> {
    Ok(toml::from_str(input)?)
}

pub fn get_settings<P: AsRef<Path>>(filepath: P) -> anyhow::Result<TOMLConfig> {
    let filepath = filepath.as_ref();
    let mut input = String::new();
    File::open(filepath)
        .and_then(|mut f| f.read_to_string(&mut input))
        .with_context(|| format!("couldn't read {}", filepath.display()))?;
    let settings = parse_config(&input)
        .with_context(|| format!("couldn't parse {}", filepath.display()))?;
    info!(
        "read {} pixels from {}",
        settings.pixels.len(),
        filepath.display()
    );
    Ok(settings)
}
