extern crate rust_raytracer_core as root;

use root::parsing::get_settings;
use root::renderer::render;

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::Context;
use structopt::StructOpt;
use tracing::Level;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long, default_value = "data/config.toml")]
    pub config_file: String,
    // overrides output_file from the config
    #[structopt(long)]
    pub output_file: Option<String>,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long, default_value = "warn")]
    pub log_level: String,
}

fn parse_log_level(level: &str, default: Level) -> Level {
    match level.to_lowercase().as_str() {
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "trace" => Level::TRACE,
        "error" => Level::ERROR,
        "debug" => Level::DEBUG,
        _ => default,
    }
}

fn open_output(path: Option<&str>) -> io::Result<Box<dyn Write>> {
    let out: Box<dyn Write> = match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    Ok(out)
}

fn main() -> anyhow::Result<()> {
    let opts = Opt::from_args();
    tracing_subscriber::fmt()
        .with_max_level(parse_log_level(&opts.log_level, Level::WARN))
        .with_writer(io::stderr)
        .init();

    let mut config = get_settings(&opts.config_file)?;
    config.override_output_file(opts.output_file);

    render(&config, opts.dry_run, open_output).with_context(|| {
        format!(
            "couldn't write pixels to {}",
            config.output_file.as_deref().unwrap_or("stdout")
        )
    })?;
    Ok(())
}
