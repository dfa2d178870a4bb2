use anyhow::{bail, Result};
use arcgis2geojson::{convert_to_string, ConvertCfg};
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;

#[derive(Parser)]
#[command(name = "arcgis2geojson")]
#[command(about = "Convert ArcGIS JSON (wkid 4326) to GeoJSON", version)]
struct Cmd {
    /// ArcGIS JSON file; read from stdin when omitted
    input: Option<PathBuf>,

    /// Attribute key used as the feature id (default `OBJECTID`, then `FID`)
    #[arg(long)]
    id: Option<String>,

    /// Write output here instead of stdout
    #[arg(long, short)]
    out: Option<PathBuf>,

    /// Pretty-print the GeoJSON
    #[arg(long)]
    pretty: bool,

    /// Debug-level logs on stderr
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    run(cmd)
}

fn run(cmd: Cmd) -> Result<()> {
    let cfg = config_from(&cmd)?;
    tracing::info!(input = ?cmd.input, id = ?cfg.id_attribute, "convert");
    let data = io::read_input(cmd.input.as_deref())?;
    let geojson = convert_to_string(&data, &cfg, cmd.pretty)?;
    io::write_output(cmd.out.as_deref(), &geojson)?;
    Ok(())
}

/// Id keys are matched upper-cased, the way ArcGIS reports field names.
fn config_from(cmd: &Cmd) -> Result<ConvertCfg> {
    let mut cfg = ConvertCfg::default();
    if let Some(id) = cmd.id.as_deref() {
        let id = id.trim();
        if id.is_empty() {
            bail!("--id must not be empty");
        }
        cfg = cfg.with_id_attribute(id.to_uppercase());
    }
    Ok(cfg)
}
