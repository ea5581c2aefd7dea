use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, warn};

use crate::config::SymbolBuilder;
use crate::error::Result;
use crate::output;
use crate::render::{self, RenderSpec};
use crate::types::{ECLevel, SymbolVersion};

// CLI
//------------------------------------------------------------------------------

#[derive(Debug, Parser)]
#[command(name = "qrgen", about = "Generate a QR code from the commandline", version)]
pub struct Cli {
    /// Target error correction percentage
    #[arg(short = 'e', long, default_value_t = 25)]
    pub error_correction: i64,

    /// Size of the border in boxes (min: 4)
    #[arg(short = 'b', long, default_value_t = 5)]
    pub border_size: u32,

    /// Pixels per box
    #[arg(short = 'p', long, default_value_t = 10)]
    pub box_size: u32,

    /// Fixed symbol version 1-40; omit to fit the smallest version
    #[arg(short = 'v', long)]
    pub qr_version: Option<i16>,

    /// Foreground/fill color, as HTML name or hex
    #[arg(long, default_value = "black")]
    pub fill_color: String,

    /// Background color, as HTML name or hex
    #[arg(long, default_value = "white")]
    pub back_color: String,

    /// Renderer backend (svg, svgpath, svgfill, png); omit for the default
    /// colorable raster
    #[arg(short = 'f', long = "factory")]
    pub factory: Option<String>,

    /// Enable debug logging
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Output filename
    #[arg(short = 'o', long)]
    pub output_file: PathBuf,

    /// The data/string to QRify
    #[arg(required = true)]
    pub data: Vec<String>,
}

/// Drives resolve, validate, build, render and write in sequence. Advisories
/// out of any stage are logged and never abort the run.
pub fn run(cli: Cli) -> Result<()> {
    let (ec_level, advisory) = ECLevel::from_percent(cli.error_correction)?;
    if let Some(advisory) = advisory {
        warn!("{advisory}");
    }
    let version = SymbolVersion::validate(cli.qr_version)?;

    let data = cli.data.join(" ");
    let mut builder = SymbolBuilder::new(&data);
    builder.ec_level(ec_level).box_size(cli.box_size).border(cli.border_size);
    if let Some(version) = version {
        builder.version(version);
    }
    debug!("encoder configuration: {}", builder.metadata());

    let symbol = builder.build()?;
    debug!("encoded symbol version {}, {} modules wide", symbol.version(), symbol.width());

    let spec = RenderSpec {
        backend: cli.factory,
        fill_color: Some(cli.fill_color),
        back_color: Some(cli.back_color),
    };
    let (image, advisories) = render::select_and_render(&symbol, &spec)?;
    for advisory in &advisories {
        warn!("{advisory}");
    }

    output::write(&image, &cli.output_file)
}
