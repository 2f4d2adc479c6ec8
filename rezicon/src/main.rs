use rezicon::{bmp_to_icon, preview_bmp};
use std::path::PathBuf;
use tracing::{info, Level};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

#[cfg(not(debug_assertions))]
const DEFAULT_DEBUG_LEVEL: u8 = 1;
#[cfg(debug_assertions)]
const DEFAULT_DEBUG_LEVEL: u8 = 99;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Turn debugging information on
    #[arg(short, long, default_value_t = DEFAULT_DEBUG_LEVEL, action = clap::ArgAction::Count)]
    verbosity: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// converts an indexed bitmap to an icon resource
    #[command(name = "icon")]
    BmpToIcon {
        /// The source bitmap
        bmp_file: PathBuf,

        /// The output file name
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// emit resource-definition source text instead of raw bytes
        #[arg(long)]
        hex: bool,

        /// also emit a 16-color icon after the mono icon and mask
        #[arg(long)]
        color: bool,
    },

    /// prints an ascii preview of an indexed bitmap
    #[command(name = "preview")]
    Preview {
        /// The source bitmap
        bmp_file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = match cli.verbosity {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_file(true)
        .with_line_number(true)
        .init();

    match cli.command {
        Commands::BmpToIcon {
            bmp_file,
            output,
            hex,
            color,
        } => {
            let output = match output {
                Some(o) => o,
                None => {
                    let mut output = PathBuf::new();
                    let Some(dir) = bmp_file.parent() else {
                        bail!("Invalid bmp file");
                    };
                    let Some(Some(filename)) = bmp_file.file_stem().map(|os| os.to_str()) else {
                        bail!("Invalid bmp file");
                    };
                    let suffix = if hex { "r" } else { "bin" };
                    output.push(dir);
                    output.push(format!("{}.{}", filename, suffix));
                    info!("output name: {}", output.display());
                    output
                }
            };
            bmp_to_icon(&bmp_file, &output, hex, color)?;
        }
        Commands::Preview { bmp_file } => {
            preview_bmp(&bmp_file)?;
        }
    }
    Ok(())
}
