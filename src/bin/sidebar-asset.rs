//! Crop and resize an image into an installer wizard sidebar bitmap.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use installer_assets::cli::parse_or_usage;
use installer_assets::commands::sidebar::{self, SIDEBAR_GEOMETRY, SIDEBAR_GEOMETRY_HIDPI};

#[derive(Parser)]
#[command(name = "sidebar-asset")]
#[command(about = "Build a 164x314 installer sidebar BMP from an image")]
#[command(version)]
struct Cli {
    /// Source image (format detected from contents)
    src: PathBuf,
    /// Output BMP file
    dst: PathBuf,
    /// Render at double density (328x628)
    #[arg(long)]
    hidpi: bool,
    /// Extra arguments are accepted and ignored
    #[arg(hide = true, num_args = 0.., trailing_var_arg = true)]
    _extra: Vec<OsString>,
}

fn main() {
    let cli: Cli = parse_or_usage("<src> <dst>");

    let geometry = if cli.hidpi {
        SIDEBAR_GEOMETRY_HIDPI
    } else {
        SIDEBAR_GEOMETRY
    };

    match sidebar::run(&cli.src, &cli.dst, geometry) {
        Ok(()) => {
            println!("✅ Created sidebar: {}", cli.dst.display());
        }
        Err(e) => {
            println!("❌ Error sidebar: {}", e);
            process::exit(1);
        }
    }
}
