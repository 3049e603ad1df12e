//! Convert an image to a multi-resolution Windows ICO plus a companion PNG.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use installer_assets::cli::parse_or_usage;
use installer_assets::commands::icon_convert;

#[derive(Parser)]
#[command(name = "convert-icon")]
#[command(about = "Convert an image to a multi-resolution ICO and a PNG")]
#[command(version)]
struct Cli {
    /// Source image (format detected from contents)
    src_png: PathBuf,
    /// Output ICO file; the PNG is written next to it
    dst_ico: PathBuf,
    /// Extra arguments are accepted and ignored
    #[arg(hide = true, num_args = 0.., trailing_var_arg = true)]
    _extra: Vec<OsString>,
}

fn main() {
    let cli: Cli = parse_or_usage("<src_png> <dst_ico>");

    match icon_convert::run(&cli.src_png, &cli.dst_ico) {
        Ok(outputs) => {
            println!("Saved PNG to {}", outputs.png.display());
            println!("Saved ICO to {}", outputs.ico.display());
        }
        Err(e) => {
            println!("Error: {}", e);
            process::exit(1);
        }
    }
}
