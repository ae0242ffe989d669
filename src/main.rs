//! xyz2sgf: convert GIB, NGF and UGF Go records to SGF.
//!
//! ## Usage
//!
//! - `xyz2sgf game.gib other.ugi` - Write `game.gib.sgf` and `other.ugi.sgf`
//! - `xyz2sgf --stdout game.ngf` - Print the SGF instead of writing a file

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;

use xyz2sgf::convert::{convert_file, load};
use xyz2sgf::sgf::to_sgf;

/// Convert legacy Go game records (.gib, .ngf, .ugf, .ugi) to SGF
#[derive(Parser)]
#[command(name = "xyz2sgf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Records to convert; each is written to `<file>.sgf`
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Print the converted records to stdout instead of writing files
    #[arg(long)]
    stdout: bool,

    /// Report every file written
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut failed = 0;
    for file in &cli.files {
        // A bad file never stops the rest of the batch.
        let result = if cli.stdout {
            load(file).map(|tree| print!("{}", to_sgf(&tree)))
        } else {
            convert_file(file).map(|output| {
                if cli.verbose {
                    println!("Wrote {}", output.display());
                }
            })
        };
        if let Err(err) = result {
            eprintln!("Conversion failed for {}: {err}", file.display());
            failed += 1;
        }
    }

    if failed > 0 {
        bail!("{failed} of {} conversions failed", cli.files.len());
    }
    Ok(())
}
