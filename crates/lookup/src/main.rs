use std::path::PathBuf;

use clap::Parser;
use log::info;
use simple_logger::SimpleLogger;

use sources::config::get_source_config;
use sources::loader::load_dir;
use sources::{CompressedSourceFile, Result};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source file names to look up.
    #[arg(required = true)]
    keys: Vec<String>,
    /// Directory to load source files from, instead of `SRCMAP_SOURCE_DIR`.
    #[arg(long)]
    dir: Option<PathBuf>,
    /// File extension to load, instead of `SRCMAP_EXTENSION`.
    #[arg(long)]
    ext: Option<String>,
}

fn main() -> Result<()> {
    SimpleLogger::new().init()?;
    let cli = Cli::parse();

    let mut config = get_source_config()?;
    if let Some(dir) = cli.dir {
        config.source_dir = dir;
    }
    if let Some(ext) = cli.ext {
        config.extension = ext;
    }
    info!("loading sources from {:?}", config.source_dir);
    let map = load_dir(&config)?;

    for key in &cli.keys {
        println!("{}", describe(key, map.get_or_empty(key)));
    }
    Ok(())
}

/// One output line per key. The empty record means the key wasn't loaded.
fn describe(key: &str, record: &CompressedSourceFile) -> String {
    if record.is_empty() {
        format!("{}\tnot found", key)
    } else {
        format!("{}\t{}", key, record)
    }
}
