use anyhow::{Context, Result};
use clap::Parser;
use despongify_core::{TransformOptions, Transformer};
use std::fs;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "despongify")]
#[command(about = "Batch-rewrite a Java source tree away from its SpongeAPI dependency")]
#[command(version)]
struct Cli {
    /// Root directory to scan; every *.java file beneath it is rewritten
    /// in place
    #[arg(default_value = "./src")]
    root: PathBuf,

    /// Enable verbose logging (sets log level to debug)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for the per-file banners
    let log_level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    if !cli.root.is_dir() {
        anyhow::bail!("Source root is not a directory: {}", cli.root.display());
    }

    // The rewrite options are compiled-in constants; only the root directory
    // and verbosity come from the command line.
    let transformer =
        Transformer::new(TransformOptions::default()).context("Failed to build transformer")?;

    for entry in WalkDir::new(&cli.root) {
        let entry = entry.with_context(|| format!("Failed to walk {}", cli.root.display()))?;
        let path = entry.path();
        if !entry.file_type().is_file()
            || !path.extension().map_or(false, |ext| ext == "java")
        {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        println!("========== {name} ==========");

        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let rewritten = transformer.transform(&raw);
        fs::write(path, rewritten)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    Ok(())
}
