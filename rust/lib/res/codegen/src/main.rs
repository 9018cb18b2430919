use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use resgen_codegen_lib::catalog::load_catalog;
use resgen_codegen_lib::swift::SwiftCodegen;
use resgen_codegen_lib::{Codegen, TracingDiagnostics};

mod config;

use config::CodegenConfig;

#[derive(Parser, Debug)]
#[command(name = "resgen")]
#[command(about = "Generate typed nib accessors from a resource catalog")]
struct Args {
    /// Input catalog (JSON) listing the nibs
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory
    #[arg(short, long)]
    output: PathBuf,

    /// Config file (TOML); defaults apply when missing
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Target language (swift)
    #[arg(short, long, default_value = "swift")]
    target: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = Args::parse();
    let written = run(&args)?;

    info!("Done, wrote {} file(s)", written.len());
    Ok(())
}

/// Generate all files for `args` and return the paths written.
fn run(args: &Args) -> Result<Vec<PathBuf>> {
    let config = match &args.config {
        Some(path) => CodegenConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => CodegenConfig::default(),
    };

    info!("Reading catalog: {}", args.input.display());
    let catalog = load_catalog(&args.input)?;

    let codegen: Box<dyn Codegen> = match args.target.as_str() {
        "swift" => Box::new(SwiftCodegen::new(config.swift)),
        _ => anyhow::bail!("Unsupported target: {}", args.target),
    };

    info!("Generating {} code for {} nibs...", codegen.language(), catalog.nibs.len());
    let mut diagnostics = TracingDiagnostics::new();
    let code = codegen.generate(&catalog, &mut diagnostics)?;
    if diagnostics.count() > 0 {
        info!("{} warning(s) while generating", diagnostics.count());
    }

    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;

    let mut written = Vec::with_capacity(code.files.len());
    for file in &code.files {
        let path = args.output.join(&file.path);
        std::fs::write(&path, &file.content)
            .with_context(|| format!("writing {}", path.display()))?;
        info!("Wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}
