use clap::{Parser, Subcommand};
use std::path::PathBuf;

use kissbom::application::dto::OutputFormat;

/// Convert CycloneDX SBOMs into the KissBOM format
#[derive(Parser, Debug)]
#[command(name = "kissbom")]
#[command(version)]
#[command(about = "Convert CycloneDX SBOMs into the KissBOM format", long_about = None)]
pub struct Args {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Path to a config file (defaults to ./kissbom.config.yml when present)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Skip the check for a newer kissbom release
    #[arg(long, global = true)]
    pub offline: bool,

    /// Only print the output file name and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a CycloneDX JSON file to a KissBOM file
    Convert(ConvertArgs),
}

#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    /// CycloneDX SBOM in JSON encoding
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Output format: json, yaml, csv, minimal or compatible [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Base file name used when the SBOM has no metadata component [default: kissbom]
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Directory the KissBOM file is written to [default: .]
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}
