use anyhow::Result;
use clap::{Parser, Subcommand};
use flagrename::commands::{rename, status};
use flagrename::validation::clap_ext_validator;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flagrename")]
#[command(about = "Rename flag images from country codes to country names", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rename <code>.png files to <name>.png using the mapping
    Rename {
        /// Directory containing the flag images
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Path to the JSON mapping file (default: <DIR>/countries.json)
        #[arg(short, long)]
        mapping: Option<PathBuf>,

        /// Image filename extension (alphanumeric, no dot; max 16 characters)
        #[arg(short, long, default_value = "png", value_parser = clap_ext_validator)]
        ext: String,

        /// Report what would be renamed without touching any files
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the state of every mapping entry without renaming
    Status {
        /// Directory containing the flag images
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// Path to the JSON mapping file (default: <DIR>/countries.json)
        #[arg(short, long)]
        mapping: Option<PathBuf>,

        /// Image filename extension (alphanumeric, no dot; max 16 characters)
        #[arg(short, long, default_value = "png", value_parser = clap_ext_validator)]
        ext: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rename {
            dir,
            mapping,
            ext,
            dry_run,
        } => rename::execute(dir, mapping, ext, dry_run),
        Commands::Status { dir, mapping, ext } => status::execute(dir, mapping, ext),
    }
}
