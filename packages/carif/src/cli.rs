//! Command-line interface for the CARIF parser.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::config::DEFAULT_MAX_INPUT_SIZE;
use crate::error::Result;
use crate::export::{render, save, OutputFormat};
use crate::loader::load_carif_file;
use crate::types::ActionType;

/// CARIF parser - Convert CARIF point-of-interest XML into structured POI data.
#[derive(Parser)]
#[command(name = "carif")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a CARIF file and print or save its POIs.
    Parse {
        /// CARIF XML file
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
        format: OutputFormat,

        /// Write output to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Maximum input file size in bytes
        #[arg(long, default_value_t = DEFAULT_MAX_INPUT_SIZE)]
        max_size: u64,
    },

    /// Show how an action mime type or numeric action code is classified.
    Classify {
        /// Mime type (e.g., audio/mpeg) or action code (1-7)
        mime_type: String,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            file,
            format,
            output,
            max_size,
        } => parse_command(&file, format, output.as_deref(), max_size),
        Commands::Classify { mime_type } => {
            println!("{}", classify_action(&mime_type));
            Ok(())
        }
    }
}

/// Execute the parse command.
fn parse_command(
    file: &Path,
    format: OutputFormat,
    output: Option<&Path>,
    max_size: u64,
) -> Result<()> {
    tracing::info!(file = %file.display(), ?format, "Parsing CARIF file");
    let doc = load_carif_file(file, max_size)?;

    match output {
        Some(path) => {
            save(&doc, format, path)?;
            println!(
                "{} {} POIs to {}",
                style("Saved").green().bold(),
                style(doc.len()).cyan(),
                path.display()
            );
        }
        None => print!("{}", render(&doc, format)?),
    }

    Ok(())
}

/// Describe the classification of a mime type or numeric action code.
fn classify_action(mime_type: &str) -> String {
    let action_type = match mime_type.parse::<u8>() {
        Ok(code) => ActionType::from_code(code),
        Err(_) => ActionType::from_mime_type(mime_type),
    };

    match action_type {
        Some(action_type) => format!("{} ({})", action_type.as_str(), action_type.code()),
        None => "UNCLASSIFIED".to_string(),
    }
}
