//! pdfoutline CLI - document outline inference tool

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use pdfoutline::{batch, EngineConfig, JsonFormat};

#[derive(Parser)]
#[command(name = "pdfoutline")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Infer document outlines (title, H1-H3) from PDF typography", long_about = None)]
struct Cli {
    /// Input PDF file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output file (stdout if not specified)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Infer the outline of a single PDF
    Outline {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Word-count ceiling for heading candidates
        #[arg(long, default_value = "40")]
        max_heading_words: usize,
    },

    /// Process every PDF in a directory
    Batch {
        /// Directory containing input PDFs
        #[arg(value_name = "IN_DIR")]
        input_dir: PathBuf,

        /// Directory to write JSON outlines to
        #[arg(value_name = "OUT_DIR")]
        output_dir: PathBuf,

        /// Word-count ceiling for heading candidates
        #[arg(long, default_value = "40")]
        max_heading_words: usize,
    },

    /// Emit per-line section chunks attributed to inferred headings
    Sections {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Outline {
            input,
            output,
            compact,
            max_heading_words,
        }) => cmd_outline(&input, output.as_deref(), compact, max_heading_words),
        Some(Commands::Batch {
            input_dir,
            output_dir,
            max_heading_words,
        }) => cmd_batch(&input_dir, &output_dir, max_heading_words),
        Some(Commands::Sections { input, output }) => cmd_sections(&input, output.as_deref()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: outline if input is provided
            if let Some(input) = cli.input {
                cmd_outline(&input, cli.output.as_deref(), false, 40)
            } else {
                println!("{}", "Usage: pdfoutline <FILE> [-o FILE]".yellow());
                println!("       pdfoutline --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_outline(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    max_heading_words: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = EngineConfig::new().with_max_heading_words(max_heading_words);
    let doc = pdfoutline::extract_file_with_config(input, &config)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = pdfoutline::to_json(&doc, format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_batch(
    input_dir: &Path,
    output_dir: &Path,
    max_heading_words: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = EngineConfig::new().with_max_heading_words(max_heading_words);

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(format!("Processing {}...", input_dir.display()));
    pb.enable_steady_tick(Duration::from_millis(100));

    let summary = batch::process_dir(input_dir, output_dir, &config)?;

    pb.finish_and_clear();

    for entry in &summary.entries {
        let name = entry.input.file_name().unwrap_or_default().to_string_lossy();
        match &entry.error {
            None => println!("  {} {}", "✓".green(), name),
            Some(e) => println!("  {} {} ({})", "✗".red(), name, e),
        }
    }

    println!(
        "\n{} {} processed, {} failed",
        "Done!".green().bold(),
        summary.processed(),
        summary.failed()
    );

    Ok(())
}

fn cmd_sections(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let chunks = pdfoutline::extract_sections_file(input)?;
    let json = pdfoutline::chunks_to_json(&chunks, JsonFormat::Pretty)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "pdfoutline".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Document outline inference tool");
    println!();
    println!(
        "Repository: {}",
        "https://github.com/iyulab/pdfoutline".dimmed()
    );
    println!("License: MIT");
}
