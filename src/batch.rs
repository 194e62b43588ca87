//! Batch directory processing.
//!
//! Documents are independent: each owns its own line records, style
//! tables, and result, so files run in parallel with no shared mutable
//! state. A failure on one document is logged and recorded; it never
//! aborts the rest of the batch.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::engine::EngineConfig;
use crate::error::{Error, Result};
use crate::render::{to_json, JsonFormat};

/// Outcome of one file in a batch run.
#[derive(Debug)]
pub struct BatchEntry {
    /// Input PDF path
    pub input: PathBuf,
    /// Output JSON path, when the file was processed
    pub output: Option<PathBuf>,
    /// The per-file error, when it was not
    pub error: Option<Error>,
}

impl BatchEntry {
    /// Whether this file produced an output.
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Summary of a batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Per-file outcomes, in input order
    pub entries: Vec<BatchEntry>,
}

impl BatchSummary {
    /// Number of files that produced an output.
    pub fn processed(&self) -> usize {
        self.entries.iter().filter(|e| e.succeeded()).count()
    }

    /// Number of files that failed.
    pub fn failed(&self) -> usize {
        self.entries.len() - self.processed()
    }
}

/// Run the engine over every `.pdf` file in `input_dir`, writing a
/// same-stem `.json` for each into `output_dir`.
///
/// Returns an error only when the directories themselves are unusable;
/// per-file failures land in the summary.
pub fn process_dir(
    input_dir: &Path,
    output_dir: &Path,
    config: &EngineConfig,
) -> Result<BatchSummary> {
    fs::create_dir_all(output_dir)?;

    let mut inputs: Vec<PathBuf> = fs::read_dir(input_dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| {
            p.extension()
                .map(|ext| ext.eq_ignore_ascii_case("pdf"))
                .unwrap_or(false)
        })
        .collect();
    inputs.sort();

    let entries: Vec<BatchEntry> = inputs
        .par_iter()
        .map(|input| process_one(input, output_dir, config))
        .collect();

    Ok(BatchSummary { entries })
}

fn process_one(input: &Path, output_dir: &Path, config: &EngineConfig) -> BatchEntry {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    let output = output_dir.join(format!("{}.json", stem));

    match extract_and_write(input, &output, config) {
        Ok(()) => {
            log::info!("processed {} -> {}", input.display(), output.display());
            BatchEntry {
                input: input.to_path_buf(),
                output: Some(output),
                error: None,
            }
        }
        Err(e) => {
            log::error!("failed to process {}: {}", input.display(), e);
            BatchEntry {
                input: input.to_path_buf(),
                output: None,
                error: Some(e),
            }
        }
    }
}

fn extract_and_write(input: &Path, output: &Path, config: &EngineConfig) -> Result<()> {
    let doc = crate::extract_file_with_config(input, config)?;
    let json = to_json(&doc, JsonFormat::Pretty)?;
    fs::write(output, json)?;
    Ok(())
}
