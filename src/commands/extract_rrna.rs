use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use crate::sequence::extract::extract_sequences;
use crate::sequence::store::FastaStore;

pub fn run(operon_file: String, rrna_file: String, output_file: String) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message(format!("Loading sequences from {}", rrna_file));
    let store = FastaStore::from_path(Path::new(&rrna_file))?;
    spinner.finish_with_message(format!("Loaded {} sequences", store.len()));

    let input =
        File::open(&operon_file).with_context(|| format!("failed to open {}", operon_file))?;
    let output = File::create(&output_file)
        .with_context(|| format!("failed to create {}", output_file))?;

    let stats = extract_sequences(BufReader::new(input), &store, BufWriter::new(output))
        .with_context(|| format!("failed to extract sequences for {}", operon_file))?;

    println!(
        "Wrote {} sequences to {} ({} duplicate hits skipped, {} accessions missing)",
        stats.written,
        output_file,
        stats.duplicates,
        stats.missing.len()
    );
    Ok(())
}
