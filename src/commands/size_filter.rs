use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};

use crate::operon::filter::size_filter;

pub fn run(operon_file: String, output_file: String, top: usize) -> Result<()> {
    let output = File::create(&output_file)
        .with_context(|| format!("failed to create {}", output_file))?;
    let mut writer = BufWriter::new(output);

    size_filter(Path::new(&operon_file), &mut writer, top)
        .with_context(|| format!("failed to filter {}", operon_file))?;

    println!("Wrote filtered operons to {}", output_file);
    Ok(())
}
