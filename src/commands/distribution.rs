use std::fs::File;
use std::io::{BufReader, BufWriter};

use anyhow::{Context, Result};

use crate::operon::distribution::write_distribution;

pub fn run(operon_file: String, output_file: String) -> Result<()> {
    let input =
        File::open(&operon_file).with_context(|| format!("failed to open {}", operon_file))?;
    let output = File::create(&output_file)
        .with_context(|| format!("failed to create {}", output_file))?;

    write_distribution(BufReader::new(input), BufWriter::new(output))
        .with_context(|| format!("failed to aggregate {}", operon_file))?;

    println!("Wrote operon distribution to {}", output_file);
    Ok(())
}
