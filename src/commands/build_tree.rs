use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::config::Config;
use crate::tree::TreeBuilder;

pub fn run(
    fasta_file: String,
    align_file: Option<String>,
    tree_file: Option<String>,
    keep_alignment: bool,
) -> Result<()> {
    let config = Config::load();
    let builder = TreeBuilder::from_config(&config).keep_alignment(keep_alignment);
    builder.check()?;

    let tree_path = builder.run(
        Path::new(&fasta_file),
        align_file.map(PathBuf::from),
        tree_file.map(PathBuf::from),
    )?;

    println!("Wrote tree to {}", tree_path.display());
    Ok(())
}
