use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};

use crate::config::Config;

/// Driver for the external aligner and tree-building executables. The core
/// only hands file paths back and forth; the algorithms live entirely in the
/// configured tools.
pub struct TreeBuilder {
    aligner: String,
    tree_builder: String,
    keep_alignment: bool,
}

impl TreeBuilder {
    pub fn from_config(config: &Config) -> Self {
        Self {
            aligner: config.aligner.clone(),
            tree_builder: config.tree_builder.clone(),
            keep_alignment: false,
        }
    }

    pub fn keep_alignment(mut self, keep: bool) -> Self {
        self.keep_alignment = keep;
        self
    }

    /// Verifies both executables are reachable before doing any work.
    pub fn check(&self) -> Result<()> {
        Command::new(&self.aligner)
            .arg("--version")
            .output()
            .with_context(|| {
                format!(
                    "{} not found. Please install it and ensure it's in your PATH",
                    self.aligner
                )
            })?;
        Command::new(&self.tree_builder)
            .arg("-help")
            .output()
            .with_context(|| {
                format!(
                    "{} not found. Please install it and ensure it's in your PATH",
                    self.tree_builder
                )
            })?;
        Ok(())
    }

    /// Aligns `fasta_file` and writes the alignment to `align_file`.
    pub fn align(&self, fasta_file: &Path, align_file: &Path) -> Result<()> {
        let output = Command::new(&self.aligner)
            .arg("--auto")
            .arg(fasta_file)
            .output()
            .with_context(|| format!("failed to run {}", self.aligner))?;
        if !output.status.success() {
            bail!(
                "{} failed on {}: {}",
                self.aligner,
                fasta_file.display(),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        fs::write(align_file, &output.stdout)
            .with_context(|| format!("failed to write {}", align_file.display()))?;
        Ok(())
    }

    /// Builds a newick tree from `align_file` into `tree_file`.
    pub fn infer(&self, align_file: &Path, tree_file: &Path) -> Result<()> {
        let output = Command::new(&self.tree_builder)
            .arg("-nt")
            .arg(align_file)
            .output()
            .with_context(|| format!("failed to run {}", self.tree_builder))?;
        if !output.status.success() {
            bail!(
                "{} failed on {}: {}",
                self.tree_builder,
                align_file.display(),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        fs::write(tree_file, &output.stdout)
            .with_context(|| format!("failed to write {}", tree_file.display()))?;
        Ok(())
    }

    /// Full align-then-tree run over an extracted FASTA. Output paths default
    /// to `<input>.align` and `<input>.tree`; the intermediate alignment is
    /// removed unless `keep_alignment` was set. Returns the tree path.
    pub fn run(
        &self,
        fasta_file: &Path,
        align_file: Option<PathBuf>,
        tree_file: Option<PathBuf>,
    ) -> Result<PathBuf> {
        let align_file = align_file.unwrap_or_else(|| derived_path(fasta_file, "align"));
        let tree_file = tree_file.unwrap_or_else(|| derived_path(fasta_file, "tree"));

        self.align(fasta_file, &align_file)?;
        self.infer(&align_file, &tree_file)?;

        if !self.keep_alignment {
            fs::remove_file(&align_file).with_context(|| {
                format!("failed to remove intermediate {}", align_file.display())
            })?;
        }
        Ok(tree_file)
    }
}

fn derived_path(input: &Path, suffix: &str) -> PathBuf {
    let mut name = input.file_name().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(suffix);
    input.with_file_name(name)
}
