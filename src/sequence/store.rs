use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use bio::io::fasta;
use niffler::get_reader;

/// Lookup of sequence records by genome accession.
pub trait SequenceStore {
    fn lookup(&self, base_accession: &str) -> Option<&fasta::Record>;
}

/// In-memory store backed by a FASTA file, keyed by record id. The file may
/// be plain or compressed (gzip, bzip2, xz).
pub struct FastaStore {
    records: HashMap<String, fasta::Record>,
}

impl FastaStore {
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open sequence file {}", path.display()))?;
        let (inner_reader, _compression) = get_reader(Box::new(file))?;
        let reader = fasta::Reader::new(BufReader::new(inner_reader));

        let mut records = HashMap::new();
        for record in reader.records() {
            let record =
                record.with_context(|| format!("invalid FASTA record in {}", path.display()))?;
            records.insert(record.id().to_string(), record);
        }
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl SequenceStore for FastaStore {
    fn lookup(&self, base_accession: &str) -> Option<&fasta::Record> {
        self.records.get(base_accession)
    }
}
