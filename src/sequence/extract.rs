use std::collections::HashSet;
use std::io::{BufRead, Write};

use bio::io::fasta;

use crate::error::OperonError;
use crate::operon::record::{parse_line, Line};
use crate::sequence::store::SequenceStore;

/// Outcome of an extraction pass.
#[derive(Debug, Default)]
pub struct ExtractStats {
    /// Sequences written to the sink, in first-seen order.
    pub written: usize,
    /// Accessions referenced by the operon file but absent from the store.
    pub missing: Vec<String>,
    /// Hits skipped because their description was already seen.
    pub duplicates: usize,
}

/// Pulls one sequence per genome referenced by the operon stream and writes
/// them to `out` as FASTA, relabeled with the hit description.
///
/// Deduplication is by description: the first hit with a given description
/// wins and later hits are skipped outright, whatever their accession.
/// Accessions missing from the store are reported to stderr and skipped;
/// partial output is acceptable here, so the pass keeps going.
pub fn extract_sequences(
    reader: impl BufRead,
    store: &impl SequenceStore,
    out: impl Write,
) -> Result<ExtractStats, OperonError> {
    let mut stats = ExtractStats::default();
    let mut seen: HashSet<String> = HashSet::new();
    let mut selected: Vec<fasta::Record> = Vec::new();

    for line in reader.lines() {
        let record = match parse_line(&line?)? {
            Line::Boundary => continue,
            Line::Hit(record) => record,
        };

        if seen.contains(&record.description) {
            stats.duplicates += 1;
            continue;
        }
        seen.insert(record.description.clone());

        match store.lookup(&record.base_accession) {
            Some(sequence) => {
                selected.push(fasta::Record::with_attrs(
                    &record.description,
                    None,
                    sequence.seq(),
                ));
            }
            None => {
                eprintln!(
                    "{}",
                    OperonError::MissingSequence(record.base_accession.clone())
                );
                stats.missing.push(record.base_accession);
            }
        }
    }

    let mut writer = fasta::Writer::new(out);
    for record in &selected {
        writer.write_record(record)?;
    }
    stats.written = selected.len();

    Ok(stats)
}
