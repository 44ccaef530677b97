use std::io::BufRead;

use crate::error::OperonError;
use crate::operon::record::{parse_line, HitRecord, Line};

/// An ordered run of hit records treated as one genomic unit.
#[derive(Debug, Clone)]
pub struct OperonGroup {
    pub records: Vec<HitRecord>,
}

impl OperonGroup {
    pub fn size(&self) -> usize {
        self.records.len()
    }

    /// Group name of the first member. Name-change groups always have at
    /// least one member; boundary groups can be empty (consecutive
    /// separators) and have no name.
    pub fn name(&self) -> Option<&str> {
        self.records.first().map(|r| r.group_name.as_str())
    }
}

/// Collects records into boundary-delimited groups: every run of hits between
/// two separator lines (or stream start and the first separator) is one group.
///
/// A trailing run with no terminating separator is dropped; only the
/// separator closes a group.
pub fn boundary_groups(reader: impl BufRead) -> Result<Vec<OperonGroup>, OperonError> {
    let mut groups = Vec::new();
    let mut pending: Vec<HitRecord> = Vec::new();

    for line in reader.lines() {
        match parse_line(&line?)? {
            Line::Boundary => {
                groups.push(OperonGroup {
                    records: std::mem::take(&mut pending),
                });
            }
            Line::Hit(record) => pending.push(record),
        }
    }

    Ok(groups)
}

/// Collects records into name-change groups: separator lines are skipped and
/// a new group starts whenever `group_name` differs from the previous
/// record's.
///
/// A group is flushed only when a later record carries a different name, so
/// the final pending group of the stream is never emitted. Downstream output
/// relies on this exact behavior; do not "fix" it here.
pub fn name_groups(reader: impl BufRead) -> Result<Vec<OperonGroup>, OperonError> {
    let mut groups = Vec::new();
    let mut pending: Vec<HitRecord> = Vec::new();

    for line in reader.lines() {
        let record = match parse_line(&line?)? {
            Line::Boundary => continue,
            Line::Hit(record) => record,
        };

        if let Some(previous) = pending.last() {
            if previous.group_name != record.group_name {
                groups.push(OperonGroup {
                    records: std::mem::take(&mut pending),
                });
            }
        }
        pending.push(record);
    }

    Ok(groups)
}
