use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use crate::error::OperonError;
use crate::operon::group::boundary_groups;
use crate::operon::record::BOUNDARY_MARKER;

/// Keeps only the largest boundary-delimited groups of an operon file.
///
/// Two passes over the file: the first ranks group sizes and picks a
/// threshold, the second echoes every qualifying group verbatim to `out`,
/// each terminated by a separator line. When `k` is at least the number of
/// complete groups, all of them are kept; otherwise the threshold is the size
/// at rank `k` of the descending order and only strictly larger groups
/// survive, so re-filtering an already-filtered file never shrinks it
/// further.
///
/// A trailing run with no terminating separator is dropped, same as the
/// grouper. A file with zero complete groups is an `EmptyInput` error.
pub fn size_filter(operon_file: &Path, mut out: impl Write, k: usize) -> Result<(), OperonError> {
    let mut sizes: Vec<usize> = {
        let reader = BufReader::new(File::open(operon_file)?);
        boundary_groups(reader)?.iter().map(|g| g.size()).collect()
    };
    if sizes.is_empty() {
        return Err(OperonError::EmptyInput);
    }
    sizes.sort_unstable_by(|a, b| b.cmp(a));

    // None means every complete group qualifies.
    let threshold = if k >= sizes.len() { None } else { Some(sizes[k]) };

    let reader = BufReader::new(File::open(operon_file)?);
    let mut buf: Vec<String> = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.starts_with('-') {
            if threshold.map_or(true, |t| buf.len() > t) {
                for kept in &buf {
                    writeln!(out, "{}", kept)?;
                }
                writeln!(out, "{}", BOUNDARY_MARKER)?;
            }
            buf.clear();
        } else {
            buf.push(line);
        }
    }

    Ok(())
}
