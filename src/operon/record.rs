use crate::error::OperonError;

/// Separator line written between operon groups in prediction output.
pub const BOUNDARY_MARKER: &str = "----------";

/// One line of an operon prediction file: either a group separator or a
/// single annotated gene hit.
#[derive(Debug, Clone)]
pub enum Line {
    Boundary,
    Hit(HitRecord),
}

/// A single parsed gene/domain annotation with its search-score and
/// coordinate metadata.
///
/// The raw line carries 8 pipe-delimited fields:
/// `accession|cluster_label|e_value|hmm_start|hmm_end|env_start|env_end|description`
#[derive(Debug, Clone)]
pub struct HitRecord {
    /// Full accession as reported by the search, e.g. "CP002059.1_4".
    pub accession: String,
    /// Genome identifier: the accession truncated at the first '.'.
    pub base_accession: String,
    /// Raw cluster-file token, e.g. "regulator.fa.cluster2.fa".
    pub cluster_label: String,
    /// First '.'-delimited token of the cluster label. Not validated against
    /// the known category set here; unknown tokens ride along as-is.
    pub category: String,
    pub e_value: f64,
    pub hmm_start: u64,
    pub hmm_end: u64,
    pub env_start: u64,
    pub env_end: u64,
    /// Source organism description with spaces replaced by underscores.
    pub description: String,
    /// Description truncated at the first comma, trailing whitespace removed.
    /// All hits from the same genome share a group name.
    pub group_name: String,
}

/// Parses one line of an operon prediction file.
///
/// Lines starting with '-' are group separators. Anything else must split
/// into exactly 8 pipe-delimited fields or the whole parse pass fails.
pub fn parse_line(line: &str) -> Result<Line, OperonError> {
    // Prediction output pads lines with trailing spaces or tabs; strip them
    // before splitting so padded and unpadded hits parse identically.
    let line = line.trim_end();
    if line.starts_with('-') {
        return Ok(Line::Boundary);
    }

    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() != 8 {
        return Err(OperonError::MalformedRecord {
            line: line.to_string(),
            reason: format!("expected 8 fields, found {}", fields.len()),
        });
    }

    let number = |value: &str, name: &str| -> Result<u64, OperonError> {
        value
            .trim()
            .parse()
            .map_err(|_| OperonError::MalformedRecord {
                line: line.to_string(),
                reason: format!("unparseable {} {:?}", name, value),
            })
    };

    let e_value: f64 = fields[2]
        .trim()
        .parse()
        .map_err(|_| OperonError::MalformedRecord {
            line: line.to_string(),
            reason: format!("unparseable e-value {:?}", fields[2]),
        })?;

    let accession = fields[0].to_string();
    let base_accession = accession
        .split('.')
        .next()
        .unwrap_or(&accession)
        .to_string();

    let cluster_label = fields[1].to_string();
    let category = cluster_label
        .split('.')
        .next()
        .unwrap_or(&cluster_label)
        .to_string();

    let description = fields[7].replace(' ', "_");
    let group_name = description
        .split(',')
        .next()
        .unwrap_or(&description)
        .trim_end()
        .to_string();

    Ok(Line::Hit(HitRecord {
        accession,
        base_accession,
        cluster_label,
        category,
        e_value,
        hmm_start: number(fields[3], "hmm_start")?,
        hmm_end: number(fields[4], "hmm_end")?,
        env_start: number(fields[5], "env_start")?,
        env_end: number(fields[6], "env_end")?,
        description,
        group_name,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "CP002059.1_4|regulator.fa.cluster2.fa|6.3e-45|31|182|1453672|1453887|'Nostoc azollae' 0708, complete genome";

    #[test]
    fn parses_all_fields() {
        let record = match parse_line(SAMPLE).unwrap() {
            Line::Hit(r) => r,
            Line::Boundary => panic!("expected a hit record"),
        };
        assert_eq!(record.accession, "CP002059.1_4");
        assert_eq!(record.base_accession, "CP002059");
        assert_eq!(record.cluster_label, "regulator.fa.cluster2.fa");
        assert_eq!(record.category, "regulator");
        assert!((record.e_value - 6.3e-45).abs() < 1e-50);
        assert_eq!(record.hmm_start, 31);
        assert_eq!(record.hmm_end, 182);
        assert_eq!(record.env_start, 1453672);
        assert_eq!(record.env_end, 1453887);
        assert_eq!(record.description, "'Nostoc_azollae'_0708,_complete_genome");
        assert_eq!(record.group_name, "'Nostoc_azollae'_0708");
    }

    #[test]
    fn boundary_lines_are_separators() {
        assert!(matches!(parse_line(BOUNDARY_MARKER).unwrap(), Line::Boundary));
        // The separator check only looks at the leading character.
        assert!(matches!(parse_line("---").unwrap(), Line::Boundary));
    }

    #[test]
    fn wrong_field_count_is_fatal() {
        let short = "CP002059.1_4|regulator.fa.cluster2.fa|6.3e-45|31|182";
        match parse_line(short) {
            Err(OperonError::MalformedRecord { reason, .. }) => {
                assert!(reason.contains("expected 8 fields"), "got: {}", reason)
            }
            other => panic!("expected MalformedRecord, got {:?}", other.err()),
        }
    }

    #[test]
    fn bad_coordinates_are_fatal() {
        let garbled = "CP002059.1_4|regulator.fa.cluster2.fa|6.3e-45|xx|182|1453672|1453887|desc";
        assert!(matches!(
            parse_line(garbled),
            Err(OperonError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn trailing_padding_never_reaches_the_parsed_fields() {
        // Padded and unpadded variants of the same hit must parse to the
        // same description, or downstream dedup falls apart.
        let plain = "CP002059.1_2|toxin.fa.cluster9.fa|1.7e-22|14|116|1418714|1418849|'Nostoc azollae' 0708, complete genome";
        for padding in ["", " ", "  ", "\t", " \t"] {
            let record = match parse_line(&format!("{}{}", plain, padding)).unwrap() {
                Line::Hit(r) => r,
                Line::Boundary => panic!("expected a hit record"),
            };
            assert_eq!(
                record.description, "'Nostoc_azollae'_0708,_complete_genome",
                "padding {:?} leaked into the description",
                padding
            );
            assert_eq!(record.group_name, "'Nostoc_azollae'_0708");
        }
    }

    #[test]
    fn unknown_category_is_carried_through() {
        let line = "CP002059.1_4|mystery.fa.cluster1.fa|1e-5|1|2|3|4|desc";
        let record = match parse_line(line).unwrap() {
            Line::Hit(r) => r,
            Line::Boundary => panic!("expected a hit record"),
        };
        assert_eq!(record.category, "mystery");
    }
}
