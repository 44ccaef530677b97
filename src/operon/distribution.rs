use std::io::{BufRead, Write};

use crate::error::OperonError;
use crate::operon::group::name_groups;

/// Functional classification of an annotated gene, taken from the first
/// token of its cluster label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Immunity,
    Modifier,
    Regulator,
    Toxin,
    Transport,
}

impl Category {
    /// Canonical (alphabetical) order used by every output row.
    pub const ALL: [Category; 5] = [
        Category::Immunity,
        Category::Modifier,
        Category::Regulator,
        Category::Toxin,
        Category::Transport,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Immunity => "immunity",
            Category::Modifier => "modifier",
            Category::Regulator => "regulator",
            Category::Toxin => "toxin",
            Category::Transport => "transport",
        }
    }

    /// Display color for iTOL datasets.
    pub fn color(&self) -> &'static str {
        match self {
            Category::Immunity => "#0000ff",
            Category::Modifier => "#00ff00",
            Category::Regulator => "#ff0000",
            Category::Toxin => "#ff00ff",
            Category::Transport => "#ff8c00",
        }
    }

    pub fn from_token(token: &str) -> Option<Category> {
        match token {
            "immunity" => Some(Category::Immunity),
            "modifier" => Some(Category::Modifier),
            "regulator" => Some(Category::Regulator),
            "toxin" => Some(Category::Toxin),
            "transport" => Some(Category::Transport),
            _ => None,
        }
    }
}

/// Writes an iTOL-friendly dataset describing the functional gene
/// composition of each genome in the operon stream.
///
/// Header rows list the category labels and their colors; each data row is a
/// group name followed by one tab-separated count per category, always in
/// canonical order. Records whose category is not one of the five known ones
/// are skipped. Groups follow the name-change policy, so the final pending
/// group of the stream does not produce a row.
pub fn write_distribution(reader: impl BufRead, mut out: impl Write) -> Result<(), OperonError> {
    write_row(&mut out, "LABELS", Category::ALL.iter().map(|c| c.label()))?;
    write_row(&mut out, "COLORS", Category::ALL.iter().map(|c| c.color()))?;

    for group in name_groups(reader)? {
        let Some(name) = group.name() else { continue };
        // Fresh counters per group; counts never leak across rows.
        let mut counts = [0usize; Category::ALL.len()];
        for record in &group.records {
            if let Some(category) = Category::from_token(&record.category) {
                counts[category as usize] += 1;
            }
        }
        write_row(&mut out, name, counts.iter().map(|c| c.to_string()))?;
    }

    Ok(())
}

fn write_row<S: AsRef<str>>(
    out: &mut impl Write,
    head: &str,
    cells: impl Iterator<Item = S>,
) -> Result<(), OperonError> {
    write!(out, "{}", head)?;
    for cell in cells {
        write!(out, "\t{}", cell.as_ref())?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn hit(category: &str, description: &str) -> String {
        format!(
            "X.1_1|{}.fa.cluster2.fa|1e-10|1|100|200|300|{}",
            category, description
        )
    }

    fn run(lines: &[String]) -> String {
        let mut out = Vec::new();
        write_distribution(Cursor::new(lines.join("\n")), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn headers_are_fixed_and_alphabetical() {
        let output = run(&[]);
        let mut lines = output.lines();
        assert_eq!(
            lines.next().unwrap(),
            "LABELS\timmunity\tmodifier\tregulator\ttoxin\ttransport"
        );
        assert_eq!(
            lines.next().unwrap(),
            "COLORS\t#0000ff\t#00ff00\t#ff0000\t#ff00ff\t#ff8c00"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn counts_follow_canonical_category_order() {
        let genome = "Genome one, complete genome";
        let lines = vec![
            hit("regulator", genome),
            hit("regulator", genome),
            hit("toxin", genome),
            hit("modifier", genome),
            hit("immunity", genome),
            hit("transport", genome),
            // A second genome flushes the first; it stays pending itself.
            hit("toxin", "Genome two, complete genome"),
        ];
        let output = run(&lines);
        let rows: Vec<&str> = output.lines().skip(2).collect();
        assert_eq!(rows, vec!["Genome_one\t1\t1\t2\t1\t1"]);
    }

    #[test]
    fn unknown_categories_are_not_counted() {
        let genome = "Genome one, complete genome";
        let lines = vec![
            hit("toxin", genome),
            hit("mystery", genome),
            hit("chaperone", genome),
            hit("toxin", "Genome two, complete genome"),
        ];
        let output = run(&lines);
        let rows: Vec<&str> = output.lines().skip(2).collect();
        assert_eq!(rows, vec!["Genome_one\t0\t0\t0\t1\t0"]);
    }

    #[test]
    fn separators_do_not_close_a_composition_group() {
        let genome = "Genome one, complete genome";
        let lines = vec![
            hit("toxin", genome),
            "----------".to_string(),
            hit("immunity", genome),
            hit("toxin", "Genome two, complete genome"),
        ];
        let output = run(&lines);
        let rows: Vec<&str> = output.lines().skip(2).collect();
        // Both hits count toward the same genome row.
        assert_eq!(rows, vec!["Genome_one\t1\t0\t0\t1\t0"]);
    }
}
