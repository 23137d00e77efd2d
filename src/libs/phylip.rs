//! Relaxed PHYLIP alignments and their partition maps.
//!
//! A partition map has one line per partition, `model, name = start-end`, with
//! 1-based inclusive columns.

use crate::libs::aln::error::{AlnError, Result};
use crate::libs::aln::{Alignment, Partition, Taxon};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    static ref RE_RANGE: Regex = Regex::new(r"^([^,=]+),([^,=]+)=(\d+)-(\d+)$").unwrap();
}

/// One line of a partition map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionRange {
    pub model: String,
    pub name: String,
    pub start: usize,
    pub end: usize,
}

impl fmt::Display for PartitionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} = {}-{}", self.model, self.name, self.start, self.end)
    }
}

/// Parses a partition map. Whitespace is ignored and blank lines skipped.
///
/// ```
/// use parsel::libs::phylip::parse_partition_map;
/// let ranges = parse_partition_map("WAG, gene1 = 1-10\n\nLG,gene2=11-15\n").unwrap();
/// assert_eq!(ranges.len(), 2);
/// assert_eq!(ranges[1].model, "LG");
/// assert_eq!(ranges[1].name, "gene2");
/// assert_eq!((ranges[1].start, ranges[1].end), (11, 15));
/// ```
pub fn parse_partition_map(text: &str) -> Result<Vec<PartitionRange>> {
    let mut ranges = vec![];

    for (i, line) in text.lines().enumerate() {
        let compact: String = line.split_whitespace().collect();
        if compact.is_empty() {
            continue;
        }

        let caps = RE_RANGE.captures(&compact).ok_or_else(|| AlnError::Parse {
            line: i + 1,
            message: format!("expected `model, name = start-end`, got `{}`", line.trim()),
        })?;
        let number = |k: usize| {
            caps[k].parse::<usize>().map_err(|e| AlnError::Parse {
                line: i + 1,
                message: e.to_string(),
            })
        };
        let start = number(3)?;
        let end = number(4)?;
        if start == 0 || end < start {
            return Err(AlnError::Parse {
                line: i + 1,
                message: format!("invalid column range {}-{}", start, end),
            });
        }

        ranges.push(PartitionRange {
            model: caps[1].to_string(),
            name: caps[2].to_string(),
            start,
            end,
        });
    }

    Ok(ranges)
}

/// Builds an alignment from a relaxed PHYLIP text, cutting each row by `ranges`.
///
/// The header line is skipped. Partitions are named `name.start-end`.
pub fn parse_phylip(text: &str, ranges: &[PartitionRange]) -> Result<Alignment> {
    let mut taxa = vec![];

    let rows = text
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .skip(1);
    for (i, line) in rows {
        let mut fields = line.split_whitespace();
        let name = fields.next().unwrap_or_default();
        let data: String = fields.collect();

        let mut partitions = Vec::with_capacity(ranges.len());
        for r in ranges {
            let slice = data.get(r.start.saturating_sub(1)..r.end).ok_or_else(|| AlnError::Parse {
                line: i + 1,
                message: format!(
                    "range {}-{} of {} exceeds the {} columns of {}",
                    r.start,
                    r.end,
                    r.name,
                    data.len(),
                    name
                ),
            })?;
            partitions.push(Partition::with_range(
                slice, &r.name, r.start, r.end, &r.model,
            ));
        }
        taxa.push(Taxon::new(name, partitions));
    }

    Ok(Alignment::new(taxa))
}

/// Loads an alignment from a PHYLIP file and its partition map.
pub fn load(phyfile: &str, partfile: &str) -> anyhow::Result<Alignment> {
    let ranges = parse_partition_map(&crate::libs::io::read_to_string(partfile)?)
        .map_err(|e| anyhow::anyhow!("{}: {}", partfile, e))?;
    let aln = parse_phylip(&crate::libs::io::read_to_string(phyfile)?, &ranges)
        .map_err(|e| anyhow::anyhow!("{}: {}", phyfile, e))?;
    tracing::info!(
        "Loaded {} taxa and {} partitions from {}",
        aln.nr_taxa(),
        aln.nr_partitions(),
        phyfile
    );
    Ok(aln)
}

/// Rows of the visible taxa, made of their visible partitions.
///
/// ```
/// use parsel::libs::aln::{Alignment, Partition, Taxon};
/// let aln = Alignment::new(vec![
///     Taxon::new("A", vec![Partition::new("ACGT", "p1", "WAG"), Partition::new("GGGG", "p2", "WAG")]),
///     Taxon::new("B", vec![Partition::new("TTTT", "p1", "WAG"), Partition::new("CCCC", "p2", "WAG")]),
/// ]);
/// assert_eq!(
///     parsel::libs::phylip::to_phylip(&aln),
///     " 2 8\nA ACGTGGGG\nB TTTTCCCC\n"
/// );
/// ```
pub fn to_phylip(aln: &Alignment) -> String {
    let mut s = format!(" {} {}\n", aln.nr_taxa(), aln.columns());
    for taxon in aln.visible_taxa() {
        s += &format!("{} {}\n", taxon.name(), taxon.visible_data());
    }
    s
}

/// The partition map of the visible partitions, columns renumbered from 1.
///
/// ```
/// use parsel::libs::aln::{Alignment, Partition, Taxon};
/// let aln = Alignment::new(vec![Taxon::new("A", vec![Partition::new("ACGTACGTAC", "gene1", "WAG")])]);
/// assert_eq!(parsel::libs::phylip::to_partition_map(&aln), "WAG, gene1 = 1-10\n");
/// ```
pub fn to_partition_map(aln: &Alignment) -> String {
    let mut s = String::new();
    if let Some(first) = aln.taxa().first() {
        let mut start = 1;
        for part in first.visible() {
            let end = start + part.len() - 1;
            let range = PartitionRange {
                model: part.model().to_string(),
                name: part.name().to_string(),
                start,
                end,
            };
            s += &format!("{}\n", range);
            start = end + 1;
        }
    }
    s
}

/// Writes `{prefix}.phy` and `{prefix}.part`.
pub fn write_files(aln: &Alignment, prefix: &str) -> anyhow::Result<()> {
    tracing::info!("Writing {}.phy and {}.part", prefix, prefix);
    crate::libs::io::write_string(&format!("{}.phy", prefix), &to_phylip(aln))?;
    crate::libs::io::write_string(&format!("{}.part", prefix), &to_partition_map(aln))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PART: &str = "WAG, gene1 = 1-4\nLG, gene2 = 5-6\nJTT, gene3 = 7-10\n";
    const PHY: &str = " 3 10\nhuman ACGTAAXXXX\nmouse ----CCGGGG\n\nrat   AC-TGGTTTT\n";

    #[test]
    fn parse_and_cut() {
        let ranges = parse_partition_map(PART).unwrap();
        let aln = parse_phylip(PHY, &ranges).unwrap();

        assert_eq!(aln.nr_taxa(), 3);
        assert_eq!(aln.nr_partitions(), 3);
        assert_eq!(aln.columns(), 10);

        let rat = aln.taxon_named("rat").unwrap();
        assert_eq!(rat.partition_at(0).unwrap().data(), "AC-T");
        assert_eq!(rat.partition_at(2).unwrap().name(), "gene3.7-10");
        assert_eq!(rat.partition_at(1).unwrap().model(), "LG");
    }

    #[test]
    fn write_after_masking() {
        let ranges = parse_partition_map(PART).unwrap();
        let mut aln = parse_phylip(PHY, &ranges).unwrap();
        aln.mask_partitions(&[0]).mask_taxa(&[1]);

        assert_eq!(to_phylip(&aln), " 2 6\nhuman AAXXXX\nrat GGTTTT\n");
        assert_eq!(
            to_partition_map(&aln),
            "LG, gene2.5-6 = 1-2\nJTT, gene3.7-10 = 3-6\n"
        );
    }

    #[test]
    fn empty_alignment() {
        let aln = Alignment::default();
        assert_eq!(to_phylip(&aln), " 0 0\n");
        assert_eq!(to_partition_map(&aln), "");
    }

    #[test]
    fn bad_partition_line() {
        let err = parse_partition_map("WAG, gene1 = 1-4\nWAG gene2 5-8\n").unwrap_err();
        assert!(matches!(err, AlnError::Parse { line: 2, .. }));

        let err = parse_partition_map("WAG, gene1 = 5-4\n").unwrap_err();
        assert!(matches!(err, AlnError::Parse { line: 1, .. }));
    }

    #[test]
    fn range_past_row() {
        let ranges = parse_partition_map("WAG, gene1 = 1-20\n").unwrap();
        let err = parse_phylip(PHY, &ranges).unwrap_err();
        assert!(matches!(err, AlnError::Parse { line: 2, .. }));
    }

    #[test]
    fn range_display() {
        let r = PartitionRange {
            model: "WAG".to_string(),
            name: "gene1".to_string(),
            start: 1,
            end: 10,
        };
        assert_eq!(r.to_string(), "WAG, gene1 = 1-10");
    }
}
