use super::Alignment;
use crate::libs::aln::error::{AlnError, Result};
use crate::libs::aln::partition::is_blank;
use crate::libs::sample::{random_indices, SampleConfig};
use itertools::Itertools;
use rand::Rng;

/// Draws `count` of the visible partitions until no visible taxon is left with
/// drawn data made only of gaps or only of unknowns, then keeps exactly the
/// drawn ones.
///
/// With `config.distinct` the draw has no repeats, and a `count` above the
/// number of visible partitions is refused. Without `config.max_attempts` a
/// matrix where no draw can pass makes this loop forever.
pub fn extract_random<R: Rng + ?Sized>(
    aln: &mut Alignment,
    count: usize,
    config: SampleConfig,
    rng: &mut R,
) -> Result<Vec<usize>> {
    let visible = aln.visible_partition_indices();
    if (config.distinct && count > visible.len()) || (count > 0 && visible.is_empty()) {
        return Err(AlnError::SampleTooLarge {
            count,
            available: visible.len(),
        });
    }
    if count == 0 {
        aln.reduce_to_partitions(&[]);
        return Ok(vec![]);
    }

    let mut attempts = 0;
    loop {
        attempts += 1;
        let drawn: Vec<usize> = random_indices(rng, count, visible.len(), config.distinct)
            .into_iter()
            .map(|i| visible[i])
            .collect();

        if covers_every_taxon(aln, &drawn)? {
            tracing::debug!("Accepted draw {:?} after {} attempt(s)", drawn, attempts);
            aln.reduce_to_partitions(&drawn);
            return Ok(drawn);
        }
        tracing::debug!("Rejected draw {:?}", drawn);

        if let Some(max) = config.max_attempts {
            if attempts >= max {
                return Err(AlnError::NoValidDraw { attempts });
            }
        }
    }
}

// No visible taxon has blank data across the drawn partitions
fn covers_every_taxon(aln: &Alignment, drawn: &[usize]) -> Result<bool> {
    for taxon in aln.visible_taxa() {
        let mut data = String::new();
        for &j in drawn {
            data += taxon.partition_at(j)?.data();
        }
        if is_blank(&data) {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Replaces the taxa with `count` distinct visible ones picked at random.
/// Returns the picked physical positions in draw order.
pub fn extract_random_taxa<R: Rng + ?Sized>(
    aln: &mut Alignment,
    count: usize,
    rng: &mut R,
) -> Result<Vec<usize>> {
    let visible: Vec<usize> = aln.taxa.iter().positions(|t| !t.masked).collect();
    if count > visible.len() {
        return Err(AlnError::SampleTooLarge {
            count,
            available: visible.len(),
        });
    }

    let picked: Vec<usize> = random_indices(rng, count, visible.len(), true)
        .into_iter()
        .map(|i| visible[i])
        .collect();
    aln.reduce_to_taxa(&picked)?;
    Ok(picked)
}

/// Keeps the visible partitions where the share of visible taxa carrying
/// informative data, as a truncated integer percentage, is strictly greater
/// than `threshold`. Returns the kept physical indices.
///
/// Since the share never exceeds 100, a threshold of 100 keeps nothing.
pub fn extract_by_completeness(aln: &mut Alignment, threshold: usize) -> Vec<usize> {
    let total = aln.nr_taxa();
    let keep: Vec<usize> = if total == 0 {
        vec![]
    } else {
        aln.visible_partition_indices()
            .into_iter()
            .filter(|&j| {
                let filled = aln
                    .visible_taxa()
                    .filter(|t| t.partition_at(j).map_or(false, |p| p.is_informative()))
                    .count();
                filled * 100 / total > threshold
            })
            .collect()
    };

    aln.reduce_to_partitions(&keep);
    keep
}
