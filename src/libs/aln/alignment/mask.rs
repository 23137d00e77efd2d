use super::Alignment;
use crate::libs::aln::error::{AlnError, Result};
use std::collections::HashSet;

/// Masks the partitions at `indices` in every taxon.
/// Indices outside the layout are ignored.
pub fn mask_partitions(aln: &mut Alignment, indices: &[usize]) {
    set_partition_masks(aln, indices, true);
}

pub fn unmask_partitions(aln: &mut Alignment, indices: &[usize]) {
    set_partition_masks(aln, indices, false);
}

fn set_partition_masks(aln: &mut Alignment, indices: &[usize], masked: bool) {
    let wanted: HashSet<usize> = indices.iter().copied().collect();
    for taxon in aln.taxa.iter_mut() {
        for (j, part) in taxon.partitions_mut().enumerate() {
            if wanted.contains(&j) {
                part.masked = masked;
            }
        }
    }
}

/// Masks the taxa at `indices`. Their partitions keep their own masks.
pub fn mask_taxa(aln: &mut Alignment, indices: &[usize]) {
    let wanted: HashSet<usize> = indices.iter().copied().collect();
    for (i, taxon) in aln.taxa.iter_mut().enumerate() {
        if wanted.contains(&i) {
            taxon.masked = true;
        }
    }
}

/// Shows every taxon and every partition again
pub fn unmask_all(aln: &mut Alignment) {
    for taxon in aln.taxa.iter_mut() {
        taxon.masked = false;
        for part in taxon.partitions_mut() {
            part.masked = false;
        }
    }
}

/// Masks every taxon whose position is not listed
pub fn keep_taxa_at(aln: &mut Alignment, positions: &[usize]) {
    let keep: HashSet<usize> = positions.iter().copied().collect();
    let others: Vec<usize> = (0..aln.taxa.len()).filter(|i| !keep.contains(i)).collect();
    mask_taxa(aln, &others);
}

/// Masks every taxon whose name is not listed
pub fn keep_taxa_named<S: AsRef<str>>(aln: &mut Alignment, names: &[S]) {
    let keep: HashSet<&str> = names.iter().map(|s| s.as_ref()).collect();
    let others: Vec<usize> = aln
        .taxa
        .iter()
        .enumerate()
        .filter(|(_, t)| !keep.contains(t.name()))
        .map(|(i, _)| i)
        .collect();
    mask_taxa(aln, &others);
}

/// Masks every partition whose physical index is not in `keep`.
///
/// Partitions stay in their physical order whatever the order of `keep`, and
/// partitions masked before are not shown again.
pub fn reduce_to_partitions(aln: &mut Alignment, keep: &[usize]) {
    let keep: HashSet<usize> = keep.iter().copied().collect();
    tracing::info!("Reducing number of partitions to {}", keep.len());

    for taxon in aln.taxa.iter_mut() {
        for (j, part) in taxon.partitions_mut().enumerate() {
            if !keep.contains(&j) {
                part.masked = true;
            }
        }
    }
}

/// Replaces the taxa with the ones at `keep`, in that order.
/// A position may be listed more than once.
pub fn reduce_to_taxa(aln: &mut Alignment, keep: &[usize]) -> Result<()> {
    let len = aln.taxa.len();
    if let Some(&index) = keep.iter().find(|&&i| i >= len) {
        return Err(AlnError::IndexOutOfRange { index, len });
    }
    tracing::info!("Reducing number of taxa to {}", keep.len());

    aln.taxa = keep.iter().map(|&i| aln.taxa[i].clone()).collect();
    Ok(())
}

/// Rebuilds every taxon from the partitions at `order`, in that order.
/// Selected partitions are visible in the result.
pub fn select_partitions(aln: &mut Alignment, order: &[usize]) -> Result<()> {
    for taxon in aln.taxa.iter() {
        let len = taxon.physical_len();
        if let Some(&index) = order.iter().find(|&&i| i >= len) {
            return Err(AlnError::IndexOutOfRange { index, len });
        }
    }
    tracing::info!("Selecting {} partitions", order.len());

    for taxon in aln.taxa.iter_mut() {
        let parts = order
            .iter()
            .map(|&i| taxon.partition_at(i).map(|p| p.unmasked_copy()))
            .collect::<Result<Vec<_>>>()?;
        taxon.replace_partitions(parts);
    }
    Ok(())
}
