use super::alignment::Alignment;
use super::error::{AlnError, Result};

/// Glues alignments that list the same taxa in the same order.
///
/// The first alignment is the seed. Each later alignment contributes its first
/// partition to the taxon at the same position. Names are not compared; the
/// caller decides the order of `sources`, which becomes the partition order.
///
/// ```
/// use parsel::libs::aln::{glue, Alignment, Partition, Taxon};
/// let aln = |a: &str, b: &str| {
///     Alignment::new(vec![
///         Taxon::new("A", vec![Partition::new(a, "p", "WAG")]),
///         Taxon::new("B", vec![Partition::new(b, "p", "WAG")]),
///     ])
/// };
/// let glued = glue(vec![aln("ACGT", "TTTT"), aln("GGGG", "CCCC")]).unwrap();
/// assert_eq!(glued.taxa()[0].visible_data(), "ACGTGGGG");
/// assert_eq!(glued.taxa()[1].visible_data(), "TTTTCCCC");
/// ```
pub fn glue(sources: Vec<Alignment>) -> Result<Alignment> {
    let mut sources = sources.into_iter();
    let mut taxa = sources.next().ok_or(AlnError::EmptyInput)?.into_taxa();

    for (k, source) in sources.enumerate() {
        // first slot missing on either side
        if source.taxa().len() != taxa.len() {
            return Err(AlnError::IndexOutOfRange {
                index: source.taxa().len().min(taxa.len()),
                len: source.taxa().len(),
            });
        }
        if source.physical_partitions() > 1 {
            tracing::warn!(
                "Source {} has {} partitions, only the first one is glued",
                k + 1,
                source.physical_partitions()
            );
        }

        for (j, taxon) in taxa.iter_mut().enumerate() {
            let part = source.taxa()[j].partition_at(0)?.clone();
            taxon.add_partition(part);
        }
    }

    Ok(Alignment::new(taxa))
}
