pub mod extract;
pub mod mask;

use super::error::Result;
use super::taxon::Taxon;
use crate::libs::sample::SampleConfig;
use itertools::Itertools;
use rand::Rng;

/// A matrix of taxa by partitions.
///
/// Every taxon is expected to hold the same partitions in the same order. The
/// operations below rely on it without checking.
///
/// All transformations work in place and return `&mut Self`, so they can be
/// chained. Masking only toggles visibility; `reduce_to_taxa` and
/// `select_partitions` replace the underlying lists.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Alignment {
    taxa: Vec<Taxon>,
}

impl Alignment {
    pub fn new(taxa: Vec<Taxon>) -> Self {
        Self { taxa }
    }

    /// Unmasked partitions of the first taxon
    pub fn nr_partitions(&self) -> usize {
        self.taxa.first().map_or(0, |t| t.nr_partitions())
    }

    /// Unmasked taxa
    pub fn nr_taxa(&self) -> usize {
        self.visible_taxa().count()
    }

    /// Partition slots of the first taxon, masked or not
    pub fn physical_partitions(&self) -> usize {
        self.taxa.first().map_or(0, |t| t.physical_len())
    }

    /// Number of visible columns
    pub fn columns(&self) -> usize {
        self.taxa.first().map_or(0, |t| t.length())
    }

    /// All taxa in physical order, masked or not
    pub fn taxa(&self) -> &[Taxon] {
        &self.taxa
    }

    pub fn visible_taxa(&self) -> impl Iterator<Item = &Taxon> {
        self.taxa.iter().filter(|t| !t.masked)
    }

    pub fn taxon_named(&self, name: &str) -> Option<&Taxon> {
        self.taxa.iter().find(|t| t.name() == name)
    }

    /// Physical indices of the partitions the first taxon still shows.
    pub fn visible_partition_indices(&self) -> Vec<usize> {
        match self.taxa.first() {
            Some(taxon) => taxon.partitions().positions(|p| !p.masked).collect(),
            None => vec![],
        }
    }

    pub(crate) fn into_taxa(self) -> Vec<Taxon> {
        self.taxa
    }

    // --- Delegation to mask ---

    pub fn mask_partitions(&mut self, indices: &[usize]) -> &mut Self {
        mask::mask_partitions(self, indices);
        self
    }

    pub fn unmask_partitions(&mut self, indices: &[usize]) -> &mut Self {
        mask::unmask_partitions(self, indices);
        self
    }

    pub fn mask_taxa(&mut self, indices: &[usize]) -> &mut Self {
        mask::mask_taxa(self, indices);
        self
    }

    pub fn unmask_all(&mut self) -> &mut Self {
        mask::unmask_all(self);
        self
    }

    pub fn keep_taxa_at(&mut self, positions: &[usize]) -> &mut Self {
        mask::keep_taxa_at(self, positions);
        self
    }

    pub fn keep_taxa_named<S: AsRef<str>>(&mut self, names: &[S]) -> &mut Self {
        mask::keep_taxa_named(self, names);
        self
    }

    pub fn reduce_to_partitions(&mut self, keep: &[usize]) -> &mut Self {
        mask::reduce_to_partitions(self, keep);
        self
    }

    pub fn reduce_to_taxa(&mut self, keep: &[usize]) -> Result<&mut Self> {
        mask::reduce_to_taxa(self, keep)?;
        Ok(self)
    }

    pub fn select_partitions(&mut self, order: &[usize]) -> Result<&mut Self> {
        mask::select_partitions(self, order)?;
        Ok(self)
    }

    // --- Delegation to extract ---

    /// Keeps `count` random partitions, redrawing while some visible taxon gets
    /// only gaps or only unknowns. Returns the accepted physical indices.
    pub fn extract_random<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        config: SampleConfig,
        rng: &mut R,
    ) -> Result<Vec<usize>> {
        extract::extract_random(self, count, config, rng)
    }

    pub fn extract_random_taxa<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<usize>> {
        extract::extract_random_taxa(self, count, rng)
    }

    pub fn extract_by_completeness(&mut self, threshold: usize) -> Vec<usize> {
        extract::extract_by_completeness(self, threshold)
    }
}
