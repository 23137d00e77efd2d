use super::error::{AlnError, Result};
use super::partition::Partition;

/// One named sequence of an alignment, split into partitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taxon {
    name: String,
    partitions: Vec<Partition>,
    /// Hidden from output and counts when set
    pub masked: bool,
}

impl Taxon {
    pub fn new(name: impl Into<String>, partitions: Vec<Partition>) -> Self {
        Self {
            name: name.into(),
            partitions,
            masked: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of characters in unmasked partitions.
    ///
    /// ```
    /// use parsel::libs::aln::{Partition, Taxon};
    /// let mut taxon = Taxon::new(
    ///     "A",
    ///     vec![Partition::new("ACGT", "p1", "WAG"), Partition::new("GG", "p2", "LG")],
    /// );
    /// assert_eq!(taxon.length(), 6);
    /// taxon.remove_partition(0).unwrap();
    /// assert_eq!(taxon.length(), 2);
    /// assert_eq!(taxon.nr_partitions(), 1);
    /// ```
    pub fn length(&self) -> usize {
        self.visible().map(|p| p.len()).sum()
    }

    /// Number of unmasked partitions
    pub fn nr_partitions(&self) -> usize {
        self.visible().count()
    }

    /// Number of partitions, masked or not
    pub fn physical_len(&self) -> usize {
        self.partitions.len()
    }

    pub fn add_partition(&mut self, partition: Partition) -> &mut Self {
        self.partitions.push(partition);
        self
    }

    /// Masks the partition at `index`. The slot is kept so the partition can be
    /// shown again later.
    pub fn remove_partition(&mut self, index: usize) -> Result<&mut Self> {
        self.partition_at_mut(index)?.masked = true;
        Ok(self)
    }

    pub fn unmask_partition(&mut self, index: usize) -> Result<&mut Self> {
        self.partition_at_mut(index)?.masked = false;
        Ok(self)
    }

    /// The partition at a physical index, regardless of its mask.
    pub fn partition_at(&self, index: usize) -> Result<&Partition> {
        let len = self.partitions.len();
        self.partitions
            .get(index)
            .ok_or(AlnError::IndexOutOfRange { index, len })
    }

    pub fn partition_at_mut(&mut self, index: usize) -> Result<&mut Partition> {
        let len = self.partitions.len();
        self.partitions
            .get_mut(index)
            .ok_or(AlnError::IndexOutOfRange { index, len })
    }

    /// All partitions in physical order
    pub fn partitions(&self) -> impl Iterator<Item = &Partition> {
        self.partitions.iter()
    }

    pub(crate) fn partitions_mut(&mut self) -> impl Iterator<Item = &mut Partition> {
        self.partitions.iter_mut()
    }

    pub(crate) fn replace_partitions(&mut self, partitions: Vec<Partition>) {
        self.partitions = partitions;
    }

    /// Unmasked partitions in physical order
    pub fn visible(&self) -> impl Iterator<Item = &Partition> {
        self.partitions.iter().filter(|p| !p.masked)
    }

    /// Concatenated data of the unmasked partitions
    pub fn visible_data(&self) -> String {
        self.visible().map(|p| p.data()).collect()
    }
}
