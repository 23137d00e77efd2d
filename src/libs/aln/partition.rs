/// Gap symbol
pub const GAP: char = '-';
/// Unknown character symbol
pub const UNKNOWN: char = 'X';

/// Returns `true` if `data` holds anything besides gaps and unknowns.
///
/// ```
/// use parsel::libs::aln::partition::is_informative;
/// assert!(is_informative("--A-"));
/// assert!(!is_informative("-X--X"));
/// assert!(!is_informative(""));
/// ```
pub fn is_informative(data: &str) -> bool {
    data.chars().any(|c| c != GAP && c != UNKNOWN)
}

/// Returns `true` if `data` is made of gaps only, or of unknowns only.
///
/// A mix of both is not blank.
///
/// ```
/// use parsel::libs::aln::partition::is_blank;
/// assert!(is_blank("----"));
/// assert!(is_blank("XXX"));
/// assert!(is_blank(""));
/// assert!(!is_blank("-X-X"));
/// assert!(!is_blank("--A-"));
/// ```
pub fn is_blank(data: &str) -> bool {
    data.chars().all(|c| c == GAP) || data.chars().all(|c| c == UNKNOWN)
}

/// A named column range of one sequence, tagged with a substitution model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    model: String,
    name: String,
    data: String,
    /// Hidden from output and counts when set
    pub masked: bool,
}

impl Partition {
    pub fn new(data: impl Into<String>, name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            name: name.into(),
            data: data.into(),
            masked: false,
        }
    }

    /// Creates a partition whose name records its original 1-based column range.
    ///
    /// ```
    /// use parsel::libs::aln::Partition;
    /// let p = Partition::with_range("ACGT", "gene1", 11, 14, "WAG");
    /// assert_eq!(p.name(), "gene1.11-14");
    /// ```
    pub fn with_range(
        data: impl Into<String>,
        name: &str,
        start: usize,
        end: usize,
        model: impl Into<String>,
    ) -> Self {
        Self::new(data, format!("{}.{}-{}", name, start, end), model)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_informative(&self) -> bool {
        is_informative(&self.data)
    }

    /// A visible copy with the same model, name and data
    pub fn unmasked_copy(&self) -> Self {
        Self {
            masked: false,
            ..self.clone()
        }
    }
}
