use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlnError {
    /// A partition or taxon index outside the physical layout
    IndexOutOfRange {
        /// The offending index
        index: usize,
        /// Number of physical slots available
        len: usize,
    },
    /// Malformed PHYLIP or partition-map input
    Parse {
        /// The line number (1-based)
        line: usize,
        /// A human-readable message explaining the error
        message: String,
    },
    /// A distinct draw asked for more items than there are
    SampleTooLarge { count: usize, available: usize },
    /// Every attempt of a bounded rejection loop was rejected
    NoValidDraw { attempts: usize },
    /// An operation that needs at least one alignment got none
    EmptyInput,
}

impl fmt::Display for AlnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlnError::IndexOutOfRange { index, len } => {
                write!(f, "Index {} out of range for length {}", index, len)
            }
            AlnError::Parse { line, message } => {
                write!(f, "Parse error at line {}: {}", line, message)
            }
            AlnError::SampleTooLarge { count, available } => write!(
                f,
                "Cannot draw {} distinct items out of {} available",
                count, available
            ),
            AlnError::NoValidDraw { attempts } => write!(
                f,
                "No draw without empty taxa found in {} attempts",
                attempts
            ),
            AlnError::EmptyInput => write!(f, "No alignment given"),
        }
    }
}

impl std::error::Error for AlnError {}

pub type Result<T> = std::result::Result<T, AlnError>;
