pub mod alignment;
pub mod error;
pub mod merge;
pub mod partition;
pub mod taxon;

pub use alignment::Alignment;
pub use error::AlnError;
pub use merge::glue;
pub use partition::Partition;
pub use taxon::Taxon;
