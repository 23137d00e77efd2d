pub mod aln;
pub mod io;
pub mod phylip;
pub mod sample;
