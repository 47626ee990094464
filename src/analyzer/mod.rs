pub mod normalizer;
pub mod statistics;

pub use normalizer::normalize;
pub use statistics::{analyze, Statistics, WordCount, DEFAULT_TOP_N};
