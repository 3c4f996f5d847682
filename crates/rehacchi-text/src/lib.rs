//! Rehacchi Text — heuristic keyword extraction and text shaping for
//! Japanese utterances.

pub mod keywords;
pub mod shaping;

pub use keywords::extract_keywords;
