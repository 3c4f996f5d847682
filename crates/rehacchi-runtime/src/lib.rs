//! Rehacchi Runtime — wires extraction, corpus lookups, and reply fusion.

pub mod pipeline;

pub use pipeline::TalkPipeline;
