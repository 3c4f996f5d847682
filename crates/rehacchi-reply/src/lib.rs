//! Rehacchi Reply — template pools and the response fusion engine.

pub mod engine;
pub mod templates;
pub mod utterance;

pub use engine::ReplyEngine;
pub use templates::{ReplyTemplates, TemplatePair};
pub use utterance::Utterance;
