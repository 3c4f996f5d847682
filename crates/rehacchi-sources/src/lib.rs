//! Rehacchi Sources — corpus adapters that speak XML over HTTP.

pub mod client;
pub mod reference;
pub mod wikipedia;
pub mod wikitext;
mod xml;

pub use reference::ReferenceSource;
pub use wikipedia::WikipediaSource;
