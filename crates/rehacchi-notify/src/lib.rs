//! Rehacchi Notify — hands link slots off to the chat channel.

pub mod slack;

pub use slack::SlackNotifier;
