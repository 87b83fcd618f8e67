//! Chat-completion client.
//!
//! Implements the `CompletionClient` trait against an OpenAI-style
//! `/v1/chat/completions` endpoint in instruct mode, as served by
//! text-generation-webui and compatible servers.

mod api;
mod client;
mod config;
mod request;


pub use client::HttpCompletionClient;
pub use config::CompletionConfig;
pub use request::{CompletionRequest, RequestMessage};
