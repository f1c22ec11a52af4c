mod adapter;
mod model_map;
mod provider_impl;

pub use adapter::{AnthropicAdapter, AnthropicAdapterBuilder};
pub mod api;
mod client;
pub use client::AnthropicClient;
pub mod error;
