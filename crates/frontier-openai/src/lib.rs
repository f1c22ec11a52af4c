mod adapter;
mod model_map;
mod provider_impl;

pub use adapter::{OpenAiAdapter, OpenAiAdapterBuilder};
pub mod api;
mod client;
pub use client::OpenAiClient;
pub mod error;
