//! Remote API client implementation

pub mod client;

pub use client::SentryApiClient;
