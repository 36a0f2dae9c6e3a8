//! Upstream news client and normalization pipeline for the Cyber Ed site
//!
//! This crate fetches cybersecurity news from the upstream "everything"
//! search endpoint, drops redacted or untitled entries, and substitutes a
//! deterministic local fallback image for articles that arrive without one.

pub mod client;
pub mod error;
pub mod fallback;
pub mod normalize;
pub mod types;

pub use client::NewsApiClient;
pub use error::NewsError;
pub use fallback::fallback_image;
pub use normalize::normalize;
