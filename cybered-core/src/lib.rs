//! Core types for the Cyber Ed website API
//!
//! This crate defines the shared data structures used across the API,
//! primarily the normalized news article shape served to the front end.

pub mod news;

pub use news::{Article, ArticleSource, NewsResponse};
