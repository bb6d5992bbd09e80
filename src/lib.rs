//! # nowpage
//!
//! Collects recent activity for a "what I'm doing" profile page at build
//! time: films from a Letterboxd diary, books from a Goodreads "read" shelf
//! and repositories from GitHub's public event stream.
//!
//! ## Architecture
//!
//! ```text
//! Config → Source → Fetcher → Normalizer → SourceOutcome → JSON
//! ```
//!
//! The three sources run concurrently and never fail the build: any error
//! is logged and that source contributes an empty list.
//!
//! ## Quick Start
//!
//! ```bash
//! # Write ~/.config/nowpage/config.toml
//! nowpage init
//!
//! # Print all activity
//! GITHUB_USERNAME=octocat nowpage fetch
//!
//! # Write it where the page build picks it up
//! nowpage fetch --output data/activity.json
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires the fetcher to the three
/// sources and runs them together.
pub mod app;

/// Command-line interface using clap.
///
/// - `fetch [--source S] [--output PATH]` - Collect activity as JSON
/// - `init [--force]` - Write a default config file
pub mod cli;

/// Configuration loaded from TOML with environment overrides.
pub mod config;

/// Display records, per-source outcomes and the page document.
pub mod domain;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for GET requests
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// Feed parsing, text scrapes and display dates.
pub mod normalizer;

/// The Letterboxd, Goodreads and GitHub sources.
pub mod sources;
