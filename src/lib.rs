//! # Lectern
//!
//! A terminal utility for a small data-and-reading workflow:
//!
//! 1. Fetch a fixed JSON feed of posts and store it in SQLite.
//! 2. Chart aggregations of the stored posts (posts per user, average
//!    body length per user) in a TUI.
//! 3. Scrape a public-domain book page for title/author/cover and
//!    assemble an HTML reading report.
//! 4. Analyze a plain-text book: first-chapter extraction and a
//!    paragraph word-count histogram.
//!
//! ## Architecture
//!
//! ```text
//! Fetcher → Store → Stats → TUI/CLI
//! Fetcher → Book  → Report
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! # Download the feed into the local store
//! lectern fetch
//!
//! # Print per-user aggregates
//! lectern stats
//!
//! # Build a reading report from a Gutenberg page
//! lectern report https://www.gutenberg.org/cache/epub/1342/pg1342-images.html --author "R. Reader"
//!
//! # Launch the TUI
//! lectern tui
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together store,
/// feed client, and configuration.
pub mod app;

/// Book metadata and chapter extraction.
///
/// Pure transforms over raw book text and downloaded HTML pages:
/// `Title:`/`Author:` header matching, first-chapter splitting,
/// `<title>`-element scraping, cover URL resolution.
pub mod book;

/// Command-line interface using clap.
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/lectern/config.toml`: feed URL, duplicate-id
/// ingestion policy, report defaults.
pub mod config;

/// Core domain models.
///
/// - [`Post`](domain::Post): one feed record
/// - [`ChapterDocument`](domain::ChapterDocument): extracted chapter text
pub mod domain;

/// HTTP fetching.
///
/// - [`FeedSource`](fetcher::FeedSource): async trait for the post feed
/// - [`HttpFetcher`](fetcher::HttpFetcher): reqwest-based implementation,
///   also used for book pages and cover images
pub mod fetcher;

/// Reading-report document assembly (self-contained HTML).
pub mod report;

/// Aggregations: per-user counts and averages, paragraph word-count
/// bucketing, histograms.
pub mod stats;

/// SQLite persistence layer.
///
/// - [`Store`](store::Store): trait defining storage operations
/// - [`SqliteStore`](store::SqliteStore): SQLite implementation
/// - [`DuplicatePolicy`](store::DuplicatePolicy): duplicate-id handling
pub mod store;

/// Terminal user interface.
///
/// Two-pane layout built with ratatui: posts list and a bar chart that
/// toggles between aggregations. Keybindings: j/k navigate, Tab cycles
/// panes, d downloads the feed, c clears the store, g toggles the
/// chart, q quits.
pub mod tui;
