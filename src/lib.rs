//! # ruku
//!
//! Recall practice for the Qur'an: fetch the opening of a random ruku from
//! the alquran.cloud API and continue reciting from memory.
//!
//! ## Architecture
//!
//! ```text
//! Fetcher → Normalizer → Picker → CLI / TUI
//! ```
//!
//! - [`fetcher`]: HTTP transport and endpoint URLs
//! - [`normalizer`]: Decodes API envelopes into domain values
//! - [`picker`]: Random ruku selection, whole text or within a range
//! - [`quiz`]: Reveal cursor, hint, mistake counter and report
//! - [`tui`]: Terminal quiz screen built with ratatui
//!
//! ## Quick Start
//!
//! ```bash
//! # Opening verse of a random ruku
//! ruku
//!
//! # Quiz restricted to Surah Al-Baqara
//! ruku quiz --from 2:1 --to 2:286
//! ```

/// Application context and error handling.
pub mod app;

/// Surah search, reference resolution and global ayah ids.
pub mod catalogue;

/// Command-line interface using clap.
///
/// - `random` - Print the opening verse of a random ruku (default)
/// - `surah <query>` - Search surahs
/// - `locate <SURAH:AYAH>` - Global id and ruku of an ayah
/// - `quiz [--from REF --to REF]` - Interactive quiz
pub mod cli;

/// Configuration loaded from `~/.config/ruku/config.toml`.
pub mod config;

/// Core domain models: [`Surah`](domain::Surah), [`Ayah`](domain::Ayah),
/// [`Ruku`](domain::Ruku) and [`Passage`](domain::Passage).
pub mod domain;

/// HTTP fetching.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait returning raw bodies
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// English and Arabic UI strings.
pub mod i18n;

pub mod normalizer;

pub mod picker;

/// Quiz session state and the end-of-quiz report.
pub mod quiz;

/// Terminal user interface.
pub mod tui;
