//! transcript-fetch - fetch YouTube caption transcripts from the command line
//!
//! The crate exposes a [`TranscriptSource`] seam with a YouTube implementation,
//! a Netscape `cookies.txt` loader for authenticated fetches, and formatters
//! that render a transcript as JSON, plain text, SRT or WebVTT. Two binaries
//! sit on top: `fetch-transcript` and the `inspect-transcript-api` diagnostic.

use std::path::PathBuf;

pub mod cli;
pub mod config;
pub mod cookies;
pub mod fetch;
pub mod inspect;
pub mod output;
pub mod source;
pub mod utils;

pub use cli::{FetchArgs, InspectArgs, OutputFormat};
pub use config::Config;
pub use cookies::{resolve_cookie_path, CookieJar};
pub use output::formatters::Formatter;
pub use source::{Transcript, TranscriptSegment, TranscriptSource, YoutubeTranscriptApi};

/// Result type used throughout the library
pub type Result<T> = anyhow::Result<T>;

/// Reasons a transcript could not be retrieved
#[derive(thiserror::Error, Debug)]
pub enum TranscriptError {
    #[error("Invalid video id {0:?}: pass the bare id (e.g. `gX8s25991ac`), not a URL")]
    InvalidVideoId(String),

    #[error("Cookie file not found: {}", .0.display())]
    CookiePathInvalid(PathBuf),

    #[error("No usable cookies in {}: the file may be expired or not in Netscape format", .0.display())]
    CookiesInvalid(PathBuf),

    #[error("Could not retrieve a transcript for {video_id}: {reason}")]
    FetchFailed { video_id: String, reason: String },
}
