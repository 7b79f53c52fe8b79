use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod youtube;

pub use youtube::YoutubeTranscriptApi;

use crate::Result;

/// Name of the capability the inspector looks for
pub const GET_TRANSCRIPT: &str = "get_transcript";

/// Individual caption unit with timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Caption text
    pub text: String,

    /// Start offset in seconds
    pub start: f64,

    /// Duration in seconds
    pub duration: f64,
}

impl TranscriptSegment {
    pub fn new(text: impl Into<String>, start: f64, duration: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration,
        }
    }

    /// Offset in seconds where this segment stops being shown
    pub fn end(&self) -> f64 {
        self.start + self.duration
    }
}

/// A fetched transcript: ordered segments plus the track they came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub video_id: String,

    /// Human readable track name, e.g. "English (auto-generated)"
    pub language: String,

    pub language_code: String,

    /// Whether the track was produced by speech recognition
    pub is_generated: bool,

    pub segments: Vec<TranscriptSegment>,
}

impl Transcript {
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Anything able to produce a transcript for a video id
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait TranscriptSource {
    /// Names of the operations this client offers. The list is declared by
    /// each implementation, not discovered at runtime.
    fn capabilities(&self) -> Result<Vec<String>>;

    /// Fetch the transcript of `video_id`, authenticating with the cookie
    /// file at `cookies` when one is given
    async fn get_transcript(&self, video_id: &str, cookies: Option<PathBuf>) -> Result<Transcript>;
}
