use async_trait::async_trait;
use std::path::PathBuf;
use yt_transcript_rs::api::YouTubeTranscriptApi as UpstreamApi;
use yt_transcript_rs::FetchedTranscript;

use super::{Transcript, TranscriptSegment, TranscriptSource, GET_TRANSCRIPT};
use crate::config::SourceConfig;
use crate::cookies::CookieJar;
use crate::{Result, TranscriptError};

/// Operations offered by this client, as reported to the inspector
const CAPABILITIES: &[&str] = &["list_transcripts", "fetch_transcript", GET_TRANSCRIPT];

/// `TranscriptSource` backed by the `yt-transcript-rs` client
pub struct YoutubeTranscriptApi {
    languages: Vec<String>,
    preserve_formatting: bool,
}

impl YoutubeTranscriptApi {
    pub fn new(config: &SourceConfig) -> Self {
        Self {
            languages: config.languages.clone(),
            preserve_formatting: config.preserve_formatting,
        }
    }
}

#[async_trait(?Send)]
impl TranscriptSource for YoutubeTranscriptApi {
    fn capabilities(&self) -> Result<Vec<String>> {
        Ok(CAPABILITIES.iter().map(|s| s.to_string()).collect())
    }

    async fn get_transcript(&self, video_id: &str, cookies: Option<PathBuf>) -> Result<Transcript> {
        check_video_id(video_id)?;

        if let Some(path) = &cookies {
            let jar = CookieJar::load(path)?;
            tracing::debug!("Authenticating with cookies: {}", jar.names().join(", "));
        }

        let api = UpstreamApi::new(cookies.as_deref(), None, None).map_err(|e| fetch_failed(video_id, e))?;

        let languages: Vec<&str> = self.languages.iter().map(String::as_str).collect();
        let fetched = api
            .fetch_transcript(video_id, &languages, self.preserve_formatting)
            .await
            .map_err(|e| fetch_failed(video_id, e))?;

        Ok(into_transcript(fetched))
    }
}

/// Bare ids only; a pasted watch URL is the usual mistake
fn check_video_id(video_id: &str) -> Result<()> {
    if video_id.starts_with("http://") || video_id.starts_with("https://") {
        return Err(TranscriptError::InvalidVideoId(video_id.to_string()).into());
    }
    Ok(())
}

fn fetch_failed(video_id: &str, err: impl std::fmt::Display) -> anyhow::Error {
    TranscriptError::FetchFailed {
        video_id: video_id.to_string(),
        reason: err.to_string(),
    }
    .into()
}

fn into_transcript(fetched: FetchedTranscript) -> Transcript {
    let segments = fetched
        .snippets
        .into_iter()
        .map(|s| TranscriptSegment::new(s.text, s.start, s.duration))
        .collect();

    Transcript {
        video_id: fetched.video_id,
        language: fetched.language,
        language_code: fetched.language_code,
        is_generated: fetched.is_generated,
        segments,
    }
}
