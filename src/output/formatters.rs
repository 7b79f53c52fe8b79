use anyhow::{Context, Result};

use crate::source::{Transcript, TranscriptSegment};
use crate::utils::format_timestamp;

/// Renders a transcript as text
pub trait Formatter {
    fn format_transcript(&self, transcript: &Transcript) -> Result<String>;
}

/// JSON array of `{text, start, duration}` objects
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonFormatter {
    pub pretty: bool,
}

impl Formatter for JsonFormatter {
    fn format_transcript(&self, transcript: &Transcript) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(&transcript.segments)
        } else {
            serde_json::to_string(&transcript.segments)
        };
        json.context("Failed to serialize transcript")
    }
}

/// Caption text only, one segment per line
#[derive(Debug, Default, Clone, Copy)]
pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format_transcript(&self, transcript: &Transcript) -> Result<String> {
        Ok(transcript
            .segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SrtFormatter;

impl Formatter for SrtFormatter {
    fn format_transcript(&self, transcript: &Transcript) -> Result<String> {
        let cues = cues(&transcript.segments)
            .enumerate()
            .map(|(i, (segment, end))| {
                format!(
                    "{}\n{} --> {}\n{}\n",
                    i + 1,
                    format_timestamp(segment.start, ','),
                    format_timestamp(end, ','),
                    segment.text
                )
            })
            .collect::<Vec<_>>();

        Ok(cues.join("\n"))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct WebVttFormatter;

impl Formatter for WebVttFormatter {
    fn format_transcript(&self, transcript: &Transcript) -> Result<String> {
        let mut out = String::from("WEBVTT\n\n");
        let cues = cues(&transcript.segments)
            .map(|(segment, end)| {
                format!(
                    "{} --> {}\n{}\n",
                    format_timestamp(segment.start, '.'),
                    format_timestamp(end, '.'),
                    segment.text
                )
            })
            .collect::<Vec<_>>();
        out.push_str(&cues.join("\n"));

        Ok(out)
    }
}

/// Pair each segment with its cue end: its own end, cut off where the next one starts
fn cues(segments: &[TranscriptSegment]) -> impl Iterator<Item = (&TranscriptSegment, f64)> {
    segments.iter().enumerate().map(move |(i, segment)| {
        let end = match segments.get(i + 1) {
            Some(next) if next.start < segment.end() => next.start,
            _ => segment.end(),
        };
        (segment, end)
    })
}
