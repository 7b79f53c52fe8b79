//! Standalone diagnostic: what can the transcript client do, and does an
//! unauthenticated fetch work from this machine?

use std::io::Write;

use crate::source::{TranscriptSource, GET_TRANSCRIPT};

/// Video fetched by the inspector
pub const INSPECT_VIDEO_ID: &str = "gX8s25991ac";

/// Run the inspection, writing the report to `out`. Failures of the client
/// are reported as text; only write errors are returned.
pub async fn run(source: &dyn TranscriptSource, out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "Inspecting YouTubeTranscriptApi...")?;

    match source.capabilities() {
        Ok(capabilities) => {
            writeln!(out, "{:?}", capabilities)?;
            if capabilities.iter().any(|c| c == GET_TRANSCRIPT) {
                writeln!(out, "{} method exists.", GET_TRANSCRIPT)?;
            } else {
                writeln!(out, "{} method MISSING.", GET_TRANSCRIPT)?;
            }
        }
        Err(e) => writeln!(out, "Error inspecting: {:#}", e)?,
    }

    writeln!(out, "Attempting fetch without cookies...")?;
    match source.get_transcript(INSPECT_VIDEO_ID, None).await {
        Ok(transcript) => {
            tracing::debug!("Inspection fetch returned {} segments", transcript.len());
            writeln!(out, "Success! (No cookies needed?)")?;
        }
        Err(e) => writeln!(out, "Fetch failed: {:#}", e)?,
    }

    Ok(())
}
