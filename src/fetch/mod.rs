//! The fetcher flow: resolve the cookie jar, fetch, format.

use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::FetchArgs;
use crate::config::Config;
use crate::cookies::resolve_cookie_path;
use crate::output::{formatter_for, Formatter};
use crate::source::TranscriptSource;
use crate::Result;

/// What a single fetch will do, after CLI arguments are merged over config
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub video_id: String,

    /// Cookie jar path, present only if the file exists
    pub cookies: Option<PathBuf>,
}

impl FetchRequest {
    /// Resolve the video id and cookie jar from arguments and configuration
    pub fn resolve(args: &FetchArgs, config: &Config) -> Self {
        let video_id = args
            .video_id
            .clone()
            .unwrap_or_else(|| config.fetch.default_video_id.clone());

        let cookies_path = args
            .cookies
            .clone()
            .unwrap_or_else(|| config.fetch.cookies_path.clone());

        Self {
            video_id,
            cookies: resolve_cookie_path(&cookies_path),
        }
    }
}

/// Apply CLI overrides to the configuration
pub fn apply_overrides(args: &FetchArgs, config: &mut Config) {
    if !args.languages.is_empty() {
        config.source.languages = args.languages.clone();
    }
    if args.preserve_formatting {
        config.source.preserve_formatting = true;
    }
    if args.pretty {
        config.fetch.pretty_json = true;
    }
}

/// Fetch a transcript and render it; any failure aborts with no partial output
pub async fn fetch_formatted(
    source: &dyn TranscriptSource,
    request: &FetchRequest,
    formatter: &dyn Formatter,
) -> Result<String> {
    let cookies_display = request
        .cookies
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "None".to_string());
    tracing::info!(
        "Fetching transcript for {} using cookies: {}",
        request.video_id,
        cookies_display
    );

    let transcript = source
        .get_transcript(&request.video_id, request.cookies.clone())
        .await?;

    tracing::info!(
        "Fetched {} segments ({}, {})",
        transcript.len(),
        transcript.language,
        transcript.language_code
    );

    formatter.format_transcript(&transcript)
}

/// Run the fetcher for parsed arguments and return the text to print
pub async fn run(source: &dyn TranscriptSource, args: &FetchArgs, config: &Config) -> Result<String> {
    let request = FetchRequest::resolve(args, config);
    let formatter = formatter_for(args.format, config.fetch.pretty_json);

    let progress = if args.quiet {
        ProgressBar::hidden()
    } else {
        let progress = ProgressBar::new_spinner();
        progress.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        progress.enable_steady_tick(Duration::from_millis(100));
        progress
    };
    progress.set_message(format!("Fetching transcript for {}...", request.video_id));

    let result = fetch_formatted(source, &request, formatter.as_ref()).await;
    progress.finish_and_clear();

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::output::{JsonFormatter, TextFormatter};
    use crate::source::{MockTranscriptSource, Transcript, TranscriptSegment};
    use crate::TranscriptError;
    use clap::Parser;
    use mockall::predicate::eq;

    fn transcript(video_id: &str) -> Transcript {
        Transcript {
            video_id: video_id.to_string(),
            language: "English".to_string(),
            language_code: "en".to_string(),
            is_generated: false,
            segments: vec![
                TranscriptSegment::new("Hello", 0.0, 1.5),
                TranscriptSegment::new("world", 1.5, 2.0),
            ],
        }
    }

    fn args(argv: &[&str]) -> FetchArgs {
        let mut full = vec!["fetch-transcript", "--quiet"];
        full.extend_from_slice(argv);
        FetchArgs::try_parse_from(full).unwrap()
    }

    fn config_with_cookies(path: PathBuf) -> Config {
        let mut config = Config::default();
        config.fetch.cookies_path = path;
        config
    }

    #[test]
    fn test_missing_cookie_file_resolves_to_none() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_with_cookies(dir.path().join("cookies.txt"));

        let request = FetchRequest::resolve(&args(&["abc"]), &config);
        assert_eq!(request.video_id, "abc");
        assert_eq!(request.cookies, None);
    }

    #[test]
    fn test_present_cookie_file_is_passed_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cookies.txt");
        fs_err::write(&path, "# Netscape HTTP Cookie File\n").unwrap();
        let config = config_with_cookies(path.clone());

        let request = FetchRequest::resolve(&args(&[]), &config);
        assert_eq!(request.cookies, Some(path));
    }

    #[test]
    fn test_cli_cookie_path_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("other.txt");
        fs_err::write(&path, "").unwrap();
        let config = config_with_cookies(dir.path().join("cookies.txt"));

        let request = FetchRequest::resolve(&args(&["--cookies", path.to_str().unwrap()]), &config);
        assert_eq!(request.cookies, Some(path));
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = Config::default();
        apply_overrides(&args(&["-l", "de", "--pretty", "--preserve-formatting"]), &mut config);
        assert_eq!(config.source.languages, vec!["de".to_string()]);
        assert!(config.source.preserve_formatting);
        assert!(config.fetch.pretty_json);
    }

    #[tokio::test]
    async fn test_default_video_id_reaches_source() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_with_cookies(dir.path().join("cookies.txt"));

        let mut source = MockTranscriptSource::new();
        source
            .expect_get_transcript()
            .with(eq("gX8s25991ac"), eq(None::<PathBuf>))
            .times(1)
            .returning(|id, _| Ok(transcript(id)));

        let output = run(&source, &args(&[]), &config).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_cookie_path_reaches_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cookies.txt");
        fs_err::write(&path, "").unwrap();
        let config = config_with_cookies(path.clone());

        let mut source = MockTranscriptSource::new();
        source
            .expect_get_transcript()
            .with(eq("abc"), eq(Some(path)))
            .times(1)
            .returning(|id, _| Ok(transcript(id)));

        let output = run(&source, &args(&["abc", "--format", "text"]), &config)
            .await
            .unwrap();
        assert_eq!(output, "Hello\nworld");
    }

    #[tokio::test]
    async fn test_fetch_error_propagates_without_output() {
        let mut source = MockTranscriptSource::new();
        source.expect_get_transcript().returning(|id, _| {
            Err(TranscriptError::FetchFailed {
                video_id: id.to_string(),
                reason: "Video unavailable".to_string(),
            }
            .into())
        });

        let request = FetchRequest {
            video_id: "nope".to_string(),
            cookies: None,
        };
        let err = fetch_formatted(&source, &request, &JsonFormatter::default())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Could not retrieve a transcript for nope: Video unavailable");
    }

    #[tokio::test]
    async fn test_formatter_is_applied() {
        let mut source = MockTranscriptSource::new();
        source
            .expect_get_transcript()
            .returning(|id, _| Ok(transcript(id)));

        let request = FetchRequest {
            video_id: "abc".to_string(),
            cookies: None,
        };
        let text = fetch_formatted(&source, &request, &TextFormatter).await.unwrap();
        assert_eq!(text, "Hello\nworld");
        assert_eq!(formatter_for(OutputFormat::Text, false).format_transcript(&transcript("x")).unwrap(), text);
    }
}
