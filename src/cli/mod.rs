use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fetch-transcript",
    about = "Fetch the caption transcript of a YouTube video",
    version,
    long_about = "Fetch the caption transcript of a YouTube video and print it to stdout. A Netscape cookies.txt jar in the working directory is used for authentication when present."
)]
pub struct FetchArgs {
    /// Video id to fetch (defaults to a sample TED talk)
    #[arg(value_name = "VIDEO_ID")]
    pub video_id: Option<String>,

    /// Cookie jar to authenticate with, used only if the file exists
    #[arg(short, long, value_name = "FILE", env = "TRANSCRIPT_COOKIES")]
    pub cookies: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Indent JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Caption language in priority order (repeatable, overrides config)
    #[arg(short, long = "language", value_name = "LANG")]
    pub languages: Vec<String>,

    /// Keep inline formatting tags such as <i> in caption text
    #[arg(long)]
    pub preserve_formatting: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable progress indicators
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Parser, Debug)]
#[command(
    name = "inspect-transcript-api",
    about = "Report the transcript client's capabilities and try one unauthenticated fetch",
    version
)]
pub struct InspectArgs {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON array of {text, start, duration}
    Json,
    /// Plain text, one caption per line
    Text,
    /// SRT subtitle format
    Srt,
    /// WebVTT format
    Vtt,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Srt => write!(f, "srt"),
            OutputFormat::Vtt => write!(f, "vtt"),
        }
    }
}
