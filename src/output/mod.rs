use crate::cli::OutputFormat;

pub mod formatters;

pub use formatters::*;

/// Formatter for the requested output format
pub fn formatter_for(format: OutputFormat, pretty: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter { pretty }),
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Srt => Box::new(SrtFormatter),
        OutputFormat::Vtt => Box::new(WebVttFormatter),
    }
}
