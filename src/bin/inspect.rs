use clap::Parser;

use transcript_fetch::{inspect, utils, Config, InspectArgs, YoutubeTranscriptApi};

#[tokio::main]
async fn main() {
    let args = InspectArgs::parse();

    utils::init_tracing(args.verbose);

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("Ignoring unusable config: {:#}", e);
        Config::default()
    });

    // Client failures surface as "Fetch failed:" lines inside the report
    let api = YoutubeTranscriptApi::new(&config.source);

    let mut stdout = std::io::stdout();
    if let Err(e) = inspect::run(&api, &mut stdout).await {
        tracing::warn!("Failed to write inspection report: {}", e);
    }
}
