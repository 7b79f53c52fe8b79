use anyhow::Result;
use clap::Parser;

use transcript_fetch::fetch::{self, apply_overrides};
use transcript_fetch::{utils, Config, FetchArgs, YoutubeTranscriptApi};

#[tokio::main]
async fn main() {
    let args = FetchArgs::parse();

    utils::init_tracing(args.verbose);

    // Every failure ends up here: one message on stdout, exit status 1
    if let Err(e) = run(&args).await {
        println!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(args: &FetchArgs) -> Result<()> {
    let mut config = Config::load()?;
    apply_overrides(args, &mut config);

    let api = YoutubeTranscriptApi::new(&config.source);
    let output = fetch::run(&api, args, &config).await?;

    println!("{}", output);
    Ok(())
}
