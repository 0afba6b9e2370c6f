use clap::Parser;
use tracing::Level;
use tracing_unwrap::ResultExt;

mod cli;
mod command;
mod config;
mod discord;
mod policy;

#[tokio::main]
#[tracing::instrument]
async fn main() {
    let args = cli::Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(true)
        .with_max_level(if args.debug {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    let config = config::Config::from_env().expect_or_log("Invalid configuration");
    discord::run(config, &args.prefix).await;
}
