use clap::Parser;
use git_needle::cli::args::Args;
use git_needle::commands;
use git_needle::config::Config;
use git_needle::infrastructure::setup_logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut config = Config::new();

    config.update_from_args(&args);
    setup_logging(config.logging())?;
    config.apply_color();

    commands::route_command(&args, &config).await
}
