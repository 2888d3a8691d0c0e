use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// TOML config file. Defaults to $REELBOT_CONFIG, then ./reelbot.toml when present.
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(flatten)]
    pub run: RunArgs,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct RunArgs {
    /// JSON array of video file ids (overrides config).
    #[arg(long, global = true)]
    pub catalog: Option<String>,

    /// Pause between polls in milliseconds (overrides config).
    #[arg(long, global = true)]
    pub poll_interval_ms: Option<u64>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Poll for updates and answer /start and /video (the default).
    Run,
}
