use {
    std::path::PathBuf,
    tracing::Level,
    clap::{Parser, Subcommand},
};

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Defaults to `serve`, the lambda runtime starts the bootstrap binary without arguments.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// YAML config file. Without it the counter lives in the default DynamoDB table.
    #[arg(long, env = "VIEWS_COUNTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Overrides the DynamoDB table name from the config file.
    #[arg(long, env = "TABLE_NAME")]
    pub table: Option<String>,

    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: Level,
}

#[derive(Subcommand, Debug, Clone, Copy, Eq, PartialEq)]
pub enum Command {
    /// Serve invocations from the lambda runtime api.
    Serve,
    /// Increment the counter once and print the response.
    Run,
    /// Print the current count without changing it.
    Get,
}

impl Args {
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Serve)
    }
}
