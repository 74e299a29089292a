use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tunnelgate_core::cli::{check::check, simulate::simulate};
use tunnelgate_core::logging::{LogFormat, default_log_format, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "tunnelgate",
    version,
    about = "tunnelgate: concurrent CONNECT tunnel admission control"
)]
struct Cli {
    /// Force JSON log output even on a terminal
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load and validate a tunnelgate config
    Check {
        /// Config file, or a directory containing tunnelgate.hcl
        #[arg(long, default_value = "config")]
        config: PathBuf,
    },

    /// Race concurrent callers against a gate and print the outcome as JSON
    Simulate {
        /// Gate capacity; zero or negative disables limiting
        #[arg(long, allow_negative_numbers = true)]
        max: i64,

        /// Number of concurrent callers, each acquiring once
        #[arg(long, default_value_t = 100)]
        callers: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        default_log_format()
    };
    init_logging(format);

    match cli.command {
        Command::Check { config } => check(&config),
        Command::Simulate { max, callers } => simulate(max, callers),
    }
}
