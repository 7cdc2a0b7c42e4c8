use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod command;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[arg(long = "log-level", global = true, default_value = "info")]
    /// Log filter, overridden by RUST_LOG
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Feed random data through a bounded heap and check the drained order
    Demo(command::DemoCMD),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    let result = match cli.command {
        Commands::Demo(mut cmd) => cmd.try_execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    return ExitCode::SUCCESS;
}
