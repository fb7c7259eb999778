use anyhow::Result;
use cambio::core::log::init_logging;
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert an amount between currencies
    Convert {
        /// Amount to convert
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        /// Source currency code
        #[arg(short, long, default_value = "USD")]
        from: String,
        /// Target currency code
        #[arg(short, long, default_value = "BRL")]
        to: String,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show current rates for every supported pair
    Rates,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let result = match cli.command {
        Some(Commands::Setup) => cambio::cli::setup::setup(),
        Some(Commands::Convert {
            amount,
            from,
            to,
            json,
        }) => {
            let command = cambio::AppCommand::Convert {
                amount,
                from,
                to,
                json,
            };
            cambio::run_command(command, cli.config_path.as_deref()).await
        }
        Some(Commands::Rates) => {
            cambio::run_command(cambio::AppCommand::Rates, cli.config_path.as_deref()).await
        }
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
