use anyhow::Context;
use clap::Parser;
use crochet_pricer::adapters::{presenter_for, OutputFormat};
use crochet_pricer::app::{Session, ShellCommand};
use crochet_pricer::utils::{logger, validation::Validate};
use crochet_pricer::PricerConfig;
use std::io::{BufRead, Write};

#[derive(Parser)]
#[command(name = "price-shell")]
#[command(about = "Interactive crochet price calculator")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "pricer-config.toml")]
    config: String,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let config = PricerConfig::from_file_or_default(&args.config)
        .with_context(|| format!("Failed to load config file '{}'", args.config))?;
    config
        .validate()
        .with_context(|| format!("Invalid config file '{}'", args.config))?;

    let interactive = std::io::IsTerminal::is_terminal(&std::io::stdin());
    let presenter = presenter_for(args.format, config.currency_symbol(), std::io::stdout());
    let mut session = Session::new(
        &config.addons,
        presenter,
        std::io::stdout(),
        config.currency_symbol(),
    );

    if interactive {
        println!("Crochet price calculator. Type 'help' for commands.");
    }

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("> ");
            std::io::stdout().flush()?;
        }

        let Some(line) = lines.next() else { break };
        let line = line.context("Failed to read from stdin")?;

        let command = match ShellCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                continue;
            }
        };

        match session.execute(command) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) if e.category() == crochet_pricer::utils::error::ErrorCategory::Input => {
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
