use clap::Parser;
use crochet_pricer::adapters::{format_currency, presenter_for};
use crochet_pricer::utils::{logger, validation::Validate};
use crochet_pricer::{CalculationOutcome, CliConfig, PricerConfig, PricerError, PricingEngine};

fn fail(e: &PricerError) -> ! {
    tracing::error!(
        "Run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn run(cli: &CliConfig) -> Result<i32, PricerError> {
    cli.validate()?;

    let config = PricerConfig::from_file_or_default(&cli.config)?;
    config.validate()?;
    tracing::debug!(
        addons = config.addons.len(),
        currency = config.currency_symbol(),
        "configuration loaded"
    );

    if cli.list_addons {
        for addon in &config.addons {
            println!(
                "{}: {}",
                addon.name,
                format_currency(config.currency_symbol(), addon.unit_price)
            );
        }
        return Ok(0);
    }

    let form = cli.build_form(&config)?;
    let stdout = std::io::stdout();
    let presenter = presenter_for(cli.format, config.currency_symbol(), stdout.lock());
    let mut engine = PricingEngine::new(presenter);

    match engine.calculate(&form)? {
        CalculationOutcome::Priced(_) => Ok(0),
        CalculationOutcome::Rejected(error) => Ok(PricerError::from(error).exit_code()),
    }
}

fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    match run(&cli) {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => fail(&e),
    }
}
