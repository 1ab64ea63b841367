#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::adapters::OutputFormat;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "crochet-pricer")]
#[command(about = "Work out the sale price of a crochet piece")]
pub struct CliConfig {
    /// Yarn used, in grams
    #[arg(short = 'w', long, allow_hyphen_values = true)]
    pub yarn_weight: Option<String>,

    /// Extra packaging cost on top of the standard packaging
    #[arg(short = 'p', long, default_value = "0", allow_hyphen_values = true)]
    pub additional_packaging: String,

    /// Your own margin added before the platform fee
    #[arg(short = 'm', long, default_value = "0", allow_hyphen_values = true)]
    pub custom_margin: String,

    /// Add-on to include, as NAME or NAME:QUANTITY (repeatable)
    #[arg(short, long = "addon", value_name = "NAME[:QTY]")]
    pub addons: Vec<String>,

    /// Path to TOML configuration file
    #[arg(short, long, default_value = "pricer-config.toml")]
    pub config: String,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print the add-on catalog and exit
    #[arg(long)]
    pub list_addons: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
