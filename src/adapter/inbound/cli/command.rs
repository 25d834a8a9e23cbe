//! Command-line interface definitions.
//!
//! Defines the CLI structure for vestcalc using `clap`: a one-shot
//! calculator, the HTTP service, and configuration utilities.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::paths;
use crate::domain::form::{FieldId, FormFields};

/// Equity compensation calculator for RSU and ESO grants
#[derive(Parser, Debug)]
#[command(name = "vestcalc")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the vestcalc CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate monthly and yearly compensation
    Calc(CalcArgs),

    /// Run the quote proxy and compensation HTTP service
    Serve(ServeArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `vestcalc config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Shared argument struct for commands that require only a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}

/// Arguments for `config init`.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Where to write the configuration file.
    #[arg(default_value_os_t = paths::default_config())]
    pub path: PathBuf,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `calc` subcommand.
///
/// Field flags take raw text exactly as a form would: blanks, bad numbers,
/// and negative values are passed through and reported by validation.
#[derive(Parser, Debug, Default)]
pub struct CalcArgs {
    /// Stock price in USD, or a ticker symbol to look up
    #[arg(long, allow_hyphen_values = true)]
    pub stock: Option<String>,

    /// RSUs vesting per month
    #[arg(long, allow_hyphen_values = true)]
    pub rsu: Option<String>,

    /// ESOs vesting per month
    #[arg(long, allow_hyphen_values = true)]
    pub eso: Option<String>,

    /// ESO strike price in USD
    #[arg(long = "strike-price", allow_hyphen_values = true)]
    pub strike_price: Option<String>,

    /// Currency code to convert into (default USD)
    #[arg(long)]
    pub currency: Option<String>,

    /// Share-link query string to start from; flags override its values
    #[arg(long)]
    pub query: Option<String>,

    /// Show how yearly compensation varies with the stock price
    #[arg(long)]
    pub chart: bool,

    /// Path to the configuration file (defaults to ~/.vestcalc/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl CalcArgs {
    /// Form fields from `--query` with individual flags applied on top.
    #[must_use]
    pub fn fields(&self) -> FormFields {
        let base = self
            .query
            .as_deref()
            .map(FormFields::from_query)
            .unwrap_or_default();

        base.merged([
            (FieldId::Stock, self.stock.clone()),
            (FieldId::Rsu, self.rsu.clone()),
            (FieldId::Eso, self.eso.clone()),
            (FieldId::StrikePrice, self.strike_price.clone()),
            (FieldId::Currency, self.currency.clone()),
        ])
    }
}

/// Arguments for the `serve` subcommand.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind (overrides `server.bind`)
    #[arg(long)]
    pub bind: Option<String>,

    /// Port to listen on (overrides `server.port`)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Path to the configuration file (defaults to ~/.vestcalc/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).expect("valid arguments")
    }

    fn calc_args(args: &[&str]) -> CalcArgs {
        match parse(args).command {
            Commands::Calc(args) => args,
            other => panic!("expected calc, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_command_factory_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "vestcalc");
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = parse(&["vestcalc", "--json", "-vv", "calc"]);
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["vestcalc", "calc", "--stock", "10", "-q", "--color", "never"]);
        assert!(cli.quiet);
        assert!(matches!(cli.color, ColorChoice::Never));
    }

    #[test]
    fn test_calc_fields_from_flags() {
        let args = calc_args(&[
            "vestcalc",
            "calc",
            "--stock",
            "AAPL",
            "--rsu",
            "10",
            "--eso",
            "5",
            "--strike-price",
            "120",
            "--currency",
            "eur",
        ]);

        let fields = args.fields();
        assert_eq!(fields.stock, "AAPL");
        assert_eq!(fields.rsu, "10");
        assert_eq!(fields.eso, "5");
        assert_eq!(fields.strike_price, "120");
        assert_eq!(fields.currency, "eur");
    }

    #[test]
    fn test_calc_flags_override_query() {
        let args = calc_args(&[
            "vestcalc",
            "calc",
            "--query",
            "?stock=AAPL&rsu=10&currency=gbp",
            "--rsu",
            "12",
        ]);

        let fields = args.fields();
        assert_eq!(fields.stock, "AAPL");
        assert_eq!(fields.rsu, "12");
        assert_eq!(fields.currency, "gbp");
        assert_eq!(fields.eso, "");
    }

    #[test]
    fn test_calc_accepts_negative_values() {
        let args = calc_args(&["vestcalc", "calc", "--rsu", "-3"]);
        assert_eq!(args.fields().rsu, "-3");
    }

    #[test]
    fn test_serve_overrides() {
        match parse(&["vestcalc", "serve", "--bind", "0.0.0.0", "-p", "8080"]).command {
            Commands::Serve(args) => {
                assert_eq!(args.bind.as_deref(), Some("0.0.0.0"));
                assert_eq!(args.port, Some(8080));
                assert!(args.config.is_none());
            }
            other => panic!("expected serve, got {other:?}"),
        }
    }

    #[test]
    fn test_config_validate_default_path() {
        match parse(&["vestcalc", "config", "validate"]).command {
            Commands::Config(ConfigCommand::Validate(arg)) => {
                assert_eq!(arg.config, paths::default_config());
            }
            other => panic!("expected config validate, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(Cli::try_parse_from(["vestcalc"]).is_err());
    }
}
