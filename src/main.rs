use clap::Parser;
use vestcalc::adapter::inbound::cli::command::{Cli, ColorChoice, Commands, ConfigCommand};
use vestcalc::adapter::inbound::cli::output::{self, OutputConfig};
use vestcalc::adapter::inbound::cli::{calc, config, serve};
use vestcalc::error::Result;
use vestcalc::infrastructure::config::logging::LoggingConfig;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));
    output::set_color(match cli.color {
        ColorChoice::Auto => None,
        ColorChoice::Always => Some(true),
        ColorChoice::Never => Some(false),
    });

    if let Err(e) = run(cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Calc(args) => {
            let config = config::load(args.config.as_deref())?;
            // Calculation output owns stdout; logs stay quiet unless asked for.
            logging_for(&config.logging, cli.verbose, Some("warn")).init_stderr();
            calc::execute(&args, &config).await
        }
        Commands::Serve(args) => {
            let config = config::load(args.config.as_deref())?;
            logging_for(&config.logging, cli.verbose, None).init();
            serve::execute(&args, config).await
        }
        Commands::Config(command) => match command {
            ConfigCommand::Init(args) => config::execute_init(&args.path, args.force),
            ConfigCommand::Show(arg) => config::execute_show(&arg.config),
            ConfigCommand::Validate(arg) => config::execute_validate(&arg.config),
        },
    }
}

/// Apply `-v` flags on top of the configured logging level.
fn logging_for(base: &LoggingConfig, verbose: u8, quiet_level: Option<&str>) -> LoggingConfig {
    let mut logging = base.clone();
    match (verbose, quiet_level) {
        (0, Some(level)) => logging.level = level.to_string(),
        (0, None) => {}
        (1, _) => logging.level = "debug".to_string(),
        _ => logging.level = "trace".to_string(),
    }
    logging
}
