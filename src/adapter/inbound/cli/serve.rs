//! Handler for the `serve` command.

use crate::adapter::inbound::cli::command::ServeArgs;
use crate::adapter::inbound::cli::output;
use crate::adapter::inbound::http;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Execute the serve command. Runs until Ctrl-C.
pub async fn execute(args: &ServeArgs, config: Config) -> Result<()> {
    let mut config = config;
    if let Some(bind) = &args.bind {
        config.server.bind.clone_from(bind);
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.validate()?;

    let address = config.server.address();
    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Listening", format!("http://{address}"));
    output::field("Upstream", &config.quote.upstream_url);
    output::field("Cache TTL", format!("{}s", config.server.cache_ttl_seconds));

    http::serve(&address, bootstrap::build_app_state(&config)).await
}
