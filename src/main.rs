use clap::Parser;
use tracing::debug;

use zocli::adapter::inbound::cli::command::{Cli, ColorChoice};
use zocli::adapter::inbound::cli::output::{self, OutputConfig};
use zocli::adapter::inbound::cli::{paths, run};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }

    let config = match paths::load_config() {
        Ok(config) => config,
        Err(e) => {
            output::error(&format!("Failed to load config: {e}"));
            std::process::exit(1);
        }
    };
    config.logging.init(cli.verbose);
    debug!(data_dir = %paths::data_dir().display(), "zocli starting");

    if let Err(e) = run::execute(cli.command).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
