//! Command dispatch.

use crate::adapter::inbound::cli::command::{AuthCommand, Commands};
use crate::adapter::inbound::cli::{
    auth, config, export, inflation, orders, stats, suggest, sync, wrapped,
};
use crate::error::Result;

/// Run one parsed subcommand to completion.
pub async fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Auth(AuthCommand::Set(args)) => auth::execute_set(args).await,
        Commands::Auth(AuthCommand::Status(args)) => auth::execute_status(args).await,
        Commands::Auth(AuthCommand::Logout) => auth::execute_logout(),
        Commands::Sync(args) => sync::execute(args).await,
        Commands::Orders(args) => orders::execute(args).await,
        Commands::Stats(args) => stats::execute(args).await,
        Commands::Inflation(args) => inflation::execute(args).await,
        Commands::Suggest(args) => suggest::execute(args).await,
        Commands::Wrapped(args) => wrapped::execute(args).await,
        Commands::Export(args) => export::execute(args).await,
        Commands::Config => config::execute(),
    }
}
