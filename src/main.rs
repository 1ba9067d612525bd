use clap::Parser;
use sentry_team_sync::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Apply(args) => cli::reconcile::apply(args).await,
        Command::Check(args) => cli::reconcile::check(args).await,
        Command::Destroy(args) => cli::reconcile::destroy(args).await,
        Command::Import(args) => cli::reconcile::import(args).await,
    }
}
