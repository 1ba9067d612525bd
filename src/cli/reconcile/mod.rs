//! Subcommand implementations: config, logging and reconciler wiring

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing::info;

use crate::cli::{ApplyArgs, CheckArgs, DestroyArgs, ImportArgs};
use crate::config::AppConfig;
use crate::infrastructure::{
    logging, CreateMembershipRequest, HttpClient, MembershipReconciler, SentryApiClient,
};

/// Add a team to a project and print the resulting identifier.
pub async fn apply(args: ApplyArgs) -> anyhow::Result<()> {
    let reconciler = build_reconciler()?;

    let record = reconciler
        .create(CreateMembershipRequest {
            organization: args.organization,
            team: args.team,
            project: args.project,
        })
        .await?;

    info!(identifier = %record.identifier(), "Membership established");
    println!("{}", record.identifier());
    Ok(())
}

/// Re-read remote state for a stored identifier.
pub async fn check(args: CheckArgs) -> anyhow::Result<()> {
    let reconciler = build_reconciler()?;

    let still_exists = reconciler.read(&args.organization, &args.identifier).await?;

    println!("{}", if still_exists { "present" } else { "absent" });
    Ok(())
}

/// Remove a team from a project.
pub async fn destroy(args: DestroyArgs) -> anyhow::Result<()> {
    let reconciler = build_reconciler()?;

    reconciler.delete(&args.organization, &args.identifier).await?;

    info!(identifier = %args.identifier, "Membership removed");
    println!("removed {}", args.identifier);
    Ok(())
}

/// Normalize an external identifier, then validate it with a read.
pub async fn import(args: ImportArgs) -> anyhow::Result<()> {
    let reconciler = build_reconciler()?;

    let record = reconciler.import(&args.identifier)?;
    let still_exists = reconciler
        .read(record.organization(), &record.identifier().to_string())
        .await?;

    if !still_exists {
        anyhow::bail!(
            "membership '{}' does not exist in organization '{}'",
            record.identifier(),
            record.organization()
        );
    }

    println!("{}", record.identifier());
    Ok(())
}

fn build_reconciler() -> anyhow::Result<MembershipReconciler<SentryApiClient<HttpClient>>> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&logging::LoggingConfig {
        level: config.logging.level.clone(),
        format: config.logging.format.clone(),
    });

    let token = config
        .remote
        .token
        .clone()
        .context("remote API token is not configured (remote.token)")?;

    let http = HttpClient::with_timeout(Duration::from_secs(config.remote.timeout_secs))?;
    let api = SentryApiClient::with_base_url(http, token, config.remote.base_url.as_str());

    Ok(MembershipReconciler::new(Arc::new(api)))
}
