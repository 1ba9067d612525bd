//! CLI module for sentry-team-sync
//!
//! A thin stand-in for the plugin host: each subcommand drives exactly one
//! reconciler entry point against the configured remote service:
//! - `apply`: establish a membership and print its identifier
//! - `check`: re-read remote state for a stored identifier (drift detection)
//! - `destroy`: remove a membership
//! - `import`: normalize an external identifier, then validate it with a read

pub mod reconcile;

use clap::{Args, Parser, Subcommand};

/// sentry-team-sync - reconcile team/project memberships against a remote service
#[derive(Parser)]
#[command(name = "sentry-team-sync")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Add a team to a project and print the resulting identifier
    Apply(ApplyArgs),

    /// Check whether a stored identifier still exists remotely
    Check(CheckArgs),

    /// Remove a team from a project
    Destroy(DestroyArgs),

    /// Normalize an external identifier and validate it remotely
    Import(ImportArgs),
}

#[derive(Args)]
pub struct ApplyArgs {
    /// Slug of the owning organization
    #[arg(long)]
    pub organization: String,

    /// Slug of the team
    #[arg(long)]
    pub team: String,

    /// Slug of the project
    #[arg(long)]
    pub project: String,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Slug of the owning organization
    #[arg(long)]
    pub organization: String,

    /// Stored identifier, format {project}/{team}
    #[arg(long)]
    pub identifier: String,
}

#[derive(Args)]
pub struct DestroyArgs {
    /// Slug of the owning organization
    #[arg(long)]
    pub organization: String,

    /// Stored identifier, format {project}/{team}
    #[arg(long)]
    pub identifier: String,
}

#[derive(Args)]
pub struct ImportArgs {
    /// External identifier, format org-slug/project-slug/team-slug
    #[arg(long)]
    pub identifier: String,
}
