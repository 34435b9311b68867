//! CLI module for the team service

pub mod serve;

use clap::{Parser, Subcommand};

/// Team Service - teams, memberships and team pictures over HTTP
#[derive(Parser)]
#[command(name = "team-service")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve,
}
